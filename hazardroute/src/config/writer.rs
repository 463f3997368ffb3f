//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! Produces the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let source = config.routing.source.as_deref().unwrap_or("");
    let destination = config.routing.destination.as_deref().unwrap_or("");

    format!(
        r#"[routing]
; Facilities whose great-circle distance is at most this many kilometers
; are linked by an edge (default: 600)
proximity_threshold_km = {}
; Facilities within this many kilometers of a hazard are treated as risky
; and excluded from routing (default: 200)
hazard_radius_km = {}
; Default route endpoints, used when --from / --to are not given
source = {}
destination = {}

[feed]
; USGS FDSN event query endpoint
url = {}
; Smallest magnitude to fetch (default: 4.5)
min_magnitude = {}
; Look-back window in hours, 1-720 (default: 24)
window_hours = {}
; HTTP timeout in seconds (default: 30)
timeout = {}

[logging]
; Log file location (truncated at every run)
file = {}
"#,
        config.routing.proximity_threshold_km,
        config.routing.hazard_radius_km,
        source,
        destination,
        config.feed.url,
        config.feed.min_magnitude,
        config.feed.window_hours,
        config.feed.timeout,
        path_to_string(&config.logging.file),
    )
}

/// Render a path for the config file, collapsing the home directory to `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
