//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::defaults::MAX_WINDOW_HOURS;
use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [routing] section
    if let Some(section) = ini.section(Some("routing")) {
        if let Some(v) = section.get("proximity_threshold_km") {
            config.routing.proximity_threshold_km =
                parse_distance("routing", "proximity_threshold_km", v)?;
        }
        if let Some(v) = section.get("hazard_radius_km") {
            config.routing.hazard_radius_km = parse_distance("routing", "hazard_radius_km", v)?;
        }
        if let Some(v) = section.get("source") {
            config.routing.source = non_empty(v);
        }
        if let Some(v) = section.get("destination") {
            config.routing.destination = non_empty(v);
        }
    }

    // [feed] section
    if let Some(section) = ini.section(Some("feed")) {
        if let Some(v) = section.get("url") {
            let v = v.trim();
            if !v.starts_with("http://") && !v.starts_with("https://") {
                return Err(ConfigFileError::InvalidValue {
                    section: "feed".to_string(),
                    key: "url".to_string(),
                    value: v.to_string(),
                    reason: "must be an http:// or https:// URL".to_string(),
                });
            }
            config.feed.url = v.to_string();
        }
        if let Some(v) = section.get("min_magnitude") {
            config.feed.min_magnitude = v
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|m| m.is_finite())
                .ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "feed".to_string(),
                    key: "min_magnitude".to_string(),
                    value: v.to_string(),
                    reason: "must be a number".to_string(),
                })?;
        }
        if let Some(v) = section.get("window_hours") {
            config.feed.window_hours = v
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|h| (1..=MAX_WINDOW_HOURS).contains(h))
                .ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "feed".to_string(),
                    key: "window_hours".to_string(),
                    value: v.to_string(),
                    reason: format!("must be an integer between 1 and {}", MAX_WINDOW_HOURS),
                })?;
        }
        if let Some(v) = section.get("timeout") {
            config.feed.timeout = v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|t| *t > 0)
                .ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "feed".to_string(),
                    key: "timeout".to_string(),
                    value: v.to_string(),
                    reason: "must be a positive integer (seconds)".to_string(),
                })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

/// Parse a non-negative distance in kilometers.
fn parse_distance(section: &str, key: &str, value: &str) -> Result<f64, ConfigFileError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|km| km.is_finite() && *km >= 0.0)
        .ok_or_else(|| ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: "must be a non-negative number (kilometers)".to_string(),
        })
}

fn non_empty(value: &str) -> Option<String> {
    let v = value.trim();
    (!v.is_empty()).then(|| v.to_string())
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
