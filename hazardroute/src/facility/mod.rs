//! Facility records for graph construction.
//!
//! Facilities are read from a CSV file with an `id,name,lat,lon` header
//! (`latitude`/`longitude` are accepted as column aliases). The whole file is
//! read before the graph is built; coordinate validation happens later, per
//! record, when the record is inserted into the graph.
//!
//! # Example
//!
//! ```
//! use hazardroute::facility::FacilityLoader;
//!
//! let csv = "id,name,lat,lon\nA,Savannah Port,32.08,-81.09\n";
//! let records = FacilityLoader::from_reader(csv.as_bytes())?;
//! assert_eq!(records[0].name, "Savannah Port");
//! # Ok::<(), hazardroute::facility::FacilityError>(())
//! ```

mod loader;

pub use loader::{FacilityError, FacilityLoader};

use serde::{Deserialize, Serialize};

/// One row of facility input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    /// Unique facility identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Latitude in decimal degrees.
    #[serde(alias = "latitude")]
    pub lat: f64,
    /// Longitude in decimal degrees.
    #[serde(alias = "longitude")]
    pub lon: f64,
}

impl FacilityRecord {
    pub fn new(id: &str, name: &str, lat: f64, lon: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            lat,
            lon,
        }
    }
}
