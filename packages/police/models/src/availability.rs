//! Data availability.

use serde::{Deserialize, Serialize};

/// A month for which street-level crime data is available, and the forces
/// that published stop and search data for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailabilityInfo {
    /// Month, `YYYY-MM`.
    pub date: String,
    /// Force slugs with stop and search data for the month.
    #[serde(rename = "stop-and-search")]
    pub stop_and_search: Vec<String>,
}
