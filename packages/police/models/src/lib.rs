#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Record types returned by the data.police.uk API.
//!
//! Every type here is a passive field bag mirroring the upstream JSON. The
//! API is inconsistent about `null` versus missing fields, so anything that
//! has been observed as `null` is an [`Option`] and every struct tolerates
//! missing keys. Records carry no behaviour beyond (de)serialization.

pub mod availability;
pub mod crime;
pub mod force;
pub mod neighbourhood;
pub mod search;

pub use availability::AvailabilityInfo;
pub use crime::{
    Crime, CrimeCategory, CrimeOutcomes, LastUpdated, Outcome, OutcomeCategory, OutcomeStatus,
};
pub use force::{EngagementMethod, Force, ForceSummary, SeniorOfficer};
pub use neighbourhood::{
    BoundaryPoint, LocatedNeighbourhood, Neighbourhood, NeighbourhoodCentre, NeighbourhoodEvent,
    NeighbourhoodLink, NeighbourhoodOfficer, NeighbourhoodPriority, NeighbourhoodSummary,
};
pub use search::{OutcomeObject, Search, SearchOutcome};

use serde::{Deserialize, Serialize};

/// A location attached to a crime, stop and search, or neighbourhood.
///
/// Crime and stop-and-search records populate the coordinates and
/// [`street`](Self::street); neighbourhood records populate the descriptive
/// fields (`name`, `postcode`, `address`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    /// Latitude as a decimal string (e.g. `"52.640961"`).
    pub latitude: Option<String>,
    /// Longitude as a decimal string (e.g. `"-1.126371"`).
    pub longitude: Option<String>,
    /// The anonymised street this location was snapped to.
    pub street: Option<Street>,
    /// Name of the place (neighbourhood locations only).
    pub name: Option<String>,
    /// Postcode (neighbourhood locations only).
    pub postcode: Option<String>,
    /// Free-form address (neighbourhood locations only).
    pub address: Option<String>,
    /// Kind of location, e.g. `"station"` (neighbourhood locations only).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Longer description (neighbourhood locations only).
    pub description: Option<String>,
}

/// An anonymised street.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Street {
    /// Street identifier.
    pub id: u64,
    /// Display name, usually of the form "On or near ...".
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_tolerates_nulls() {
        let json = r#"{
            "name": "Mansfield House",
            "longitude": null,
            "postcode": "LE1 3GG",
            "address": "74 Belgrave Gate\n, Leicester",
            "latitude": null,
            "type": "station",
            "description": null
        }"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location.name.as_deref(), Some("Mansfield House"));
        assert_eq!(location.kind.as_deref(), Some("station"));
        assert!(location.latitude.is_none());
        assert!(location.street.is_none());
    }

    #[test]
    fn location_parses_street() {
        let json = r#"{
            "latitude": "52.640961",
            "longitude": "-1.126371",
            "street": { "id": 884343, "name": "On or near Wharf Street North" }
        }"#;
        let location: Location = serde_json::from_str(json).unwrap();
        let street = location.street.unwrap();
        assert_eq!(street.id, 884_343);
        assert_eq!(street.name, "On or near Wharf Street North");
    }
}
