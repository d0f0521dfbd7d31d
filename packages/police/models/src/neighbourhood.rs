//! Neighbourhood policing teams, boundaries, events and priorities.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Location;

/// An entry of a force's `neighbourhoods` listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeighbourhoodSummary {
    /// Force-specific neighbourhood identifier (e.g. `"NC04"`).
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Full details of a neighbourhood.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Neighbourhood {
    /// Force-specific neighbourhood identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Page about the neighbourhood on the force's website.
    pub url_force: Option<String>,
    /// Contact methods keyed by type.
    pub contact_details: BTreeMap<String, String>,
    /// Related links.
    pub links: Vec<NeighbourhoodLink>,
    /// Approximate centre point.
    pub centre: Option<NeighbourhoodCentre>,
    /// Police stations and other significant places.
    pub locations: Vec<Location>,
    /// Description (may contain HTML).
    pub description: Option<String>,
    /// Population estimate, as published (a string).
    pub population: Option<String>,
}

/// A link attached to a [`Neighbourhood`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeighbourhoodLink {
    /// Link target.
    pub url: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Title.
    pub title: Option<String>,
}

/// Centre point of a neighbourhood.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeighbourhoodCentre {
    /// Latitude as a decimal string.
    pub latitude: String,
    /// Longitude as a decimal string.
    pub longitude: String,
}

/// One vertex of a neighbourhood boundary polygon.
pub type BoundaryPoint = NeighbourhoodCentre;

/// A member of a neighbourhood policing team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeighbourhoodOfficer {
    /// Name.
    pub name: String,
    /// Rank.
    pub rank: Option<String>,
    /// Biography (may contain HTML).
    pub bio: Option<String>,
    /// Contact methods keyed by type.
    pub contact_details: BTreeMap<String, String>,
}

/// A neighbourhood event (meeting, surgery, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeighbourhoodEvent {
    /// Title.
    pub title: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Address of the venue.
    pub address: Option<String>,
    /// Event type (e.g. `"meeting"`).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Contact methods keyed by type.
    pub contact_details: BTreeMap<String, String>,
    /// Start, as published (`YYYY-MM-DDTHH:MM:SS`).
    pub start_date: Option<String>,
    /// End, as published.
    pub end_date: Option<String>,
}

/// A neighbourhood priority and the action taken against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeighbourhoodPriority {
    /// The issue raised (may contain HTML).
    pub issue: Option<String>,
    /// Date the issue was raised.
    #[serde(rename = "issue-date")]
    pub issue_date: Option<String>,
    /// Action taken (may contain HTML).
    pub action: Option<String>,
    /// Date the action was taken.
    #[serde(rename = "action-date")]
    pub action_date: Option<String>,
}

/// Response of `locate-neighbourhood`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatedNeighbourhood {
    /// Force slug.
    pub force: String,
    /// Neighbourhood identifier within the force.
    pub neighbourhood: String,
}
