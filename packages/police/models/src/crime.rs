//! Street-level crimes, outcomes and crime categories.

use serde::{Deserialize, Serialize};

use crate::Location;

/// A single street-level crime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Crime {
    /// Category slug (e.g. `"anti-social-behaviour"`).
    pub category: String,
    /// `"Force"` or `"BTP"` (British Transport Police).
    pub location_type: Option<String>,
    /// Approximate location. `null` for crimes that could not be mapped.
    pub location: Option<Location>,
    /// Extra information about the crime, if any.
    pub context: Option<String>,
    /// Latest outcome, if one has been recorded.
    pub outcome_status: Option<OutcomeStatus>,
    /// 64-character identifier, stable across months. Empty for
    /// anti-social behaviour.
    pub persistent_id: Option<String>,
    /// Upstream numeric identifier.
    pub id: u64,
    /// For BTP locations, the type of location (e.g. `"LONDON UNDERGROUND
    /// STATION"`).
    pub location_subtype: Option<String>,
    /// Month of the crime, `YYYY-MM`.
    pub month: String,
}

/// The latest outcome attached to a [`Crime`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutcomeStatus {
    /// Human-readable outcome category.
    pub category: String,
    /// Month of the outcome, `YYYY-MM`.
    pub date: String,
}

/// A street-level outcome, optionally with the crime it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Outcome {
    /// Outcome category.
    pub category: OutcomeCategory,
    /// Month of the outcome, `YYYY-MM`.
    pub date: String,
    /// Identifier of the person involved, when published.
    pub person_id: Option<u64>,
    /// The crime the outcome relates to. Omitted by
    /// `outcomes-for-crime`, which returns the crime separately.
    pub crime: Option<Crime>,
}

/// Code and display name of an outcome category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutcomeCategory {
    /// Category slug (e.g. `"unable-to-prosecute"`).
    pub code: String,
    /// Display name.
    pub name: String,
}

/// A valid crime category for a month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrimeCategory {
    /// Category slug, usable as a `category` query option.
    pub url: String,
    /// Display name.
    pub name: String,
}

/// Response of `outcomes-for-crime/{persistent_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrimeOutcomes {
    /// The crime.
    pub crime: Crime,
    /// Every outcome recorded against it, oldest first.
    pub outcomes: Vec<Outcome>,
}

/// Response of `crime-last-updated`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastUpdated {
    /// Date the crime data was last refreshed (`YYYY-MM-DD`).
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_street_level_crime() {
        let json = r#"[{
            "category": "anti-social-behaviour",
            "location_type": "Force",
            "location": {
                "latitude": "52.640961",
                "longitude": "-1.126371",
                "street": { "id": 884343, "name": "On or near Wharf Street North" }
            },
            "context": "",
            "outcome_status": null,
            "persistent_id": "",
            "id": 54164419,
            "location_subtype": "",
            "month": "2017-01"
        }]"#;
        let crimes: Vec<Crime> = serde_json::from_str(json).unwrap();
        assert_eq!(crimes.len(), 1);
        assert_eq!(crimes[0].id, 54_164_419);
        assert_eq!(crimes[0].month, "2017-01");
        assert!(crimes[0].outcome_status.is_none());
        assert_eq!(
            crimes[0]
                .location
                .as_ref()
                .and_then(|l| l.latitude.as_deref()),
            Some("52.640961")
        );
    }

    #[test]
    fn parses_outcome_with_null_person() {
        let json = r#"{
            "category": { "code": "unable-to-prosecute", "name": "Unable to prosecute suspect" },
            "date": "2017-01",
            "person_id": null,
            "crime": { "category": "theft-from-the-person", "id": 53566126, "month": "2016-12" }
        }"#;
        let outcome: Outcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.category.code, "unable-to-prosecute");
        assert!(outcome.person_id.is_none());
        assert_eq!(outcome.crime.map(|c| c.id), Some(53_566_126));
    }

    #[test]
    fn parses_crime_without_location() {
        let json = r#"{ "category": "burglary", "location": null, "id": 1, "month": "2017-02" }"#;
        let crime: Crime = serde_json::from_str(json).unwrap();
        assert!(crime.location.is_none());
    }
}
