//! Stop and search records.

use serde::{Deserialize, Serialize};

use crate::Location;

/// A single stop and search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Search {
    /// `"Person search"`, `"Vehicle search"` or `"Person and Vehicle
    /// search"`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Whether a person was searched.
    pub involved_person: Option<bool>,
    /// When the search took place (ISO 8601).
    pub datetime: Option<String>,
    /// Whether the search was part of a policing operation.
    pub operation: Option<bool>,
    /// Name of the operation, if any.
    pub operation_name: Option<String>,
    /// Approximate location. `null` for searches that could not be mapped.
    pub location: Option<Location>,
    /// Gender of the person searched.
    pub gender: Option<String>,
    /// Age range of the person searched (e.g. `"10-17"`).
    pub age_range: Option<String>,
    /// Ethnicity as described by the person searched.
    pub self_defined_ethnicity: Option<String>,
    /// Ethnicity as recorded by the officer.
    pub officer_defined_ethnicity: Option<String>,
    /// Power used to carry out the search.
    pub legislation: Option<String>,
    /// Reason for the search.
    pub object_of_search: Option<String>,
    /// Outcome of the search.
    pub outcome: Option<SearchOutcome>,
    /// Structured outcome, published for newer records.
    pub outcome_object: Option<OutcomeObject>,
    /// Whether the outcome was linked to the object of the search.
    pub outcome_linked_to_object_of_search: Option<bool>,
    /// Whether clothing beyond outer layers was removed.
    pub removal_of_more_than_outer_clothing: Option<bool>,
}

/// The `outcome` field of a [`Search`].
///
/// Older records publish `false` when no further action was taken and a
/// description otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchOutcome {
    /// Boolean form.
    Flag(bool),
    /// Descriptive form (e.g. `"Local resolution"`).
    Text(String),
}

/// Structured outcome of a [`Search`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutcomeObject {
    /// Outcome slug.
    pub id: String,
    /// Display name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_with_text_outcome() {
        let json = r#"{
            "age_range": "10-17",
            "self_defined_ethnicity": "White - White British (W1)",
            "outcome_linked_to_object_of_search": true,
            "datetime": "2017-01-14T20:50:00+00:00",
            "removal_of_more_than_outer_clothing": null,
            "operation": null,
            "officer_defined_ethnicity": "White",
            "object_of_search": "Controlled drugs",
            "involved_person": true,
            "gender": "Female",
            "legislation": "Misuse of Drugs Act 1971 (section 23)",
            "location": {
                "latitude": "52.634407",
                "street": { "id": 883407, "name": "On or near Shopping Area" },
                "longitude": "-1.133653"
            },
            "outcome": "Local resolution",
            "type": "Person search",
            "operation_name": null
        }"#;
        let search: Search = serde_json::from_str(json).unwrap();
        assert_eq!(search.kind.as_deref(), Some("Person search"));
        assert_eq!(
            search.outcome,
            Some(SearchOutcome::Text("Local resolution".to_string()))
        );
        assert_eq!(search.removal_of_more_than_outer_clothing, None);
        assert_eq!(search.involved_person, Some(true));
    }

    #[test]
    fn parses_boolean_outcome() {
        let search: Search = serde_json::from_str(r#"{ "outcome": false }"#).unwrap();
        assert_eq!(search.outcome, Some(SearchOutcome::Flag(false)));
    }
}
