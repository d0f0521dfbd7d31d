//! Police forces and their senior officers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An entry of the `forces` listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForceSummary {
    /// Force slug (e.g. `"leicestershire"`).
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Full details of a single force.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Force {
    /// Force slug.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Description (may contain HTML).
    pub description: Option<String>,
    /// Force website.
    pub url: Option<String>,
    /// Contact telephone number.
    pub telephone: Option<String>,
    /// Ways to keep in touch with the force.
    pub engagement_methods: Vec<EngagementMethod>,
}

/// A social media account or other engagement channel of a force.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementMethod {
    /// Link.
    pub url: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Title (e.g. `"Twitter"`).
    pub title: Option<String>,
}

/// A senior officer of a force.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeniorOfficer {
    /// Name.
    pub name: String,
    /// Rank.
    pub rank: Option<String>,
    /// Biography (may contain HTML).
    pub bio: Option<String>,
    /// Contact methods keyed by type (`"twitter"`, `"email"`, ...).
    pub contact_details: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_force_details() {
        let json = r#"{
            "description": "This is a lovely police force",
            "url": "http://www.leics.police.uk/",
            "engagement_methods": [
                {
                    "url": "http://www.twitter.com/leicspolice",
                    "description": "Keep up to date with Leicestershire Constabulary on Twitter",
                    "title": "Twitter"
                }
            ],
            "telephone": "0116 222 2222",
            "id": "leicestershire",
            "name": "Leicestershire Constabulary"
        }"#;
        let force: Force = serde_json::from_str(json).unwrap();
        assert_eq!(force.id, "leicestershire");
        assert_eq!(force.engagement_methods.len(), 1);
        assert_eq!(force.engagement_methods[0].title.as_deref(), Some("Twitter"));
    }

    #[test]
    fn parses_senior_officer() {
        let json = r#"{
            "bio": null,
            "contact_details": { "twitter": "http://www.twitter.com/ACCCLeicsPolice" },
            "name": "Roger Bannister",
            "rank": "Assistant Chief Officer (Crime)"
        }"#;
        let officer: SeniorOfficer = serde_json::from_str(json).unwrap();
        assert!(officer.bio.is_none());
        assert_eq!(
            officer.contact_details.get("twitter").map(String::as_str),
            Some("http://www.twitter.com/ACCCLeicsPolice")
        );
    }
}
