//! Query options and the location-selector exclusion rule.
//!
//! Endpoints that filter by place accept exactly one *location selector*:
//! a point ([`QueryOption::LatLng`]), a custom area
//! ([`QueryOption::Polygon`]) or an opaque location id
//! ([`QueryOption::LocationId`]). Mixing two different selectors in one
//! request is a usage error reported before anything is sent. Date,
//! category and force options combine freely with a selector and with each
//! other.
//!
//! Options are applied in order to a [`Query`] accumulator. Writing the
//! same key twice keeps the last value; the encoded query string is always
//! sorted by key.

use std::collections::BTreeMap;

use strum_macros::{AsRefStr, Display};
use url::form_urlencoded;

/// A single query option accepted by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOption {
    /// `date=YYYY-MM`.
    Date(String),
    /// `lat=..&lng=..`, a point. Location selector.
    LatLng {
        /// Latitude as a decimal string.
        lat: String,
        /// Longitude as a decimal string.
        lng: String,
    },
    /// `poly=lat,lng:lat,lng:...`, a custom area. Location selector.
    Polygon(String),
    /// `location_id=..`, an upstream location identifier. Location
    /// selector.
    LocationId(String),
    /// `category=..`, a crime category slug.
    Category(String),
    /// `force=..`, a force slug.
    Force(String),
}

/// The kind of a [`QueryOption`], without its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum OptionKind {
    /// [`QueryOption::Date`].
    #[strum(serialize = "date")]
    Date,
    /// [`QueryOption::LatLng`].
    #[strum(serialize = "lat/lng")]
    LatLng,
    /// [`QueryOption::Polygon`].
    #[strum(serialize = "poly")]
    Polygon,
    /// [`QueryOption::LocationId`].
    #[strum(serialize = "location_id")]
    LocationId,
    /// [`QueryOption::Category`].
    #[strum(serialize = "category")]
    Category,
    /// [`QueryOption::Force`].
    #[strum(serialize = "force")]
    Force,
}

impl OptionKind {
    /// Whether this option belongs to the mutually exclusive location
    /// selector group.
    #[must_use]
    pub const fn is_location_selector(self) -> bool {
        matches!(self, Self::LatLng | Self::Polygon | Self::LocationId)
    }
}

/// Errors raised while applying query options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    /// Two different location selectors were supplied for one request.
    #[error("{attempted} cannot be combined with {existing}: one location selector only")]
    ConflictingLocation {
        /// The selector applied first.
        existing: OptionKind,
        /// The selector that clashed with it.
        attempted: OptionKind,
    },

    /// The endpoint does not accept this option.
    #[error("{resource} does not accept the {option} option")]
    Unsupported {
        /// Endpoint name.
        resource: crate::Resource,
        /// The rejected option.
        option: OptionKind,
    },
}

impl QueryOption {
    /// `date=YYYY-MM`.
    #[must_use]
    pub fn date(date: impl Into<String>) -> Self {
        Self::Date(date.into())
    }

    /// A point given as decimal latitude and longitude strings.
    #[must_use]
    pub fn lat_lng(lat: impl Into<String>, lng: impl Into<String>) -> Self {
        Self::LatLng {
            lat: lat.into(),
            lng: lng.into(),
        }
    }

    /// A custom area in the upstream `lat,lng:lat,lng:...` notation.
    #[must_use]
    pub fn polygon(poly: impl Into<String>) -> Self {
        Self::Polygon(poly.into())
    }

    /// A custom area built from its vertices.
    #[must_use]
    pub fn polygon_from_points<I, S>(points: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let poly = points
            .into_iter()
            .map(|(lat, lng)| format!("{},{}", lat.as_ref(), lng.as_ref()))
            .collect::<Vec<_>>()
            .join(":");
        Self::Polygon(poly)
    }

    /// An upstream location identifier.
    #[must_use]
    pub fn location_id(id: impl Into<String>) -> Self {
        Self::LocationId(id.into())
    }

    /// A crime category slug (e.g. `"all-crime"`).
    #[must_use]
    pub fn category(slug: impl Into<String>) -> Self {
        Self::Category(slug.into())
    }

    /// A force slug (e.g. `"west-midlands"`).
    #[must_use]
    pub fn force(slug: impl Into<String>) -> Self {
        Self::Force(slug.into())
    }

    /// Returns the kind of this option.
    #[must_use]
    pub const fn kind(&self) -> OptionKind {
        match self {
            Self::Date(_) => OptionKind::Date,
            Self::LatLng { .. } => OptionKind::LatLng,
            Self::Polygon(_) => OptionKind::Polygon,
            Self::LocationId(_) => OptionKind::LocationId,
            Self::Category(_) => OptionKind::Category,
            Self::Force(_) => OptionKind::Force,
        }
    }
}

/// Accumulated query parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: BTreeMap<String, String>,
    location: Option<OptionKind>,
}

impl Query {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `options` in order to a fresh query.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::ConflictingLocation`] if two different
    /// location selectors are present.
    pub fn from_options(options: &[QueryOption]) -> Result<Self, OptionError> {
        let mut query = Self::new();
        for option in options {
            query.apply(option)?;
        }
        Ok(query)
    }

    /// Applies a single option.
    ///
    /// Nothing is written when the option conflicts with the location
    /// selector already present.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::ConflictingLocation`] if `option` is a
    /// location selector and a different one was applied earlier.
    pub fn apply(&mut self, option: &QueryOption) -> Result<(), OptionError> {
        let kind = option.kind();
        if kind.is_location_selector() {
            if let Some(existing) = self.location
                && existing != kind
            {
                return Err(OptionError::ConflictingLocation {
                    existing,
                    attempted: kind,
                });
            }
            self.location = Some(kind);
        }

        match option {
            QueryOption::Date(date) => self.set("date", date),
            QueryOption::LatLng { lat, lng } => {
                self.set("lat", lat);
                self.set("lng", lng);
            }
            QueryOption::Polygon(poly) => self.set("poly", poly),
            QueryOption::LocationId(id) => self.set("location_id", id),
            QueryOption::Category(slug) => self.set("category", slug),
            QueryOption::Force(slug) => self.set("force", slug),
        }

        Ok(())
    }

    /// Writes a raw parameter, replacing any previous value.
    ///
    /// Bypasses the location selector bookkeeping; used for endpoint
    /// specific parameters outside the option vocabulary.
    pub fn set(&mut self, key: &str, value: &str) {
        self.params.insert(key.to_owned(), value.to_owned());
    }

    /// Returns the value for `key`, or `""` if it was never written.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.params.get(key).map_or("", String::as_str)
    }

    /// The location selector applied so far, if any.
    #[must_use]
    pub const fn location(&self) -> Option<OptionKind> {
        self.location
    }

    /// Whether no parameter has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parameter names in encoding order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Encodes the parameters as `application/x-www-form-urlencoded`,
    /// sorted by key.
    #[must_use]
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }
}

/// Applies `options` and joins the encoded query onto `path`.
///
/// With no options `path` is returned unchanged.
///
/// # Errors
///
/// Returns [`OptionError::ConflictingLocation`] if two different location
/// selectors are present.
pub fn build_query(path: &str, options: &[QueryOption]) -> Result<String, OptionError> {
    let query = Query::from_options(options)?;
    Ok(join_query(path, &query.encode()))
}

pub(crate) fn join_query(path: &str, encoded: &str) -> String {
    if encoded.is_empty() {
        path.to_owned()
    } else if path.contains('?') {
        format!("{path}&{encoded}")
    } else {
        format!("{path}?{encoded}")
    }
}
