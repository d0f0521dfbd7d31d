//! Table of upstream endpoints.
//!
//! Each [`Resource`] knows its path template, how many path arguments it
//! takes and which query options it accepts. Accessors go through this
//! table instead of formatting paths themselves.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::{
    Error,
    options::{OptionError, OptionKind, QueryOption},
    request::RequestSpec,
};

/// Bytes escaped when substituting a path argument.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b':')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const NONE: &[OptionKind] = &[];
const STREET: &[OptionKind] = &[OptionKind::Date, OptionKind::LatLng, OptionKind::Polygon];

/// An upstream endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Resource {
    /// Months with street-level crime data.
    CrimeDates,
    /// Crimes within 1 mile of a point or inside a custom area.
    StreetLevelCrimes,
    /// Outcomes at a point, area or location.
    StreetLevelOutcomes,
    /// Crimes at a specific location.
    CrimesAtLocation,
    /// Crimes that could not be mapped.
    CrimesNoLocation,
    /// Valid crime categories.
    CrimeCategories,
    /// Date of the latest crime data update.
    CrimeLastUpdated,
    /// Case history of one crime.
    OutcomesForCrime,
    /// All forces.
    Forces,
    /// One force.
    Force,
    /// Senior officers of a force.
    ForcePeople,
    /// Neighbourhoods of a force.
    Neighbourhoods,
    /// One neighbourhood.
    Neighbourhood,
    /// Boundary polygon of a neighbourhood.
    NeighbourhoodBoundary,
    /// Policing team of a neighbourhood.
    NeighbourhoodPeople,
    /// Events in a neighbourhood.
    NeighbourhoodEvents,
    /// Policing priorities of a neighbourhood.
    NeighbourhoodPriorities,
    /// Neighbourhood containing a point.
    LocateNeighbourhood,
    /// Stop and searches within 1 mile of a point or inside a custom area.
    StopsStreet,
    /// Stop and searches at a location.
    StopsAtLocation,
    /// Stop and searches that could not be mapped.
    StopsNoLocation,
    /// Stop and searches reported by a force.
    StopsForce,
}

impl Resource {
    /// Path template, relative to the API base. `{}` marks a path argument.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::CrimeDates => "crimes-street-dates",
            Self::StreetLevelCrimes => "crimes-street/all-crime",
            Self::StreetLevelOutcomes => "outcomes-at-location",
            Self::CrimesAtLocation => "crimes-at-location",
            Self::CrimesNoLocation => "crimes-no-location",
            Self::CrimeCategories => "crime-categories",
            Self::CrimeLastUpdated => "crime-last-updated",
            Self::OutcomesForCrime => "outcomes-for-crime/{}",
            Self::Forces => "forces",
            Self::Force => "forces/{}",
            Self::ForcePeople => "forces/{}/people",
            Self::Neighbourhoods => "{}/neighbourhoods",
            Self::Neighbourhood => "{}/{}",
            Self::NeighbourhoodBoundary => "{}/{}/boundary",
            Self::NeighbourhoodPeople => "{}/{}/people",
            Self::NeighbourhoodEvents => "{}/{}/events",
            Self::NeighbourhoodPriorities => "{}/{}/priorities",
            Self::LocateNeighbourhood => "locate-neighbourhood",
            Self::StopsStreet => "stops-street",
            Self::StopsAtLocation => "stops-at-location",
            Self::StopsNoLocation => "stops-no-location",
            Self::StopsForce => "stops-force",
        }
    }

    /// Query options the endpoint accepts.
    #[must_use]
    pub const fn options(self) -> &'static [OptionKind] {
        match self {
            Self::StreetLevelCrimes | Self::StopsStreet => STREET,
            Self::StreetLevelOutcomes => &[
                OptionKind::Date,
                OptionKind::LatLng,
                OptionKind::Polygon,
                OptionKind::LocationId,
            ],
            Self::CrimesAtLocation => &[
                OptionKind::Date,
                OptionKind::LatLng,
                OptionKind::LocationId,
            ],
            Self::CrimesNoLocation => &[
                OptionKind::Date,
                OptionKind::Category,
                OptionKind::Force,
            ],
            Self::CrimeCategories => &[OptionKind::Date],
            Self::StopsAtLocation => &[OptionKind::Date, OptionKind::LocationId],
            Self::StopsNoLocation | Self::StopsForce => &[OptionKind::Date, OptionKind::Force],
            Self::CrimeDates
            | Self::CrimeLastUpdated
            | Self::OutcomesForCrime
            | Self::Forces
            | Self::Force
            | Self::ForcePeople
            | Self::Neighbourhoods
            | Self::Neighbourhood
            | Self::NeighbourhoodBoundary
            | Self::NeighbourhoodPeople
            | Self::NeighbourhoodEvents
            | Self::NeighbourhoodPriorities
            | Self::LocateNeighbourhood => NONE,
        }
    }

    /// Number of path arguments the template takes.
    #[must_use]
    pub fn arity(self) -> usize {
        self.template().matches("{}").count()
    }

    /// Whether the endpoint accepts `kind`.
    #[must_use]
    pub fn accepts(self, kind: OptionKind) -> bool {
        self.options().contains(&kind)
    }

    /// Substitutes `args` into the path template, percent-encoding each one
    /// as a single path segment.
    ///
    /// # Errors
    ///
    /// * [`Error::PathArguments`] if `args` does not match the template's
    ///   arity
    /// * [`Error::EmptyPathArgument`] if an argument is empty
    /// * [`Error::DotPathArgument`] if an argument is `.` or `..`
    pub fn path(self, args: &[&str]) -> Result<String, Error> {
        let expected = self.arity();
        if args.len() != expected {
            return Err(Error::PathArguments {
                resource: self,
                expected,
                actual: args.len(),
            });
        }
        if let Some(index) = args.iter().position(|arg| arg.is_empty()) {
            return Err(Error::EmptyPathArgument {
                resource: self,
                index,
            });
        }
        if let Some(index) = args.iter().position(|arg| matches!(*arg, "." | "..")) {
            return Err(Error::DotPathArgument {
                resource: self,
                index,
            });
        }

        let mut path = String::with_capacity(self.template().len());
        let mut args = args.iter();
        for (i, piece) in self.template().split("{}").enumerate() {
            if i > 0
                && let Some(arg) = args.next()
            {
                path.extend(utf8_percent_encode(arg, PATH_SEGMENT));
            }
            path.push_str(piece);
        }

        Ok(path)
    }

    /// Checks every option against [`Self::options`].
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::Unsupported`] for the first option the
    /// endpoint does not accept.
    pub fn check_options(self, options: &[QueryOption]) -> Result<(), OptionError> {
        options
            .iter()
            .map(QueryOption::kind)
            .find(|kind| !self.accepts(*kind))
            .map_or(Ok(()), |option| {
                Err(OptionError::Unsupported {
                    resource: self,
                    option,
                })
            })
    }

    /// Builds the request description for a call to this endpoint.
    ///
    /// # Errors
    ///
    /// * [`Error::Options`] if an option is not accepted or two location
    ///   selectors conflict
    /// * [`Error::PathArguments`], [`Error::EmptyPathArgument`] or
    ///   [`Error::DotPathArgument`] for bad path arguments
    pub fn request(self, args: &[&str], options: &[QueryOption]) -> Result<RequestSpec, Error> {
        self.check_options(options)?;
        let path = self.path(args)?;
        Ok(RequestSpec::new(path, options)?)
    }
}
