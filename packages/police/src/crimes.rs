//! Street-level crimes, outcomes and categories.

use ukpolice_models::{Crime, CrimeCategory, CrimeOutcomes, LastUpdated, Outcome};

use crate::{Client, Error, QueryOption, Resource, Response};

/// Crime endpoints. Obtained from [`Client::crimes`].
///
/// Methods taking options accept at most one location selector; see
/// [`crate::options`].
#[derive(Debug, Clone, Copy)]
pub struct Crimes<'a> {
    client: &'a Client,
}

impl Client {
    /// Crime endpoints.
    #[must_use]
    pub const fn crimes(&self) -> Crimes<'_> {
        Crimes { client: self }
    }
}

impl Crimes<'_> {
    /// Crimes within a mile of a point, or inside a custom area.
    ///
    /// Accepts date, lat/lng and poly.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_street_level_crimes(
        &self,
        options: &[QueryOption],
    ) -> Result<Response<Vec<Crime>>, Error> {
        self.client
            .fetch(Resource::StreetLevelCrimes, &[], options)
            .await
    }

    /// Outcomes at a point, custom area or location id.
    ///
    /// Accepts date, lat/lng, poly and location id.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_street_level_outcomes(
        &self,
        options: &[QueryOption],
    ) -> Result<Response<Vec<Outcome>>, Error> {
        self.client
            .fetch(Resource::StreetLevelOutcomes, &[], options)
            .await
    }

    /// Crimes snapped to a specific location.
    ///
    /// Accepts date, lat/lng and location id.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_crimes_at_location(
        &self,
        options: &[QueryOption],
    ) -> Result<Response<Vec<Crime>>, Error> {
        self.client
            .fetch(Resource::CrimesAtLocation, &[], options)
            .await
    }

    /// Crimes a force could not map to a location.
    ///
    /// Accepts date, category and force; the upstream requires the latter
    /// two.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_crimes_with_no_location(
        &self,
        options: &[QueryOption],
    ) -> Result<Response<Vec<Crime>>, Error> {
        self.client
            .fetch(Resource::CrimesNoLocation, &[], options)
            .await
    }

    /// Valid crime categories, optionally as of `date` (`YYYY-MM`).
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_crime_categories(
        &self,
        date: Option<&str>,
    ) -> Result<Response<Vec<CrimeCategory>>, Error> {
        let options = date.map(QueryOption::date).into_iter().collect::<Vec<_>>();
        self.client
            .fetch(Resource::CrimeCategories, &[], &options)
            .await
    }

    /// When crime data was last updated.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_last_updated(&self) -> Result<Response<LastUpdated>, Error> {
        self.client.fetch(Resource::CrimeLastUpdated, &[], &[]).await
    }

    /// Case history of the crime with `persistent_id`.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_specific_outcomes(
        &self,
        persistent_id: &str,
    ) -> Result<Response<CrimeOutcomes>, Error> {
        self.client
            .fetch(Resource::OutcomesForCrime, &[persistent_id], &[])
            .await
    }
}
