//! Stop and search.

use ukpolice_models::Search;

use crate::{Client, Error, QueryOption, Resource, Response};

/// Stop and search endpoints. Obtained from [`Client::stop_and_search`].
#[derive(Debug, Clone, Copy)]
pub struct StopAndSearch<'a> {
    client: &'a Client,
}

impl Client {
    /// Stop and search endpoints.
    #[must_use]
    pub const fn stop_and_search(&self) -> StopAndSearch<'_> {
        StopAndSearch { client: self }
    }
}

impl StopAndSearch<'_> {
    /// Searches within a mile of a point, or inside a custom area.
    ///
    /// Accepts date, lat/lng and poly.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_by_area(
        &self,
        options: &[QueryOption],
    ) -> Result<Response<Vec<Search>>, Error> {
        self.client.fetch(Resource::StopsStreet, &[], options).await
    }

    /// Searches at a location id. Accepts date and location id.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_by_location(
        &self,
        options: &[QueryOption],
    ) -> Result<Response<Vec<Search>>, Error> {
        self.client
            .fetch(Resource::StopsAtLocation, &[], options)
            .await
    }

    /// Searches a force could not map. Accepts date and force.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_with_no_location(
        &self,
        options: &[QueryOption],
    ) -> Result<Response<Vec<Search>>, Error> {
        self.client
            .fetch(Resource::StopsNoLocation, &[], options)
            .await
    }

    /// Searches reported by a force. Accepts date and force.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_by_force(
        &self,
        options: &[QueryOption],
    ) -> Result<Response<Vec<Search>>, Error> {
        self.client.fetch(Resource::StopsForce, &[], options).await
    }
}
