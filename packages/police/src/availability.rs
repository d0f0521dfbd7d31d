//! Data availability.

use ukpolice_models::AvailabilityInfo;

use crate::{Client, Error, Resource, Response};

/// Availability endpoints. Obtained from [`Client::availability`].
#[derive(Debug, Clone, Copy)]
pub struct Availability<'a> {
    client: &'a Client,
}

impl Client {
    /// Availability endpoints.
    #[must_use]
    pub const fn availability(&self) -> Availability<'_> {
        Availability { client: self }
    }
}

impl Availability<'_> {
    /// Months with street-level crime data, newest first, each with the
    /// forces that published stop and search data for it.
    ///
    /// # Errors
    ///
    /// See [`Client::execute`].
    pub async fn get_availability_info(&self) -> Result<Response<Vec<AvailabilityInfo>>, Error> {
        self.client.fetch(Resource::CrimeDates, &[], &[]).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{client_for, mock_server, mount_json};

    #[tokio::test]
    async fn lists_available_months() {
        let server = mock_server().await;
        mount_json(
            &server,
            "crimes-street-dates",
            r#"[
                {"date": "2015-06", "stop-and-search": ["bedfordshire", "cleveland"]},
                {"date": "2015-05", "stop-and-search": []}
            ]"#,
        )
        .await;
        let client = client_for(&server);

        let info = client
            .availability()
            .get_availability_info()
            .await
            .unwrap()
            .into_data();

        assert_eq!(info.len(), 2);
        assert_eq!(info[0].date, "2015-06");
        assert_eq!(info[0].stop_and_search, vec!["bedfordshire", "cleveland"]);
    }
}
