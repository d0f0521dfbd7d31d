//! Police forces.

use ukpolice_models::{Force, ForceSummary, SeniorOfficer};

use crate::{Client, Error, Resource, Response};

/// Force endpoints. Obtained from [`Client::forces`].
#[derive(Debug, Clone, Copy)]
pub struct Forces<'a> {
    client: &'a Client,
}

impl Client {
    /// Force endpoints.
    #[must_use]
    pub const fn forces(&self) -> Forces<'_> {
        Forces { client: self }
    }
}

impl Forces<'_> {
    /// All forces.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_forces(&self) -> Result<Response<Vec<ForceSummary>>, Error> {
        self.client.fetch(Resource::Forces, &[], &[]).await
    }

    /// Details of the force with slug `id`.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_force_details(&self, id: &str) -> Result<Response<Force>, Error> {
        self.client.fetch(Resource::Force, &[id], &[]).await
    }

    /// Senior officers of the force with slug `id`.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_people(&self, id: &str) -> Result<Response<Vec<SeniorOfficer>>, Error> {
        self.client.fetch(Resource::ForcePeople, &[id], &[]).await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::{
        Mock, ResponseTemplate,
        matchers::{method, path},
    };

    use crate::test_utils::{client_for, mock_server, mount_json};

    #[tokio::test]
    async fn lists_forces() {
        let server = mock_server().await;
        mount_json(
            &server,
            "forces",
            r#"[
                {"id": "avon-and-somerset", "name": "Avon and Somerset Constabulary"},
                {"id": "bedfordshire", "name": "Bedfordshire Police"}
            ]"#,
        )
        .await;
        let client = client_for(&server);

        let forces = client.forces().get_forces().await.unwrap().into_data();
        assert_eq!(forces.len(), 2);
        assert_eq!(forces[1].id, "bedfordshire");
    }

    #[tokio::test]
    async fn force_details() {
        let server = mock_server().await;
        mount_json(
            &server,
            "forces/leicestershire",
            r#"{
                "description": null,
                "url": "http://www.leics.police.uk/",
                "engagement_methods": [],
                "telephone": "101",
                "id": "leicestershire",
                "name": "Leicestershire Police"
            }"#,
        )
        .await;
        let client = client_for(&server);

        let force = client
            .forces()
            .get_force_details("leicestershire")
            .await
            .unwrap()
            .into_data();
        assert_eq!(force.name, "Leicestershire Police");
        assert!(force.description.is_none());
    }

    #[tokio::test]
    async fn senior_officers() {
        let server = mock_server().await;
        mount_json(
            &server,
            "forces/leicestershire/people",
            r#"[{"bio": null, "contact_details": {}, "name": "Simon Cole",
                "rank": "Chief Constable"}]"#,
        )
        .await;
        let client = client_for(&server);

        let people = client
            .forces()
            .get_people("leicestershire")
            .await
            .unwrap()
            .into_data();
        assert_eq!(people[0].rank.as_deref(), Some("Chief Constable"));
    }

    #[tokio::test]
    async fn unknown_force_is_api_error() {
        let server = mock_server().await;
        Mock::given(method("GET"))
            .and(path("/api/forces/atlantis"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        let client = client_for(&server);

        let err = client
            .forces()
            .get_force_details("atlantis")
            .await
            .unwrap_err();
        assert_eq!(
            err.as_api().map(|api| api.status.as_u16()),
            Some(404)
        );
    }
}
