//! Neighbourhood policing.

use ukpolice_models::{
    BoundaryPoint, LocatedNeighbourhood, Neighbourhood, NeighbourhoodEvent, NeighbourhoodOfficer,
    NeighbourhoodPriority, NeighbourhoodSummary,
};

use crate::{Client, Error, Query, RequestSpec, Resource, Response};

/// Neighbourhood endpoints. Obtained from [`Client::neighbourhoods`].
///
/// `force` is a force slug and `id` a neighbourhood identifier as returned
/// by [`get_neighbourhoods`](Self::get_neighbourhoods).
#[derive(Debug, Clone, Copy)]
pub struct Neighbourhoods<'a> {
    client: &'a Client,
}

impl Client {
    /// Neighbourhood endpoints.
    #[must_use]
    pub const fn neighbourhoods(&self) -> Neighbourhoods<'_> {
        Neighbourhoods { client: self }
    }
}

impl Neighbourhoods<'_> {
    /// Neighbourhoods of a force.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_neighbourhoods(
        &self,
        force: &str,
    ) -> Result<Response<Vec<NeighbourhoodSummary>>, Error> {
        self.client
            .fetch(Resource::Neighbourhoods, &[force], &[])
            .await
    }

    /// Details of one neighbourhood.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_specific_neighbourhood(
        &self,
        force: &str,
        id: &str,
    ) -> Result<Response<Neighbourhood>, Error> {
        self.client
            .fetch(Resource::Neighbourhood, &[force, id], &[])
            .await
    }

    /// Boundary polygon of a neighbourhood.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_boundary(
        &self,
        force: &str,
        id: &str,
    ) -> Result<Response<Vec<BoundaryPoint>>, Error> {
        self.client
            .fetch(Resource::NeighbourhoodBoundary, &[force, id], &[])
            .await
    }

    /// Policing team of a neighbourhood.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_team(
        &self,
        force: &str,
        id: &str,
    ) -> Result<Response<Vec<NeighbourhoodOfficer>>, Error> {
        self.client
            .fetch(Resource::NeighbourhoodPeople, &[force, id], &[])
            .await
    }

    /// Events in a neighbourhood.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_events(
        &self,
        force: &str,
        id: &str,
    ) -> Result<Response<Vec<NeighbourhoodEvent>>, Error> {
        self.client
            .fetch(Resource::NeighbourhoodEvents, &[force, id], &[])
            .await
    }

    /// Policing priorities of a neighbourhood.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch`].
    pub async fn get_priorities(
        &self,
        force: &str,
        id: &str,
    ) -> Result<Response<Vec<NeighbourhoodPriority>>, Error> {
        self.client
            .fetch(Resource::NeighbourhoodPriorities, &[force, id], &[])
            .await
    }

    /// The force and neighbourhood responsible for a point.
    ///
    /// # Errors
    ///
    /// See [`Client::get`].
    pub async fn locate_neighbourhood(
        &self,
        lat: &str,
        lng: &str,
    ) -> Result<Response<LocatedNeighbourhood>, Error> {
        let mut query = Query::new();
        query.set("q", &format!("{lat},{lng}"));
        let spec = RequestSpec::from_query(Resource::LocateNeighbourhood.template(), &query);
        self.client.get(&spec).await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::{
        Mock, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    use crate::{
        Error,
        test_utils::{client_for, mock_server, mount_json},
    };

    #[tokio::test]
    async fn lists_neighbourhoods() {
        let server = mock_server().await;
        mount_json(
            &server,
            "leicestershire/neighbourhoods",
            r#"[
                {"id": "NC04", "name": "City Centre"},
                {"id": "NC66", "name": "Cultural Quarter"}
            ]"#,
        )
        .await;
        let client = client_for(&server);

        let list = client
            .neighbourhoods()
            .get_neighbourhoods("leicestershire")
            .await
            .unwrap()
            .into_data();
        assert_eq!(list[1].name, "Cultural Quarter");
    }

    #[tokio::test]
    async fn specific_neighbourhood() {
        let server = mock_server().await;
        mount_json(
            &server,
            "leicestershire/NC04",
            r#"{
                "id": "NC04",
                "name": "City Centre",
                "centre": {"latitude": "52.6389", "longitude": "-1.13619"}
            }"#,
        )
        .await;
        let client = client_for(&server);

        let n = client
            .neighbourhoods()
            .get_specific_neighbourhood("leicestershire", "NC04")
            .await
            .unwrap()
            .into_data();
        assert_eq!(n.centre.map(|c| c.longitude).as_deref(), Some("-1.13619"));
    }

    #[tokio::test]
    async fn boundary_team_events_and_priorities() {
        let server = mock_server().await;
        mount_json(
            &server,
            "leicestershire/NC04/boundary",
            r#"[{"latitude": "52.6394052587", "longitude": "-1.1458618876"}]"#,
        )
        .await;
        mount_json(
            &server,
            "leicestershire/NC04/people",
            r#"[{"name": "Andy Cooper", "rank": "Sgt", "bio": null, "contact_details": {}}]"#,
        )
        .await;
        mount_json(
            &server,
            "leicestershire/NC04/events",
            r#"[{
                "title": "Surgery",
                "type": "meeting",
                "start_date": "2016-09-17T12:00:00",
                "contact_details": {}
            }]"#,
        )
        .await;
        mount_json(
            &server,
            "leicestershire/NC04/priorities",
            r#"[{
                "issue": "<p>Parking</p>",
                "issue-date": "2016-04-14T00:00:00",
                "action": null,
                "action-date": null
            }]"#,
        )
        .await;
        let client = client_for(&server);
        let neighbourhoods = client.neighbourhoods();

        let boundary = neighbourhoods
            .get_boundary("leicestershire", "NC04")
            .await
            .unwrap()
            .into_data();
        assert_eq!(boundary[0].latitude, "52.6394052587");

        let team = neighbourhoods
            .get_team("leicestershire", "NC04")
            .await
            .unwrap()
            .into_data();
        assert_eq!(team[0].rank.as_deref(), Some("Sgt"));

        let events = neighbourhoods
            .get_events("leicestershire", "NC04")
            .await
            .unwrap()
            .into_data();
        assert_eq!(events[0].kind.as_deref(), Some("meeting"));

        let priorities = neighbourhoods
            .get_priorities("leicestershire", "NC04")
            .await
            .unwrap()
            .into_data();
        assert_eq!(
            priorities[0].issue_date.as_deref(),
            Some("2016-04-14T00:00:00")
        );
    }

    #[tokio::test]
    async fn locates_neighbourhood_for_point() {
        let server = mock_server().await;
        Mock::given(method("GET"))
            .and(path("/api/locate-neighbourhood"))
            .and(query_param("q", "51.500617,-0.124629"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"force": "metropolitan", "neighbourhood": "E05000644"}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server);

        let located = client
            .neighbourhoods()
            .locate_neighbourhood("51.500617", "-0.124629")
            .await
            .unwrap()
            .into_data();
        assert_eq!(located.force, "metropolitan");
        assert_eq!(located.neighbourhood, "E05000644");
    }

    #[tokio::test]
    async fn empty_force_is_rejected_locally() {
        let server = mock_server().await;
        let client = client_for(&server);

        let err = client
            .neighbourhoods()
            .get_neighbourhoods("")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::EmptyPathArgument { .. }));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
