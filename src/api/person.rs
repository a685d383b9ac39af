//! Client for the person endpoints
//!
//! `GET /api/person/` lists every saved record; `POST /api/person/` creates
//! one. Any 2xx response counts as success; the create response body is
//! logged but otherwise unused.

use std::sync::Arc;

use crate::api::{ApiError, HttpClient};
use crate::config::ApiConfig;
use crate::types::{NewPerson, Person};

const PERSON_PATH: &str = "/api/person/";

/// Client for the remote person API
#[derive(Clone)]
pub struct PersonApi {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl PersonApi {
    pub fn new(config: &ApiConfig, http: Arc<dyn HttpClient>) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, PERSON_PATH)
    }

    /// Fetch all saved records, in server order.
    pub async fn list(&self) -> Result<Vec<Person>, ApiError> {
        let response = self.http.get(&self.endpoint()).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }
        let people: Vec<Person> = serde_json::from_str(&response.body)?;
        tracing::debug!("Fetched {} people", people.len());
        Ok(people)
    }

    /// Save a new record.
    pub async fn create(&self, person: &NewPerson) -> Result<(), ApiError> {
        let body = serde_json::to_value(person)?;
        let response = self.http.post_json(&self.endpoint(), body).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }
        tracing::debug!("Saved person, server said: {}", response.body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::http::{HttpResponse, MockHttpClient};

    fn api_with(mock: MockHttpClient) -> PersonApi {
        let config = ApiConfig {
            base_url: "http://localhost:8000".to_string(),
        };
        PersonApi::new(&config, Arc::new(mock))
    }

    #[tokio::test]
    async fn create_posts_name_and_date_to_person_endpoint() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json()
            .withf(|url, body| {
                url == "http://localhost:8000/api/person/"
                    && *body == serde_json::json!({"name": "Alice", "date": "2024-01-15"})
            })
            .times(1)
            .returning(|_, _| {
                Ok(HttpResponse {
                    status: 201,
                    body: r#"{"id":1,"name":"Alice","date":"2024-01-15"}"#.to_string(),
                })
            });

        let api = api_with(mock);
        let result = api.create(&NewPerson::new("Alice", "2024-01-15")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn create_maps_non_2xx_to_status_error() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json().returning(|_, _| {
            Ok(HttpResponse {
                status: 400,
                body: r#"{"date":["Date has wrong format."]}"#.to_string(),
            })
        });

        let api = api_with(mock);
        let err = api
            .create(&NewPerson::new("Alice", "not-a-date"))
            .await
            .unwrap_err();
        match err {
            ApiError::Status { status, .. } => assert_eq!(status, 400),
            other => panic!("expected ApiError::Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_propagates_transport_errors() {
        let mut mock = MockHttpClient::new();
        mock.expect_post_json()
            .returning(|_, _| Err(ApiError::Transport("connection refused".to_string())));

        let api = api_with(mock);
        let err = api
            .create(&NewPerson::new("Alice", "2024-01-15"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn list_parses_people_in_server_order() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .withf(|url| url == "http://localhost:8000/api/person/")
            .times(1)
            .returning(|_| {
                Ok(HttpResponse {
                    status: 200,
                    body: r#"[{"id":2,"name":"Bob","date":"2024-02-01"},{"id":1,"name":"Alice","date":"2024-01-15"}]"#.to_string(),
                })
            });

        let api = api_with(mock);
        let people = api.list().await.unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].name, "Bob");
        assert_eq!(people[1].name, "Alice");
    }

    #[tokio::test]
    async fn list_handles_empty_payload() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_| {
            Ok(HttpResponse {
                status: 200,
                body: "[]".to_string(),
            })
        });

        let api = api_with(mock);
        let people = api.list().await.unwrap();
        assert!(people.is_empty());
    }

    #[tokio::test]
    async fn list_maps_non_2xx_to_status_error() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_| {
            Ok(HttpResponse {
                status: 500,
                body: "server error".to_string(),
            })
        });

        let api = api_with(mock);
        let err = api.list().await.unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "server error");
            }
            other => panic!("expected ApiError::Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn list_rejects_malformed_payload() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_| {
            Ok(HttpResponse {
                status: 200,
                body: "not json".to_string(),
            })
        });

        let api = api_with(mock);
        let err = api.list().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
