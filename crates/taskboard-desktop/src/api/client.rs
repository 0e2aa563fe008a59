//! # API Client
//!
//! HTTP client for communicating with the Taskboard REST API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use taskboard_core::{TokenValidator, UserProfile, ValidationError};

use super::error::{ApiError, ApiResult};
use super::types::{
    CreateProjectRequest, LoginRequest, LoginResponse, Member, Project, Statistics, Task,
};

/// HTTP client for the Taskboard API.
///
/// Requests carry the session's access token as a bearer header when one is
/// set. The client is cheaply cloneable and can be shared across components.
///
/// # Examples
///
/// ```rust,ignore
/// let client = ApiClient::new("http://127.0.0.1:8000/api").with_token(Some(token));
/// let projects = client.list_projects().await?;
/// println!("Found {} projects", projects.len());
/// ```
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: Client,
}

impl ApiClient {
    /// Creates a new client for the API at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Returns a client sending `token` as a bearer header.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(self.http.get(format!("{}{}", self.base_url, path)))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn parse<T: DeserializeOwned>(res: Response) -> ApiResult<T> {
        if !res.status().is_success() {
            return Err(ApiError::Server {
                status: res.status().as_u16(),
                message: res.text().await.unwrap_or_default(),
            });
        }

        res.json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Checks if the API is reachable and healthy.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the request fails.
    pub async fn health(&self) -> ApiResult<bool> {
        let res = self.get("/health").send().await?;
        Ok(res.status().is_success())
    }

    /// Exchanges email and password for an access token.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Network`] - Network request failed
    /// * [`ApiError::Server`] - Wrong credentials (401) or validation error (422)
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let res = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(&req)
            .send()
            .await?;

        Self::parse(res).await
    }

    /// Gets the profile of the token's owner.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Network`] - Network request failed
    /// * [`ApiError::Server`] - Unauthorized (401) or token invalid
    pub async fn current_user(&self) -> ApiResult<UserProfile> {
        let res = self.get("/auth/me").send().await?;
        Self::parse(res).await
    }

    /// Retrieves the projects visible to the signed-in user.
    pub async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        let res = self.get("/projects").send().await?;
        Self::parse(res).await
    }

    /// Creates a project owned by the signed-in user.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Network`] - Network request failed
    /// * [`ApiError::Server`] - Validation error (422) or unauthorized
    pub async fn create_project(&self, name: &str, description: Option<&str>) -> ApiResult<Project> {
        let req = CreateProjectRequest {
            name: name.to_string(),
            description: description.map(str::to_string),
        };

        let res = self
            .authorize(self.http.post(format!("{}/projects", self.base_url)))
            .json(&req)
            .send()
            .await?;

        Self::parse(res).await
    }

    /// Retrieves a single project.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Server`] - Project not found (404)
    pub async fn get_project(&self, id: &str) -> ApiResult<Project> {
        let res = self.get(&format!("/projects/{}", id)).send().await?;
        Self::parse(res).await
    }

    /// Retrieves a project's tasks with their sub-tasks.
    pub async fn list_tasks(&self, project_id: &str) -> ApiResult<Vec<Task>> {
        let res = self
            .get(&format!("/projects/{}/tasks", project_id))
            .send()
            .await?;
        Self::parse(res).await
    }

    /// Retrieves the users assigned to a project.
    pub async fn list_project_members(&self, project_id: &str) -> ApiResult<Vec<Member>> {
        let res = self
            .get(&format!("/projects/{}/users", project_id))
            .send()
            .await?;
        Self::parse(res).await
    }

    /// Retrieves every user. Admin only.
    pub async fn list_users(&self) -> ApiResult<Vec<Member>> {
        let res = self.get("/users").send().await?;
        Self::parse(res).await
    }

    /// Retrieves dashboard statistics. Admin only.
    pub async fn statistics(&self) -> ApiResult<Statistics> {
        let res = self.get("/statistics").send().await?;
        Self::parse(res).await
    }
}

#[async_trait]
impl TokenValidator for ApiClient {
    async fn validate_token(&self, token: &str) -> Result<UserProfile, ValidationError> {
        self.clone()
            .with_token(Some(token.to_string()))
            .current_user()
            .await
            .map_err(|e| ValidationError::Rejected(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use taskboard_core::{validate, MemoryStore, Role, SessionStore, ACCESS_TOKEN_KEY};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn me() -> serde_json::Value {
        serde_json::json!({
            "id": 4,
            "name": "Huda",
            "email": "huda@example.com",
            "role": "admin"
        })
    }

    #[tokio::test]
    async fn test_health_returns_false_when_api_unhealthy() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri());
        assert!(!client.health().await.unwrap());
    }

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(serde_json::json!({
                "email": "huda@example.com",
                "password": "secret"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "jwt",
                "user": me()
            })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri());
        let res = client.login("huda@example.com", "secret").await.unwrap();
        assert_eq!(res.access_token, "jwt");
        assert_eq!(res.user.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_wrong_password_is_unauthorized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid credentials"))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri());
        let err = client.login("huda@example.com", "nope").await.unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_requests_carry_bearer_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/projects"))
            .and(header("Authorization", "Bearer abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "id": 7, "name": "Website", "progress": 40 }
            ])))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(format!("{}/", mock_server.uri())).with_token(Some("abc".into()));
        let projects = client.list_projects().await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].progress, 40);
    }

    #[tokio::test]
    async fn test_validate_token_accepts_known_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .and(header("Authorization", "Bearer good"))
            .respond_with(ResponseTemplate::new(200).set_body_json(me()))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri());
        let profile = client.validate_token("good").await.unwrap();
        assert_eq!(profile.name, "Huda");
    }

    #[tokio::test]
    async fn test_validate_token_rejects_on_401() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri());
        let err = client.validate_token("stale").await.unwrap_err();
        assert!(matches!(err, ValidationError::Rejected(_)));
    }

    #[tokio::test]
    async fn test_slow_validation_clears_restored_session() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(me())
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;

        // {"exp": 4102444800} (2100-01-01)
        let token = "e30.eyJleHAiOjQxMDI0NDQ4MDB9.sig";
        let storage = std::sync::Arc::new(MemoryStore::with_entries([(ACCESS_TOKEN_KEY, token)]));
        let (mut store, pending) = SessionStore::open(storage.clone());
        let pending = pending.expect("unexpired token should be validated");

        let client = ApiClient::new(mock_server.uri());
        let outcome = validate(&pending, &client, Duration::from_millis(100)).await;
        assert_eq!(outcome, Err(ValidationError::TimedOut));

        store.apply_validation(pending, outcome);
        assert!(!store.loading());
        assert!(store.session().user().is_none());
    }

    #[tokio::test]
    async fn test_create_project_posts_name() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/projects"))
            .and(header("Authorization", "Bearer abc"))
            .and(body_json(serde_json::json!({ "name": "Launch" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 12,
                "name": "Launch",
                "status": "active"
            })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri()).with_token(Some("abc".into()));
        let project = client.create_project("Launch", None).await.unwrap();
        assert_eq!(project.id, 12);
        assert_eq!(project.description, None);
    }

    #[tokio::test]
    async fn test_missing_project_is_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/projects/99"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new(mock_server.uri());
        match client.get_project("99").await {
            Err(ApiError::Server { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
            }
            other => panic!("expected server error, got {:?}", other.map(|p| p.id)),
        }
    }
}
