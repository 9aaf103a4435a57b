//! Agents API client
//!
//! Thin reqwest wrapper over the two endpoints the panel uses:
//! `GET /agents` and `POST /agents/{id}/stop`.

use super::types::{Agent, AgentListResponse};
use crate::error::ClientError;
use reqwest::Url;

/// HTTP client bound to one agents API base URL
///
/// Cloning is cheap: the underlying `reqwest::Client` shares its
/// connection pool between clones.
#[derive(Clone, Debug)]
pub struct AgentsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AgentsClient {
    /// Create a client for the API rooted at `base_url`
    ///
    /// # Errors
    /// * `ClientError::InvalidBaseUrl` if the URL does not parse or cannot
    ///   carry a path (e.g. `mailto:`)
    /// * `ClientError::Transport` if the HTTP client cannot be built
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, base_url })
    }

    /// Base URL this client resolves endpoints against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the full agent list
    ///
    /// Any deviation from a 2xx JSON `{"agents": [...]}` body is an error.
    pub async fn fetch_agents(&self) -> Result<Vec<Agent>, ClientError> {
        let url = self.endpoint(&["agents"])?;
        tracing::debug!(url = %url, "Fetching agents");

        let response = self.http.get(url).send().await?;
        let body = read_success_body(response).await?;
        let envelope: AgentListResponse = serde_json::from_str(&body)?;

        tracing::debug!(count = envelope.agents.len(), "Fetched agents");
        Ok(envelope.agents)
    }

    /// Ask the backend to stop an agent
    ///
    /// Sends no request body. The JSON reply has no fixed shape and is
    /// returned as-is for logging.
    pub async fn stop_agent(&self, agent_id: &str) -> Result<serde_json::Value, ClientError> {
        let url = self.endpoint(&["agents", agent_id, "stop"])?;
        tracing::debug!(url = %url, agent_id = %agent_id, "Stopping agent");

        let response = self.http.post(url).send().await?;
        let body = read_success_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Resolve path segments below the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Read the body, turning non-2xx statuses into `ClientError::Status`
async fn read_success_body(response: reqwest::Response) -> Result<String, ClientError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        tracing::warn!(
            status_code = status.as_u16(),
            error_body = %body,
            "Agents API returned error status"
        );
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[test]
    fn test_new_rejects_garbage_url() {
        let result = AgentsClient::new("not a url");
        assert!(matches!(result, Err(ClientError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_new_rejects_cannot_be_a_base() {
        let result = AgentsClient::new("mailto:ops@example.com");
        assert!(matches!(result, Err(ClientError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_endpoint_paths() {
        let client = AgentsClient::new("http://localhost:3000").unwrap();
        assert_eq!(
            client.endpoint(&["agents"]).unwrap().as_str(),
            "http://localhost:3000/agents"
        );

        let nested = AgentsClient::new("http://localhost:3000/api/").unwrap();
        assert_eq!(
            nested.endpoint(&["agents", "a1", "stop"]).unwrap().as_str(),
            "http://localhost:3000/api/agents/a1/stop"
        );
    }

    #[test]
    fn test_endpoint_encodes_agent_id() {
        let client = AgentsClient::new("http://localhost:3000").unwrap();
        let url = client.endpoint(&["agents", "a b/c", "stop"]).unwrap();
        assert_eq!(url.path(), "/agents/a%20b%2Fc/stop");
    }

    #[tokio::test]
    async fn test_fetch_agents_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/agents")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"agents": [
                    {"id": "a1", "name": "trump", "clients": ["twitter"]},
                    {"id": "a2", "name": "eliza", "clients": ["twitter", "discord"]}
                ]}"#,
            )
            .create_async()
            .await;

        let client = AgentsClient::new(&server.url()).unwrap();
        let agents = client.fetch_agents().await.unwrap();

        mock.assert_async().await;
        assert_eq!(agents.len(), 2);
        assert_eq!(agents[0].name, "trump");
        assert_eq!(agents[1].clients, vec!["twitter", "discord"]);
    }

    #[tokio::test]
    async fn test_fetch_agents_empty_list() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/agents")
            .with_status(200)
            .with_body(r#"{"agents": []}"#)
            .create_async()
            .await;

        let client = AgentsClient::new(&server.url()).unwrap();
        let agents = client.fetch_agents().await.unwrap();

        mock.assert_async().await;
        assert!(agents.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_agents_non_json_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/agents")
            .with_status(200)
            .with_body("<html>gateway</html>")
            .create_async()
            .await;

        let client = AgentsClient::new(&server.url()).unwrap();
        let result = client.fetch_agents().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[tokio::test]
    async fn test_fetch_agents_error_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/agents")
            .with_status(500)
            .with_body(r#"{"error": "boom"}"#)
            .create_async()
            .await;

        let client = AgentsClient::new(&server.url()).unwrap();
        let result = client.fetch_agents().await;

        mock.assert_async().await;
        match result {
            Err(ClientError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert!(body.contains("boom"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_agents_connection_refused() {
        // Nothing listens on port 1
        let client = AgentsClient::new("http://127.0.0.1:1").unwrap();
        let result = client.fetch_agents().await;
        assert!(matches!(result, Err(ClientError::Transport(_))));
    }

    #[tokio::test]
    async fn test_stop_agent_posts_without_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/agents/e0e1/stop")
            .match_body("")
            .with_status(200)
            .with_body(r#"{"success": true}"#)
            .expect(1)
            .create_async()
            .await;

        let client = AgentsClient::new(&server.url()).unwrap();
        let payload = client.stop_agent("e0e1").await.unwrap();

        mock.assert_async().await;
        assert_eq!(payload["success"], serde_json::Value::Bool(true));
    }

    #[tokio::test]
    async fn test_stop_agent_error_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/agents/missing/stop")
            .with_status(404)
            .with_body(r#"{"error": "Agent not found"}"#)
            .create_async()
            .await;

        let client = AgentsClient::new(&server.url()).unwrap();
        let result = client.stop_agent("missing").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ClientError::Status { status: 404, .. })));
    }
}
