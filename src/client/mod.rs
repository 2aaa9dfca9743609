//! HTTP client for the assistant backend.
//!
//! Wraps the submit, list-tasks and clear-tasks endpoints behind a uniform
//! request/response/error contract. Every call is one-shot: nothing retries
//! and nothing cancels a request once it has been sent.

mod error;
mod resource;

pub use error::ClientError;
pub use resource::*;

use log::*;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Makes requests to the backend and conforms response bodies to models.
///
#[derive(Clone)]
pub struct RequestClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl RequestClient {
    /// Returns a new instance for the given base URL. A timeout of `None`
    /// lets requests wait indefinitely.
    ///
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(RequestClient {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Post user text and return the backend's reply text.
    ///
    pub async fn submit_text(
        &self,
        endpoint: SubmitEndpoint,
        text: &str,
    ) -> Result<String, ClientError> {
        debug!(
            "Submitting {} characters to /{}...",
            text.chars().count(),
            endpoint.path()
        );
        let response = self
            .request(Method::POST, endpoint.path())
            .json(&SubmitRequest { user_input: text })
            .send()
            .await?;
        let response = if endpoint.checks_status() {
            Self::check_status(response)?
        } else {
            if !response.status().is_success() {
                debug!(
                    "Ignoring status {} from /{}",
                    response.status(),
                    endpoint.path()
                );
            }
            response
        };
        let body: SubmitResponse = Self::parse(response).await?;
        Ok(body.response)
    }

    /// Return the current task mapping in backend order.
    ///
    pub async fn list_tasks(&self) -> Result<TaskMap, ClientError> {
        debug!("Requesting task list...");
        let response = self.request(Method::GET, "tasks").send().await?;
        let tasks: TaskMap = Self::parse(Self::check_status(response)?).await?;
        debug!("Received {} tasks", tasks.len());
        Ok(tasks)
    }

    /// Ask the backend to drop all tasks. Any 2xx counts as success
    /// whatever the body holds.
    ///
    pub async fn clear_tasks(&self) -> Result<ClearResponse, ClientError> {
        debug!("Requesting task clear...");
        let response = self.request(Method::POST, "clear-tasks").send().await?;
        let response = Self::check_status(response)?;
        let bytes = response.bytes().await?;
        let cleared = ClearResponse::from_body(&bytes);
        if cleared.message.is_none() && !bytes.is_empty() {
            debug!(
                "Clear response carried no message: {}",
                String::from_utf8_lossy(&bytes)
            );
        }
        Ok(cleared)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client
            .request(method, format!("{}/{}", self.base_url, path))
    }

    fn check_status(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            warn!("Request to {} failed with status {}", response.url(), status);
            Err(ClientError::Http {
                status: status.as_u16(),
            })
        }
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            error!(
                "Failed to deserialize response: {}. Body: {}",
                e,
                String::from_utf8_lossy(&bytes)
            );
            ClientError::Parse(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use serde_json::json;

    fn client(server: &MockServer) -> RequestClient {
        RequestClient::new(&server.base_url(), Some(Duration::from_secs(5))).unwrap()
    }

    #[tokio::test]
    async fn submit_process_success() -> Result<(), ClientError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/process")
                    .header("Content-Type", "application/json")
                    .json_body(json!({ "user_input": "add task: water plants" }));
                then.status(200)
                    .json_body(json!({ "response": "Task added." }));
            })
            .await;

        let response = client(&server)
            .submit_text(SubmitEndpoint::Process, "add task: water plants")
            .await?;
        assert_eq!(response, "Task added.");
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn submit_process_ignores_status() -> Result<(), ClientError> {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("POST").path("/process");
                then.status(500)
                    .json_body(json!({ "response": "Sorry, we cannot process this request." }));
            })
            .await;

        let response = client(&server)
            .submit_text(SubmitEndpoint::Process, "hello")
            .await?;
        assert_eq!(response, "Sorry, we cannot process this request.");
        Ok(())
    }

    #[tokio::test]
    async fn submit_process_non_json_body() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("POST").path("/process");
                then.status(500).body("<html>Internal Server Error</html>");
            })
            .await;

        let result = client(&server)
            .submit_text(SubmitEndpoint::Process, "hello")
            .await;
        assert!(matches!(result, Err(ClientError::Parse(_))));
    }

    #[tokio::test]
    async fn submit_events_checks_status() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/events")
                    .json_body(json!({ "user_input": "meeting at 3" }));
                then.status(502)
                    .json_body(json!({ "response": "upstream failed" }));
            })
            .await;

        let result = client(&server)
            .submit_text(SubmitEndpoint::Events, "meeting at 3")
            .await;
        assert!(matches!(result, Err(ClientError::Http { status: 502 })));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn submit_network_failure() {
        // Nothing listens on port 9 of localhost
        let client = RequestClient::new("http://127.0.0.1:9", Some(Duration::from_secs(5))).unwrap();
        let result = client.submit_text(SubmitEndpoint::Process, "hello").await;
        assert!(matches!(result, Err(ClientError::Network(_))));
    }

    #[tokio::test]
    async fn list_tasks_success() -> Result<(), ClientError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/tasks");
                then.status(200).body(
                    r#"{"t1": {"description": "buy milk", "completed": true},
                        "t2": {"description": "pay bills", "completed": false}}"#,
                );
            })
            .await;

        let tasks = client(&server).list_tasks().await?;
        let descriptions: Vec<&str> = tasks.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["buy milk", "pay bills"]);
        assert!(tasks.get("t1").unwrap().completed);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn list_tasks_server_error() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/tasks");
                then.status(500).json_body(json!({ "error": "no such file" }));
            })
            .await;

        let result = client(&server).list_tasks().await;
        assert!(matches!(result, Err(ClientError::Http { status: 500 })));
    }

    #[tokio::test]
    async fn clear_tasks_success() -> Result<(), ClientError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/clear-tasks");
                then.status(200)
                    .json_body(json!({ "message": "Tasks cleared successfully!" }));
            })
            .await;

        let response = client(&server).clear_tasks().await?;
        assert_eq!(
            response.message.as_deref(),
            Some("Tasks cleared successfully!")
        );
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn clear_tasks_accepts_any_success_body() -> Result<(), ClientError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/clear-tasks");
                then.status(200)
                    .header("Content-Type", "text/plain")
                    .body("Cleared");
            })
            .await;

        let response = client(&server).clear_tasks().await?;
        assert_eq!(response.message, None);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn clear_tasks_failure() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("POST").path("/clear-tasks");
                then.status(500)
                    .json_body(json!({ "message": "Failed to clear tasks." }));
            })
            .await;

        let result = client(&server).clear_tasks().await;
        assert!(matches!(result, Err(ClientError::Http { status: 500 })));
    }

    #[test]
    fn base_url_trailing_slash() {
        let client = RequestClient::new("http://localhost:5000/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }
}
