//! Review API Client
//!
//! HTTP client for the review service's read-only JSON endpoints.

use crate::api::ReviewApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::{METRICS_ENDPOINT, REVIEWS_ENDPOINT};
use crate::models::{MetricsSummary, ReviewRecord};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct ReviewApiClient {
    client: Client,
    base_url: String,
}

impl ReviewApiClient {
    /// Requests carry no custom headers and no timeout; a hanging server
    /// leaves the affected slot at its previous value.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Ok(Self {
            client: ClientBuilder::new().build()?,
            base_url: base_url.into(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self.client.get(&url).send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl ReviewApi for ReviewApiClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_metrics(&self) -> Result<MetricsSummary, ApiError> {
        self.get_request(METRICS_ENDPOINT).await
    }

    async fn get_reviews(&self) -> Result<Vec<ReviewRecord>, ApiError> {
        self.get_request(REVIEWS_ENDPOINT).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves a single HTTP response on a random local port and returns the base URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });
        format!("http://{}", addr)
    }

    /// Returns a base URL on which nothing is listening.
    async fn closed_port_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    #[test]
    fn test_build_url_joins_without_duplicate_slashes() {
        let client = ReviewApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.build_url("/metrics"), "http://localhost:8000/metrics");
        assert_eq!(client.build_url("reviews"), "http://localhost:8000/reviews");
    }

    #[tokio::test]
    async fn test_get_metrics_decodes_body() {
        let base = serve_once(
            "200 OK",
            r#"{"total_reviews": 124, "issues_found": 45, "avg_review_time": "1.2s"}"#,
        )
        .await;
        let client = ReviewApiClient::new(base).unwrap();

        let metrics = client.get_metrics().await.unwrap();
        assert_eq!(
            metrics,
            MetricsSummary {
                total_reviews: 124,
                issues_found: 45,
                avg_review_time: "1.2s".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_get_reviews_decodes_empty_array() {
        let base = serve_once("200 OK", "[]").await;
        let client = ReviewApiClient::new(base).unwrap();

        let reviews = client.get_reviews().await.unwrap();
        assert!(reviews.is_empty());
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let base = serve_once("200 OK", "<html>not json</html>").await;
        let client = ReviewApiClient::new(base).unwrap();

        let result = client.get_metrics().await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_server_error_is_http_error() {
        let base = serve_once("500 Internal Server Error", r#"{"detail": "boom"}"#).await;
        let client = ReviewApiClient::new(base).unwrap();

        match client.get_reviews().await {
            Err(ApiError::Http { status, message }) => {
                assert_eq!(status, 500);
                assert!(message.contains("boom"));
            }
            other => panic!("expected HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_reqwest_error() {
        let client = ReviewApiClient::new(closed_port_url().await).unwrap();

        let result = client.get_metrics().await;
        assert!(matches!(result, Err(ApiError::Reqwest(_))));
    }
}
