// Remote Call Gateway
// Issues classify/filter calls against the zero-shot service over HTTP.

use std::env;
use std::time::{Duration, Instant};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{
    ApiErrorBody, ClassifyRequest, ClassifyResponse, FilterRequest, FilterResponse,
    HealthResponse,
};
use crate::services::ConfigStore;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Hard client-side budget for one call; reqwest cancels the in-flight
/// request when it elapses.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Classify,
    Filter,
    Health,
}

impl Operation {
    pub fn path(&self) -> &'static str {
        match self {
            Operation::Classify => "/api/classify",
            Operation::Filter => "/api/filter",
            Operation::Health => "/",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Classify => "classify",
            Operation::Filter => "filter",
            Operation::Health => "health",
        }
    }

    /// Fallback message when the service gives no structured explanation.
    pub fn generic_message(&self) -> &'static str {
        match self {
            Operation::Classify => "Sınıflandırma başarısız oldu",
            Operation::Filter => "İçerik filtreleme başarısız oldu",
            Operation::Health => "Servis bağlantı testi başarısız oldu",
        }
    }
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("İstek zaman aşımına uğradı. Lütfen daha az metin ile tekrar deneyin.")]
    Timeout,
    /// Non-2xx response with a structured `detail` field, surfaced verbatim.
    #[error("{detail}")]
    Service { status: u16, detail: String },
    /// Non-2xx response without a usable explanation.
    #[error("{}", .operation.generic_message())]
    ServiceGeneric { status: u16, operation: Operation },
    #[error("HTTP request failed: {0}")]
    Transport(reqwest::Error),
    #[error("JSON parse error: {0}")]
    Decode(String),
}

/// HTTP client for the zero-shot classification/filtering service.
///
/// One invocation issues exactly one network call; there is no automatic
/// retry. Overlapping calls are not deduplicated here — keeping a single
/// call outstanding per session is the caller's responsibility (the session
/// layer enforces it with an in-flight flag).
pub struct ServiceClient {
    client: Client,
    base_url: String,
}

impl Default for ServiceClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceClient {
    /// Client against the configured base URL with the full request budget.
    pub fn new() -> Self {
        Self::with_base_url(resolve_base_url(), REQUEST_TIMEOUT)
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn classify(
        &self,
        request: &ClassifyRequest,
    ) -> Result<ClassifyResponse, GatewayError> {
        info!(
            texts = request.texts.len(),
            categories = request.categories.len(),
            "classify.start"
        );
        self.post_json(Operation::Classify, request).await
    }

    pub async fn filter(
        &self,
        request: &FilterRequest,
    ) -> Result<FilterResponse, GatewayError> {
        info!(
            texts = request.texts.len(),
            filters = request.filters.len(),
            "filter.start"
        );
        self.post_json(Operation::Filter, request).await
    }

    /// Probe the service root; the service answers `{ status, service }`.
    pub async fn health(&self) -> Result<HealthResponse, GatewayError> {
        let url = self.url_for(Operation::Health);
        self.execute(Operation::Health, self.client.get(url)).await
    }

    async fn post_json<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        operation: Operation,
        request: &Req,
    ) -> Result<Resp, GatewayError> {
        let url = self.url_for(operation);
        self.execute(operation, self.client.post(url).json(request))
            .await
    }

    fn url_for(&self, operation: Operation) -> String {
        format!("{}{}", self.base_url, operation.path())
    }

    async fn execute<Resp: DeserializeOwned>(
        &self,
        operation: Operation,
        builder: reqwest::RequestBuilder,
    ) -> Result<Resp, GatewayError> {
        let request_id = Uuid::new_v4();
        let start = Instant::now();
        info!(request_id = %request_id, operation = operation.name(), "service.request");

        let response = builder.send().await.map_err(map_send_error)?;
        let latency_ms = start.elapsed().as_millis() as i64;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                request_id = %request_id,
                status = status.as_u16(),
                latency_ms,
                "service.error_response"
            );
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail)
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty());
            return Err(match detail {
                Some(detail) => GatewayError::Service {
                    status: status.as_u16(),
                    detail,
                },
                None => GatewayError::ServiceGeneric {
                    status: status.as_u16(),
                    operation,
                },
            });
        }

        let body = response.text().await.map_err(map_send_error)?;
        info!(
            request_id = %request_id,
            status = status.as_u16(),
            latency_ms,
            "service.response"
        );
        serde_json::from_str(&body).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

fn map_send_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Transport(err)
    }
}

/// Base URL resolution order: environment, config file, local default.
fn resolve_base_url() -> String {
    if let Ok(url) = env::var("METINAI_API_URL") {
        let trimmed = url.trim();
        if !trimmed.is_empty() {
            return trimmed.trim_end_matches('/').to_string();
        }
    }

    if let Some(config_dir) = ConfigStore::default_config_dir() {
        let store = ConfigStore::new(config_dir);
        if let Ok(Some(url)) = store.get_api_url() {
            let trimmed = url.trim();
            if !trimmed.is_empty() {
                return trimmed.trim_end_matches('/').to_string();
            }
        }
    }

    DEFAULT_BASE_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn classify_request() -> ClassifyRequest {
        ClassifyRequest {
            texts: vec!["Kargom gelmedi".to_string()],
            categories: vec!["Lojistik".to_string(), "Destek".to_string()],
        }
    }

    fn serve_once(status_line: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 8192];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}", addr)
    }

    fn test_client(url: String) -> ServiceClient {
        ServiceClient::with_base_url(url, Duration::from_secs(5))
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ServiceClient::with_base_url("http://localhost:8000/", REQUEST_TIMEOUT);
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[tokio::test]
    async fn test_classify_parses_results_in_order() {
        let body = r#"{"results":[{"text":"Kargom gelmedi","category":"Lojistik","similarity_score":0.8123}]}"#;
        let client = test_client(serve_once("200 OK", body));
        let response = client.classify(&classify_request()).await.unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].category, "Lojistik");
        assert!((response.results[0].similarity_score - 0.8123).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_filter_parses_matches() {
        let body = r#"{"results":[{"text":"x","is_flagged":true,"matches":[{"filter_name":"Küfür","score":0.61,"matched":true}]}]}"#;
        let client = test_client(serve_once("200 OK", body));
        let request = FilterRequest {
            texts: vec!["x".to_string()],
            filters: vec!["Küfür".to_string()],
        };
        let response = client.filter(&request).await.unwrap();
        assert!(response.results[0].is_flagged);
        assert_eq!(response.results[0].matches[0].filter_name, "Küfür");
    }

    #[tokio::test]
    async fn test_service_detail_surfaced_verbatim() {
        let body = r#"{"detail":"Embedding alınırken hata oluştu"}"#;
        let client = test_client(serve_once("500 Internal Server Error", body));
        let err = client.classify(&classify_request()).await.unwrap_err();
        match &err {
            GatewayError::Service { status, detail } => {
                assert_eq!(*status, 500);
                assert_eq!(detail, "Embedding alınırken hata oluştu");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.to_string(), "Embedding alınırken hata oluştu");
    }

    #[tokio::test]
    async fn test_generic_message_without_detail() {
        let client = test_client(serve_once("502 Bad Gateway", "upstream down"));
        let err = client.classify(&classify_request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::ServiceGeneric { .. }));
        assert_eq!(err.to_string(), "Sınıflandırma başarısız oldu");
    }

    #[tokio::test]
    async fn test_filter_generic_message_is_distinct() {
        let client = test_client(serve_once("500 Internal Server Error", "{}"));
        let request = FilterRequest {
            texts: vec!["x".to_string()],
            filters: vec!["y".to_string()],
        };
        let err = client.filter(&request).await.unwrap_err();
        assert_eq!(err.to_string(), "İçerik filtreleme başarısız oldu");
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let client = test_client(serve_once("200 OK", r#"{"unexpected":true}"#));
        let err = client.classify(&classify_request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_distinct_from_transport() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                thread::sleep(Duration::from_secs(2));
            }
        });
        let client =
            ServiceClient::with_base_url(format!("http://{}", addr), Duration::from_millis(200));
        let err = client.classify(&classify_request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Timeout));
        assert_eq!(
            err.to_string(),
            "İstek zaman aşımına uğradı. Lütfen daha az metin ile tekrar deneyin."
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = test_client(format!("http://{}", addr));
        let err = client.classify(&classify_request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }

    #[tokio::test]
    async fn test_health_probe() {
        let body = r#"{"status":"ok","service":"Zero-Shot Sınıflandırma API"}"#;
        let client = test_client(serve_once("200 OK", body));
        let health = client.health().await.unwrap();
        assert_eq!(health.status, "ok");
    }
}
