//! HTTP client for the estimation endpoint
//!
//! One JSON POST per submission. Non-2xx responses are parsed for a
//! `detail` field to surface verbatim; a 2xx body that does not match the
//! expected shape is reported as malformed rather than crashing.

use super::{ApiError, EstimateRequest, EstimateResponse, EstimatorClient, GENERIC_REMOTE_ERROR};
use async_trait::async_trait;

/// Default estimation endpoint
pub const DEFAULT_ENDPOINT: &str = "https://167aliraza-construction-planer.hf.space/estimate";

/// Environment variable overriding the endpoint (takes precedence over the
/// config file)
pub const ENDPOINT_ENV_VAR: &str = "TAMEER_ENDPOINT";

/// Client for the remote estimation service
pub struct HttpEstimatorClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpEstimatorClient {
    /// Create a new client. Endpoint resolution order: environment
    /// variable, config override, built-in default.
    pub fn new(endpoint_override: Option<String>) -> Self {
        let endpoint = std::env::var(ENDPOINT_ENV_VAR)
            .ok()
            .or(endpoint_override)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EstimatorClient for HttpEstimatorClient {
    async fn fetch_estimate(
        &self,
        request: &EstimateRequest,
    ) -> Result<EstimateResponse, ApiError> {
        tracing::debug!(endpoint = %self.endpoint, "submitting estimate request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .ok()
                .and_then(|body| serde_json::from_str::<serde_json::Value>(&body).ok())
                .and_then(|value| {
                    value
                        .get("detail")
                        .and_then(|d| d.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| GENERIC_REMOTE_ERROR.to_string());
            tracing::warn!(status = status.as_u16(), %detail, "estimate request rejected");
            return Err(ApiError::Remote {
                status: status.as_u16(),
                detail,
            });
        }

        response.json::<EstimateResponse>().await.map_err(|err| {
            tracing::error!(%err, "estimate response did not match either accepted shape");
            ApiError::MalformedResponse
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::validate;
    use crate::state::EstimateForm;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[test]
    fn test_default_endpoint_when_no_override() {
        // Endpoint resolution only; no request is made.
        std::env::remove_var(ENDPOINT_ENV_VAR);
        let client = HttpEstimatorClient::new(None);
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_config_override_is_used() {
        std::env::remove_var(ENDPOINT_ENV_VAR);
        let client = HttpEstimatorClient::new(Some("http://localhost:8080/estimate".to_string()));
        assert_eq!(client.endpoint(), "http://localhost:8080/estimate");
    }

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    /// Serve one canned HTTP response on an ephemeral port and return the
    /// endpoint URL.
    async fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            // Read the full request (headers plus Content-Length body)
            // before answering.
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if let Some(end) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    let headers = String::from_utf8_lossy(&request[..end]);
                    let content_length = headers
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            if name.eq_ignore_ascii_case("content-length") {
                                value.trim().parse::<usize>().ok()
                            } else {
                                None
                            }
                        })
                        .unwrap_or(0);
                    if request.len() >= end + 4 + content_length {
                        break;
                    }
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{addr}/estimate")
    }

    fn sample_request() -> EstimateRequest {
        let validated = validate(&EstimateForm::new()).unwrap();
        EstimateRequest::from(&validated)
    }

    #[tokio::test]
    async fn test_non_2xx_detail_is_surfaced() {
        let endpoint =
            serve_once(http_response("422 Unprocessable Entity", r#"{"detail":"Invalid city"}"#))
                .await;
        let client = HttpEstimatorClient::new(Some(endpoint));

        let err = client.fetch_estimate(&sample_request()).await.unwrap_err();
        match err {
            ApiError::Remote { status, detail } => {
                assert_eq!(status, 422);
                assert_eq!(detail, "Invalid city");
            }
            other => panic!("expected Remote error, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_non_2xx_without_detail_uses_generic_text() {
        let endpoint = serve_once(http_response("500 Internal Server Error", "{}")).await;
        let client = HttpEstimatorClient::new(Some(endpoint));

        let err = client.fetch_estimate(&sample_request()).await.unwrap_err();
        match err {
            ApiError::Remote { status, detail } => {
                assert_eq!(status, 500);
                assert_eq!(detail, GENERIC_REMOTE_ERROR);
            }
            other => panic!("expected Remote error, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_2xx_unrecognized_body_is_malformed() {
        let endpoint = serve_once(http_response("200 OK", r#"{"unexpected":true}"#)).await;
        let client = HttpEstimatorClient::new(Some(endpoint));

        let err = client.fetch_estimate(&sample_request()).await.unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse));
    }

    #[tokio::test]
    async fn test_2xx_valid_body_parses() {
        let body = r#"{
            "result": {
                "cost": {
                    "covered_sqft": 1125.0,
                    "grey_cost": 2500000.0,
                    "finishing_cost": 1800000.0,
                    "total_cost": 4300000.0,
                    "city_factor": 0.97
                },
                "materials": {"Bricks (units)": 45000},
                "plan": {"Kitchen": 80},
                "designs": []
            }
        }"#;
        let endpoint = serve_once(http_response("200 OK", body)).await;
        let client = HttpEstimatorClient::new(Some(endpoint));

        let response = client.fetch_estimate(&sample_request()).await.unwrap();
        assert_eq!(response.result.cost.total_cost, 4300000.0);
        assert_eq!(
            response.result.materials.get("Bricks (units)"),
            Some(&45000.0)
        );
    }
}
