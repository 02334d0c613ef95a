use std::future::Future;

use futures::future::{Either, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use crate::domain::{
    balance::{AccountBalance, BalanceRepository},
    errors::{BalanceError, BalanceResult},
    logging::{LogComponent, get_logger},
};
use crate::log_warn;

pub mod dto;

pub use dto::{BalanceResponseDto, parse_balance_response};

pub const DEFAULT_BALANCE_ENDPOINT: &str = "/api/balance";

/// Where and how the balance request is sent
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceClientConfig {
    pub endpoint: String,
    /// Send the chart token as `Authorization: Bearer`. Off until the
    /// endpoint is confirmed to expect it.
    pub forward_token: bool,
    pub timeout_ms: Option<u32>,
}

impl Default for BalanceClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_BALANCE_ENDPOINT.to_string(),
            forward_token: false,
            timeout_ms: None,
        }
    }
}

impl BalanceClientConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_forward_token(mut self, forward_token: bool) -> Self {
        self.forward_token = forward_token;
        self
    }

    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

/// Fully resolved GET request, kept separate from gloo so it can be inspected
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl BalanceRequest {
    pub fn build(config: &BalanceClientConfig, token: &str) -> Self {
        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if config.forward_token && !token.is_empty() {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        Self { url: config.endpoint.clone(), headers }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Race `fetch` against a timer. `None` waits for `fetch` however long it takes.
pub async fn with_timeout<T, F>(fetch: F, timeout_ms: Option<u32>) -> BalanceResult<T>
where
    F: Future<Output = BalanceResult<T>>,
{
    let Some(timeout_ms) = timeout_ms else {
        return fetch.await;
    };
    match select(Box::pin(fetch), Box::pin(TimeoutFuture::new(timeout_ms))).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(BalanceError::Timeout(timeout_ms)),
    }
}

/// Map a completed response to accounts.
///
/// A non-2xx response whose body carries an `error` object reports that
/// payload; any other non-2xx body becomes a status error.
pub fn classify_response(
    ok: bool,
    status: u16,
    status_text: &str,
    body: &str,
) -> BalanceResult<Vec<AccountBalance>> {
    if ok {
        return parse_balance_response(body);
    }
    match parse_balance_response(body) {
        Err(BalanceError::Payload(payload)) => Err(BalanceError::Payload(payload)),
        _ => Err(BalanceError::Status { code: status, text: status_text.to_string() }),
    }
}

/// gloo-net client for the balance endpoint
#[derive(Debug, Clone, Default)]
pub struct BalanceHttpClient {
    config: BalanceClientConfig,
}

impl BalanceHttpClient {
    pub fn new(config: BalanceClientConfig) -> Self {
        Self { config }
    }

    async fn send(request: BalanceRequest) -> BalanceResult<Vec<AccountBalance>> {
        let mut builder = Request::get(&request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| BalanceError::Transport(format!("Failed to send request: {e}")))?;

        let (ok, status) = (response.ok(), response.status());
        if !ok {
            log_warn!(
                LogComponent::Infrastructure("BalanceHttpClient"),
                "⚠️ {} answered {} {}",
                request.url,
                status,
                response.status_text()
            );
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(_) if !ok => String::new(),
            Err(e) => return Err(BalanceError::Decode(format!("Failed to read response: {e}"))),
        };

        classify_response(ok, status, &response.status_text(), &body)
    }
}

impl BalanceRepository for BalanceHttpClient {
    async fn fetch_accounts(&self, token: &str) -> BalanceResult<Vec<AccountBalance>> {
        let request = BalanceRequest::build(&self.config, token);

        get_logger().debug(
            LogComponent::Infrastructure("BalanceHttpClient"),
            &format!("🌐 GET: {}", request.url),
        );

        let result = with_timeout(Self::send(request), self.config.timeout_ms).await;

        if let Ok(accounts) = &result {
            get_logger().debug(
                LogComponent::Infrastructure("BalanceHttpClient"),
                &format!("✅ Received {} accounts", accounts.len()),
            );
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_targets_balance_endpoint() {
        let request = BalanceRequest::build(&BalanceClientConfig::default(), "tok");
        assert_eq!(request.url, "/api/balance");
        assert_eq!(request.header("authorization"), None);
    }

    #[test]
    fn forwarding_adds_bearer_header() {
        let config = BalanceClientConfig::default().with_forward_token(true);
        let request = BalanceRequest::build(&config, "tok");
        assert_eq!(request.header("Authorization"), Some("Bearer tok"));
    }

    #[test]
    fn forwarding_skips_empty_token() {
        let config = BalanceClientConfig::default().with_forward_token(true);
        assert_eq!(BalanceRequest::build(&config, "").header("Authorization"), None);
    }

    #[test]
    fn failed_status_without_payload_reports_status() {
        let err = classify_response(false, 503, "Service Unavailable", "<html>down</html>").unwrap_err();
        assert_eq!(err, BalanceError::Status { code: 503, text: "Service Unavailable".to_string() });
    }

    #[test]
    fn failed_status_keeps_error_payload() {
        let body = r#"{"error":{"error_message":"login required"}}"#;
        let err = classify_response(false, 400, "Bad Request", body).unwrap_err();
        assert_eq!(err.kind(), "payload");
        assert!(err.to_string().contains("login required"));
    }

    #[test]
    fn failed_status_with_accounts_is_still_a_status_error() {
        let body = r#"{"accounts":[{"name":"A","balances":{"current":1}}]}"#;
        assert_eq!(classify_response(false, 500, "", body).unwrap_err().kind(), "status");
    }
}
