use derive_more::Display;
use serde_json::Value;

/// Application-level error object returned inside an otherwise successful response.
///
/// The endpoint does not document its shape, so the raw JSON is kept and only
/// a best-effort message is extracted for logs.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorPayload(Value);

impl ErrorPayload {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// `error_message`, then `message`, then the value itself if it is a string.
    pub fn message(&self) -> Option<&str> {
        match &self.0 {
            Value::String(message) => Some(message),
            Value::Object(fields) => ["error_message", "message"]
                .iter()
                .find_map(|key| fields.get(*key).and_then(Value::as_str)),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(message) => write!(f, "{}", message),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Everything that can stop the balance chart from loading
#[derive(Debug, Clone, PartialEq, Display)]
pub enum BalanceError {
    #[display(fmt = "Network Error: {}", _0)]
    Transport(String),
    #[display(fmt = "HTTP error: {} - {}", code, text)]
    Status { code: u16, text: String },
    #[display(fmt = "Decode Error: {}", _0)]
    Decode(String),
    #[display(fmt = "Endpoint Error: {}", _0)]
    Payload(ErrorPayload),
    #[display(fmt = "Timed out after {} ms", _0)]
    Timeout(u32),
}

impl std::error::Error for BalanceError {}

impl BalanceError {
    /// Short tag for log lines and test assertions
    pub fn kind(&self) -> &'static str {
        match self {
            BalanceError::Transport(_) => "transport",
            BalanceError::Status { .. } => "status",
            BalanceError::Decode(_) => "decode",
            BalanceError::Payload(_) => "payload",
            BalanceError::Timeout(_) => "timeout",
        }
    }
}

pub type BalanceResult<T> = Result<T, BalanceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_message_prefers_error_message() {
        let payload = ErrorPayload::new(json!({ "error_message": "ITEM_LOGIN_REQUIRED", "message": "other" }));
        assert_eq!(payload.message(), Some("ITEM_LOGIN_REQUIRED"));
    }

    #[test]
    fn payload_without_message_displays_raw_json() {
        let payload = ErrorPayload::new(json!({ "code": 7 }));
        assert_eq!(payload.message(), None);
        assert_eq!(BalanceError::Payload(payload).to_string(), "Endpoint Error: {\"code\":7}");
    }
}
