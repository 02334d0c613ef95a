use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{
    balance::AccountBalance,
    errors::{BalanceError, BalanceResult, ErrorPayload},
};

/// DTO for the `accounts` part of the `/api/balance` response body
#[derive(Debug, Deserialize)]
pub struct BalanceResponseDto {
    #[serde(default)]
    pub accounts: Vec<AccountBalance>,
}

/// Non-null `error` field of a response object, if any
pub fn error_payload(object: &Map<String, Value>) -> Option<ErrorPayload> {
    object
        .get("error")
        .filter(|error| !error.is_null())
        .map(|error| ErrorPayload::new(error.clone()))
}

/// Parse a response body into account records.
///
/// Only a JSON object is accepted. Its `error` field is checked before
/// `accounts` is decoded, so a malformed accounts array next to an error
/// payload still reports the payload.
pub fn parse_balance_response(body: &str) -> BalanceResult<Vec<AccountBalance>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| BalanceError::Decode(format!("Failed to parse JSON: {e}")))?;

    let Value::Object(object) = value else {
        return Err(BalanceError::Decode("Response is not a JSON object".to_string()));
    };

    if let Some(payload) = error_payload(&object) {
        return Err(BalanceError::Payload(payload));
    }

    let dto: BalanceResponseDto = serde_json::from_value(Value::Object(object))
        .map_err(|e| BalanceError::Decode(format!("Unexpected balance shape: {e}")))?;
    Ok(dto.accounts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_unknown_fields() {
        let body = r#"{"accounts":[{"name":"Checking","account_id":"x","balances":{"current":12.5,"available":10}}],"item":{}}"#;
        let accounts = parse_balance_response(body).unwrap();
        assert_eq!(accounts, vec![AccountBalance::new("Checking", 12.5)]);
    }

    #[test]
    fn error_beats_malformed_accounts() {
        let body = r#"{"accounts":"nope","error":{"message":"x"}}"#;
        let err = parse_balance_response(body).unwrap_err();
        assert_eq!(err.kind(), "payload");
    }

    #[test]
    fn positional_array_is_not_a_response() {
        let body = r#"[[{"name":"x","balances":{"current":1}}],null]"#;
        assert_eq!(parse_balance_response(body).unwrap_err().kind(), "decode");
    }
}
