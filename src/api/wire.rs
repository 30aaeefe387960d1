use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub email_text: &'a str,
}

pub fn build_request(email_text: &str) -> PredictRequest<'_> {
    PredictRequest { email_text }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Pulls a readable message out of an error body. `detail` is either a plain
/// string or a list of validation entries each carrying a `msg`.
pub fn parse_error_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.detail? {
        Value::String(detail) => Some(detail),
        Value::Array(entries) => {
            let messages: Vec<String> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .map(str::to_string)
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_uses_email_text_key() {
        let body = serde_json::to_string(&build_request("hello")).unwrap();
        assert_eq!(body, r#"{"email_text":"hello"}"#);
    }

    #[test]
    fn string_detail_is_returned_verbatim() {
        assert_eq!(
            parse_error_detail(br#"{"detail":"Model not loaded"}"#).as_deref(),
            Some("Model not loaded")
        );
    }

    #[test]
    fn validation_detail_list_is_joined() {
        let body = br#"{"detail":[
            {"loc":["body","email_text"],"msg":"String should have at most 10000 characters","type":"string_too_long"},
            {"loc":["body"],"msg":"second problem","type":"x"}
        ]}"#;
        assert_eq!(
            parse_error_detail(body).as_deref(),
            Some("String should have at most 10000 characters; second problem")
        );
    }

    #[test]
    fn missing_or_unparseable_detail_is_none() {
        assert_eq!(parse_error_detail(br#"{"error":"nope"}"#), None);
        assert_eq!(parse_error_detail(br#"{"detail":null}"#), None);
        assert_eq!(parse_error_detail(b"<html>502 Bad Gateway</html>"), None);
    }
}
