use serde::{Deserialize, Serialize};

/// Query parameters accepted by the token endpoint.
///
/// Both fields are optional on the wire so a request missing either of them can still be parsed
/// and rejected with a structured error instead of an extractor rejection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct TokenRequest {
    /// Name of the room to join.
    pub room: Option<String>,
    /// Identity of the participant, usually a display name.
    pub name: Option<String>,
}

impl TokenRequest {
    pub fn new(room: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            room: Some(room.into()),
            name: Some(name.into()),
        }
    }

    /// Returns `(room, identity)` if both fields are present and non-empty.
    pub fn validate(&self) -> Option<(&str, &str)> {
        match (self.room.as_deref(), self.name.as_deref()) {
            (Some(room), Some(name)) if !room.is_empty() && !name.is_empty() => Some((room, name)),
            _ => None,
        }
    }
}

/// Successful response of the token endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TokenResponse {
    /// Signed access token.
    pub token: String,
}

/// Error body returned by the token endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Human readable error message.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn validate_accepts_non_empty_fields() {
        let request = TokenRequest::new("lobby", "alice");
        assert_eq!(request.validate(), Some(("lobby", "alice")));
    }

    #[test]
    fn validate_rejects_missing_or_empty_fields() {
        let cases = [
            TokenRequest::default(),
            TokenRequest {
                room: Some("lobby".to_string()),
                name: None,
            },
            TokenRequest {
                room: None,
                name: Some("alice".to_string()),
            },
            TokenRequest::new("", "alice"),
            TokenRequest::new("lobby", ""),
            TokenRequest::new("", ""),
        ];

        for request in cases {
            assert_eq!(request.validate(), None, "{request:?}");
        }
    }

    #[test]
    fn validate_keeps_whitespace_as_is() {
        let request = TokenRequest::new(" ", "  bob ");
        assert_eq!(request.validate(), Some((" ", "  bob ")));
    }

    #[test]
    fn serialize_error_response() {
        let serialized =
            serde_json::to_string(&ErrorResponse::new("room and name are required")).unwrap();
        assert_eq!(serialized, "{\"error\":\"room and name are required\"}");
    }

    #[test]
    fn serialize_token_response() {
        let serialized = serde_json::to_string(&TokenResponse {
            token: "abc.def.ghi".to_string(),
        })
        .unwrap();
        assert_eq!(serialized, "{\"token\":\"abc.def.ghi\"}");
    }
}
