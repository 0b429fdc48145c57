use serde::{Deserialize, Serialize};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_DISPOSITION: &str = "Content-Disposition";

/// Media type sent with a generated script. Clients key on it.
pub const SCRIPT_MEDIA_TYPE: &str = "model/stl";
pub const SCRIPT_DISPOSITION: &str = "attachment;filename=output.stl";
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// JSON body of a failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Transport-neutral response record.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl UploadResponse {
    /// `200` carrying a generated script as an attachment.
    pub fn script(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            headers: vec![
                (CONTENT_TYPE.to_string(), SCRIPT_MEDIA_TYPE.to_string()),
                (CONTENT_DISPOSITION.to_string(), SCRIPT_DISPOSITION.to_string()),
            ],
            body,
        }
    }

    /// `500` with `{"error": message}`.
    pub fn error(message: impl Into<String>) -> Self {
        let body = ErrorBody {
            error: message.into(),
        };
        let json = serde_json::to_vec(&body)
            .unwrap_or_else(|_| br#"{"error":"internal error"}"#.to_vec());
        Self {
            status: 500,
            headers: vec![(CONTENT_TYPE.to_string(), JSON_MEDIA_TYPE.to_string())],
            body: json,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First header value with a case-insensitive name match.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Parse the body of an error response.
    pub fn error_body(&self) -> Option<ErrorBody> {
        serde_json::from_slice(&self.body).ok()
    }
}
