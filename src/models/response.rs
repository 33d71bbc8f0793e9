//! API response data model.

/// A response received from the server: status code plus raw body.
///
/// Produced by the executor's transport layer; the body stays `Vec<u8>` until
/// the outcome layer decides whether to decode it strictly (success path) or
/// permissively (diagnostics).
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code (e.g., 200, 404, 500).
    pub status_code: u16,

    /// Response body as raw bytes.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Creates a new response from a status code and body bytes.
    pub fn new(status_code: u16, body: Vec<u8>) -> Self {
        Self { status_code, body }
    }

    /// Checks if the response status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Attempts to decode the response body as UTF-8 text.
    pub fn body_as_string(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.clone())
    }

    /// Decodes the response body permissively, replacing undecodable bytes.
    ///
    /// Used for diagnostic output where a lossy rendering beats no rendering.
    pub fn body_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(ApiResponse::new(200, Vec::new()).is_success());
        assert!(ApiResponse::new(201, Vec::new()).is_success());
        assert!(ApiResponse::new(299, Vec::new()).is_success());
        assert!(!ApiResponse::new(301, Vec::new()).is_success());
        assert!(!ApiResponse::new(404, Vec::new()).is_success());
        assert!(!ApiResponse::new(500, Vec::new()).is_success());
    }

    #[test]
    fn test_body_as_string() {
        let response = ApiResponse::new(200, b"{\"acknowledged\":true}".to_vec());
        assert_eq!(response.body_as_string().unwrap(), "{\"acknowledged\":true}");

        let invalid = ApiResponse::new(200, vec![0xFF, 0xFE, 0xFD]);
        assert!(invalid.body_as_string().is_err());
    }

    #[test]
    fn test_body_lossy_replaces_invalid_bytes() {
        let response = ApiResponse::new(500, vec![b'o', b'k', 0xFF]);
        let text = response.body_lossy();
        assert!(text.starts_with("ok"));
        assert!(text.contains('\u{FFFD}'));
    }
}
