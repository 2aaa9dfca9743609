//! Request client error types.

/// Errors that can occur while talking to the assistant backend.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (connection, DNS, timeout)
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint checks status and the response was not 2xx
    #[error("Request failed with status {status}")]
    Http { status: u16 },

    /// The response body was not JSON of the expected shape
    #[error("Failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_display() {
        let error = ClientError::Http { status: 503 };
        assert_eq!(error.to_string(), "Request failed with status 503");

        let parse = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error: ClientError = parse.into();
        assert!(matches!(error, ClientError::Parse(_)));
        assert!(error.to_string().contains("Failed to parse response body"));
    }
}
