//! Error types for the API client.

/// Errors that can occur when calling the 17track API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Rejected locally before any request was sent (oversized batch, empty
    /// API key, unusable host).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The HTTP call failed: network error, non-success status, or a body
    /// that could not be parsed. Carries the underlying error message.
    #[error("Call failed: {0}")]
    Call(String),
    /// A single-number info lookup came back with nothing accepted.
    #[error("No accepted tracking record for {number}")]
    NotFound { number: String },
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn error_display() {
        let err = Error::InvalidArgument("batch of 41 items exceeds the limit of 40".to_string());
        assert!(err.to_string().contains("Invalid argument"));
        assert!(err.to_string().contains("41"));

        let err = Error::Call("connection refused".to_string());
        assert_eq!(err.to_string(), "Call failed: connection refused");

        let err = Error::NotFound {
            number: "RA123".to_string(),
        };
        assert!(err.to_string().contains("RA123"));
    }
}
