#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// The target could not be turned into a valid request. Reported
    /// before any network call is made.
    #[error("failed to construct request: {0}")]
    RequestConstruction(String),

    /// Any failure from the underlying network call (DNS, connection
    /// refused, TLS, transport-level timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body serialization or response decoding failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_error_display() {
        let err = RestError::RequestConstruction("invalid URL 'nope'".to_string());
        assert_eq!(err.to_string(), "failed to construct request: invalid URL 'nope'");
    }

    #[test]
    fn serialization_error_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: RestError = json_err.into();
        assert!(matches!(err, RestError::Serialization(_)));
        assert!(err.to_string().starts_with("serialization error:"));
    }
}
