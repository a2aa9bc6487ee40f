use thiserror::Error;

/// Main error type for the trip planner
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Quota exceeded: {0}")]
    Quota(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Timeout error: {0}")]
    Timeout(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            PlannerError::Http(err) => err.is_timeout() || err.is_connect(),
            PlannerError::Quota(_) => true,
            PlannerError::Timeout(_) => true,
            _ => false,
        }
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::Http(_) => "HTTP_ERROR",
            PlannerError::Gateway(_) => "GATEWAY_ERROR",
            PlannerError::Quota(_) => "QUOTA_EXCEEDED",
            PlannerError::NotFound(_) => "NOT_FOUND",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::Validation(_) => "VALIDATION_ERROR",
            PlannerError::Timeout(_) => "TIMEOUT_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "retryable": self.is_retryable()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_is_retryable_validation_is_not() {
        assert!(PlannerError::Quota("OVER_QUERY_LIMIT".into()).is_retryable());
        assert!(!PlannerError::Validation("bad".into()).is_retryable());
    }

    #[test]
    fn payload_carries_code_and_message() {
        let payload = PlannerError::NotFound("Atlantis".into()).to_error_payload();
        assert_eq!(payload["error"]["code"], "NOT_FOUND");
        assert_eq!(payload["error"]["message"], "Not found: Atlantis");
        assert_eq!(payload["error"]["retryable"], false);
    }
}
