use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinboardError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API responded with status {status}")]
    StatusError {
        status: u16,
        body: serde_json::Value,
    },

    #[error("Token refresh failed: {source}")]
    RefreshError {
        #[source]
        source: Box<FinboardError>,
    },

    #[error("{message}")]
    AuthError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("{message}")]
    FormError { message: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },
}

impl FinboardError {
    /// HTTP status carried by a rejected response, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            FinboardError::StatusError { status, .. } => Some(*status),
            FinboardError::ApiError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Parsed body of a rejected response, if any.
    pub fn response_body(&self) -> Option<&serde_json::Value> {
        match self {
            FinboardError::StatusError { body, .. } => Some(body),
            FinboardError::RefreshError { source } => source.response_body(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FinboardError::ApiError(_) => "Could not reach the finance API".to_string(),
            FinboardError::StatusError { status, .. } => match status {
                401 => "Your session has expired, please log in again".to_string(),
                403 => "You are not allowed to do that".to_string(),
                404 => "The requested resource was not found".to_string(),
                s if *s >= 500 => "The finance API is having problems".to_string(),
                s => format!("The request was rejected (HTTP {})", s),
            },
            FinboardError::RefreshError { .. } => {
                "Your session has expired, please log in again".to_string()
            }
            FinboardError::AuthError { message } | FinboardError::FormError { message } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FinboardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_and_body_of_rejected_response() {
        let err = FinboardError::StatusError {
            status: 400,
            body: json!({"detail": "bad"}),
        };
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.response_body().unwrap()["detail"], "bad");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_refresh_error_exposes_inner_body() {
        let err = FinboardError::RefreshError {
            source: Box::new(FinboardError::StatusError {
                status: 401,
                body: json!({"detail": "Token is invalid or expired"}),
            }),
        };
        assert_eq!(
            err.response_body().unwrap()["detail"],
            "Token is invalid or expired"
        );
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_auth_error_message_is_passed_through() {
        let err = FinboardError::AuthError {
            message: "already taken".to_string(),
        };
        assert_eq!(err.to_string(), "already taken");
        assert_eq!(err.user_friendly_message(), "already taken");
    }
}
