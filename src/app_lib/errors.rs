use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request failed ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Http {
        status: u16,
        message: Option<String>,
    },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Message supplied by the server in a non-success response body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Http {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn server_message_only_for_http_errors_with_body() {
        let with_body = AppError::Http {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        };
        let without_body = AppError::Http {
            status: 500,
            message: None,
        };

        assert_eq!(with_body.server_message(), Some("Invalid credentials"));
        assert_eq!(without_body.server_message(), None);
        assert_eq!(
            AppError::Network("offline".to_string()).server_message(),
            None
        );
    }

    #[test]
    fn display_includes_status_and_details() {
        let err = AppError::Http {
            status: 503,
            message: None,
        };
        assert_eq!(err.to_string(), "Request failed (503): no details");
    }
}
