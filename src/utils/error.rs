use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadgenError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Response decoding error: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Service health check failed with status {status}")]
    ServiceUnavailable { status: u16 },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl LoadgenError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            LoadgenError::HttpError(_) => "Could not reach the search service".to_string(),
            LoadgenError::DecodeError(_) => {
                "The search service returned an unreadable response".to_string()
            }
            LoadgenError::UrlError(_) => "The service URL is not valid".to_string(),
            LoadgenError::ServiceUnavailable { status } => {
                format!("The search service is not healthy (status {})", status)
            }
            LoadgenError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LoadgenError::HttpError(_) => {
                "Check that the service is running and --host points at it"
            }
            LoadgenError::DecodeError(_) => {
                "Verify --host points at the product search service and not another endpoint"
            }
            LoadgenError::UrlError(_) | LoadgenError::InvalidConfigValueError { .. } => {
                "Fix the command-line flags and try again"
            }
            LoadgenError::ServiceUnavailable { .. } => {
                "Wait for the service to come up, or skip the check with --no-health-check"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadgenError>;
