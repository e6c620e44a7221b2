//! Standardized error handling for registry HTTP calls

use crate::error::SyncError;
use reqwest::StatusCode;

/// Network error categorization and handling
pub struct NetworkErrorHandler;

impl NetworkErrorHandler {
    /// Categorize and format network errors with helpful context
    pub fn handle_network_error(error: &reqwest::Error, context: &str) -> SyncError {
        if error.is_timeout() {
            SyncError::Timeout(format!("{} timeout: {}", context, error))
        } else if error.is_connect() {
            SyncError::Network(format!("Connection error during {}: {}", context, error))
        } else if error.to_string().contains("dns") {
            SyncError::Network(format!("DNS resolution error for {}: {}", context, error))
        } else {
            SyncError::Network(format!("{} network error: {}", context, error))
        }
    }
}

/// Registry response helpers
pub struct HttpErrorHandler;

impl HttpErrorHandler {
    /// Human description of a non-success status, used as a log hint before
    /// the body is decoded anyway
    pub fn describe_status(status: StatusCode, operation: &str) -> String {
        match status.as_u16() {
            401 => format!("Unauthorized to perform {} (status 401)", operation),
            403 => format!("Forbidden: insufficient permissions for {} (status 403)", operation),
            404 => format!("Resource not found for {} (status 404)", operation),
            429 => format!("Rate limited during {} (status 429)", operation),
            500 => format!("Registry server error during {} (status 500)", operation),
            502 | 503 => format!("Registry unavailable for {} (status {})", operation, status.as_u16()),
            _ => format!("{} returned status {}", operation, status),
        }
    }

    /// Error for a body that carries no usable listing
    pub fn missing_field(field: &str, operation: &str, url: &str) -> SyncError {
        SyncError::Discovery(format!(
            "Failed to fetch {}: response from {} has no '{}' field",
            operation, url, field
        ))
    }

    /// Error for a body that is not JSON at all
    pub fn undecodable(operation: &str, url: &str, err: &serde_json::Error) -> SyncError {
        SyncError::Discovery(format!(
            "Failed to fetch {}: response from {} is not valid JSON: {}",
            operation, url, err
        ))
    }
}
