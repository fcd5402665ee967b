//! API error taxonomy
//!
//! All three kinds are caught at the submission boundary and turned into a
//! single user-visible notification; none propagate past the app shell.

use thiserror::Error;

/// Fallback text when a failed response carries no `detail` field.
pub const GENERIC_REMOTE_ERROR: &str = "Failed to fetch estimate.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connection, transport)
    #[error("request to the estimation service failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx status; `detail` is the response body's detail text when
    /// present, the generic message otherwise
    #[error("estimation service returned HTTP {status}: {detail}")]
    Remote { status: u16, detail: String },

    /// 2xx response whose body matched neither accepted shape
    #[error("estimation service returned an unrecognized response body")]
    MalformedResponse,
}

impl ApiError {
    /// The text surfaced to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Could not reach the estimation service.".to_string(),
            Self::Remote { detail, .. } => detail.clone(),
            Self::MalformedResponse => GENERIC_REMOTE_ERROR.to_string(),
        }
    }
}
