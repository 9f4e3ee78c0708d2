use crate::utils::error::AppError;
use serde::{Deserialize, Serialize};

/// Uniform envelope returned to the rendering layer for every outcome.
///
/// Exactly one of `data`/`error` is populated in well-formed responses.
/// Absent fields are omitted from serialized output rather than emitted as
/// null, so presence of a key signals validity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub status_code: u16,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        create_api_response(Some(data), None, 200)
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Pure envelope constructor for the success path. No logging, no side
/// effects.
pub fn create_api_response<T>(
    data: Option<T>,
    error: Option<String>,
    status_code: u16,
) -> ApiResponse<T> {
    ApiResponse {
        data,
        error,
        status_code,
    }
}

/// Single point that turns a failed operation into a user-facing envelope,
/// so callers never hand-roll status-code logic.
///
/// Classification, in priority order: an `AppError` anywhere in the chain
/// carries its own status code; any other error with a message collapses to
/// 500 with that message; a message-less failure collapses to a generic 500
/// to avoid leaking internals. The original error is logged on every call.
pub fn handle_api_error<T>(error: &anyhow::Error) -> ApiResponse<T> {
    tracing::error!("API error: {:#}", error);

    if let Some(app_error) = error.downcast_ref::<AppError>() {
        return create_api_response(None, Some(app_error.message.clone()), app_error.status_code);
    }

    let message = error.to_string();
    if message.trim().is_empty() {
        return create_api_response(None, Some("Internal Server Error".to_string()), 500);
    }

    create_api_response(None, Some(message), 500)
}
