use thiserror::Error;

/// Application error carrying the HTTP status code the caller should see.
///
/// `is_operational` distinguishes anticipated failures (bad input, missing
/// resources) from programming defects. Classification at the API boundary
/// happens by downcast, not by matching on a concrete error chain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AppError {
    pub message: String,
    pub status_code: u16,
    pub is_operational: bool,
}

impl AppError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: 500,
            is_operational: true,
        }
    }

    pub fn with_status(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code,
            is_operational: true,
        }
    }

    pub fn non_operational(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code,
            is_operational: false,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Awaits a fallible operation and logs any failure at this boundary before
/// handing the identical error back to the caller. No masking, no retry.
pub async fn with_error_logging<T, F>(context: &str, fut: F) -> anyhow::Result<T>
where
    F: std::future::Future<Output = anyhow::Result<T>>,
{
    match fut.await {
        Ok(value) => Ok(value),
        Err(error) => {
            tracing::error!("Error in async operation `{}`: {:#}", context, error);
            Err(error)
        }
    }
}
