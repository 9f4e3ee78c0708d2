use crate::utils::error::{AppError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks `data` against an opaque shape predicate. On failure the caller
/// gets the canonical 400 rejection; on success the data passes through
/// unchanged.
pub fn validate_request<T>(data: T, is_valid: impl FnOnce(&T) -> bool) -> Result<T> {
    if is_valid(&data) {
        Ok(data)
    } else {
        Err(AppError::with_status("Invalid request data", 400))
    }
}

pub fn validate_required(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::with_status(
            format!("The {} field is required", field_name),
            400,
        ));
    }
    Ok(())
}

pub fn validate_string_length(
    field_name: &str,
    value: &str,
    min_length: usize,
    max_length: usize,
) -> Result<()> {
    let length = value.chars().count();
    if length < min_length || length > max_length {
        return Err(AppError::with_status(
            format!(
                "The {} field must be between {} and {} characters",
                field_name, min_length, max_length
            ),
            400,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_request_passes_valid_data_through() {
        let data = vec![1, 2, 3];
        let validated = validate_request(data.clone(), |d| !d.is_empty()).unwrap();
        assert_eq!(validated, data);
    }

    #[test]
    fn test_validate_request_rejects_with_400() {
        let error = validate_request((), |_| false).unwrap_err();
        assert_eq!(error.message, "Invalid request data");
        assert_eq!(error.status_code, 400);
        assert!(error.is_operational);
    }

    #[test]
    fn test_validate_required() {
        assert!(validate_required("title", "Mi Canción").is_ok());
        assert!(validate_required("title", "").is_err());
        assert!(validate_required("title", "   ").is_err());
    }

    #[test]
    fn test_validate_string_length() {
        assert!(validate_string_length("title", "abc", 1, 10).is_ok());
        assert!(validate_string_length("title", "", 1, 10).is_err());
        assert!(validate_string_length("title", "abcdefghijk", 1, 10).is_err());
        // counts characters, not bytes
        assert!(validate_string_length("title", "canción", 1, 7).is_ok());
    }
}
