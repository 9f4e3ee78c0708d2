pub mod error;
pub mod logger;
pub mod validation;

/// Parses JSON, falling back to the supplied value on any parse failure.
pub fn safe_json_parse<T: serde::de::DeserializeOwned>(json: &str, fallback: T) -> T {
    serde_json::from_str(json).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_json_parse_valid_input() {
        let parsed: Vec<u32> = safe_json_parse("[1,2,3]", vec![]);
        assert_eq!(parsed, vec![1, 2, 3]);
    }

    #[test]
    fn test_safe_json_parse_falls_back_on_garbage() {
        let parsed: Vec<u32> = safe_json_parse("not json", vec![9]);
        assert_eq!(parsed, vec![9]);
    }
}
