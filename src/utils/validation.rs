use crate::utils::error::{FinboardError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FinboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FinboardError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FinboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FinboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FinboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(FinboardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FinboardError::ValidationError {
            message: format!("{} is required", field_name),
        });
    }
    Ok(())
}

/// Parses a form amount such as `"12.50"` or `"-3"`.
///
/// A comma is accepted as the decimal separator so that `"12,50"` works too.
pub fn parse_decimal(field_name: &str, value: &str) -> Result<f64> {
    let normalized = value.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(FinboardError::ValidationError {
            message: format!("{} must be a number, got '{}'", field_name, value),
        }),
    }
}

pub fn validate_max_chars(field_name: &str, value: &str, max: usize) -> Result<()> {
    let count = value.chars().count();
    if count > max {
        return Err(FinboardError::ValidationError {
            message: format!(
                "{} must be at most {} characters, got {}",
                field_name, max, count
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://example.com/api").is_ok());
        assert!(validate_url("api.base_url", "http://localhost:8000/api").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("api.timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("api.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("amount", "12.50").unwrap(), 12.5);
        assert_eq!(parse_decimal("amount", " 12,50 ").unwrap(), 12.5);
        assert_eq!(parse_decimal("amount", "-3").unwrap(), -3.0);
        assert!(parse_decimal("amount", "").is_err());
        assert!(parse_decimal("amount", "abc").is_err());
        assert!(parse_decimal("amount", "inf").is_err());
    }

    #[test]
    fn test_validate_max_chars_counts_characters_not_bytes() {
        assert!(validate_max_chars("icon", "📌", 2).is_ok());
        assert!(validate_max_chars("icon", "ab", 2).is_ok());
        assert!(validate_max_chars("icon", "abc", 2).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Wallet").is_ok());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }
}
