use crate::utils::error::{MetricsError, Result};
use regex::Regex;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(MetricsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(MetricsError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(MetricsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Published sheet ids are the token between `/d/e/` and `/pubhtml` in the
/// sheet's publish URL: letters, digits, `-` and `_` only.
pub fn validate_sheet_id(field_name: &str, sheet_id: &str) -> Result<()> {
    if sheet_id.trim().is_empty() {
        return Err(MetricsError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    let pattern = Regex::new(r"^[A-Za-z0-9_-]+$").expect("sheet id pattern is valid");
    if !pattern.is_match(sheet_id) {
        return Err(MetricsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: sheet_id.to_string(),
            reason: "Sheet id may only contain letters, digits, '-' and '_'".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MetricsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MetricsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(MetricsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("export_base_url", "https://docs.google.com").is_ok());
        assert!(validate_url("export_base_url", "http://localhost:8080").is_ok());
        assert!(validate_url("export_base_url", "").is_err());
        assert!(validate_url("export_base_url", "not-a-url").is_err());
        assert!(validate_url("export_base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_sheet_id() {
        assert!(validate_sheet_id("sheet_id", "2PACX-1vT0aBcD_ef").is_ok());
        assert!(validate_sheet_id("sheet_id", "").is_err());
        assert!(validate_sheet_id("sheet_id", "   ").is_err());
        assert!(validate_sheet_id("sheet_id", "has spaces").is_err());
        assert!(validate_sheet_id("sheet_id", "slash/id").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("timeout_secs", 10u64, 1, 300).is_ok());
        assert!(validate_range("timeout_secs", 0u64, 1, 300).is_err());
        assert!(validate_range("timeout_secs", 301u64, 1, 300).is_err());
    }
}
