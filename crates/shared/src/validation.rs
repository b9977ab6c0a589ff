//! Common validation utilities.
//!
//! Custom validators used by the request DTOs in the domain crate. Prayer and
//! iftar times are stored as display labels ("5:15 AM"), not instants, so they
//! get a format check rather than a timestamp parse.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// "5:15 AM", "05:30 pm", or 24-hour "19:15".
    static ref TIME_LABEL_RE: Regex =
        Regex::new(r"^\d{1,2}:\d{2}(\s?[AaPp][Mm])?$").expect("valid regex");
}

/// Validates that a required text field is not blank after trimming.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("Field must not be blank".into());
        return Err(err);
    }
    Ok(())
}

/// Validates a time-of-day display label such as "5:15 AM".
pub fn validate_time_label(value: &str) -> Result<(), ValidationError> {
    if TIME_LABEL_RE.is_match(value.trim()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("time_label");
        err.message = Some("Time must look like 5:15 AM or 19:15".into());
        Err(err)
    }
}

/// Validates a phone number: optional leading +, at least 7 digits, with
/// spaces, dashes, dots, and parentheses allowed as separators.
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
    let chars_ok = trimmed
        .chars()
        .enumerate()
        .all(|(i, c)| c.is_ascii_digit() || " -.()".contains(c) || (c == '+' && i == 0));

    if digits >= 7 && digits <= 15 && chars_ok {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone");
        err.message = Some("Phone number must contain 7-15 digits".into());
        Err(err)
    }
}

/// Validates a URL slug.
pub fn validate_slug(value: &str) -> Result<(), ValidationError> {
    if crate::slug::is_valid_slug(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("slug");
        err.message = Some("Slug must be lowercase words separated by hyphens".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Community Potluck").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("\t\n").is_err());
    }

    #[test]
    fn test_validate_not_blank_error_message() {
        let err = validate_not_blank("  ").unwrap_err();
        assert_eq!(err.message.unwrap().to_string(), "Field must not be blank");
    }

    #[test]
    fn test_validate_time_label_12_hour() {
        assert!(validate_time_label("5:15 AM").is_ok());
        assert!(validate_time_label("07:15 PM").is_ok());
        assert!(validate_time_label("12:30pm").is_ok());
    }

    #[test]
    fn test_validate_time_label_24_hour() {
        assert!(validate_time_label("19:15").is_ok());
        assert!(validate_time_label("05:30").is_ok());
    }

    #[test]
    fn test_validate_time_label_rejects_malformed() {
        assert!(validate_time_label("").is_err());
        assert!(validate_time_label("five fifteen").is_err());
        assert!(validate_time_label("5.15 AM").is_err());
        assert!(validate_time_label("5:15 AMM").is_err());
    }

    #[test]
    fn test_validate_phone_accepts_common_formats() {
        assert!(validate_phone("732-322-5221").is_ok());
        assert!(validate_phone("(732) 322 5221").is_ok());
        assert!(validate_phone("+17323225221").is_ok());
    }

    #[test]
    fn test_validate_phone_rejects_short_or_textual() {
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("call me").is_err());
        assert!(validate_phone("123-456x789").is_err());
        assert!(validate_phone("1+234567890").is_err());
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("community-potluck").is_ok());
        assert!(validate_slug("Not A Slug").is_err());
    }
}
