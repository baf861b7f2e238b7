//! Email and mobile-number rules for leads and newsletter subscribers.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Loose email shape: something, `@`, something, `.`, something, no spaces.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Number of digits a mobile number must have after normalization.
pub const MOBILE_DIGITS: usize = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Canonical form used for storage and uniqueness: trimmed, lowercase.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate an already-normalized email address.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Please enter a valid email address".to_string(),
        ))
    }
}

/// Strip every non-digit character, e.g. `"(555) 012-3456"` -> `"5550123456"`.
pub fn normalize_mobile(mobile: &str) -> String {
    mobile.chars().filter(char::is_ascii_digit).collect()
}

/// Normalize a mobile number and require exactly [`MOBILE_DIGITS`] digits.
pub fn validate_mobile(mobile: &str) -> Result<String, CoreError> {
    let digits = normalize_mobile(mobile);
    if digits.len() == MOBILE_DIGITS {
        Ok(digits)
    } else {
        Err(CoreError::Validation(
            "Please enter a valid 10-digit mobile number".to_string(),
        ))
    }
}
