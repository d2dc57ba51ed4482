//! Pure field validators for the intake form
//!
//! Each validator takes a raw value plus its bounds and returns either `None`
//! (valid) or a human-readable message. Validators never touch the
//! environment; deployment-dependent bounds arrive via [`ValidationRules`].

use super::field::ResumeFile;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// local@domain.tld: no whitespace or extra `@`, a dot in the domain,
    /// at least one character after the final dot
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles");
}

/// Deployment-dependent validation bounds, derived from the config at startup
#[derive(Debug, Clone, Copy)]
pub struct ValidationRules {
    pub resume_required: bool,
    pub max_upload_mb: u64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            resume_required: true,
            max_upload_mb: 5,
        }
    }
}

/// Required text field: trimmed value must be non-empty
pub fn required_text(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some("This field is required".to_string())
    } else {
        None
    }
}

/// Required email field
pub fn email(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("This field is required".to_string());
    }
    if EMAIL_RE.is_match(value) {
        None
    } else {
        Some("Please enter a valid email".to_string())
    }
}

/// Required numeric field constrained to the closed interval `[min, max]`
pub fn number_in_range(value: &str, min: f64, max: f64) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("This field is required".to_string());
    }
    let n = match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => return Some("Please enter a valid number".to_string()),
    };
    if n < min || n > max {
        return Some(format!("Value must be between {min} and {max}"));
    }
    None
}

/// Resume attachment: requiredness and the size ceiling come from the rules
pub fn resume_file(file: Option<&ResumeFile>, required: bool, max_mb: u64) -> Option<String> {
    let Some(file) = file else {
        return required.then(|| "This field is required".to_string());
    };
    if file.media_type != "application/pdf" {
        return Some("Only PDF files are allowed".to_string());
    }
    if file.size_bytes > max_mb * 1024 * 1024 {
        return Some(format!("File is too large (max {max_mb} MB)"));
    }
    None
}

/// Consent checkbox, checked at submit time
pub fn consent_given(checked: bool) -> Option<String> {
    if checked {
        None
    } else {
        Some("Consent is required to proceed".to_string())
    }
}
