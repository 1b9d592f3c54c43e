use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
    })
}

/// Fails with a readable message when `value` is empty or whitespace only.
pub fn require_non_blank(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        debug!("Rejected blank field: {}", field);
        return Err(format!("{} is required", field));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    require_non_blank(email, "email")?;
    if !email_pattern().is_match(email) {
        return Err(format!("{} is not a valid email address", email));
    }
    Ok(())
}

/// Like [`validate_email`], but `None` is accepted.
pub fn validate_optional_email(email: Option<&str>) -> Result<(), String> {
    match email {
        Some(email) => validate_email(email),
        None => Ok(()),
    }
}
