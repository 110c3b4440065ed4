//! Email normalization and allow-list parsing.
//!
//! Emails are trimmed and lower-cased before they are stored or compared,
//! so `" Guest@Example.com"` and `"guest@example.com"` are the same viewer.

use std::collections::BTreeSet;

use validator::ValidateEmail;

use videovault_core::error::AppError;
use videovault_core::result::AppResult;

/// Trim and lower-case an email address.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalize and validate a viewer-supplied email from the access form.
pub fn parse_viewer_email(raw: &str) -> AppResult<String> {
    let email = normalize_email(raw);
    if email.is_empty() || !email.validate_email() {
        return Err(AppError::validation("Please enter a valid email address"));
    }
    Ok(email)
}

/// Normalize an allow-list: blanks are dropped, duplicates collapse, and
/// every remaining entry must be a valid address.
pub fn normalize_allow_list<I, S>(emails: I) -> AppResult<BTreeSet<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut allowed = BTreeSet::new();
    for raw in emails {
        let email = normalize_email(raw.as_ref());
        if email.is_empty() {
            continue;
        }
        if !email.validate_email() {
            return Err(AppError::validation(format!(
                "'{}' is not a valid email address",
                raw.as_ref().trim()
            )));
        }
        allowed.insert(email);
    }
    Ok(allowed)
}

/// Parse the comma-separated allow-list text typed into the share dialog.
pub fn parse_allow_list(text: &str) -> AppResult<BTreeSet<String>> {
    normalize_allow_list(text.split(','))
}
