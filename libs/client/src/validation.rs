//! Client-side form validation
//!
//! Field checks run before any request is submitted; failures carry the
//! field they belong to so forms can surface them inline.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{ClientError, ClientResult};

fn field_error(field: &str, message: &str) -> ClientError {
    ClientError::Validation {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Validate a display name
pub fn validate_name(name: &str) -> ClientResult<()> {
    if name.trim().is_empty() {
        return Err(field_error("name", "Name is required"));
    }

    if name.len() > 80 {
        return Err(field_error("name", "Name must be at most 80 characters long"));
    }

    Ok(())
}

/// Validate an email address
pub fn validate_email(email: &str) -> ClientResult<()> {
    if email.is_empty() {
        return Err(field_error("email", "Email is required"));
    }

    if email.len() > 254 {
        return Err(field_error("email", "Email must be at most 254 characters long"));
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err(field_error("email", "Invalid email format"));
    }

    Ok(())
}

/// Validate a password
pub fn validate_password(password: &str) -> ClientResult<()> {
    if password.is_empty() {
        return Err(field_error("password", "Password is required"));
    }

    if password.len() < 6 {
        return Err(field_error(
            "password",
            "Password must be at least 6 characters long",
        ));
    }

    if password.len() > 128 {
        return Err(field_error(
            "password",
            "Password must be at most 128 characters long",
        ));
    }

    Ok(())
}

/// Validate that the confirmation matches the chosen password
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> ClientResult<()> {
    if password != confirmation {
        return Err(field_error("confirm_password", "Passwords do not match"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(result: ClientResult<()>) -> String {
        match result {
            Err(ClientError::Validation { field, .. }) => field,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_malformed_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert_eq!(field_of(validate_email("")), "email");
        assert_eq!(field_of(validate_email("not-an-email")), "email");
    }

    #[test]
    fn rejects_short_password() {
        assert!(validate_password("secret1").is_ok());
        assert_eq!(field_of(validate_password("abc")), "password");
    }

    #[test]
    fn rejects_mismatched_confirmation() {
        assert!(validate_password_confirmation("secret1", "secret1").is_ok());
        assert_eq!(
            field_of(validate_password_confirmation("secret1", "secret2")),
            "confirm_password"
        );
    }

    #[test]
    fn rejects_blank_name() {
        assert!(validate_name("Ada Lovelace").is_ok());
        assert_eq!(field_of(validate_name("   ")), "name");
    }
}
