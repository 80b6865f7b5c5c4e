//! Field rules shared by the registration and login forms.

use lazy_static::lazy_static;
use regex::Regex;

use super::errors::ValidationErrors;
use super::fields::Field;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

lazy_static! {
    // Deliberately loose: something@something.something
    static ref EMAIL_REGEX: Regex = Regex::new(r"\S+@\S+\.\S+").unwrap();
}

pub fn is_plausible_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Required check, then format check. The format message replaces the
/// required message when both apply.
pub(crate) fn check_email(email: &str, errors: &mut ValidationErrors) {
    if email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    }
    if !is_plausible_email(email) {
        errors.insert(Field::Email, "Invalid email format");
    }
}

/// The one password rule used by every form.
pub(crate) fn check_password(password: &str, errors: &mut ValidationErrors) {
    if password.is_empty() {
        errors.insert(Field::Password, "Password is required");
    } else if password.chars().count() < MIN_PASSWORD_CHARS {
        errors.insert(
            Field::Password,
            format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_CHARS
            ),
        );
    }
}

pub(crate) fn check_required(
    value: &str,
    field: Field,
    message: &str,
    errors: &mut ValidationErrors,
) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}
