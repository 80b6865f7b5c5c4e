//! Account intake: field validation and single-attempt submission for the
//! registration and login forms.
//!
//! Flow for both forms:
//!
//! ```text
//! Idle -> validate -> Idle (field errors)
//!                  -> Submitting -> Idle (next step)
//!                                -> Idle (general error)
//! ```
//!
//! There is no retry and no timeout beyond what the HTTP client is
//! configured with.

mod busy;
mod errors;
mod fields;
mod form;
mod login;
mod registration;
mod rules;

pub use busy::{BusyFlag, BusyGuard};
pub use errors::{IntakeError, SubmissionError, ValidationErrors, GENERIC_FAILURE_MESSAGE};
pub use fields::Field;
pub use form::{FormPhase, LoginForm, RegistrationForm};
pub use login::{dashboard_for, validate_login, LoginInput, LoginIntake, LOGIN_FAILED_MESSAGE};
pub use registration::{
    validate_registration, AccountDetails, MentorDetails, RegistrationInput, RegistrationIntake,
    Role, REGISTRATION_FAILED_MESSAGE,
};
pub use rules::{is_plausible_email, MIN_PASSWORD_CHARS};

/// Where the caller should navigate after a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    /// Account created; show the login view.
    Login,
    MentorDashboard,
    LearnerDashboard,
}
