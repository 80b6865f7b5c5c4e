//! Login intake.

use tracing::{debug, error, info, warn};

use super::busy::BusyFlag;
use super::errors::{IntakeError, SubmissionError, ValidationErrors};
use super::fields::Field;
use super::rules::{check_email, check_password};
use super::NextStep;
use crate::traits::BaseAccountApi;
use crate::types::{LoginRequest, Session};

/// Fallback message when the server rejects a login without a detail.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), IntakeError> {
        match field {
            Field::Email => self.email = value.to_string(),
            Field::Password => self.password = value.to_string(),
            other => return Err(IntakeError::FieldNotOnForm(other)),
        }
        Ok(())
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

pub fn validate_login(input: &LoginInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    check_email(&input.email, &mut errors);
    check_password(&input.password, &mut errors);
    errors
}

/// Where a freshly signed-in user lands.
pub fn dashboard_for(session: &Session) -> NextStep {
    if session.user.is_mentor {
        NextStep::MentorDashboard
    } else {
        NextStep::LearnerDashboard
    }
}

/// Validates credentials and exchanges them for a [`Session`].
pub struct LoginIntake<A> {
    api: A,
    busy: BusyFlag,
}

impl<A: BaseAccountApi> LoginIntake<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            busy: BusyFlag::new(),
        }
    }

    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn validate(&self, input: &LoginInput) -> ValidationErrors {
        validate_login(input)
    }

    pub async fn submit(&self, input: &LoginInput) -> Result<Session, SubmissionError> {
        let errors = validate_login(input);
        if !errors.is_empty() {
            debug!(fields = ?errors.fields(), "Login failed validation");
            return Err(SubmissionError::Invalid(errors));
        }

        let _busy = self.busy.acquire();
        info!("Submitting login");

        match self.api.login(&input.to_request()).await {
            Ok(session) => {
                info!(user_id = session.user.id, is_mentor = session.user.is_mentor, "Signed in");
                Ok(session)
            }
            Err(err) => {
                let failure = SubmissionError::from_client(err, LOGIN_FAILED_MESSAGE);
                match &failure {
                    SubmissionError::Rejected { status, message } => {
                        warn!(status, %message, "Login rejected");
                    }
                    SubmissionError::Transport(cause) => {
                        error!(error = %cause, "Login request failed");
                    }
                    SubmissionError::Invalid(_) => {}
                }
                Err(failure)
            }
        }
    }
}
