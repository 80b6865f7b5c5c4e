//! Stateful form wrappers.
//!
//! A form owns its draft, the errors currently on screen and the busy flag.
//! Every method takes `&mut self`, so a form has exactly one writer. Dropping
//! an in-flight `submit` future discards the response and releases the busy
//! flag.

use super::busy::BusyFlag;
use super::errors::{IntakeError, ValidationErrors};
use super::fields::Field;
use super::login::{dashboard_for, LoginInput, LoginIntake};
use super::registration::{RegistrationInput, RegistrationIntake};
use super::NextStep;
use crate::traits::BaseAccountApi;
use crate::types::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting edits; errors (if any) are on display.
    Idle,
    /// A request is outstanding.
    Submitting,
}

fn phase_of(busy: &BusyFlag) -> FormPhase {
    if busy.is_busy() {
        FormPhase::Submitting
    } else {
        FormPhase::Idle
    }
}

/// The registration form.
pub struct RegistrationForm<A> {
    intake: RegistrationIntake<A>,
    input: RegistrationInput,
    errors: ValidationErrors,
}

impl<A: BaseAccountApi> RegistrationForm<A> {
    /// An empty learner form.
    pub fn new(api: A) -> Self {
        Self::with_input(api, RegistrationInput::new())
    }

    pub fn with_input(api: A, input: RegistrationInput) -> Self {
        Self {
            intake: RegistrationIntake::new(api),
            input,
            errors: ValidationErrors::new(),
        }
    }

    pub fn input(&self) -> &RegistrationInput {
        &self.input
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.intake.is_submitting()
    }

    pub fn busy_flag(&self) -> BusyFlag {
        self.intake.busy_flag()
    }

    pub fn phase(&self) -> FormPhase {
        phase_of(&self.intake.busy_flag())
    }

    /// Apply an edit and drop that field's error. The field is not re-checked.
    pub fn edit(&mut self, field: Field, value: &str) -> Result<(), IntakeError> {
        self.input.set_field(field, value)?;
        self.errors.clear(field);
        Ok(())
    }

    /// [`RegistrationForm::edit`] addressed by wire name.
    pub fn edit_named(&mut self, name: &str, value: &str) -> Result<(), IntakeError> {
        let field: Field = name.parse()?;
        self.edit(field, value)
    }

    pub fn set_mentor(&mut self, is_mentor: bool) {
        self.input.set_mentor(is_mentor);
        if !is_mentor {
            for field in Field::inputs().iter().filter(|f| f.is_mentor_only()) {
                self.errors.clear(*field);
            }
        }
    }

    /// Validate and submit. Returns where to go next on success; otherwise
    /// the reasons are left in [`RegistrationForm::errors`].
    pub async fn submit(&mut self) -> Option<NextStep> {
        self.errors = ValidationErrors::new();
        match self.intake.submit(&self.input).await {
            Ok(next) => Some(next),
            Err(err) => {
                self.errors = err.into_errors();
                None
            }
        }
    }
}

/// The login form.
pub struct LoginForm<A> {
    intake: LoginIntake<A>,
    input: LoginInput,
    errors: ValidationErrors,
    session: Option<Session>,
}

impl<A: BaseAccountApi> LoginForm<A> {
    pub fn new(api: A) -> Self {
        Self {
            intake: LoginIntake::new(api),
            input: LoginInput::default(),
            errors: ValidationErrors::new(),
            session: None,
        }
    }

    pub fn input(&self) -> &LoginInput {
        &self.input
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Session from the last successful sign-in. Held in memory only.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.intake.is_submitting()
    }

    pub fn busy_flag(&self) -> BusyFlag {
        self.intake.busy_flag()
    }

    pub fn phase(&self) -> FormPhase {
        phase_of(&self.intake.busy_flag())
    }

    pub fn edit(&mut self, field: Field, value: &str) -> Result<(), IntakeError> {
        self.input.set_field(field, value)?;
        self.errors.clear(field);
        Ok(())
    }

    pub async fn submit(&mut self) -> Option<NextStep> {
        self.errors = ValidationErrors::new();
        match self.intake.submit(&self.input).await {
            Ok(session) => {
                let next = dashboard_for(&session);
                self.session = Some(session);
                Some(next)
            }
            Err(err) => {
                self.errors = err.into_errors();
                None
            }
        }
    }
}
