//! Error types for the intake forms.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use super::fields::Field;
use crate::error::ClientError;

/// Shown for any failure where no usable response came back.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Field-level validation results. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mapping holding only a `general` message.
    pub fn general(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(Field::General, message);
        errors
    }

    /// Record an error, replacing any earlier message for the same field.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Drop the error for `field`. Returns whether there was one.
    pub fn clear(&mut self, field: Field) -> bool {
        self.entries.remove(&field).is_some()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn general_message(&self) -> Option<&str> {
        self.get(Field::General)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Fields with an error, in form order.
    pub fn fields(&self) -> Vec<Field> {
        self.entries.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// The mapping keyed by wire field name.
    pub fn to_named_map(&self) -> BTreeMap<&'static str, String> {
        self.entries
            .iter()
            .map(|(field, msg)| (field.as_str(), msg.clone()))
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msg) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, msg)?;
            first = false;
        }
        Ok(())
    }
}

/// Why a submission did not go through.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Local validation failed; nothing was sent.
    #[error("validation failed: {0}")]
    Invalid(ValidationErrors),

    /// The server answered with a non-success status.
    #[error("rejected by server ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// No interpretable response (network failure, unreadable body).
    #[error("transport failure: {0}")]
    Transport(#[source] ClientError),
}

impl SubmissionError {
    /// Map a client error onto the submission taxonomy. `fallback` is the
    /// rejection message used when the server gave no `detail`.
    pub(crate) fn from_client(err: ClientError, fallback: &str) -> Self {
        match err {
            ClientError::Api { status, detail } => SubmissionError::Rejected {
                status,
                message: detail.unwrap_or_else(|| fallback.to_string()),
            },
            other => SubmissionError::Transport(other),
        }
    }

    /// The text a user should see for a non-field failure.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            SubmissionError::Invalid(_) => None,
            SubmissionError::Rejected { message, .. } => Some(message),
            SubmissionError::Transport(_) => Some(GENERIC_FAILURE_MESSAGE),
        }
    }

    /// The error mapping a form should display for this failure.
    pub fn into_errors(self) -> ValidationErrors {
        match self {
            SubmissionError::Invalid(errors) => errors,
            SubmissionError::Rejected { message, .. } => ValidationErrors::general(message),
            SubmissionError::Transport(_) => ValidationErrors::general(GENERIC_FAILURE_MESSAGE),
        }
    }
}

/// Misuse of the form editing API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),

    #[error("'{0}' is not shown on this form")]
    FieldNotOnForm(Field),
}
