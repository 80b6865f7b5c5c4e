//! MentorConnect account client.
//!
//! Validates registration and login input the way the sign-up forms do and
//! submits it to the account API. Also exposes typed reads of the user and
//! mentor directories.
//!
//! # Example
//!
//! ```rust,ignore
//! use mentorship_client::{Field, MentorshipClient, NextStep, RegistrationForm};
//!
//! let client = MentorshipClient::from_env()?;
//! let mut form = RegistrationForm::new(client);
//!
//! form.edit(Field::FullName, "Jane Doe")?;
//! form.edit(Field::Email, "jane@example.com")?;
//! form.edit(Field::Password, "secret")?;
//!
//! match form.submit().await {
//!     Some(NextStep::Login) => println!("Account created"),
//!     _ => {
//!         for (field, message) in form.errors().iter() {
//!             println!("{field}: {message}");
//!         }
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod intake;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use client::MentorshipClient;
pub use config::{ClientConfig, DEFAULT_API_BASE_URL};
pub use error::{ClientError, ConfigError, Result};
pub use intake::{
    BusyFlag, Field, FormPhase, LoginForm, LoginInput, LoginIntake, MentorDetails, NextStep,
    RegistrationForm, RegistrationInput, RegistrationIntake, Role, SubmissionError,
    ValidationErrors,
};
pub use traits::BaseAccountApi;
pub use types::{
    DeleteAck, LoginRequest, MentorProfileRead, MentorProfileUpdate, RegisterRequest, Session,
    UserRead,
};
