//! Registration intake: the account-creation form's data and its submit flow.

use tracing::{debug, error, info, warn};

use super::busy::BusyFlag;
use super::errors::{IntakeError, SubmissionError, ValidationErrors};
use super::fields::Field;
use super::rules::{check_email, check_password, check_required};
use super::NextStep;
use crate::traits::BaseAccountApi;
use crate::types::RegisterRequest;

/// Fallback message when the server rejects a registration without a detail.
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed";

/// Fields every account has.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountDetails {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub profile_picture_url: String,
    pub bio: String,
    pub location: String,
}

/// Fields only a mentor fills in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MentorDetails {
    pub skills: String,
    pub expertise: String,
    pub experience_years: u32,
    pub languages_spoken: String,
    pub availability: String,
    pub hourly_rate: f64,
    pub linkedin_url: String,
}

/// Which kind of account is being created.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Role {
    #[default]
    Learner,
    Mentor(MentorDetails),
}

/// Draft of a registration, edited field by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationInput {
    pub account: AccountDetails,
    pub role: Role,
}

impl RegistrationInput {
    /// An empty learner draft.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn learner(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            account: AccountDetails {
                full_name: full_name.into(),
                email: email.into(),
                password: password.into(),
                ..Default::default()
            },
            role: Role::Learner,
        }
    }

    pub fn with_mentor_details(mut self, details: MentorDetails) -> Self {
        self.role = Role::Mentor(details);
        self
    }

    pub fn is_mentor(&self) -> bool {
        matches!(self.role, Role::Mentor(_))
    }

    pub fn mentor_details(&self) -> Option<&MentorDetails> {
        match &self.role {
            Role::Mentor(details) => Some(details),
            Role::Learner => None,
        }
    }

    /// Switch between the learner and mentor forms. Leaving the mentor form
    /// discards whatever mentor details were entered.
    pub fn set_mentor(&mut self, is_mentor: bool) {
        match (&self.role, is_mentor) {
            (Role::Learner, true) => self.role = Role::Mentor(MentorDetails::default()),
            (Role::Mentor(_), false) => self.role = Role::Learner,
            _ => {}
        }
    }

    /// Apply one edit from the form. Numeric fields accept anything; text
    /// that does not parse as a number is stored as `0`.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), IntakeError> {
        let account = &mut self.account;
        match field {
            Field::FullName => account.full_name = value.to_string(),
            Field::Email => account.email = value.to_string(),
            Field::Password => account.password = value.to_string(),
            Field::PhoneNumber => account.phone_number = value.to_string(),
            Field::ProfilePictureUrl => account.profile_picture_url = value.to_string(),
            Field::Bio => account.bio = value.to_string(),
            Field::Location => account.location = value.to_string(),
            Field::General => return Err(IntakeError::FieldNotOnForm(field)),
            mentor_field => {
                let Role::Mentor(details) = &mut self.role else {
                    return Err(IntakeError::FieldNotOnForm(mentor_field));
                };
                match mentor_field {
                    Field::Skills => details.skills = value.to_string(),
                    Field::Expertise => details.expertise = value.to_string(),
                    Field::ExperienceYears => details.experience_years = parse_years(value),
                    Field::LanguagesSpoken => details.languages_spoken = value.to_string(),
                    Field::Availability => details.availability = value.to_string(),
                    Field::HourlyRate => details.hourly_rate = parse_rate(value),
                    Field::LinkedinUrl => details.linkedin_url = value.to_string(),
                    _ => return Err(IntakeError::FieldNotOnForm(mentor_field)),
                }
            }
        }
        Ok(())
    }

    /// Current text of a field as the form would show it. `None` for fields
    /// not on the form (mentor fields on a learner draft, `general`).
    pub fn field_value(&self, field: Field) -> Option<String> {
        let account = &self.account;
        let value = match field {
            Field::FullName => account.full_name.clone(),
            Field::Email => account.email.clone(),
            Field::Password => account.password.clone(),
            Field::PhoneNumber => account.phone_number.clone(),
            Field::ProfilePictureUrl => account.profile_picture_url.clone(),
            Field::Bio => account.bio.clone(),
            Field::Location => account.location.clone(),
            Field::General => return None,
            mentor_field => {
                let details = self.mentor_details()?;
                match mentor_field {
                    Field::Skills => details.skills.clone(),
                    Field::Expertise => details.expertise.clone(),
                    // Zero renders as an empty box
                    Field::ExperienceYears if details.experience_years == 0 => String::new(),
                    Field::ExperienceYears => details.experience_years.to_string(),
                    Field::LanguagesSpoken => details.languages_spoken.clone(),
                    Field::Availability => details.availability.clone(),
                    Field::HourlyRate if details.hourly_rate == 0.0 => String::new(),
                    Field::HourlyRate => details.hourly_rate.to_string(),
                    Field::LinkedinUrl => details.linkedin_url.clone(),
                    _ => return None,
                }
            }
        };
        Some(value)
    }

    /// Fields shown for the current role, in form order.
    pub fn visible_fields(&self) -> Vec<Field> {
        Field::inputs()
            .iter()
            .copied()
            .filter(|field| self.is_mentor() || !field.is_mentor_only())
            .collect()
    }

    /// The JSON body for `POST /register/`.
    pub fn to_request(&self) -> RegisterRequest {
        let account = self.account.clone();
        let mentor = self.mentor_details().cloned().unwrap_or_default();
        RegisterRequest {
            full_name: account.full_name,
            email: account.email,
            password: account.password,
            phone_number: account.phone_number,
            profile_picture_url: account.profile_picture_url,
            bio: account.bio,
            location: account.location,
            is_mentor: self.is_mentor(),
            skills: mentor.skills,
            expertise: mentor.expertise,
            experience_years: mentor.experience_years,
            languages_spoken: mentor.languages_spoken,
            availability: mentor.availability,
            hourly_rate: mentor.hourly_rate,
            linkedin_url: mentor.linkedin_url,
        }
    }
}

fn parse_number(value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

fn parse_years(value: &str) -> u32 {
    // `as` saturates; negatives become 0
    parse_number(value).trunc().max(0.0) as u32
}

fn parse_rate(value: &str) -> f64 {
    parse_number(value)
}

/// Check a registration draft. Returns only the failing fields.
pub fn validate_registration(input: &RegistrationInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let account = &input.account;

    check_required(
        &account.full_name,
        Field::FullName,
        "Full name is required",
        &mut errors,
    );
    check_email(&account.email, &mut errors);
    check_password(&account.password, &mut errors);

    if let Role::Mentor(mentor) = &input.role {
        check_required(
            &mentor.skills,
            Field::Skills,
            "Skills are required for mentors",
            &mut errors,
        );
        check_required(
            &mentor.expertise,
            Field::Expertise,
            "Expertise is required for mentors",
            &mut errors,
        );
        if mentor.experience_years < 1 {
            errors.insert(
                Field::ExperienceYears,
                "Experience years must be at least 1",
            );
        }
        if !mentor.hourly_rate.is_finite() || mentor.hourly_rate < 0.0 {
            errors.insert(Field::HourlyRate, "Hourly rate cannot be negative");
        }
    }

    errors
}

/// Validates registrations and submits them to the account API.
pub struct RegistrationIntake<A> {
    api: A,
    busy: BusyFlag,
}

impl<A: BaseAccountApi> RegistrationIntake<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            busy: BusyFlag::new(),
        }
    }

    /// A handle on the "submitting" flag.
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn validate(&self, input: &RegistrationInput) -> ValidationErrors {
        validate_registration(input)
    }

    /// Validate, then make a single attempt to create the account.
    ///
    /// Invalid input is returned as [`SubmissionError::Invalid`] without any
    /// request being sent. On success the caller should move to the login view.
    pub async fn submit(&self, input: &RegistrationInput) -> Result<NextStep, SubmissionError> {
        let errors = validate_registration(input);
        if !errors.is_empty() {
            debug!(fields = ?errors.fields(), "Registration failed validation");
            return Err(SubmissionError::Invalid(errors));
        }

        let _busy = self.busy.acquire();
        let request = input.to_request();
        info!(is_mentor = request.is_mentor, "Submitting registration");

        match self.api.register(&request).await {
            Ok(_) => {
                info!(is_mentor = request.is_mentor, "Registration accepted");
                Ok(NextStep::Login)
            }
            Err(err) => {
                let failure = SubmissionError::from_client(err, REGISTRATION_FAILED_MESSAGE);
                match &failure {
                    SubmissionError::Rejected { status, message } => {
                        warn!(status, %message, "Registration rejected");
                    }
                    SubmissionError::Transport(cause) => {
                        error!(error = %cause, "Registration request failed");
                    }
                    SubmissionError::Invalid(_) => {}
                }
                Err(failure)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tokio::sync::Notify;

    use super::*;
    use crate::error::ClientError;
    use crate::intake::GENERIC_FAILURE_MESSAGE;
    use crate::testing::MockAccountApi;

    fn mentor_input() -> RegistrationInput {
        RegistrationInput::learner("Ada Lovelace", "ada@example.com", "engine42").with_mentor_details(
            MentorDetails {
                skills: "Rust, Python".to_string(),
                expertise: "Compilers".to_string(),
                experience_years: 9,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_scenario_a_valid_learner() {
        let input = RegistrationInput::learner("Jane Doe", "jane@x.com", "secret");
        assert!(validate_registration(&input).is_empty());
    }

    #[test]
    fn test_scenario_b_blank_learner() {
        let input = RegistrationInput::learner("", "bad", "");
        let errors = validate_registration(&input);
        assert_eq!(
            errors.fields(),
            vec![Field::FullName, Field::Email, Field::Password]
        );
        assert_eq!(errors.get(Field::FullName), Some("Full name is required"));
        assert_eq!(errors.get(Field::Email), Some("Invalid email format"));
        assert_eq!(errors.get(Field::Password), Some("Password is required"));
    }

    #[test]
    fn test_scenario_c_mentor_missing_fields() {
        let input = RegistrationInput::learner("  ", "jane@x.com", "secret")
            .with_mentor_details(MentorDetails::default());
        let errors = validate_registration(&input);
        assert_eq!(
            errors.fields(),
            vec![
                Field::FullName,
                Field::Skills,
                Field::Expertise,
                Field::ExperienceYears
            ]
        );
    }

    #[test]
    fn test_whitespace_full_name_is_required_error() {
        for name in ["", " ", "\t\n", "   "] {
            let input = RegistrationInput::learner(name, "jane@x.com", "secret");
            assert_eq!(
                validate_registration(&input).get(Field::FullName),
                Some("Full name is required"),
                "name {:?} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_bad_email_reported_even_when_rest_is_valid() {
        for email in ["bad", "jane@x", "jane.x.com", "jane @x.com"] {
            let input = RegistrationInput::learner("Jane Doe", email, "secret");
            let errors = validate_registration(&input);
            assert_eq!(
                errors.get(Field::Email),
                Some("Invalid email format"),
                "email {:?}",
                email
            );
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn test_learner_ignores_mentor_fields() {
        let learner = RegistrationInput::learner("Jane Doe", "jane@x.com", "secret");
        // A learner cannot carry mentor fields at all; editing one is refused
        let mut edited = learner.clone();
        assert_eq!(
            edited.set_field(Field::Skills, "Rust"),
            Err(IntakeError::FieldNotOnForm(Field::Skills))
        );
        assert_eq!(edited, learner);
        assert!(validate_registration(&learner).is_empty());
    }

    #[test]
    fn test_mentor_zero_experience_is_error() {
        let mut input = mentor_input();
        input.set_field(Field::ExperienceYears, "0").unwrap();
        let errors = validate_registration(&input);
        assert_eq!(
            errors.get(Field::ExperienceYears),
            Some("Experience years must be at least 1")
        );
    }

    #[test]
    fn test_negative_hourly_rate_is_error() {
        let mut input = mentor_input();
        input.set_field(Field::HourlyRate, "-5").unwrap();
        let errors = validate_registration(&input);
        assert_eq!(errors.fields(), vec![Field::HourlyRate]);
    }

    #[test]
    fn test_numeric_fields_parse_leniently() {
        let mut input = mentor_input();
        input.set_field(Field::ExperienceYears, "abc").unwrap();
        input.set_field(Field::HourlyRate, "").unwrap();
        let details = input.mentor_details().unwrap();
        assert_eq!(details.experience_years, 0);
        assert_eq!(details.hourly_rate, 0.0);

        input.set_field(Field::ExperienceYears, " 4.7 ").unwrap();
        input.set_field(Field::HourlyRate, "35.5").unwrap();
        let details = input.mentor_details().unwrap();
        assert_eq!(details.experience_years, 4);
        assert_eq!(details.hourly_rate, 35.5);
    }

    #[test]
    fn test_switching_to_learner_discards_mentor_details() {
        let mut input = mentor_input();
        input.set_mentor(false);
        assert!(!input.is_mentor());
        input.set_mentor(true);
        assert_eq!(input.mentor_details(), Some(&MentorDetails::default()));
    }

    #[test]
    fn test_visible_fields_follow_role() {
        let mut input = RegistrationInput::new();
        assert_eq!(input.visible_fields().len(), 7);
        assert_eq!(input.field_value(Field::Skills), None);

        input.set_mentor(true);
        assert_eq!(input.visible_fields().len(), 14);
        assert_eq!(input.field_value(Field::ExperienceYears).as_deref(), Some(""));

        input.set_field(Field::ExperienceYears, "3").unwrap();
        assert_eq!(input.field_value(Field::ExperienceYears).as_deref(), Some("3"));
    }

    #[test]
    fn test_request_has_defaults_for_learner() {
        let request = RegistrationInput::learner("Jane Doe", "jane@x.com", "secret").to_request();
        assert!(!request.is_mentor);
        assert_eq!(request.skills, "");
        assert_eq!(request.experience_years, 0);
        assert_eq!(request.hourly_rate, 0.0);
        assert_eq!(request.phone_number, "");
    }

    #[tokio::test]
    async fn test_scenario_d_success_goes_to_login() {
        let api = MockAccountApi::new().with_register_response(Ok(serde_json::json!({"id": 1})));
        let intake = RegistrationIntake::new(api.clone());

        let next = intake
            .submit(&RegistrationInput::learner("Jane Doe", "jane@x.com", "secret"))
            .await
            .unwrap();

        assert_eq!(next, NextStep::Login);
        assert_eq!(api.register_calls().len(), 1);
        assert!(!intake.is_submitting());
    }

    #[tokio::test]
    async fn test_scenario_e_rejection_detail_is_general_error() {
        let api = MockAccountApi::new().with_register_response(Err(ClientError::Api {
            status: 400,
            detail: Some("Email already registered".to_string()),
        }));
        let intake = RegistrationIntake::new(api);

        let err = intake
            .submit(&RegistrationInput::learner("Jane Doe", "jane@x.com", "secret"))
            .await
            .unwrap_err();

        let errors = err.into_errors();
        assert_eq!(errors.general_message(), Some("Email already registered"));
        assert_eq!(errors.len(), 1);
        assert!(!intake.is_submitting());
    }

    #[tokio::test]
    async fn test_scenario_f_transport_failure_is_generic() {
        let api = MockAccountApi::new()
            .with_register_response(Err(ClientError::Parse("truncated body".to_string())));
        let intake = RegistrationIntake::new(api);

        let err = intake
            .submit(&RegistrationInput::learner("Jane Doe", "jane@x.com", "secret"))
            .await
            .unwrap_err();

        assert!(matches!(err, SubmissionError::Transport(_)));
        assert_eq!(
            err.into_errors().general_message(),
            Some(GENERIC_FAILURE_MESSAGE)
        );
        assert!(!intake.is_submitting());
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_api() {
        let api = MockAccountApi::new();
        let intake = RegistrationIntake::new(api.clone());

        let err = intake
            .submit(&RegistrationInput::learner("", "bad", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, SubmissionError::Invalid(ref e) if e.len() == 3));
        assert!(api.register_calls().is_empty(), "No request should be sent");
    }

    #[tokio::test]
    async fn test_submitted_payload_matches_input() {
        let api = MockAccountApi::new();
        let intake = RegistrationIntake::new(api.clone());
        let input = mentor_input();

        intake.submit(&input).await.unwrap();

        let calls = api.register_calls();
        assert_eq!(calls, vec![input.to_request()]);
        assert!(calls[0].is_mentor);
        assert_eq!(calls[0].skills, "Rust, Python");
    }

    #[tokio::test]
    async fn test_overlapping_submits_stay_busy_until_both_settle() {
        let gate = Arc::new(Notify::new());
        let api = MockAccountApi::new().with_gate(gate.clone());
        let intake = RegistrationIntake::new(api.clone());
        let input = RegistrationInput::learner("Jane Doe", "jane@x.com", "secret");
        let busy_after_settle = Mutex::new(Vec::new());

        let (intake, input, busy_after_settle) = (&intake, &input, &busy_after_settle);
        let submit_and_observe = move || async move {
            let result = intake.submit(input).await;
            busy_after_settle.lock().unwrap().push(intake.is_submitting());
            result
        };

        let release = async {
            while api.register_calls().len() < 2 {
                tokio::task::yield_now().await;
            }
            assert!(intake.is_submitting());

            gate.notify_one();
            while busy_after_settle.lock().unwrap().is_empty() {
                tokio::task::yield_now().await;
            }
            gate.notify_one();
        };

        let (first, second, ()) = tokio::join!(submit_and_observe(), submit_and_observe(), release);

        assert_eq!(first.unwrap(), NextStep::Login);
        assert_eq!(second.unwrap(), NextStep::Login);
        assert_eq!(
            *busy_after_settle.lock().unwrap(),
            vec![true, false],
            "Flag must stay raised while the other request is outstanding"
        );
        assert!(!intake.is_submitting());
    }
}
