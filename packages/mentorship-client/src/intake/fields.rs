//! Form field names

use std::fmt;
use std::str::FromStr;

use super::errors::IntakeError;

/// A named input on the registration or login form.
///
/// `General` is not an input; it is the reserved key for messages that do not
/// belong to any one field. Declaration order is the order errors are listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Password,
    PhoneNumber,
    ProfilePictureUrl,
    Bio,
    Location,
    Skills,
    Expertise,
    ExperienceYears,
    LanguagesSpoken,
    Availability,
    HourlyRate,
    LinkedinUrl,
    General,
}

impl Field {
    /// Wire/form name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "full_name",
            Field::Email => "email",
            Field::Password => "password",
            Field::PhoneNumber => "phone_number",
            Field::ProfilePictureUrl => "profile_picture_url",
            Field::Bio => "bio",
            Field::Location => "location",
            Field::Skills => "skills",
            Field::Expertise => "expertise",
            Field::ExperienceYears => "experience_years",
            Field::LanguagesSpoken => "languages_spoken",
            Field::Availability => "availability",
            Field::HourlyRate => "hourly_rate",
            Field::LinkedinUrl => "linkedin_url",
            Field::General => "general",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email Address",
            Field::Password => "Password",
            Field::PhoneNumber => "Phone Number",
            Field::ProfilePictureUrl => "Profile Picture URL",
            Field::Bio => "Bio",
            Field::Location => "Location",
            Field::Skills => "Skills",
            Field::Expertise => "Expertise",
            Field::ExperienceYears => "Experience Years",
            Field::LanguagesSpoken => "Languages Spoken",
            Field::Availability => "Availability",
            Field::HourlyRate => "Hourly Rate",
            Field::LinkedinUrl => "LinkedIn URL",
            Field::General => "General",
        }
    }

    /// Fields that only exist on the mentor variant of the form.
    pub fn is_mentor_only(&self) -> bool {
        matches!(
            self,
            Field::Skills
                | Field::Expertise
                | Field::ExperienceYears
                | Field::LanguagesSpoken
                | Field::Availability
                | Field::HourlyRate
                | Field::LinkedinUrl
        )
    }

    /// Every editable field, in form order.
    pub fn inputs() -> &'static [Field] {
        &[
            Field::FullName,
            Field::Email,
            Field::Password,
            Field::PhoneNumber,
            Field::ProfilePictureUrl,
            Field::Bio,
            Field::Location,
            Field::Skills,
            Field::Expertise,
            Field::ExperienceYears,
            Field::LanguagesSpoken,
            Field::Availability,
            Field::HourlyRate,
            Field::LinkedinUrl,
        ]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::inputs()
            .iter()
            .chain(std::iter::once(&Field::General))
            .find(|field| field.as_str() == s)
            .copied()
            .ok_or_else(|| IntakeError::UnknownField(s.to_string()))
    }
}
