use serde::{Deserialize, Serialize};

/// Body for `POST /register/`.
///
/// Every key is always present: unset optional strings go out as `""` and
/// unset numbers as `0`, the same shape the account API has always received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub profile_picture_url: String,
    pub bio: String,
    pub location: String,
    pub is_mentor: bool,
    pub skills: String,
    pub expertise: String,
    pub experience_years: u32,
    pub languages_spoken: String,
    pub availability: String,
    pub hourly_rate: f64,
    pub linkedin_url: String,
}

/// Body for `POST /login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A user account as returned by `/users/` and `/register/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRead {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub profile_picture_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub is_mentor: bool,
}

/// A mentor profile as returned by `/mentors/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorProfileRead {
    pub id: i64,
    pub user_id: i64,
    pub skills: String,
    pub expertise: String,
    pub experience_years: i64,
    pub languages_spoken: String,
    pub availability: String,
    pub hourly_rate: Option<f64>,
    pub linkedin_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Body for `PUT /mentors/{id}`. The server replaces every field it is sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorProfileUpdate {
    pub user_id: i64,
    pub skills: String,
    pub expertise: String,
    pub experience_years: i64,
    pub languages_spoken: String,
    pub availability: String,
    pub hourly_rate: Option<f64>,
    pub linkedin_url: Option<String>,
    pub is_active: bool,
}

impl From<MentorProfileRead> for MentorProfileUpdate {
    fn from(profile: MentorProfileRead) -> Self {
        Self {
            user_id: profile.user_id,
            skills: profile.skills,
            expertise: profile.expertise,
            experience_years: profile.experience_years,
            languages_spoken: profile.languages_spoken,
            availability: profile.availability,
            hourly_rate: profile.hourly_rate,
            linkedin_url: profile.linkedin_url,
            is_active: profile.is_active,
        }
    }
}

/// Acknowledgement returned by `DELETE /mentors/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DeleteAck {
    pub ok: bool,
}

/// Authenticated session returned by `POST /login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub user: SessionUser,
    pub mentor_profile: Option<MentorProfileRead>,
}

/// The subset of the user record embedded in a [`Session`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub is_mentor: bool,
}

/// Error body shape used by the account API (`{"detail": "..."}`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    pub detail: Option<serde_json::Value>,
}

impl ApiErrorBody {
    /// The `detail` message, if it is a non-empty string.
    ///
    /// Validation failures from the server send `detail` as a list of
    /// objects; those are not user-facing text and are ignored.
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}
