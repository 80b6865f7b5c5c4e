//! Canned records served by the stub account API.

use mentorship_client::{MentorDetails, RegistrationInput};
use serde_json::{json, Value};

pub const MENTOR_EMAIL: &str = "mentor@demo.com";
pub const LEARNER_EMAIL: &str = "learner@demo.com";
pub const DEMO_PASSWORD: &str = "password123";

pub fn learner_input() -> RegistrationInput {
    RegistrationInput::learner("Jane Doe", "jane@x.com", "secret")
}

pub fn mentor_input() -> RegistrationInput {
    RegistrationInput::learner("Grace Hopper", "grace@navy.mil", "cobol1959").with_mentor_details(
        MentorDetails {
            skills: "COBOL, compilers".to_string(),
            expertise: "Programming languages".to_string(),
            experience_years: 40,
            languages_spoken: "English".to_string(),
            availability: "Weekdays 6-8 PM EST".to_string(),
            hourly_rate: 0.0,
            linkedin_url: String::new(),
        },
    )
}

pub fn user_json(id: i64, email: &str, is_mentor: bool) -> Value {
    json!({
        "id": id,
        "full_name": if is_mentor { "Demo Mentor" } else { "Demo Learner" },
        "email": email,
        "phone_number": null,
        "profile_picture_url": null,
        "bio": "Here to learn",
        "location": "Minneapolis, MN",
        "is_mentor": is_mentor,
    })
}

pub fn mentor_profile_json(id: i64, user_id: i64) -> Value {
    json!({
        "id": id,
        "user_id": user_id,
        "skills": "Rust, Go",
        "expertise": "Distributed systems",
        "experience_years": 8,
        "languages_spoken": "English, Spanish",
        "availability": "Weekends",
        "hourly_rate": 45.0,
        "linkedin_url": "https://linkedin.com/in/demo",
        "is_active": true,
    })
}

pub fn session_json(user_id: i64, email: &str, is_mentor: bool) -> Value {
    json!({
        "access_token": format!("token-for-{}", user_id),
        "token_type": "bearer",
        "user": {
            "id": user_id,
            "full_name": if is_mentor { "Demo Mentor" } else { "Demo Learner" },
            "email": email,
            "is_mentor": is_mentor,
        },
        "mentor_profile": if is_mentor { mentor_profile_json(1, user_id) } else { Value::Null },
    })
}
