//! Read-only directory commands

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use mentorship_client::{MentorProfileRead, MentorProfileUpdate, UserRead};

use crate::context::AppContext;

pub async fn list_users(ctx: &AppContext) -> Result<()> {
    let users = ctx
        .client
        .list_users()
        .await
        .context("Failed to list users")?;

    ctx.print_header(&format!("{} user(s)", users.len()));
    for user in &users {
        println!("{}", user_line(user));
    }
    Ok(())
}

pub async fn show_user(ctx: &AppContext, id: i64) -> Result<()> {
    let user = ctx
        .client
        .get_user(id)
        .await
        .with_context(|| format!("Failed to fetch user {}", id))?;

    println!("{}", user_line(&user));
    if let Some(location) = user.location.as_deref().filter(|s| !s.is_empty()) {
        println!("  location: {}", location);
    }
    if let Some(bio) = user.bio.as_deref().filter(|s| !s.is_empty()) {
        println!("  bio: {}", bio);
    }
    Ok(())
}

pub async fn list_mentors(ctx: &AppContext) -> Result<()> {
    let mentors = ctx
        .client
        .list_mentors()
        .await
        .context("Failed to list mentors")?;

    ctx.print_header(&format!("{} mentor profile(s)", mentors.len()));
    for mentor in &mentors {
        println!("{}", mentor_line(mentor));
    }
    Ok(())
}

pub async fn show_mentor(ctx: &AppContext, id: i64) -> Result<()> {
    let mentor = ctx
        .client
        .get_mentor(id)
        .await
        .with_context(|| format!("Failed to fetch mentor profile {}", id))?;

    println!("{}", mentor_line(&mentor));
    println!("  skills: {}", mentor.skills);
    println!("  languages: {}", mentor.languages_spoken);
    println!("  availability: {}", mentor.availability);
    if let Some(url) = mentor.linkedin_url.as_deref().filter(|s| !s.is_empty()) {
        println!("  linkedin: {}", url);
    }
    Ok(())
}

/// Fields to change on a mentor profile; the rest keep their current values.
#[derive(Args, Debug, Default)]
pub struct UpdateMentorArgs {
    pub id: i64,
    #[arg(long)]
    pub skills: Option<String>,
    #[arg(long)]
    pub expertise: Option<String>,
    #[arg(long)]
    pub experience_years: Option<i64>,
    #[arg(long)]
    pub languages_spoken: Option<String>,
    #[arg(long)]
    pub availability: Option<String>,
    #[arg(long)]
    pub hourly_rate: Option<f64>,
    #[arg(long)]
    pub linkedin_url: Option<String>,
    /// Mark the profile active or inactive
    #[arg(long)]
    pub active: Option<bool>,
}

impl UpdateMentorArgs {
    fn apply(&self, profile: &mut MentorProfileUpdate) {
        if let Some(skills) = &self.skills {
            profile.skills = skills.clone();
        }
        if let Some(expertise) = &self.expertise {
            profile.expertise = expertise.clone();
        }
        if let Some(years) = self.experience_years {
            profile.experience_years = years;
        }
        if let Some(languages) = &self.languages_spoken {
            profile.languages_spoken = languages.clone();
        }
        if let Some(availability) = &self.availability {
            profile.availability = availability.clone();
        }
        if let Some(rate) = self.hourly_rate {
            profile.hourly_rate = Some(rate);
        }
        if let Some(url) = &self.linkedin_url {
            profile.linkedin_url = Some(url.clone());
        }
        if let Some(active) = self.active {
            profile.is_active = active;
        }
    }
}

pub async fn update_mentor(ctx: &AppContext, args: UpdateMentorArgs) -> Result<()> {
    let current = ctx
        .client
        .get_mentor(args.id)
        .await
        .with_context(|| format!("Failed to fetch mentor profile {}", args.id))?;

    let mut profile = MentorProfileUpdate::from(current);
    args.apply(&mut profile);

    let updated = ctx
        .client
        .update_mentor(args.id, &profile)
        .await
        .with_context(|| format!("Failed to update mentor profile {}", args.id))?;

    ctx.print_success("Mentor profile updated");
    println!("{}", mentor_line(&updated));
    Ok(())
}

pub async fn delete_mentor(ctx: &AppContext, id: i64, yes: bool) -> Result<()> {
    if !yes && !ctx.confirm(&format!("Delete mentor profile {}?", id), false)? {
        bail!("Deletion cancelled");
    }

    ctx.client
        .delete_mentor(id)
        .await
        .with_context(|| format!("Failed to delete mentor profile {}", id))?;

    ctx.print_success(&format!("Deleted mentor profile {}", id));
    Ok(())
}

fn user_line(user: &UserRead) -> String {
    let role = if user.is_mentor { "mentor" } else { "learner" };
    format!(
        "#{} {} <{}> [{}]",
        user.id,
        user.full_name.bold(),
        user.email,
        role
    )
}

fn mentor_line(mentor: &MentorProfileRead) -> String {
    let rate = match mentor.hourly_rate {
        Some(rate) if rate > 0.0 => format!("${:.2}/h", rate),
        _ => "free".to_string(),
    };
    let status = if mentor.is_active { "active" } else { "inactive" };
    format!(
        "#{} (user {}) {} - {} yrs - {} [{}]",
        mentor.id,
        mentor.user_id,
        mentor.expertise.bold(),
        mentor.experience_years,
        rate,
        status
    )
}
