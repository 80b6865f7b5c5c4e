use anyhow::{bail, Result};
use colored::Colorize;
use mentorship_client::{Field, LoginForm, NextStep};

use super::report_errors;
use crate::context::AppContext;

pub async fn run(ctx: &AppContext, email: Option<String>, password: Option<String>) -> Result<()> {
    let mut form = LoginForm::new(ctx.client.clone());

    let email = match email {
        Some(email) => email,
        None => ctx.prompt(Field::Email.label(), "")?,
    };
    let password = match password {
        Some(password) => password,
        None => ctx.prompt_password(Field::Password.label())?,
    };
    form.edit(Field::Email, &email)?;
    form.edit(Field::Password, &password)?;

    let Some(next) = form.submit().await else {
        report_errors(ctx, form.errors());
        bail!("Sign-in failed");
    };

    if let Some(session) = form.session() {
        ctx.print_success(&format!("Signed in as {}", session.user.full_name));
        let dashboard = match next {
            NextStep::MentorDashboard => "mentor",
            NextStep::LearnerDashboard | NextStep::Login => "learner",
        };
        if !ctx.quiet {
            println!("{} {}", "Dashboard:".bold(), dashboard);
        }
        println!("{}", session.access_token);
    }

    Ok(())
}
