//! Account registration

use anyhow::{bail, Context, Result};
use clap::Args;
use mentorship_client::{Field, MentorshipClient, RegistrationForm, ValidationErrors};

use super::report_errors;
use crate::context::AppContext;

#[derive(Args, Debug, Default)]
pub struct RegisterArgs {
    #[arg(long)]
    pub full_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Prompted for when omitted
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub phone_number: Option<String>,
    #[arg(long)]
    pub profile_picture_url: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub location: Option<String>,

    /// Register as a mentor
    #[arg(long)]
    pub mentor: bool,
    #[arg(long, requires = "mentor")]
    pub skills: Option<String>,
    #[arg(long, requires = "mentor")]
    pub expertise: Option<String>,
    #[arg(long, requires = "mentor")]
    pub experience_years: Option<String>,
    #[arg(long, requires = "mentor")]
    pub languages_spoken: Option<String>,
    #[arg(long, requires = "mentor")]
    pub availability: Option<String>,
    #[arg(long, requires = "mentor")]
    pub hourly_rate: Option<String>,
    #[arg(long, requires = "mentor")]
    pub linkedin_url: Option<String>,

    /// Prompt for every field, re-asking for the ones that fail
    #[arg(long, short)]
    pub interactive: bool,
}

impl RegisterArgs {
    /// Flags that were given, as form edits.
    fn edits(&self) -> Vec<(Field, &str)> {
        [
            (Field::FullName, &self.full_name),
            (Field::Email, &self.email),
            (Field::Password, &self.password),
            (Field::PhoneNumber, &self.phone_number),
            (Field::ProfilePictureUrl, &self.profile_picture_url),
            (Field::Bio, &self.bio),
            (Field::Location, &self.location),
            (Field::Skills, &self.skills),
            (Field::Expertise, &self.expertise),
            (Field::ExperienceYears, &self.experience_years),
            (Field::LanguagesSpoken, &self.languages_spoken),
            (Field::Availability, &self.availability),
            (Field::HourlyRate, &self.hourly_rate),
            (Field::LinkedinUrl, &self.linkedin_url),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

pub async fn run(ctx: &AppContext, args: RegisterArgs) -> Result<()> {
    let mut form = RegistrationForm::new(ctx.client.clone());
    form.set_mentor(args.mentor);

    for (field, value) in args.edits() {
        form.edit(field, value)
            .with_context(|| format!("Cannot set {}", field.label()))?;
    }

    if args.interactive {
        let is_mentor = ctx.confirm("Register as a mentor?", args.mentor)?;
        form.set_mentor(is_mentor);
        let fields = form.input().visible_fields();
        prompt_fields(ctx, &mut form, &fields)?;
    } else if form.input().account.password.is_empty() {
        let password = ctx.prompt_password(Field::Password.label())?;
        form.edit(Field::Password, &password)?;
    }

    loop {
        ctx.print_header("Creating account...");
        if form.submit().await.is_some() {
            ctx.print_success("Account created. Sign in with `mentorship login`.");
            return Ok(());
        }

        report_errors(ctx, form.errors());
        if !args.interactive {
            bail!("Registration failed");
        }

        let retry = fields_to_retry(form.errors(), &form.input().visible_fields());
        if form.errors().contains(Field::General) {
            // A rejection or transport failure is only retried on request,
            // after the details have been edited.
            if ctx.quiet || !ctx.confirm("Edit your details and try again?", false)? {
                bail!("Registration failed");
            }
        } else {
            ctx.print_warning("Please correct the fields above.");
        }
        prompt_fields(ctx, &mut form, &retry)?;
    }
}

/// Fields to re-ask after a failed submit: the ones that failed validation,
/// or every visible field when the server turned the attempt down.
fn fields_to_retry(errors: &ValidationErrors, visible: &[Field]) -> Vec<Field> {
    let failed: Vec<Field> = errors
        .fields()
        .into_iter()
        .filter(|field| *field != Field::General)
        .collect();

    if failed.is_empty() {
        visible.to_vec()
    } else {
        failed
    }
}

fn prompt_fields(
    ctx: &AppContext,
    form: &mut RegistrationForm<MentorshipClient>,
    fields: &[Field],
) -> Result<()> {
    for field in fields {
        let value = if *field == Field::Password {
            ctx.prompt_password(field.label())?
        } else {
            let current = form.input().field_value(*field).unwrap_or_default();
            ctx.prompt(field.label(), &current)?
        };
        form.edit(*field, &value)?;
    }
    Ok(())
}
