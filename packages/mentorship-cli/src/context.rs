//! Application context with shared state and utilities

use anyhow::Result;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};
use mentorship_client::MentorshipClient;

/// Application context passed to all commands
pub struct AppContext {
    pub client: MentorshipClient,
    pub quiet: bool,
}

impl AppContext {
    pub fn new(client: MentorshipClient, quiet: bool) -> Self {
        Self { client, quiet }
    }

    pub fn theme(&self) -> ColorfulTheme {
        ColorfulTheme::default()
    }

    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.quiet {
            return Ok(default);
        }
        Ok(Confirm::with_theme(&self.theme())
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    /// Prompt for a line of text. Empty input is allowed; validation is the
    /// form's job.
    pub fn prompt(&self, prompt: &str, initial: &str) -> Result<String> {
        Ok(Input::<String>::with_theme(&self.theme())
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?)
    }

    pub fn prompt_password(&self, prompt: &str) -> Result<String> {
        Ok(Password::with_theme(&self.theme())
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?)
    }

    pub fn print_header(&self, msg: &str) {
        if !self.quiet {
            println!();
            println!("{}", msg.bold());
        }
    }

    pub fn print_success(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg.green());
        }
    }

    pub fn print_warning(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg.yellow());
        }
    }

    pub fn print_error(&self, msg: &str) {
        eprintln!("{}", msg.red());
    }
}
