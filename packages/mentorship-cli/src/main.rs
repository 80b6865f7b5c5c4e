//! Operator CLI for the MentorConnect account API.

mod cmd;
mod context;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mentorship_client::{ClientConfig, MentorshipClient, DEFAULT_API_BASE_URL};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cmd::directory::UpdateMentorArgs;
use crate::cmd::register::RegisterArgs;
use crate::context::AppContext;

#[derive(Parser)]
#[command(name = "mentorship")]
#[command(about = "Register, sign in and browse the MentorConnect directory")]
struct Cli {
    /// Account API base URL
    #[arg(long, global = true, env = "API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, global = true, env = "API_TIMEOUT_SECS")]
    timeout_secs: Option<String>,

    /// Only print results
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a learner or mentor account
    Register(RegisterArgs),

    /// Sign in and print the session
    Login {
        #[arg(long)]
        email: Option<String>,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Browse and manage mentor profiles
    Mentors {
        #[command(subcommand)]
        command: MentorCommand,
    },

    /// Browse user accounts
    Users {
        #[command(subcommand)]
        command: DirectoryCommand,
    },
}

#[derive(Subcommand)]
enum DirectoryCommand {
    /// List every record
    List,
    /// Show one record by id
    Show { id: i64 },
}

#[derive(Subcommand)]
enum MentorCommand {
    /// List every mentor profile
    List,
    /// Show one mentor profile by id
    Show { id: i64 },
    /// Change fields of a mentor profile
    Update(UpdateMentorArgs),
    /// Delete a mentor profile
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads env-backed arguments
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,mentorship_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::from_values(&cli.api_url, cli.timeout_secs.as_deref())
        .context("Invalid API configuration")?;
    tracing::debug!(api_url = %config.api_base_url, "Configuration loaded");

    let client = MentorshipClient::new(&config).context("Failed to build API client")?;
    let ctx = AppContext::new(client, cli.quiet);

    match cli.command {
        Commands::Register(args) => cmd::register::run(&ctx, args).await,
        Commands::Login { email, password } => cmd::login::run(&ctx, email, password).await,
        Commands::Mentors { command } => match command {
            MentorCommand::List => cmd::directory::list_mentors(&ctx).await,
            MentorCommand::Show { id } => cmd::directory::show_mentor(&ctx, id).await,
            MentorCommand::Update(args) => cmd::directory::update_mentor(&ctx, args).await,
            MentorCommand::Delete { id, yes } => {
                cmd::directory::delete_mentor(&ctx, id, yes).await
            }
        },
        Commands::Users { command } => match command {
            DirectoryCommand::List => cmd::directory::list_users(&ctx).await,
            DirectoryCommand::Show { id } => cmd::directory::show_user(&ctx, id).await,
        },
    }
}
