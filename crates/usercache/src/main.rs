mod cache;
mod cli;
mod config;
mod output;
mod state;
mod storage;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use usercache_core::storage::{repository_error_to_exit_code, RepositoryError};
use usercache_core::users::NewUser;

use crate::{
    cli::{Cli, Commands, LogFormat},
    config::Config,
    output::{render_created, render_users},
    state::AppState,
};

/// Exit code for failures outside the repository (EX_SOFTWARE).
const EXIT_INTERNAL: u8 = 70;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.log_format);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Initialize the tracing subscriber, writing to stderr.
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "usercache=info".into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    let state = AppState::new(&config).await?;

    match cli.command {
        Commands::List => {
            let users = state.users.list_users().await?;
            println!("{}", render_users(&users, cli.format));
        }
        Commands::Add { name, email } => {
            let user = state
                .users
                .create_user(&NewUser::new(name, email))
                .await?;
            println!("{}", render_created(&user, cli.format));
        }
    }

    Ok(())
}

/// Map a top-level error to a process exit code.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<RepositoryError>()
        .map(repository_error_to_exit_code)
        .unwrap_or(EXIT_INTERNAL)
}
