mod cli;
mod commands;
mod config;
mod context;
mod output;
mod render;
mod storage;
mod timing;
mod utils;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser as _;
use ymbank_business::{ListResource, Route};

use crate::cli::{Cli, Commands};
use crate::commands::ActionFailed;
use crate::context::build_app;
use crate::output::Output;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    timing::init_tracing(cli.verbose, cli.timing);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is::<ActionFailed>() => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e:#}");
            Output::new().error(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Some(Commands::Completions { shell }) = &cli.command {
        commands::generate_completions(*shell);
        return Ok(());
    }

    let app = build_app(cli.api_url.as_deref())?;

    match cli.command {
        Some(Commands::Signup { name, email }) => commands::run_signup(&app, name, email).await,
        Some(Commands::Login { email }) => commands::run_login(&app, email).await,
        Some(Commands::Logout) => commands::run_logout(&app).await,
        Some(Commands::Status) => commands::run_status(&app).await,
        Some(Commands::Activate { token }) => commands::run_activate(&app, token).await,
        Some(Commands::Profile) => commands::run_profile(&app).await,
        Some(Commands::Transfers) => commands::run_list(&app, &ListResource::transfers()).await,
        Some(Commands::Loans) => commands::run_list(&app, &ListResource::loans()).await,
        Some(Commands::LoanRequests) => {
            commands::run_list(&app, &ListResource::loan_requests()).await
        }
        Some(Commands::Transactions) => {
            commands::run_list(&app, &ListResource::transactions()).await
        }
        Some(Commands::Transfer { to, amount }) => commands::run_transfer(&app, to, amount).await,
        Some(Commands::RequestLoan { amount }) => commands::run_request_loan(&app, amount).await,
        Some(Commands::Completions { .. }) => Ok(()),
        None => {
            let route = if app.controller.affordances().show_logout {
                Route::Home
            } else {
                Route::Landing
            };
            commands::pages::navigate(&app, route).await
        }
    }
}
