//! Session commands: login, logout and status.

use anyhow::Result;
use tracing::{error, info, instrument};
use ymbank_business::{
    APIAvailability, LoginOutcome, LogoutOutcome, RETRY_MESSAGE, SessionStatus, check_api_status,
};

use crate::commands::{ActionFailed, rejection_lines};
use crate::commands::pages::{navigate, show_affordances};
use crate::context::App;
use crate::utils::{prompt_password, text_or_prompt};

#[instrument(skip_all, name = "login")]
pub async fn run_login(app: &App, email: Option<String>) -> Result<()> {
    app.out.header("Login to YM Bank");
    app.out.newline();

    let email = text_or_prompt(email, "Email:", "The email you signed up with", "--email")?;
    let password = prompt_password(false)?;

    info!("Attempting login");
    match app.controller.login(&email, &password).await? {
        LoginOutcome::Authenticated { navigate_to } => {
            app.out.success("Logged in");
            app.out.newline();
            navigate(app, navigate_to).await
        }
        LoginOutcome::Rejected { lines } => {
            error!("Login rejected");
            app.out.error_lines(&rejection_lines(lines));
            Err(ActionFailed.into())
        }
        LoginOutcome::Unavailable(e) => {
            error!("Login failed: {e}");
            app.out.alert(RETRY_MESSAGE);
            Err(ActionFailed.into())
        }
    }
}

#[instrument(skip_all, name = "logout")]
pub async fn run_logout(app: &App) -> Result<()> {
    match app.controller.logout().await? {
        LogoutOutcome::LoggedOut { navigate_to } => {
            app.out.success("Logged out");
            app.out.newline();
            navigate(app, navigate_to).await
        }
        LogoutOutcome::NotLoggedIn => {
            app.out.info("You are not logged in.");
            Ok(())
        }
        LogoutOutcome::Failed { message } => {
            app.out.alert(message);
            Err(ActionFailed.into())
        }
    }
}

#[instrument(skip_all, name = "status")]
pub async fn run_status(app: &App) -> Result<()> {
    let status = check_api_status(app.controller.client()).await;

    app.out.header("YM Bank status");
    app.out
        .labeled_indent("API", app.controller.client().config().api_url(), 2);
    match &status.availability {
        APIAvailability::Available(info) => {
            app.out.labeled_indent("Availability", "available", 2);
            app.out.labeled_indent("Environment", &info.environment, 2);
            app.out.labeled_indent("Version", &info.version, 2);
        }
        APIAvailability::Unavailable(reason) => {
            app.out.labeled_indent("Availability", "unavailable", 2);
            app.out.labeled_indent("Reason", reason, 2);
        }
    }
    app.out.labeled_indent(
        "Checked at",
        status.checked_at.format("%Y-%m-%d %H:%M:%S UTC"),
        2,
    );

    let session = match app.controller.status() {
        SessionStatus::LoggedIn => "logged in",
        SessionStatus::LoggedOut => "logged out",
    };
    app.out.labeled_indent("Session", session, 2);
    app.out.newline();
    show_affordances(app);

    if status.is_available() {
        Ok(())
    } else {
        Err(ActionFailed.into())
    }
}
