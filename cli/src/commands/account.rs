//! Account commands: signup, activation and profile.

use anyhow::Result;
use tracing::{debug, info, instrument};
use ymbank_business::{ProfileView, activate, fetch_profile, signup};

use crate::commands::{ActionFailed, rejection_lines, report_action, report_session_expired};
use crate::context::App;
use crate::utils::{prompt_password, text_or_prompt};

#[instrument(skip_all, name = "signup")]
pub async fn run_signup(app: &App, name: Option<String>, email: Option<String>) -> Result<()> {
    app.out.header("Sign up for YM Bank");
    app.out.newline();

    let name = text_or_prompt(name, "Name:", "Your full name", "--name")?;
    let email = text_or_prompt(email, "Email:", "Used to sign in and to activate your account", "--email")?;
    let password = prompt_password(true)?;

    info!("Creating account");
    let outcome = signup(&app.controller, &name, &email, &password).await?;
    report_action(app, outcome).await
}

#[instrument(skip_all, name = "activate")]
pub async fn run_activate(app: &App, token: Option<String>) -> Result<()> {
    let token = text_or_prompt(
        token,
        "Activation token:",
        "The token from the activation email",
        "the token argument",
    )?;

    let outcome = activate(&app.controller, token.trim()).await?;
    report_action(app, outcome).await
}

#[instrument(skip_all, name = "profile")]
pub async fn run_profile(app: &App) -> Result<()> {
    match fetch_profile(&app.controller).await? {
        ProfileView::Details(profile) => {
            app.out.header("Profile");
            for (label, value) in profile.details() {
                app.out.labeled_indent(label, value, 2);
            }
            Ok(())
        }
        ProfileView::Rejected {
            lines,
            session_expired,
        } => {
            app.out.error_lines(&rejection_lines(lines));
            if session_expired {
                report_session_expired(app);
            }
            Err(ActionFailed.into())
        }
        ProfileView::Unavailable { message, error } => {
            debug!("Profile unavailable: {error}");
            app.out.alert(message);
            Err(ActionFailed.into())
        }
    }
}
