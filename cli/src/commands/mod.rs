//! Command implementations for the YM Bank CLI.
//!
//! Each page of the front end is a subcommand. Commands print everything themselves and
//! return [`ActionFailed`] when the user's action did not go through.

pub mod account;
pub mod completions;
pub mod forms;
pub mod list;
pub mod login;
pub mod pages;

pub use account::{run_activate, run_profile, run_signup};
pub use completions::generate_completions;
pub use forms::{run_request_loan, run_transfer};
pub use list::run_list;
pub use login::{run_login, run_logout, run_status};

use anyhow::Result;
use tracing::debug;
use ymbank_business::{ActionOutcome, RETRY_MESSAGE};

use crate::context::App;

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// The action failed and the reason has already been printed.
#[derive(Debug, thiserror::Error)]
#[error("action failed")]
pub struct ActionFailed;

/// Tell the user their session is gone.
pub fn report_session_expired(app: &App) {
    app.out.warning(SESSION_EXPIRED_MESSAGE);
    app.out.dim("Run `ymbank login` to sign in.");
}

/// Server error lines to print. An error that normalizes to nothing still gets a line.
pub fn rejection_lines(lines: Vec<String>) -> Vec<String> {
    if lines.is_empty() {
        vec![RETRY_MESSAGE.to_owned()]
    } else {
        lines
    }
}

/// Show the result of a form submission and follow its navigation.
pub async fn report_action(app: &App, outcome: ActionOutcome) -> Result<()> {
    match outcome {
        ActionOutcome::Completed {
            navigate_to,
            message,
            errors,
        } => {
            if let Some(message) = message {
                app.out.success(message);
            }
            app.out.error_lines(&errors);
            if let Some(route) = navigate_to {
                app.out.newline();
                pages::navigate(app, route).await?;
            }
            Ok(())
        }
        ActionOutcome::Rejected {
            lines,
            session_expired,
        } => {
            app.out.error_lines(&rejection_lines(lines));
            if session_expired {
                report_session_expired(app);
            }
            Err(ActionFailed.into())
        }
        ActionOutcome::Unavailable { message, error } => {
            debug!("Request unavailable: {error}");
            app.out.alert(message);
            Err(ActionFailed.into())
        }
    }
}
