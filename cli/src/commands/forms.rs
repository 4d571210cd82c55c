//! Money movement forms: new transfer and new loan request.

use anyhow::Result;
use tracing::{info, instrument};
use ymbank_business::{new_loan_request, new_transfer};

use crate::commands::report_action;
use crate::context::App;
use crate::utils::{amount_or_prompt, text_or_prompt};

#[instrument(skip_all, name = "transfer")]
pub async fn run_transfer(app: &App, to: Option<String>, amount: Option<f64>) -> Result<()> {
    app.out.header("New transfer");

    let to_email = text_or_prompt(to, "To email:", "Email of the recipient's account", "--to")?;
    let amount = amount_or_prompt(amount)?;

    info!(amount, "Submitting transfer");
    let outcome = new_transfer(&app.controller, &to_email, amount).await?;
    report_action(app, outcome).await
}

#[instrument(skip_all, name = "request_loan")]
pub async fn run_request_loan(app: &App, amount: Option<f64>) -> Result<()> {
    app.out.header("New loan request");

    let amount = amount_or_prompt(amount)?;

    info!(amount, "Submitting loan request");
    let outcome = new_loan_request(&app.controller, amount).await?;
    report_action(app, outcome).await
}
