use std::io::IsTerminal as _;

use anyhow::{Context as _, Result, bail};
use inquire::{CustomType, Password, Text};

fn ensure_interactive(flag: &str) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        bail!("Cannot prompt: stdin is not a terminal. Pass {flag} instead.");
    }
    Ok(())
}

/// Use `value` if given, otherwise ask for it.
pub fn text_or_prompt(value: Option<String>, label: &str, help: &str, flag: &str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    ensure_interactive(flag)?;
    Text::new(label)
        .with_help_message(help)
        .prompt()
        .with_context(|| format!("Failed to read {}", label.trim_end_matches(':')))
}

/// Ask for a password without echoing it.
pub fn prompt_password(confirm: bool) -> Result<String> {
    if !std::io::stdin().is_terminal() {
        bail!("Cannot prompt for a password: stdin is not a terminal.");
    }
    let prompt = Password::new("Password:");
    let prompt = if confirm {
        prompt.with_custom_confirmation_message("Confirm password:")
    } else {
        prompt.without_confirmation()
    };
    prompt.prompt().context("Failed to read password")
}

/// Use `value` if given, otherwise ask for an amount.
pub fn amount_or_prompt(value: Option<f64>) -> Result<f64> {
    if let Some(value) = value {
        return Ok(value);
    }
    ensure_interactive("--amount")?;
    CustomType::<f64>::new("Amount:")
        .with_error_message("Please enter a number")
        .prompt()
        .context("Failed to read amount")
}
