//! The user's list resources and the one routine that fetches any of them.
//!
//! Each list endpoint answers `{<field>: [...]}`. A [`ListResource`] names the endpoint, the
//! envelope field, the message shown when no list comes back and the table columns.

use chrono::DateTime;
use log::{info, warn};
use serde_json::{Value, json};

use crate::client::{Auth, Outcome, TransportError};
use crate::display::display_value;
use crate::http::Method;
use crate::session_controller::SessionController;
use crate::session_store::SessionError;
use crate::table::ColumnSpec;

/// Shown for a date that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Describes one list endpoint.
#[derive(Debug, Clone)]
pub struct ListResource {
    /// Endpoint path under the API root.
    pub path: &'static str,
    /// Envelope field holding the records.
    pub field: &'static str,
    pub title: &'static str,
    pub empty_message: &'static str,
    pub columns: Vec<ColumnSpec>,
}

impl ListResource {
    pub fn transfers() -> Self {
        Self {
            path: "/users/transfers",
            field: "transfers",
            title: "Transfers",
            empty_message: "No Transfers",
            columns: vec![
                ColumnSpec::new("ID", "ID"),
                date_column(),
                ColumnSpec::new("FromUserID", "From User ID"),
                ColumnSpec::new("ToUserID", "To User ID"),
                ColumnSpec::new("Amount", "Amount"),
            ],
        }
    }

    pub fn loans() -> Self {
        Self {
            path: "/users/loans",
            field: "loans",
            title: "Loans",
            empty_message: "No Loans",
            columns: vec![
                ColumnSpec::new("ID", "ID"),
                date_column(),
                ColumnSpec::new("Amount", "Amount"),
                ColumnSpec::new("DailyInterestRate", "Daily Interest %"),
            ],
        }
    }

    pub fn loan_requests() -> Self {
        Self {
            path: "/users/loanrequests",
            field: "loan_requests",
            title: "Loan Requests",
            empty_message: "No Loan Requests",
            columns: vec![
                ColumnSpec::new("ID", "ID"),
                date_column(),
                ColumnSpec::new("Amount", "Amount"),
                ColumnSpec::new("DailyInterestRate", "Daily Interest %"),
                ColumnSpec::new("Status", "Status"),
            ],
        }
    }

    pub fn transactions() -> Self {
        Self {
            path: "/users/transactions",
            field: "transactions",
            title: "Transactions",
            empty_message: "No Transactions",
            columns: vec![
                ColumnSpec::new("ID", "ID"),
                date_column(),
                ColumnSpec::new("Amount", "Amount"),
                ColumnSpec::new("Action", "Action"),
                ColumnSpec::new("PerformedBy", "Performed By"),
            ],
        }
    }
}

/// `CreatedAt` shown as a calendar date, e.g. `Mon Jan 01 2024`.
pub fn date_column() -> ColumnSpec {
    ColumnSpec::new("CreatedAt", "Date").with_render(|record| format_date(&record["CreatedAt"]))
}

/// Format an RFC 3339 timestamp as `Www Mmm dd yyyy` in its own offset.
pub fn format_date(value: &Value) -> String {
    let Some(raw) = value.as_str() else {
        return INVALID_DATE.to_owned();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%a %b %d %Y").to_string(),
        Err(_) => INVALID_DATE.to_owned(),
    }
}

/// What a list page should show.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// Records to hand to the table renderer. May be empty.
    Records(Vec<Value>),
    /// No list came back.
    NoData {
        message: &'static str,
        /// Server error lines, if the server said why.
        errors: Vec<String>,
        /// The session was cleared because the server rejected the token.
        session_expired: bool,
    },
    Unavailable(TransportError),
}

/// Fetch one list resource for the signed-in user.
pub async fn fetch_list(
    controller: &SessionController,
    resource: &ListResource,
) -> Result<ListView, SessionError> {
    let token = controller.store().get().token().map(str::to_owned);
    let body = json!({ "token": token });
    let outcome = controller
        .client()
        .request(resource.path, Method::Put, Some(&body), Auth::Bearer)
        .await;
    let session_expired = controller.observe(&outcome)?;

    match outcome {
        Outcome::Success(data) => match data.get(resource.field) {
            Some(Value::Array(records)) => {
                info!(
                    "fetch_list: {} returned {} records",
                    resource.field,
                    records.len()
                );
                Ok(ListView::Records(records.clone()))
            }
            other => {
                warn!(
                    "fetch_list: {} is not a list: {}",
                    resource.field,
                    other.map(display_value).unwrap_or_default()
                );
                Ok(ListView::NoData {
                    message: resource.empty_message,
                    errors: Vec::new(),
                    session_expired,
                })
            }
        },
        Outcome::DomainError { error, .. } => Ok(ListView::NoData {
            message: resource.empty_message,
            errors: error.lines(),
            session_expired,
        }),
        Outcome::TransportError(e) => {
            warn!("fetch_list: {} unavailable: {e}", resource.field);
            Ok(ListView::Unavailable(e))
        }
    }
}
