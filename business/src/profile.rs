//! The signed-in user's account details.

use log::{info, warn};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::actions::RETRY_MESSAGE;
use crate::client::{Auth, Outcome, TransportError};
use crate::http::Method;
use crate::resources::format_date;
use crate::session_controller::SessionController;
use crate::session_store::SessionError;

pub const PROFILE_PATH: &str = "/users/get";

/// Account details as returned under `user`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub id: i64,
    pub created_at: String,
    pub name: String,
    pub email: String,
    pub account_balance: f64,
    pub activated: bool,
}

impl UserProfile {
    /// Labelled values in display order.
    pub fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("Created", format_date(&Value::String(self.created_at.clone()))),
            ("Name", self.name.clone()),
            ("Email", self.email.clone()),
            ("Account Balance", self.account_balance.to_string()),
            ("Activated", self.activated.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileView {
    Details(UserProfile),
    Rejected {
        lines: Vec<String>,
        session_expired: bool,
    },
    Unavailable {
        message: &'static str,
        error: TransportError,
    },
}

pub async fn fetch_profile(controller: &SessionController) -> Result<ProfileView, SessionError> {
    let token = controller.store().get().token().map(str::to_owned);
    let body = json!({ "token": token });
    let outcome = controller
        .client()
        .request(PROFILE_PATH, Method::Put, Some(&body), Auth::Bearer)
        .await;
    let session_expired = controller.observe(&outcome)?;

    Ok(match outcome {
        Outcome::Success(data) => {
            let user = data.get("user").cloned().unwrap_or(Value::Null);
            match serde_json::from_value::<UserProfile>(user) {
                Ok(profile) => {
                    info!("fetch_profile: loaded user {}", profile.id);
                    ProfileView::Details(profile)
                }
                Err(e) => {
                    warn!("fetch_profile: unexpected user shape: {e}");
                    ProfileView::Unavailable {
                        message: RETRY_MESSAGE,
                        error: TransportError::InvalidJson {
                            status: 200,
                            message: e.to_string(),
                        },
                    }
                }
            }
        }
        Outcome::DomainError { error, .. } => ProfileView::Rejected {
            lines: error.lines(),
            session_expired,
        },
        Outcome::TransportError(error) => ProfileView::Unavailable {
            message: RETRY_MESSAGE,
            error,
        },
    })
}
