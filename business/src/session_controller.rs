//! Login and logout transitions.
//!
//! The session has two states, derived from [`SessionStore`] on every read:
//!
//! - `LoggedOut --login ok--> LoggedIn`, navigating to [`Route::Home`]
//! - `LoggedIn --logout ok--> LoggedOut`, navigating to [`Route::Landing`]
//! - `LoggedIn --authenticated call rejected--> LoggedOut`, via [`SessionController::observe`]
//!
//! Every other result leaves the session as it was.

use log::{error, info, warn};
use serde_json::{Value, json};

use crate::client::{Auth, AuthenticatedClient, Outcome, TransportError};
use crate::http::Method;
use crate::route::Route;
use crate::session_store::{SessionError, SessionStatus, SessionStore};

/// Endpoint exchanging credentials for a token.
pub const LOGIN_PATH: &str = "/tokens/authorization";
/// Endpoint invalidating the current token.
pub const LOGOUT_PATH: &str = "/tokens/deactivate";

/// Shown when a logout did not go through.
pub const LOGOUT_RETRY_MESSAGE: &str = "an error occured, please try again later";
/// Shown when a login answer carried no token.
pub const MISSING_TOKEN_MESSAGE: &str = "login response did not include a token";

/// Which session controls a page should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub show_login: bool,
    pub show_logout: bool,
}

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Authenticated { navigate_to: Route },
    /// The server refused the credentials. Lines are ready for display.
    Rejected { lines: Vec<String> },
    Unavailable(TransportError),
}

/// Result of a logout attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum LogoutOutcome {
    LoggedOut { navigate_to: Route },
    /// There was no session to end.
    NotLoggedIn,
    /// The server did not confirm; the session is unchanged.
    Failed { message: String },
}

/// Drives session transitions over an [`AuthenticatedClient`].
#[derive(Debug, Clone)]
pub struct SessionController {
    client: AuthenticatedClient,
}

impl SessionController {
    pub fn new(client: AuthenticatedClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &AuthenticatedClient {
        &self.client
    }

    pub fn store(&self) -> &SessionStore {
        self.client.session()
    }

    pub fn status(&self) -> SessionStatus {
        self.store().get().status()
    }

    /// Login is offered exactly when logout is not.
    pub fn affordances(&self) -> Affordances {
        let logged_in = self.store().get().is_logged_in();
        Affordances {
            show_login: !logged_in,
            show_logout: logged_in,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, SessionError> {
        info!("SessionController: logging in");
        let body = json!({ "email": email, "password": password });
        let outcome = self
            .client
            .request(LOGIN_PATH, Method::Put, Some(&body), Auth::Anonymous)
            .await;

        match outcome {
            Outcome::Success(data) => match data.get("token").and_then(Value::as_str) {
                Some(token) if !token.is_empty() => {
                    self.store().set_logged_in(token)?;
                    info!("SessionController: login succeeded");
                    Ok(LoginOutcome::Authenticated {
                        navigate_to: Route::Home,
                    })
                }
                _ => {
                    warn!("SessionController: login succeeded without a token");
                    Ok(LoginOutcome::Rejected {
                        lines: vec![MISSING_TOKEN_MESSAGE.to_owned()],
                    })
                }
            },
            Outcome::DomainError { error, .. } => {
                info!("SessionController: login rejected");
                Ok(LoginOutcome::Rejected {
                    lines: error.lines(),
                })
            }
            Outcome::TransportError(e) => {
                error!("SessionController: login failed: {e}");
                Ok(LoginOutcome::Unavailable(e))
            }
        }
    }

    /// End the session on the server, then locally.
    ///
    /// The local session is only cleared once the server confirmed, or once the server
    /// has refused the token outright.
    pub async fn logout(&self) -> Result<LogoutOutcome, SessionError> {
        let session = self.store().get();
        let Some(token) = session.token() else {
            info!("SessionController: logout requested without a session");
            return Ok(LogoutOutcome::NotLoggedIn);
        };

        let body = json!({ "token": token });
        let outcome = self
            .client
            .request(LOGOUT_PATH, Method::Put, Some(&body), Auth::Bearer)
            .await;

        match outcome {
            Outcome::Success(_) => {
                self.store().set_logged_out()?;
                info!("SessionController: logged out");
                Ok(LogoutOutcome::LoggedOut {
                    navigate_to: Route::Landing,
                })
            }
            Outcome::DomainError {
                auth_rejected: true,
                ..
            } => {
                self.store().set_logged_out()?;
                info!("SessionController: token already rejected, session cleared");
                Ok(LogoutOutcome::LoggedOut {
                    navigate_to: Route::Landing,
                })
            }
            Outcome::DomainError { error, .. } => {
                warn!("SessionController: logout refused: {:?}", error.lines());
                Ok(LogoutOutcome::Failed {
                    message: LOGOUT_RETRY_MESSAGE.to_owned(),
                })
            }
            Outcome::TransportError(e) => {
                error!("SessionController: logout failed: {e}");
                Ok(LogoutOutcome::Failed {
                    message: LOGOUT_RETRY_MESSAGE.to_owned(),
                })
            }
        }
    }

    /// Apply session policy to the outcome of an authenticated call.
    ///
    /// Returns `true` when the server rejected the token and the session was cleared.
    pub fn observe(&self, outcome: &Outcome) -> Result<bool, SessionError> {
        if !outcome.is_auth_rejected() {
            return Ok(false);
        }
        warn!("SessionController: server rejected the session token, logging out");
        self.store().set_logged_out()?;
        Ok(true)
    }
}
