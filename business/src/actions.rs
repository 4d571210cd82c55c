//! Form submissions: signup, transfers, loan requests and account activation.

use log::{error, info, warn};
use serde::Serialize;
use serde_json::Value;

use crate::client::{Auth, Outcome, TransportError};
use crate::http::Method;
use crate::route::Route;
use crate::session_controller::{LoginOutcome, SessionController};
use crate::session_store::SessionError;

pub const SIGNUP_PATH: &str = "/users";
pub const TRANSFER_PATH: &str = "/transfer";
pub const LOAN_REQUEST_PATH: &str = "/loans/get";
pub const ACTIVATION_PATH: &str = "/users/activation";

pub const SIGNUP_MESSAGE: &str = "Signed up successfully. Please follow the instructions sent to your email to activate your account";
pub const ACTIVATION_MESSAGE: &str = "account activated successfully";
pub const TRANSFER_RETRY_MESSAGE: &str =
    "An error occured and your transfer did not go through, please try again";
pub const LOAN_REQUEST_RETRY_MESSAGE: &str =
    "An error occured and your loan request did not go through, please try again";
pub const RETRY_MESSAGE: &str = "An error occured, please try again";

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferRequest<'a> {
    pub to_email: &'a str,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoanRequest {
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivationRequest<'a> {
    pub token: &'a str,
}

/// Result of a form submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Accepted. `navigate_to` is the page to show next, if any.
    Completed {
        navigate_to: Option<Route>,
        message: Option<String>,
        /// Why a follow-up step, such as the login after signup, did not go through.
        errors: Vec<String>,
    },
    /// The server refused the submission.
    Rejected {
        lines: Vec<String>,
        /// The session was cleared because the server rejected the token.
        session_expired: bool,
    },
    /// No domain answer; `message` is the retry alert for this form.
    Unavailable {
        message: &'static str,
        error: TransportError,
    },
}

/// A submission either got a successful body or already has its final outcome.
enum Submitted {
    Accepted(Value),
    Settled(ActionOutcome),
}

struct Form<'a, T> {
    method: Method,
    path: &'a str,
    auth: Auth,
    retry_message: &'static str,
    request: &'a T,
}

async fn submit<T: Serialize>(
    controller: &SessionController,
    form: Form<'_, T>,
) -> Result<Submitted, SessionError> {
    let body = match serde_json::to_value(form.request) {
        Ok(body) => body,
        Err(e) => {
            return Ok(Submitted::Settled(ActionOutcome::Unavailable {
                message: form.retry_message,
                error: TransportError::Network(format!("failed to encode request body: {e}")),
            }));
        }
    };

    let outcome = controller
        .client()
        .request(form.path, form.method, Some(&body), form.auth)
        .await;
    let session_expired = form.auth == Auth::Bearer && controller.observe(&outcome)?;

    Ok(match outcome {
        Outcome::Success(data) => Submitted::Accepted(data),
        Outcome::DomainError { error, .. } => {
            info!("actions: {} rejected", form.path);
            Submitted::Settled(ActionOutcome::Rejected {
                lines: error.lines(),
                session_expired,
            })
        }
        Outcome::TransportError(error) => {
            error!("actions: {} failed: {error}", form.path);
            Submitted::Settled(ActionOutcome::Unavailable {
                message: form.retry_message,
                error,
            })
        }
    })
}

/// Create an account, then sign straight in with the same credentials.
pub async fn signup(
    controller: &SessionController,
    name: &str,
    email: &str,
    password: &str,
) -> Result<ActionOutcome, SessionError> {
    let form = Form {
        method: Method::Post,
        path: SIGNUP_PATH,
        auth: Auth::Anonymous,
        retry_message: RETRY_MESSAGE,
        request: &SignupRequest {
            name,
            email,
            password,
        },
    };
    if let Submitted::Settled(outcome) = submit(controller, form).await? {
        return Ok(outcome);
    }

    info!("actions: account created, logging in");
    let (navigate_to, errors) = match controller.login(email, password).await? {
        LoginOutcome::Authenticated { navigate_to } => (Some(navigate_to), Vec::new()),
        LoginOutcome::Rejected { lines } => {
            warn!("actions: login after signup was rejected");
            (None, lines)
        }
        LoginOutcome::Unavailable(e) => {
            warn!("actions: login after signup failed: {e}");
            (None, vec![RETRY_MESSAGE.to_owned()])
        }
    };

    Ok(ActionOutcome::Completed {
        navigate_to,
        message: Some(SIGNUP_MESSAGE.to_owned()),
        errors,
    })
}

/// Send money to another account.
pub async fn new_transfer(
    controller: &SessionController,
    to_email: &str,
    amount: f64,
) -> Result<ActionOutcome, SessionError> {
    let form = Form {
        method: Method::Put,
        path: TRANSFER_PATH,
        auth: Auth::Bearer,
        retry_message: TRANSFER_RETRY_MESSAGE,
        request: &TransferRequest { to_email, amount },
    };
    Ok(match submit(controller, form).await? {
        Submitted::Accepted(_) => ActionOutcome::Completed {
            navigate_to: Some(Route::Transfers),
            message: None,
            errors: Vec::new(),
        },
        Submitted::Settled(outcome) => outcome,
    })
}

/// Ask for a loan.
pub async fn new_loan_request(
    controller: &SessionController,
    amount: f64,
) -> Result<ActionOutcome, SessionError> {
    let form = Form {
        method: Method::Put,
        path: LOAN_REQUEST_PATH,
        auth: Auth::Bearer,
        retry_message: LOAN_REQUEST_RETRY_MESSAGE,
        request: &LoanRequest { amount },
    };
    Ok(match submit(controller, form).await? {
        Submitted::Accepted(_) => ActionOutcome::Completed {
            navigate_to: Some(Route::LoanRequests),
            message: None,
            errors: Vec::new(),
        },
        Submitted::Settled(outcome) => outcome,
    })
}

/// Activate an account with the token sent by email.
pub async fn activate(
    controller: &SessionController,
    token: &str,
) -> Result<ActionOutcome, SessionError> {
    let form = Form {
        method: Method::Put,
        path: ACTIVATION_PATH,
        auth: Auth::Anonymous,
        retry_message: RETRY_MESSAGE,
        request: &ActivationRequest { token },
    };
    Ok(match submit(controller, form).await? {
        Submitted::Accepted(data) => {
            let message = data
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(ACTIVATION_MESSAGE)
                .to_owned();
            ActionOutcome::Completed {
                navigate_to: None,
                message: Some(message),
                errors: Vec::new(),
            }
        }
        Submitted::Settled(outcome) => outcome,
    })
}
