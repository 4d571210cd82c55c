//! Session-aware HTTP client for the banking API.
//!
//! Every call reads the session first, optionally attaches the bearer token, sends a JSON body
//! and classifies what came back into an [`Outcome`]. The client only reports; acting on an
//! authentication rejection is left to [`crate::SessionController::observe`].

use log::{debug, info, warn};
use serde_json::Value;

use crate::config::BusinessConfig;
use crate::error_normalizer::ErrorPayload;
use crate::http::{self, Method};
use crate::session_store::SessionStore;

/// Header the server sets when it refuses the presented token.
pub const AUTH_CHALLENGE_HEADER: &str = "www-authenticate";

/// Whether a request should carry the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// Attach `Authorization: Bearer <token>` when a token is stored.
    Bearer,
    /// Never attach credentials (signup, login, activation).
    Anonymous,
}

/// A request that produced no usable domain answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("server responded with status {status} and a body that is not JSON: {message}")]
    InvalidJson { status: u16, message: String },
    #[error("request failed: {0}")]
    Network(String),
}

impl TransportError {
    /// Status code, when a response was received at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(status) | Self::InvalidJson { status, .. } => Some(*status),
            Self::Network(_) => None,
        }
    }
}

/// Classified result of one API call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 2xx response without an `error` field. Holds the whole parsed body.
    Success(Value),
    /// The body carried a non-null `error`, whatever the status code.
    DomainError {
        error: ErrorPayload,
        body: Value,
        /// The response carried the server's token rejection challenge.
        auth_rejected: bool,
    },
    TransportError(TransportError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Successful body, if any.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Success(body) => Some(body),
            _ => None,
        }
    }

    pub fn is_auth_rejected(&self) -> bool {
        matches!(
            self,
            Self::DomainError {
                auth_rejected: true,
                ..
            }
        )
    }

    /// Classify a received response.
    pub fn from_response(response: &http::Response) -> Self {
        let body: Value = match response.json() {
            Ok(body) => body,
            Err(e) => {
                return Self::TransportError(TransportError::InvalidJson {
                    status: response.status,
                    message: e.to_string(),
                });
            }
        };

        let error = body.get("error").map(ErrorPayload::from_value).unwrap_or_default();
        if !error.is_none() {
            return Self::DomainError {
                error,
                auth_rejected: response.header(AUTH_CHALLENGE_HEADER).is_some(),
                body,
            };
        }

        if !response.is_success() {
            return Self::TransportError(TransportError::Status(response.status));
        }

        Self::Success(body)
    }
}

/// HTTP client bound to an API base URL and a session store.
#[derive(Debug, Clone)]
pub struct AuthenticatedClient {
    config: BusinessConfig,
    session: SessionStore,
    http: http::Client,
}

impl AuthenticatedClient {
    pub fn new(config: BusinessConfig, session: SessionStore) -> Self {
        Self {
            config,
            session,
            http: http::Client::new(),
        }
    }

    pub fn config(&self) -> &BusinessConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Send one request to `path` under the versioned API root.
    ///
    /// Never fails: every result, including network errors, comes back as an [`Outcome`].
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
        auth: Auth,
    ) -> Outcome {
        let url = self.config.endpoint(path);
        let mut builder = self.http.request(method, url.as_str());

        if auth == Auth::Bearer {
            match self.session.get().token() {
                Some(token) => builder = builder.bearer(token),
                None => debug!("AuthenticatedClient: no session token for {method} {path}"),
            }
        }

        if let Some(body) = body {
            builder = match builder.json(body) {
                Ok(builder) => builder,
                Err(e) => {
                    return Outcome::TransportError(TransportError::Network(format!(
                        "failed to encode request body: {e}"
                    )));
                }
            };
        }

        info!("AuthenticatedClient: {method} {url}");
        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("AuthenticatedClient: {method} {path} failed: {e}");
                return Outcome::TransportError(TransportError::Network(e.message));
            }
        };

        let outcome = Outcome::from_response(&response);
        match &outcome {
            Outcome::Success(_) => debug!("AuthenticatedClient: {method} {path} succeeded"),
            Outcome::DomainError { auth_rejected, .. } => info!(
                "AuthenticatedClient: {method} {path} returned an error (status {}, auth rejected: {auth_rejected})",
                response.status
            ),
            Outcome::TransportError(e) => warn!("AuthenticatedClient: {method} {path}: {e}"),
        }
        outcome
    }
}
