mod actions;
mod api_status;
mod client;
mod config;
mod display;
mod error_normalizer;
pub mod http;
mod profile;
mod resources;
mod route;
mod session_controller;
mod session_store;
mod table;

#[cfg(test)]
mod test_utils;

pub use actions::{
    ActionOutcome, LOAN_REQUEST_RETRY_MESSAGE, RETRY_MESSAGE, SIGNUP_MESSAGE,
    TRANSFER_RETRY_MESSAGE, activate, new_loan_request, new_transfer, signup,
};
pub use api_status::{APIAvailability, ApiStatus, AppInfo, check_api_status};
pub use client::{AUTH_CHALLENGE_HEADER, Auth, AuthenticatedClient, Outcome, TransportError};
pub use config::{BusinessConfig, DEFAULT_API_BASE_URL};
pub use display::display_value;
pub use error_normalizer::{ErrorPayload, normalize};
pub use profile::{ProfileView, UserProfile, fetch_profile};
pub use resources::{INVALID_DATE, ListResource, ListView, date_column, fetch_list, format_date};
pub use route::Route;
pub use session_controller::{
    Affordances, LOGOUT_RETRY_MESSAGE, LoginOutcome, LogoutOutcome, MISSING_TOKEN_MESSAGE,
    SessionController,
};
pub use session_store::{
    LOGGED_IN, MemoryStorage, STATUS_KEY, Session, SessionError, SessionStatus, SessionStore,
    Storage, StorageError, TOKEN_KEY,
};
pub use table::{CellRenderer, ColumnSpec, Grid, RenderTarget, render};
