//! Wiring of the business layer for one CLI invocation.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, instrument};
use ymbank_business::{AuthenticatedClient, BusinessConfig, SessionController, SessionStore};

use crate::config::Config;
use crate::output::Output;
use crate::storage::FileStorage;

/// Everything a command needs.
pub struct App {
    pub controller: SessionController,
    pub out: Output,
}

impl App {
    pub fn new(config: BusinessConfig, store: SessionStore) -> Self {
        Self {
            controller: SessionController::new(AuthenticatedClient::new(config, store)),
            out: Output::new(),
        }
    }
}

/// Build the app from the config file, the `--api-url` override and the on-disk session.
#[instrument(skip_all, name = "build_app")]
pub fn build_app(api_url: Option<&str>) -> Result<App> {
    let config = Config::load()?.business_config(api_url);
    let storage = FileStorage::new(FileStorage::default_path()?);
    debug!(api = %config.api_url(), session = %storage.path().display(), "Building app");

    let store = SessionStore::new(Arc::new(storage));
    Ok(App::new(config, store))
}
