use chrono::{DateTime, Utc};
use log::{error, info};
use serde::Deserialize;

use crate::client::{Auth, AuthenticatedClient, Outcome};
use crate::http::Method;

pub const HEALTHCHECK_PATH: &str = "/healthcheck";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppInfo {
    #[serde(rename = "Environment", default)]
    pub environment: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Deserialize)]
struct HealthcheckResponse {
    status: String,
    #[serde(default)]
    app_info: AppInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum APIAvailability {
    Available(AppInfo),
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiStatus {
    pub checked_at: DateTime<Utc>,
    pub availability: APIAvailability,
}

impl ApiStatus {
    pub fn is_available(&self) -> bool {
        matches!(self.availability, APIAvailability::Available(_))
    }
}

/// Ask the backend whether it is up.
pub async fn check_api_status(client: &AuthenticatedClient) -> ApiStatus {
    let checked_at = Utc::now();
    info!("Get API Status at {checked_at:?}");

    let outcome = client
        .request(HEALTHCHECK_PATH, Method::Get, None, Auth::Anonymous)
        .await;

    let availability = match outcome {
        Outcome::Success(data) => match serde_json::from_value::<HealthcheckResponse>(data) {
            Ok(health) if health.status == "available" => {
                info!("BackEnd Available, checked at {checked_at:?}");
                APIAvailability::Available(health.app_info)
            }
            Ok(health) => APIAvailability::Unavailable(format!("status is {}", health.status)),
            Err(e) => APIAvailability::Unavailable(e.to_string()),
        },
        Outcome::DomainError { error, .. } => APIAvailability::Unavailable(error.lines().join("; ")),
        Outcome::TransportError(e) => APIAvailability::Unavailable(e.to_string()),
    };

    if let APIAvailability::Unavailable(reason) = &availability {
        error!("API status check failed: {reason}");
    }

    ApiStatus {
        checked_at,
        availability,
    }
}
