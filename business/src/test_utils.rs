//! Test utilities for exercising the client data layer against a mock server.
//!
//! # Example
//!
//! ```ignore
//! let test_ctx = TestContext::new().await;
//! test_ctx.set_authenticated("test_token");
//! test_ctx.mock_list("/users/loans", json!({"loans": []})).await;
//!
//! let view = fetch_list(&test_ctx.controller, &ListResource::loans()).await?;
//! ```

#![cfg(test)]

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

use crate::{AuthenticatedClient, BusinessConfig, SessionController, SessionStore};

/// Token used by [`TestContext::set_authenticated`] callers throughout the tests.
pub const TEST_TOKEN: &str = "test_token";

/// Test context holding a mock server and a controller pointed at it.
pub struct TestContext {
    pub mock_server: MockServer,
    pub store: SessionStore,
    pub controller: SessionController,
}

impl TestContext {
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let store = SessionStore::in_memory();
        let client = AuthenticatedClient::new(BusinessConfig::new(mock_server.uri()), store.clone());

        Self {
            mock_server,
            store,
            controller: SessionController::new(client),
        }
    }

    pub fn set_authenticated(&self, token: &str) {
        self.store.set_logged_in(token).expect("store token");
    }

    /// Mock an authenticated `PUT` list endpoint that expects `{token}`.
    pub async fn mock_list(&self, endpoint: &str, body: Value) {
        Mock::given(method("PUT"))
            .and(path(format!("/v1{endpoint}")))
            .and(header("Authorization", format!("Bearer {TEST_TOKEN}").as_str()))
            .and(body_json(json!({ "token": TEST_TOKEN })))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.mock_server)
            .await;
    }

    /// Mock an endpoint answering with the server's token rejection.
    pub async fn mock_token_rejected(&self, verb: &str, endpoint: &str) {
        Mock::given(method(verb))
            .and(path(format!("/v1{endpoint}")))
            .respond_with(
                ResponseTemplate::new(400)
                    .insert_header("WWW-Authenticate", "Bearer")
                    .set_body_json(json!({ "error": "token invalid or missing" })),
            )
            .mount(&self.mock_server)
            .await;
    }

    /// Mock any `PUT` endpoint with a fixed status and body.
    pub async fn mock_put(&self, endpoint: &str, status: u16, body: Value) {
        Mock::given(method("PUT"))
            .and(path(format!("/v1{endpoint}")))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.mock_server)
            .await;
    }

    /// Mock the login endpoint handing out `token`.
    pub async fn mock_login(&self, token: &str) {
        self.mock_put("/tokens/authorization", 200, json!({ "token": token }))
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ActionOutcome, ListResource, ListView, LoginOutcome, LogoutOutcome, ProfileView, Route,
        Session, SessionStatus, TransportError, fetch_list, fetch_profile, new_loan_request,
        new_transfer, signup,
    };

    #[tokio::test]
    async fn test_context_creation() {
        let test_ctx = TestContext::new().await;
        assert!(!test_ctx.mock_server.uri().is_empty());
        assert_eq!(test_ctx.controller.status(), SessionStatus::LoggedOut);
    }

    #[tokio::test]
    async fn test_login_stores_token_and_goes_home() {
        let test_ctx = TestContext::new().await;
        test_ctx.mock_login("abc").await;

        let outcome = test_ctx
            .controller
            .login("ada@example.com", "secret123")
            .await
            .expect("login");

        assert_eq!(
            outcome,
            LoginOutcome::Authenticated {
                navigate_to: Route::Home
            }
        );
        assert_eq!(test_ctx.store.get(), Session::logged_in("abc"));
    }

    #[tokio::test]
    async fn test_login_rejected_stays_logged_out() {
        let test_ctx = TestContext::new().await;
        test_ctx
            .mock_put(
                "/tokens/authorization",
                401,
                json!({ "error": "invaild credentials" }),
            )
            .await;

        let outcome = test_ctx
            .controller
            .login("ada@example.com", "wrong")
            .await
            .expect("login");

        assert_eq!(
            outcome,
            LoginOutcome::Rejected {
                lines: vec!["invaild credentials".to_owned()]
            }
        );
        assert_eq!(test_ctx.store.get(), Session::logged_out());
    }

    #[tokio::test]
    async fn test_login_without_token_is_not_accepted() {
        let test_ctx = TestContext::new().await;
        test_ctx
            .mock_put("/tokens/authorization", 200, json!({ "token": "" }))
            .await;

        let outcome = test_ctx
            .controller
            .login("ada@example.com", "secret123")
            .await
            .expect("login");

        assert!(matches!(outcome, LoginOutcome::Rejected { .. }));
        assert!(!test_ctx.store.get().is_logged_in());
    }

    #[tokio::test]
    async fn test_login_server_error_is_unavailable() {
        let test_ctx = TestContext::new().await;
        test_ctx
            .mock_put("/tokens/authorization", 500, json!({}))
            .await;

        let outcome = test_ctx
            .controller
            .login("ada@example.com", "secret123")
            .await
            .expect("login");

        assert_eq!(outcome, LoginOutcome::Unavailable(TransportError::Status(500)));
    }

    #[tokio::test]
    async fn test_logout_confirmed_clears_session() {
        let test_ctx = TestContext::new().await;
        test_ctx.set_authenticated(TEST_TOKEN);
        Mock::given(method("PUT"))
            .and(path("/v1/tokens/deactivate"))
            .and(header("Authorization", "Bearer test_token"))
            .and(body_json(json!({ "token": TEST_TOKEN })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "message": "token deactivated" })),
            )
            .expect(1)
            .mount(&test_ctx.mock_server)
            .await;

        let outcome = test_ctx.controller.logout().await.expect("logout");

        assert_eq!(
            outcome,
            LogoutOutcome::LoggedOut {
                navigate_to: Route::Landing
            }
        );
        assert_eq!(test_ctx.store.get(), Session::logged_out());
    }

    #[tokio::test]
    async fn test_failed_logout_leaves_session_unchanged() {
        let test_ctx = TestContext::new().await;
        test_ctx.set_authenticated(TEST_TOKEN);
        test_ctx
            .mock_put("/tokens/deactivate", 500, json!({ "error": "the server encountered a problem" }))
            .await;

        let outcome = test_ctx.controller.logout().await.expect("logout");

        assert!(matches!(outcome, LogoutOutcome::Failed { .. }));
        assert_eq!(test_ctx.store.get(), Session::logged_in(TEST_TOKEN));
    }

    #[tokio::test]
    async fn test_logout_with_rejected_token_clears_session() {
        let test_ctx = TestContext::new().await;
        test_ctx.set_authenticated(TEST_TOKEN);
        test_ctx.mock_token_rejected("PUT", "/tokens/deactivate").await;

        let outcome = test_ctx.controller.logout().await.expect("logout");

        assert_eq!(
            outcome,
            LogoutOutcome::LoggedOut {
                navigate_to: Route::Landing
            }
        );
        assert!(!test_ctx.store.get().is_logged_in());
    }

    #[tokio::test]
    async fn test_fetch_list_returns_records() {
        let test_ctx = TestContext::new().await;
        test_ctx.set_authenticated(TEST_TOKEN);
        test_ctx
            .mock_list(
                "/users/loans",
                json!({ "loans": [{ "ID": 1, "Amount": 100 }, { "ID": 2, "Amount": 250 }] }),
            )
            .await;

        let view = fetch_list(&test_ctx.controller, &ListResource::loans())
            .await
            .expect("fetch");

        match view {
            ListView::Records(records) => {
                assert_eq!(records.len(), 2);
                assert_eq!(records[1]["Amount"], 250);
            }
            other => panic!("Expected Records, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_list_not_an_array() {
        let test_ctx = TestContext::new().await;
        test_ctx.set_authenticated(TEST_TOKEN);
        test_ctx
            .mock_list("/users/loanrequests", json!({ "loan_requests": "not-an-array" }))
            .await;

        let view = fetch_list(&test_ctx.controller, &ListResource::loan_requests())
            .await
            .expect("fetch");

        assert_eq!(
            view,
            ListView::NoData {
                message: "No Loan Requests",
                errors: Vec::new(),
                session_expired: false,
            }
        );
    }

    #[tokio::test]
    async fn test_fetch_list_with_rejected_token_logs_out() {
        let test_ctx = TestContext::new().await;
        test_ctx.set_authenticated(TEST_TOKEN);
        test_ctx.mock_token_rejected("PUT", "/users/transactions").await;

        let view = fetch_list(&test_ctx.controller, &ListResource::transactions())
            .await
            .expect("fetch");

        assert_eq!(
            view,
            ListView::NoData {
                message: "No Transactions",
                errors: vec!["token invalid or missing".to_owned()],
                session_expired: true,
            }
        );
        assert_eq!(test_ctx.controller.status(), SessionStatus::LoggedOut);
    }

    #[tokio::test]
    async fn test_transfer_field_error() {
        let test_ctx = TestContext::new().await;
        test_ctx.set_authenticated(TEST_TOKEN);
        test_ctx
            .mock_put(
                "/transfer",
                422,
                json!({ "error": { "to_email": "must be a valid email" } }),
            )
            .await;

        let outcome = new_transfer(&test_ctx.controller, "not-an-email", 10.0)
            .await
            .expect("transfer");

        assert_eq!(
            outcome,
            ActionOutcome::Rejected {
                lines: vec!["to_email: must be a valid email".to_owned()],
                session_expired: false,
            }
        );
    }

    #[tokio::test]
    async fn test_transfer_success_goes_to_transfers() {
        let test_ctx = TestContext::new().await;
        test_ctx.set_authenticated(TEST_TOKEN);
        Mock::given(method("PUT"))
            .and(path("/v1/transfer"))
            .and(body_json(json!({ "to_email": "bob@example.com", "amount": 25.0 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
            .mount(&test_ctx.mock_server)
            .await;

        let outcome = new_transfer(&test_ctx.controller, "bob@example.com", 25.0)
            .await
            .expect("transfer");

        assert_eq!(
            outcome,
            ActionOutcome::Completed {
                navigate_to: Some(Route::Transfers),
                message: None,
                errors: Vec::new(),
            }
        );
    }

    #[tokio::test]
    async fn test_loan_request_server_error_alerts() {
        let test_ctx = TestContext::new().await;
        test_ctx.set_authenticated(TEST_TOKEN);
        test_ctx.mock_put("/loans/get", 503, json!({})).await;

        let outcome = new_loan_request(&test_ctx.controller, 100.0)
            .await
            .expect("loan request");

        assert!(matches!(
            outcome,
            ActionOutcome::Unavailable {
                error: TransportError::Status(503),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_signup_logs_in() {
        let test_ctx = TestContext::new().await;
        Mock::given(method("POST"))
            .and(path("/v1/users"))
            .respond_with(
                ResponseTemplate::new(202).set_body_json(json!({ "user": { "id": 9, "name": "Ada" } })),
            )
            .mount(&test_ctx.mock_server)
            .await;
        test_ctx.mock_login("fresh").await;

        let outcome = signup(&test_ctx.controller, "Ada", "ada@example.com", "secret123")
            .await
            .expect("signup");

        assert!(matches!(
            outcome,
            ActionOutcome::Completed {
                navigate_to: Some(Route::Home),
                message: Some(_),
                ref errors,
            } if errors.is_empty()
        ));
        assert_eq!(test_ctx.store.get().token(), Some("fresh"));
    }

    #[tokio::test]
    async fn test_signup_reports_rejected_login() {
        let test_ctx = TestContext::new().await;
        Mock::given(method("POST"))
            .and(path("/v1/users"))
            .respond_with(
                ResponseTemplate::new(202).set_body_json(json!({ "user": { "id": 9, "name": "Ada" } })),
            )
            .mount(&test_ctx.mock_server)
            .await;
        test_ctx
            .mock_put(
                "/tokens/authorization",
                401,
                json!({ "error": "invaild credentials" }),
            )
            .await;

        let outcome = signup(&test_ctx.controller, "Ada", "ada@example.com", "secret123")
            .await
            .expect("signup");

        assert_eq!(
            outcome,
            ActionOutcome::Completed {
                navigate_to: None,
                message: Some(crate::SIGNUP_MESSAGE.to_owned()),
                errors: vec!["invaild credentials".to_owned()],
            }
        );
        assert_eq!(test_ctx.controller.status(), SessionStatus::LoggedOut);
    }

    #[tokio::test]
    async fn test_signup_reports_unreachable_login() {
        let test_ctx = TestContext::new().await;
        Mock::given(method("POST"))
            .and(path("/v1/users"))
            .respond_with(ResponseTemplate::new(202).set_body_json(json!({ "user": { "id": 9 } })))
            .mount(&test_ctx.mock_server)
            .await;
        test_ctx
            .mock_put("/tokens/authorization", 502, json!({}))
            .await;

        let outcome = signup(&test_ctx.controller, "Ada", "ada@example.com", "secret123")
            .await
            .expect("signup");

        assert!(matches!(
            outcome,
            ActionOutcome::Completed {
                navigate_to: None,
                ref errors,
                ..
            } if errors == &[crate::RETRY_MESSAGE.to_owned()]
        ));
    }

    #[tokio::test]
    async fn test_profile_details() {
        let test_ctx = TestContext::new().await;
        test_ctx.set_authenticated(TEST_TOKEN);
        test_ctx
            .mock_put(
                "/users/get",
                200,
                json!({ "user": {
                    "id": 1,
                    "created_at": "2024-01-01T00:00:00Z",
                    "name": "Ada",
                    "email": "ada@example.com",
                    "account_balance": 10,
                    "activated": false
                }}),
            )
            .await;

        let view = fetch_profile(&test_ctx.controller).await.expect("profile");

        match view {
            ProfileView::Details(profile) => {
                assert_eq!(profile.name, "Ada");
                assert!(!profile.activated);
            }
            other => panic!("Expected Details, got {other:?}"),
        }
    }
}
