//! Navigation targets.
//!
//! The core never navigates by itself; operations return the [`Route`] the page layer should
//! show next.

use serde::{Deserialize, Serialize};

/// A page of the front end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Landing page, shown when no user is signed in.
    #[default]
    Landing,
    /// Home page after a successful login.
    Home,
    /// The user's transfers.
    Transfers,
    /// The user's loan requests.
    LoanRequests,
}

impl Route {
    /// Short page name, used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Home => "home",
            Self::Transfers => "transfers",
            Self::LoanRequests => "loan-requests",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_default_is_landing() {
        assert_eq!(Route::default(), Route::Landing);
    }

    #[test]
    fn test_route_equality() {
        assert_eq!(Route::Home, Route::Home);
        assert_ne!(Route::Landing, Route::Home);
    }

    #[test]
    fn test_route_names() {
        assert_eq!(Route::Transfers.name(), "transfers");
        assert_eq!(Route::LoanRequests.name(), "loan-requests");
    }
}
