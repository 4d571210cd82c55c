//! Static pages and navigation between pages.

use anyhow::Result;
use tracing::{debug, instrument};
use ymbank_business::{ListResource, Route};

use crate::commands::list::run_list;
use crate::context::App;

pub const HOME_GREETING: &str = "Welcome To YM Bank";

/// Show the page for `route`.
#[instrument(skip_all, name = "navigate", fields(route = route.name()))]
pub async fn navigate(app: &App, route: Route) -> Result<()> {
    debug!("Navigating to {}", route.name());
    match route {
        Route::Landing => {
            show_landing(app);
            Ok(())
        }
        Route::Home => {
            show_home(app);
            Ok(())
        }
        Route::Transfers => run_list(app, &ListResource::transfers()).await,
        Route::LoanRequests => run_list(app, &ListResource::loan_requests()).await,
    }
}

pub fn show_home(app: &App) {
    app.out.header(HOME_GREETING);
    show_affordances(app);
}

pub fn show_landing(app: &App) {
    app.out.header("YM Bank");
    app.out.dim("Banking from your terminal.");
    show_affordances(app);
}

/// Offer whichever of login and logout fits the current session.
pub fn show_affordances(app: &App) {
    let affordances = app.controller.affordances();
    if affordances.show_login {
        app.out
            .dim("Run `ymbank login` to sign in or `ymbank signup` to open an account.");
    }
    if affordances.show_logout {
        app.out.dim("Run `ymbank logout` to sign out.");
    }
}
