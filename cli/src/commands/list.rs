//! List pages: transfers, loans, loan requests and transactions.

use anyhow::Result;
use tracing::{debug, instrument};
use ymbank_business::{ListResource, ListView, RETRY_MESSAGE, fetch_list, render};

use crate::commands::{ActionFailed, report_session_expired};
use crate::context::App;
use crate::render::TerminalTable;

#[instrument(skip_all, name = "list", fields(resource = resource.field))]
pub async fn run_list(app: &App, resource: &ListResource) -> Result<()> {
    app.out.header(resource.title);

    match fetch_list(&app.controller, resource).await? {
        ListView::Records(records) => {
            let mut table = TerminalTable::new();
            render(&mut table, &resource.columns, &records);
            app.out.print(table.draw());
            app.out.dim(format!("{} record(s)", table.row_count()));
            Ok(())
        }
        ListView::NoData {
            message,
            errors,
            session_expired,
        } => {
            app.out.error_lines(&errors);
            app.out.warning(message);
            if session_expired {
                report_session_expired(app);
            }
            if errors.is_empty() {
                Ok(())
            } else {
                Err(ActionFailed.into())
            }
        }
        ListView::Unavailable(e) => {
            debug!("List unavailable: {e}");
            app.out.warning(resource.empty_message);
            app.out.alert(RETRY_MESSAGE);
            Err(ActionFailed.into())
        }
    }
}
