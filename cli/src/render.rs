//! Terminal rendering target for tables.

use tabled::builder::Builder;
use tabled::settings::Style;
use ymbank_business::RenderTarget;

/// Collects a rendered table and draws it with rounded borders.
#[derive(Default)]
pub struct TerminalTable {
    builder: Builder,
    rows: usize,
}

impl TerminalTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of data rows, not counting the header.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn draw(&self) -> String {
        self.builder.clone().build().with(Style::rounded()).to_string()
    }
}

impl RenderTarget for TerminalTable {
    fn clear(&mut self) {
        self.builder = Builder::default();
        self.rows = 0;
    }

    fn push_header(&mut self, headers: Vec<String>) {
        self.builder.push_record(headers);
    }

    fn push_row(&mut self, cells: Vec<String>) {
        self.builder.push_record(cells);
        self.rows += 1;
    }
}
