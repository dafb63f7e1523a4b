use crate::core::{Presenter, Result, Summary};
use comfy_table::{presets::ASCII_MARKDOWN, Cell, CellAlignment, ContentArrangement, Row, Table};

pub const TABLE_TITLE: &str = "Airdrop Analytics";

/// Metric/value table; `top` only labels the concentration row.
#[derive(Debug, Clone, Copy)]
pub struct TablePresenter {
    top: usize,
}

impl TablePresenter {
    pub fn new(top: usize) -> Self {
        Self { top }
    }

    fn rows(&self, summary: &Summary) -> Vec<(String, String)> {
        vec![
            ("holders".to_string(), summary.holders.to_string()),
            ("total_balance".to_string(), summary.total_balance.to_string()),
            (
                format!("top_{}_share", self.top),
                format!("{:.4}", summary.top_share),
            ),
            ("gini".to_string(), format!("{:.4}", summary.gini)),
        ]
    }
}

impl Presenter for TablePresenter {
    fn render(&self, summary: &Summary) -> Result<String> {
        let mut table = Table::new();
        table.load_preset(ASCII_MARKDOWN);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Metric", "Value"]);

        for (metric, value) in self.rows(summary) {
            let mut row = Row::new();
            row.add_cell(Cell::new(metric).set_alignment(CellAlignment::Left));
            row.add_cell(Cell::new(value).set_alignment(CellAlignment::Right));
            table.add_row(row);
        }

        Ok(format!("{}\n{}", TABLE_TITLE, table))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPresenter;

impl Presenter for JsonPresenter {
    fn render(&self, summary: &Summary) -> Result<String> {
        Ok(serde_json::to_string_pretty(summary)?)
    }
}
