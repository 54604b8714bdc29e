//! Month range table

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::display::{month_label, FormatContext};
use crate::models::MonthId;

/// One row of the month table
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct MonthRow {
    #[tabled(rename = "Month")]
    pub id: String,
    #[tabled(rename = "Label")]
    pub label: String,
}

/// `count` consecutive months from `start`, with localized labels
pub fn month_rows(start: MonthId, count: usize, ctx: &FormatContext) -> Vec<MonthRow> {
    start
        .range(count)
        .map(|month| MonthRow {
            id: month.to_string(),
            label: month_label(month, ctx.locale),
        })
        .collect()
}

pub fn month_table(start: MonthId, count: usize, ctx: &FormatContext) -> String {
    Table::new(month_rows(start, count, ctx))
        .with(Style::rounded())
        .to_string()
}
