//! CLI command handlers
//!
//! Bridges clap argument parsing with the formatting layer. Handlers return
//! the text to print so they can be exercised without a terminal.

pub mod months;
pub mod render;

pub use months::{month_rows, month_table, MonthRow};
pub use render::{read_operations, render_operations, render_operations_file, OperationRecord, OperationRow};
