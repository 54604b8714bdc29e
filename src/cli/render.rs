//! Rendering of operation exports
//!
//! Reads the backend's CSV export of operations (`date`, `amount_minor`,
//! optional `description`) and formats each row for display.

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::display::{FormatContext, Formatter};
use crate::error::FormatResult;

/// One operation as exported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OperationRecord {
    pub date: String,
    pub amount_minor: i64,
    #[serde(default)]
    pub description: String,
}

/// A display-ready operation
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct OperationRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Amount")]
    pub amount: String,
    #[tabled(rename = "Description")]
    pub description: String,
}

/// Parse an operations CSV (with header row)
pub fn read_operations<R: Read>(reader: R) -> FormatResult<Vec<OperationRecord>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut records = Vec::new();
    for result in reader.deserialize::<OperationRecord>() {
        let record: OperationRecord = result?;
        records.push(record);
    }
    Ok(records)
}

pub fn render_operations(
    records: &[OperationRecord],
    formatter: &Formatter,
    ctx: &FormatContext,
) -> Vec<OperationRow> {
    records
        .iter()
        .map(|record| OperationRow {
            date: formatter.date_time(&record.date, ctx),
            amount: formatter.currency(record.amount_minor, ctx),
            description: record.description.clone(),
        })
        .collect()
}

/// Read an operations CSV file and return it as a formatted table
pub fn render_operations_file(
    path: &Path,
    formatter: &Formatter,
    ctx: &FormatContext,
) -> FormatResult<String> {
    let file = File::open(path)?;
    let records = read_operations(file)?;
    tracing::info!(rows = records.len(), path = %path.display(), "rendering operations");

    let rows = render_operations(&records, formatter, ctx);
    Ok(Table::new(rows).with(Style::rounded()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;
    use crate::models::Locale;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "date,amount_minor,description\n\
                          2024-05-03T14:30,-150,Coffee\n\
                          2024-05-04,250000,Salary\n";

    #[test]
    fn test_read_operations() {
        let records = read_operations(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].amount_minor, -150);
        assert_eq!(records[1].description, "Salary");
    }

    #[test]
    fn test_description_is_optional() {
        let records = read_operations("date,amount_minor\n2024-05-03,100\n".as_bytes()).unwrap();
        assert_eq!(records[0].description, "");
    }

    #[test]
    fn test_bad_amount_reports_line() {
        let err = read_operations("date,amount_minor\n2024-05-03,abc\n".as_bytes()).unwrap_err();
        assert!(matches!(err, FormatError::Csv(ref msg) if msg.contains("line: 2")));
    }

    #[test]
    fn test_render_operations() {
        let records = read_operations(SAMPLE.as_bytes()).unwrap();
        let rows = render_operations(&records, &Formatter::new(), &FormatContext::utc(Locale::Ru));
        assert_eq!(rows[0].date, "03.05.24 - 14:30");
        assert_eq!(rows[0].amount, "-1,50 ₼");
        assert_eq!(rows[1].date, "04.05.24");
        assert_eq!(rows[1].amount, "2\u{a0}500,00 ₼");
    }

    #[test]
    fn test_render_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = render_operations_file(
            file.path(),
            &Formatter::new(),
            &FormatContext::utc(Locale::En),
        )
        .unwrap();
        assert!(table.contains("Coffee"));
        assert!(table.contains("-1.50 ₼"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = render_operations_file(
            Path::new("/nonexistent/operations.csv"),
            &Formatter::new(),
            &FormatContext::default(),
        )
        .unwrap_err();
        assert!(matches!(err, FormatError::Io(_)));
    }
}
