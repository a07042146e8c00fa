//! CSV export of the sales history.
//!
//! The export is a flat dump of whatever list it is given: no filtering and no
//! reordering happens here. Only the notes column is quoted, since it is the
//! only free-text field expected to contain commas or quotes.

use anyhow::Result;
use chrono::NaiveDate;
use log::info;
use shared::Sale;
use std::fs;
use std::path::{Path, PathBuf};

use super::calendar::LocalCalendar;

pub const CSV_HEADER: &str = "Date,Client,Product,USD,Robux,Status,Notes";

/// Result of writing an export file
#[derive(Debug, Clone, PartialEq)]
pub struct ExportResult {
    pub path: PathBuf,
    pub row_count: usize,
}

/// Export service that renders and writes CSV files
#[derive(Clone, Default)]
pub struct ExportService {}

impl ExportService {
    pub fn new() -> Self {
        Self {}
    }

    /// Render `sales` as CSV text, header first, rows joined by `\n`
    pub fn to_csv<C: LocalCalendar + ?Sized>(&self, sales: &[Sale], calendar: &C) -> String {
        let mut csv_content = String::from(CSV_HEADER);
        csv_content.push('\n');

        let rows: Vec<String> = sales
            .iter()
            .map(|sale| {
                format!(
                    "{},{},{},{},{},{},\"{}\"",
                    calendar.format_short_date(calendar.local_date(&sale.date)),
                    sale.client,
                    sale.product,
                    sale.amount,
                    sale.robux,
                    sale.status,
                    sale.notes.replace('"', "\"\""),
                )
            })
            .collect();
        csv_content.push_str(&rows.join("\n"));

        csv_content
    }

    /// File name for an export made on `today`
    pub fn export_filename(&self, today: NaiveDate) -> String {
        format!("sales-{}.csv", today.format("%Y-%m-%d"))
    }

    /// Write the export for `sales` into `directory`, named after today's date
    pub fn export_to_dir<C: LocalCalendar + ?Sized>(
        &self,
        directory: &Path,
        sales: &[Sale],
        calendar: &C,
    ) -> Result<ExportResult> {
        info!("📄 EXPORT: Exporting {} sales to {:?}", sales.len(), directory);

        if !directory.exists() {
            fs::create_dir_all(directory)?;
        }

        let path = directory.join(self.export_filename(calendar.today()));
        let csv_content = self.to_csv(sales, calendar);

        let temp_path = path.with_extension("csv.tmp");
        fs::write(&temp_path, &csv_content)?;
        fs::rename(&temp_path, &path)?;

        info!("✅ EXPORT: Wrote {} bytes to {:?}", csv_content.len(), path);

        Ok(ExportResult {
            path,
            row_count: sales.len(),
        })
    }
}
