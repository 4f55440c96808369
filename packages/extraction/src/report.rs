//! Report builder: collects page records and renders the CSV.
//!
//! Column set is the union across all records (fixed columns lead, assay
//! columns in first-seen order, Source last), missing cells are filled
//! with `-`, and rows sort ascending by Antigen.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::ReportResult;
use crate::types::record::EMPTY_CELL;
use crate::types::{columns, PageRecord};

/// A collection of page records ready to render.
#[derive(Debug, Clone, Default)]
pub struct Report {
    records: Vec<PageRecord>,
    organism_override: Option<String>,
}

impl Report {
    pub fn from_records(records: Vec<PageRecord>) -> Self {
        Self {
            records,
            organism_override: None,
        }
    }

    /// Force a fixed organism on every row.
    pub fn with_organism_override(mut self, organism: Option<String>) -> Self {
        self.organism_override = organism;
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Union of field names across records in first-seen order, with
    /// Source moved to the end.
    pub fn column_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for record in &self.records {
            for name in record.field_names() {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }
        if let Some(pos) = names.iter().position(|n| n == columns::SOURCE) {
            let source = names.remove(pos);
            names.push(source);
        }
        names
    }

    /// Render all rows under `column_names`, missing cells filled with
    /// `-`, sorted ascending by Antigen. The sort is stable, so ties keep
    /// input order.
    pub fn rows(&self) -> Vec<Vec<String>> {
        let names = self.column_names();

        let mut sorted: Vec<&PageRecord> = self.records.iter().collect();
        sorted.sort_by_key(|r| r.get(columns::ANTIGEN).unwrap_or(EMPTY_CELL).to_string());

        sorted
            .iter()
            .map(|record| {
                names
                    .iter()
                    .map(|name| {
                        if name == columns::ORGANISM {
                            if let Some(organism) = &self.organism_override {
                                return organism.clone();
                            }
                        }
                        record.get(name).unwrap_or(EMPTY_CELL).to_string()
                    })
                    .collect()
            })
            .collect()
    }

    /// Write the report as CSV: header record, then one record per row.
    pub fn write_to<W: Write>(&self, writer: W) -> ReportResult<()> {
        let names = self.column_names();
        if names.is_empty() {
            // No records, no columns: nothing to write.
            return Ok(());
        }

        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(&names)?;
        for row in self.rows() {
            csv_writer.write_record(&row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Write the report to a CSV file at `path`.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> ReportResult<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)?;
        self.write_to(file)?;
        info!(path = %path.display(), rows = self.len(), "report written");
        Ok(())
    }
}
