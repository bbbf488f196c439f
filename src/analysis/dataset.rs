//! Row-oriented sequence table loaded from CSV
//!
//! The table is owned by the caller and passed explicitly. Loading always
//! builds a fresh table, and `annotate` computes every derived value before
//! touching the rows, so a failure never leaves a half-updated table behind.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use rayon::prelude::*;
use tracing::{debug, info};

use super::error::{io_with_path, DnaError, Result};
use super::sequence::{complement, reverse, Sequence};
use super::stats::{composition_stats, CompositionStats};
use super::types::ProcessParams;

pub const REVERSE_COLUMN: &str = "Reverse";
pub const COMPLEMENT_COLUMN: &str = "Complement";
pub const REVERSE_COMPLEMENT_COLUMN: &str = "Reverse_Complement";

/// Derived columns in the order they are appended
pub const DERIVED_COLUMNS: [&str; 3] = [REVERSE_COLUMN, COMPLEMENT_COLUMN, REVERSE_COMPLEMENT_COLUMN];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    sequence_column: usize,
}

impl SequenceTable {
    /// Read a CSV with a header row. `sequence_column` must name one of the headers.
    pub fn from_reader<R: Read>(reader: R, sequence_column: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let index = headers
            .iter()
            .position(|h| h == sequence_column)
            .ok_or_else(|| DnaError::MissingColumn {
                column: sequence_column.to_string(),
                available: headers.join(", "),
            })?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(rows = rows.len(), columns = headers.len(), "parsed sequence table");

        Ok(Self {
            headers,
            rows,
            sequence_column: index,
        })
    }

    pub fn load_csv(path: impl AsRef<Path>, sequence_column: &str) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| io_with_path(e, path))?;
        let table = Self::from_reader(file, sequence_column)?;
        info!(path = %path.display(), rows = table.len(), "loaded sequence table");
        Ok(table)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn sequence_column(&self) -> &str {
        &self.headers[self.sequence_column]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The sequence stored in row `index`, if the row exists.
    pub fn sequence(&self, index: usize) -> Option<Sequence> {
        self.rows
            .get(index)
            .map(|row| Sequence::from(row_field(row, self.sequence_column)))
    }

    /// Add Reverse, Complement and Reverse_Complement columns.
    ///
    /// Existing columns with those names are overwritten in place, so
    /// annotating twice yields the same table.
    pub fn annotate(&mut self, params: &ProcessParams) -> Result<()> {
        if DERIVED_COLUMNS.contains(&self.sequence_column()) {
            return Err(DnaError::InvalidInput(format!(
                "sequence column '{}' would be overwritten by a derived column",
                self.sequence_column()
            )));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(params.thread_count.get_count())
            .build()
            .map_err(|e| DnaError::InvalidInput(format!("failed to build thread pool: {}", e)))?;

        let column = self.sequence_column;
        let derived: Vec<[String; 3]> = pool.install(|| {
            self.rows
                .par_iter()
                .map(|row| {
                    let seq = Sequence::from(row_field(row, column));
                    let comp = complement(&seq);
                    let rev_comp = reverse(&comp);
                    [
                        reverse(&seq).into_string(),
                        comp.into_string(),
                        rev_comp.into_string(),
                    ]
                })
                .collect()
        });

        let targets = DERIVED_COLUMNS.map(|name| self.column_index_or_insert(name));
        for (row, values) in self.rows.iter_mut().zip(derived) {
            for (&target, value) in targets.iter().zip(values) {
                row[target] = value;
            }
        }

        info!(rows = self.rows.len(), threads = pool.current_num_threads(), "annotated sequence table");
        Ok(())
    }

    /// Composition statistics for one row's sequence.
    pub fn stats_for_row(&self, index: usize) -> Result<CompositionStats> {
        self.sequence(index)
            .map(|seq| composition_stats(&seq))
            .ok_or(DnaError::RowOutOfRange {
                index,
                len: self.rows.len(),
            })
    }

    /// Write the header row followed by every row.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = WriterBuilder::new().from_writer(writer);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| io_with_path(e, path))?;
        self.to_writer(file)?;
        info!(path = %path.display(), rows = self.len(), "saved sequence table");
        Ok(())
    }

    fn column_index_or_insert(&mut self, name: &str) -> usize {
        if let Some(index) = self.headers.iter().position(|h| h == name) {
            return index;
        }
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.headers.len() - 1
    }
}

fn row_field(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}
