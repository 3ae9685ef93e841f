//! ## Tabular k-mer frequency reports.
//!
//! A report is a header row naming each canonical bucket, followed by one row
//! per sequence record. Each row holds the record identifier and then a value
//! per bucket, in canonical index order.
//!
//! ```
//! # use kmer_freq::{data::records::SeqRecord, kmer::CanonicalCountTable, report::*};
//! let records = vec![Ok(SeqRecord {
//!     id:       "s1".to_string(),
//!     sequence: b"AGCT".to_vec(),
//! })];
//!
//! let mut table = CanonicalCountTable::new(2).unwrap();
//! let mut out = Vec::new();
//! let summary = write_report(records, &mut table, &mut ReportWriter::new(&mut out, ReportOptions::default())).unwrap();
//!
//! assert_eq!(summary.records, 1);
//! assert!(String::from_utf8(out).unwrap().starts_with("seq_id\tAA\tAG\t"));
//! ```

use crate::{
    data::{err::FreqError, records::SeqRecord},
    kmer::{CanonicalCountTable, DegeneratePolicy},
};
use log::{debug, warn};
use std::io::Write;

#[cfg(test)]
mod test;

/// The label of the identifier column in the header row.
pub const ID_COLUMN: &str = "seq_id";

/// The values written for each bucket.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ReportValues {
    /// Normalized frequencies.
    #[default]
    Frequencies,
    /// Raw window counts.
    Counts,
}

/// Formatting choices for a report.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ReportOptions {
    pub values:    ReportValues,
    /// Digits after the decimal point for frequencies.
    pub precision: usize,
    pub policy:    DegeneratePolicy,
    pub delimiter: u8,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            values:    ReportValues::Frequencies,
            precision: 10,
            policy:    DegeneratePolicy::Zero,
            delimiter: b'\t',
        }
    }
}

/// Writes the header and per-record rows of a report.
pub struct ReportWriter<W: Write> {
    writer:  W,
    options: ReportOptions,
}

impl<W: Write> ReportWriter<W> {
    #[inline]
    pub fn new(writer: W, options: ReportOptions) -> Self {
        ReportWriter { writer, options }
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Writes the header: [`ID_COLUMN`] followed by one label per bucket.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying writer.
    pub fn write_header(&mut self, table: &CanonicalCountTable) -> std::io::Result<()> {
        self.writer.write_all(ID_COLUMN.as_bytes())?;
        for label in table.labels() {
            self.writer.write_all(&[self.options.delimiter])?;
            self.writer.write_all(&label)?;
        }
        self.writer.write_all(b"\n")
    }

    /// Writes one row for the record `id` from the current contents of
    /// `table`.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying writer.
    pub fn write_row(&mut self, id: &str, table: &CanonicalCountTable) -> std::io::Result<()> {
        let delimiter = self.options.delimiter;
        self.writer.write_all(id.as_bytes())?;

        match self.options.values {
            ReportValues::Frequencies => {
                let precision = self.options.precision;
                for freq in table.iter_frequencies(self.options.policy) {
                    self.writer.write_all(&[delimiter])?;
                    write!(self.writer, "{freq:.precision$}")?;
                }
            }
            ReportValues::Counts => {
                let mut buffer = itoa::Buffer::new();
                for &count in table.counts() {
                    self.writer.write_all(&[delimiter])?;
                    self.writer.write_all(buffer.format(count).as_bytes())?;
                }
            }
        }

        self.writer.write_all(b"\n")
    }

    /// Flushes the underlying writer.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying writer.
    #[inline]
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Totals for a completed report.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct RunSummary {
    /// Records written.
    pub records:            usize,
    /// Records with no valid window.
    pub degenerate_records: usize,
    /// Valid windows counted across all records.
    pub windows:            usize,
}

/// Profiles each record in turn and writes the full report.
///
/// For every record, `table` is filled, written as a row, and reset, so it is
/// empty again when this returns. The header is written first, even if
/// `records` is empty.
///
/// # Errors
///
/// Returns [`FreqError::Record`] for the first record that fails to parse (the
/// rows before it have already been written), or [`FreqError::Output`] if
/// writing fails.
pub fn write_report<I, W>(
    records: I, table: &mut CanonicalCountTable, report: &mut ReportWriter<W>,
) -> Result<RunSummary, FreqError>
where
    I: IntoIterator<Item = std::io::Result<SeqRecord>>,
    W: Write, {
    let mut summary = RunSummary::default();
    report.write_header(table).map_err(FreqError::Output)?;

    for record in records {
        let record = record.map_err(FreqError::Record)?;

        let tally = table.accumulate(&record.sequence);
        debug!(
            "{id}: {windows} windows counted, {skipped} invalid bases skipped",
            id = record.id,
            windows = tally.windows,
            skipped = tally.skipped
        );

        if tally.windows == 0 {
            warn!(
                "{id}: no valid {k}-mers (sequence length {len}); writing {policy:?} row",
                id = record.id,
                k = table.kmer_length(),
                len = record.sequence.len(),
                policy = report.options().policy
            );
            summary.degenerate_records += 1;
        }

        report.write_row(&record.id, table).map_err(FreqError::Output)?;
        table.reset();

        summary.records += 1;
        summary.windows += tally.windows;
    }

    report.flush().map_err(FreqError::Output)?;
    Ok(summary)
}
