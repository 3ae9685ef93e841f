#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::wildcard_imports)]

/// Data import and error handling.
pub mod data;
/// Canonical k-mer indexing and counting.
pub mod kmer;
/// Tabular frequency reports.
pub mod report;

/// Generate sequences and other data.
#[cfg(feature = "rand")]
pub mod generate;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::data::{
        err::{FreqError, GetCode, OrFail},
        records::{SeqFormat, SeqReader, SeqRecord, fasta::FastaReader, fastq::FastQReader},
    };
    #[cfg(feature = "rand")]
    pub use crate::generate::rand_sequence;
    pub use crate::kmer::{CanonicalCountTable, CanonicalKmerCodec, DegeneratePolicy, WindowClass};
    pub use crate::report::{ReportOptions, ReportValues, ReportWriter, write_report};
}
