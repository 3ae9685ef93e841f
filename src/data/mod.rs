//! ## Data import and error handling.
//!
//! Sequence records are read with [`FastaReader`], [`FastQReader`], or the
//! format-detecting [`SeqReader`], all of which yield `std::io::Result` items.
//! Parse problems are reported as [`ErrorKind::InvalidData`], and failures to
//! open a file carry the path in their message while keeping the original
//! error available through [`Error::source`].
//!
//! [`FreqError`] gathers the failures of a whole run and, through [`GetCode`],
//! assigns each a distinct process exit status. [`unwrap_or_fail`] and
//! [`unwrap_or_die`] print such an error and exit with that status.
//!
//! [`FastaReader`]: records::fasta::FastaReader
//! [`FastQReader`]: records::fastq::FastQReader
//! [`SeqReader`]: records::SeqReader
//! [`FreqError`]: err::FreqError
//! [`GetCode`]: err::GetCode
//! [`unwrap_or_fail`]: err::OrFail::unwrap_or_fail
//! [`unwrap_or_die`]: err::OrFail::unwrap_or_die
//! [`ErrorKind::InvalidData`]: std::io::ErrorKind::InvalidData
//! [`Error::source`]: std::error::Error::source

#[cfg(feature = "fuzzing")]
pub mod arbitrary;
/// A module with error types and convenience traits for handling [`Result`].
pub mod err;
/// A module for record types and their readers.
pub mod records;

pub use records::{fasta, fastq};
