//! ## Canonical k-mer indexing and counting.
//!
//! A k-mer is a short run of `k` nucleotides. This module maps every k-mer
//! made of `ACGT` (in either case) to a dense integer index and counts those
//! indices over a sequence with a sliding window.
//!
//! * A [`CanonicalKmerCodec`] encodes and decodes the indices.
//! * A [`CanonicalCountTable`] holds one count per index and turns them into
//!   frequencies.
//!
//! The index folds two spellings of a k-mer together. A window whose first
//! base is `T` or `C` is replaced base-by-base with its complement before
//! encoding, so every encoded form starts with `A` or `G`, and there are
//! `2^(2k-1)` buckets rather than `4^k`. The bases are then read as a base-4
//! number with the digits `A=0, G=1, C=2, T=3`, where the first base is the
//! most significant digit.
//!
//! Windows holding any other byte are skipped. A NUL byte ends the scan.
//!
//! Supported k-mer lengths are [`MIN_KMER_LEN`] through [`MAX_KMER_LEN`].
//!
//! ## Example
//!
//! Profile the 3-mers of a sequence:
//! ```
//! # use kmer_freq::kmer::{CanonicalCountTable, DegeneratePolicy};
//! let mut table = CanonicalCountTable::new(3).unwrap();
//! table.accumulate(b"GGCCACCAAGGCCA");
//! for (kmer, freq) in table.labels().zip(table.iter_frequencies(DegeneratePolicy::Zero)) {
//!     if freq > 0.0 {
//!         println!("{kmer}\t{freq:.4}");
//!     }
//! }
//! ```

mod codec;
mod count_table;
mod errors;

pub use codec::*;
pub use count_table::*;
pub use errors::*;

/// The shortest supported k-mer length.
pub const MIN_KMER_LEN: usize = 2;
/// The longest supported k-mer length.
pub const MAX_KMER_LEN: usize = 10;
