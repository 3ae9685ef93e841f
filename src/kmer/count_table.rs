use super::{CanonicalKmerCodec, KmerError, KmerLabels, WindowClass};
use std::ops::Index;


/// How to normalize a record that produced no valid windows, for which the
/// frequencies would otherwise be `0 / 0`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum DegeneratePolicy {
    /// Report `0.0` for every bucket.
    #[default]
    Zero,
    /// Report NaN for every bucket.
    NaN,
}

/// Summary of a single call to [`CanonicalCountTable::accumulate`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct WindowTally {
    /// Number of valid windows counted.
    pub windows: usize,
    /// Number of invalid bytes that caused the cursor to skip ahead.
    pub skipped: usize,
}

/// A dense table of canonical k-mer counts for one sequence at a time.
///
/// The table has one slot per canonical bucket (`2^(2k-1)` of them). It is
/// meant to be created once per run, filled with [`accumulate`], read with
/// [`frequencies`], and cleared with [`reset`] before the next record.
///
/// ```
/// # use kmer_freq::kmer::{CanonicalCountTable, DegeneratePolicy};
/// let mut table = CanonicalCountTable::new(2).unwrap();
/// table.accumulate(b"AGCT");
/// assert_eq!(table.total(), 3);
///
/// let freqs = table.frequencies(DegeneratePolicy::Zero);
/// assert!((freqs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
///
/// table.reset();
/// assert_eq!(table.total(), 0);
/// ```
///
/// [`accumulate`]: CanonicalCountTable::accumulate
/// [`frequencies`]: CanonicalCountTable::frequencies
/// [`reset`]: CanonicalCountTable::reset
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CanonicalCountTable {
    counts: Vec<u64>,
    codec:  CanonicalKmerCodec,
}

impl CanonicalCountTable {
    /// Creates a zeroed table for k-mers of length `kmer_length`.
    ///
    /// # Errors
    ///
    /// Returns [`KmerError::InvalidLength`] if `kmer_length` is less than 2 or
    /// greater than 10.
    #[inline]
    pub fn new(kmer_length: usize) -> Result<Self, KmerError> {
        Ok(Self::from_codec(CanonicalKmerCodec::new(kmer_length)?))
    }

    /// Creates a zeroed table sized for an existing codec.
    #[inline]
    #[must_use]
    pub fn from_codec(codec: CanonicalKmerCodec) -> Self {
        Self {
            counts: vec![0; codec.num_buckets()],
            codec,
        }
    }

    /// The codec used to index this table.
    #[inline]
    #[must_use]
    pub fn codec(&self) -> &CanonicalKmerCodec {
        &self.codec
    }

    #[inline]
    #[must_use]
    pub fn kmer_length(&self) -> usize {
        self.codec.kmer_length()
    }

    #[inline]
    #[must_use]
    pub fn num_buckets(&self) -> usize {
        self.counts.len()
    }

    /// The raw counts, in canonical index order.
    #[inline]
    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// The number of windows counted since the last reset.
    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// The count of the bucket holding `kmer`. Returns `None` if `kmer` is not
    /// a valid k-mer for this table.
    #[inline]
    #[must_use]
    pub fn get(&self, kmer: impl AsRef<[u8]>) -> Option<u64> {
        self.codec.encode_kmer_checked(kmer).map(|i| self.counts[i])
    }

    /// Count every overlapping valid window of `seq`.
    ///
    /// The cursor advances by one after a valid window. When a window holds an
    /// invalid byte at position `j`, the cursor jumps to `j + 1`, since every
    /// window starting at or before `j` contains it. Scanning stops at the
    /// first window that would run past the end of `seq`.
    pub fn accumulate(&mut self, seq: impl AsRef<[u8]>) -> WindowTally {
        let seq = seq.as_ref();
        let mut tally = WindowTally::default();
        let mut i = 0;

        while i < seq.len() {
            match self.codec.classify_window(seq, i) {
                WindowClass::Index(index) => {
                    self.counts[index] += 1;
                    tally.windows += 1;
                    i += 1;
                }
                WindowClass::InvalidAt(j) => {
                    tally.skipped += 1;
                    i = j + 1;
                }
                WindowClass::Terminator => break,
            }
        }

        tally
    }

    /// Iterate over the normalized frequency of each bucket, in index order.
    /// If nothing has been counted, the values follow `policy`.
    #[inline]
    pub fn iter_frequencies(&self, policy: DegeneratePolicy) -> impl ExactSizeIterator<Item = f64> + '_ {
        let total = self.total();
        #[allow(clippy::cast_precision_loss)]
        let sum = total as f64;

        self.counts.iter().map(move |&count| {
            if total == 0 {
                match policy {
                    DegeneratePolicy::Zero => 0.0,
                    DegeneratePolicy::NaN => f64::NAN,
                }
            } else {
                #[allow(clippy::cast_precision_loss)]
                let count = count as f64;
                count / sum
            }
        })
    }

    /// The normalized frequency of each bucket, in index order. If nothing has
    /// been counted, the values follow `policy`.
    #[inline]
    #[must_use]
    pub fn frequencies(&self, policy: DegeneratePolicy) -> Vec<f64> {
        self.iter_frequencies(policy).collect()
    }

    /// Zero every count, keeping the allocation for the next record.
    #[inline]
    pub fn reset(&mut self) {
        self.counts.fill(0);
    }

    /// One representative spelling per bucket, in index order.
    #[inline]
    #[must_use]
    pub fn labels(&self) -> KmerLabels {
        self.codec.labels()
    }
}

impl Index<usize> for CanonicalCountTable {
    type Output = u64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.counts[index]
    }
}
