use super::{KmerError, MAX_KMER_LEN, MIN_KMER_LEN};
use std::ops::{Deref, Range};


/// Encoded digits for each base, `A=0, G=1, C=2, T=3`, indexed by the decoded
/// digit.
const DIGIT_TO_BASE: [u8; 4] = *b"AGCT";

/// The outcome of classifying a single window of a sequence.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum WindowClass {
    /// Every base in the window was valid. Holds the canonical index.
    Index(usize),
    /// A byte outside `ACGTacgt` was found at this absolute position of the
    /// sequence. It is the rightmost invalid byte in the window.
    InvalidAt(usize),
    /// The window runs past the end of the sequence (or into a NUL byte), so
    /// no further complete windows exist.
    Terminator,
}

/// Encode a single base as a base-4 digit. Case is ignored. Returns `None`
/// for any byte that is not `ACGTacgt`.
#[inline]
#[must_use]
pub const fn encode_base(base: u8) -> Option<u8> {
    match base {
        b'A' | b'a' => Some(0),
        b'G' | b'g' => Some(1),
        b'C' | b'c' => Some(2),
        b'T' | b't' => Some(3),
        _ => None,
    }
}

/// Decode a base-4 digit into an uppercase base.
///
/// # Panics
///
/// Panics if `digit` is not in `0..=3`.
#[inline]
#[must_use]
pub const fn decode_base(digit: u8) -> u8 {
    DIGIT_TO_BASE[digit as usize]
}

/// Complement a single base (`A<->T`, `G<->C`), preserving case. Any other
/// byte is returned unchanged.
#[inline]
#[must_use]
pub const fn complement_base(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'a' => b't',
        b'T' => b'A',
        b't' => b'a',
        b'G' => b'C',
        b'g' => b'c',
        b'C' => b'G',
        b'c' => b'g',
        other => other,
    }
}

/// Whether a window starting with `base` is encoded in its complemented form.
#[inline]
const fn starts_on_complement_strand(base: u8) -> bool {
    matches!(base, b'T' | b't' | b'C' | b'c')
}

/// A decoded k-mer of at most [`MAX_KMER_LEN`] uppercase bases, stored inline.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Kmer {
    length: u8,
    buffer: [u8; MAX_KMER_LEN],
}

impl Kmer {
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.length as usize]
    }
}

impl Deref for Kmer {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for Kmer {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<[u8]> for Kmer {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for Kmer {
    #[inline]
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl std::fmt::Display for Kmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Decoded bases are always ASCII
        for &b in self.as_bytes() {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Kmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Kmer({self})")
    }
}

/// Maps k-mers to dense canonical indices and back.
///
/// A window whose first base is `T` or `C` is encoded as the complement of
/// each of its bases; any other window is encoded as written. The chosen bases
/// are read as a base-4 numeral (`A=0, G=1, C=2, T=3`) with the first base as
/// the most significant digit. Since the encoded form always starts with `A`
/// or `G`, every index lies in `0..2^(2k-1)`, and a k-mer shares its bucket
/// with its base-wise complement.
///
/// ```
/// # use kmer_freq::kmer::{CanonicalKmerCodec, WindowClass};
/// let codec = CanonicalKmerCodec::new(2).unwrap();
/// assert_eq!(codec.num_buckets(), 8);
/// assert_eq!(codec.classify_window(b"CT", 0), WindowClass::Index(4));
/// assert_eq!(codec.decode_kmer(4), b"GA");
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CanonicalKmerCodec {
    kmer_length: usize,
    num_buckets: usize,
}

impl CanonicalKmerCodec {
    /// Creates a codec for k-mers of length `kmer_length`.
    ///
    /// # Errors
    ///
    /// Returns [`KmerError::InvalidLength`] if `kmer_length` is less than
    /// [`MIN_KMER_LEN`] or greater than [`MAX_KMER_LEN`].
    #[inline]
    pub fn new(kmer_length: usize) -> Result<Self, KmerError> {
        if (MIN_KMER_LEN..=MAX_KMER_LEN).contains(&kmer_length) {
            Ok(Self {
                kmer_length,
                num_buckets: 1 << (2 * kmer_length - 1),
            })
        } else {
            Err(KmerError::InvalidLength(kmer_length))
        }
    }

    /// The k-mer length of this codec.
    #[inline]
    #[must_use]
    pub fn kmer_length(&self) -> usize {
        self.kmer_length
    }

    /// The number of canonical buckets, `2^(2k-1)`.
    #[inline]
    #[must_use]
    pub fn num_buckets(&self) -> usize {
        self.num_buckets
    }

    /// Classify the window `start..start + k` of `seq`.
    ///
    /// The orientation is decided from the byte at `start` alone. Bases are
    /// then scanned from the end of the window toward `start`, so an
    /// [`InvalidAt`] holds the rightmost offending position, and every window
    /// starting at or before it also contains that byte.
    ///
    /// [`InvalidAt`]: WindowClass::InvalidAt
    #[must_use]
    pub fn classify_window(&self, seq: &[u8], start: usize) -> WindowClass {
        let Some(window) = start.checked_add(self.kmer_length).and_then(|end| seq.get(start..end)) else {
            return WindowClass::Terminator;
        };

        let complemented = starts_on_complement_strand(window[0]);
        let mut index = 0;
        let mut place = 1;

        for (offset, &byte) in window.iter().enumerate().rev() {
            if byte == 0 {
                return WindowClass::Terminator;
            }

            let base = if complemented { complement_base(byte) } else { byte };
            let Some(digit) = encode_base(base) else {
                return WindowClass::InvalidAt(start + offset);
            };

            index += usize::from(digit) * place;
            place <<= 2;
        }

        WindowClass::Index(index)
    }

    /// Encode a complete k-mer. Returns `None` if its length differs from the
    /// codec's k-mer length or it holds any byte outside `ACGTacgt`.
    #[inline]
    #[must_use]
    pub fn encode_kmer_checked(&self, kmer: impl AsRef<[u8]>) -> Option<usize> {
        let kmer = kmer.as_ref();
        if kmer.len() != self.kmer_length {
            return None;
        }

        match self.classify_window(kmer, 0) {
            WindowClass::Index(index) => Some(index),
            WindowClass::InvalidAt(_) | WindowClass::Terminator => None,
        }
    }

    /// Decode a canonical index into the k-mer spelling it was encoded from
    /// (always starting with `A` or `G`). Indices at or beyond
    /// [`num_buckets`] decode to a k-mer that would not re-encode to the same
    /// index; consider [`decode_kmer_checked`] when the index is untrusted.
    ///
    /// [`num_buckets`]: CanonicalKmerCodec::num_buckets
    /// [`decode_kmer_checked`]: CanonicalKmerCodec::decode_kmer_checked
    #[must_use]
    pub fn decode_kmer(&self, index: usize) -> Kmer {
        let mut buffer = [0; MAX_KMER_LEN];
        let mut remainder = index;
        let mut place = 1 << (2 * (self.kmer_length - 1));

        for slot in buffer.iter_mut().take(self.kmer_length) {
            // Largest digit d with d * place <= remainder; the leading place
            // absorbs any overflow beyond the table.
            let digit = (remainder / place).min(3);
            remainder -= digit * place;
            *slot = DIGIT_TO_BASE[digit];
            place >>= 2;
        }

        // MAX_KMER_LEN fits in a u8
        #[allow(clippy::cast_possible_truncation)]
        let length = self.kmer_length as u8;

        Kmer { length, buffer }
    }

    /// Decode a canonical index, returning `None` if it is not a valid bucket
    /// for this codec.
    #[inline]
    #[must_use]
    pub fn decode_kmer_checked(&self, index: usize) -> Option<Kmer> {
        (index < self.num_buckets).then(|| self.decode_kmer(index))
    }

    /// Iterate over one representative spelling of every canonical bucket, in
    /// index order.
    #[inline]
    #[must_use]
    pub fn labels(&self) -> KmerLabels {
        KmerLabels {
            codec:   *self,
            indices: 0..self.num_buckets,
        }
    }
}

/// An iterator over the decoded labels of every canonical bucket, in index
/// order. See [`CanonicalKmerCodec::labels`].
#[derive(Clone, Debug)]
pub struct KmerLabels {
    codec:   CanonicalKmerCodec,
    indices: Range<usize>,
}

impl Iterator for KmerLabels {
    type Item = Kmer;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.indices.next().map(|i| self.codec.decode_kmer(i))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl ExactSizeIterator for KmerLabels {}
