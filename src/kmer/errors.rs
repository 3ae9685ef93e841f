use super::{MAX_KMER_LEN, MIN_KMER_LEN};
use crate::data::err::{EXIT_USAGE, GetCode};
use std::{error::Error, fmt};

#[non_exhaustive]
#[derive(Clone, Copy, Eq, PartialEq)]
pub enum KmerError {
    /// The requested k-mer length, which is outside
    /// `MIN_KMER_LEN..=MAX_KMER_LEN`.
    InvalidLength(usize),
}

impl fmt::Display for KmerError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KmerError::InvalidLength(k) => write!(
                f,
                "kmer_size must be between {MIN_KMER_LEN} and {MAX_KMER_LEN} inclusive (got {k})"
            ),
        }
    }
}

impl fmt::Debug for KmerError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for KmerError {}

impl GetCode for KmerError {
    #[inline]
    fn get_code(&self) -> i32 {
        EXIT_USAGE
    }
}
