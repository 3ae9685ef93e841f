use crate::{
    data::records::{SeqRecord, fasta::FastaSeq},
    kmer::{CanonicalKmerCodec, MAX_KMER_LEN, MIN_KMER_LEN},
};
use arbitrary::{Arbitrary, Result, Unstructured};

/// Bases favored when generating sequences, so that most windows are valid.
const NUCLEOTIDES: &[u8] = b"ACGTacgtN-";

/// A sequence of mostly valid nucleotides, with occasional arbitrary bytes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NucleotideBytes(pub Vec<u8>);

impl<'a> Arbitrary<'a> for NucleotideBytes {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let len = u.arbitrary_len::<u8>()?;
        let mut bytes = Vec::with_capacity(len);
        for _ in 0..len {
            let byte = if u.ratio(1, 16)? {
                u.arbitrary()?
            } else {
                *u.choose(NUCLEOTIDES)?
            };
            bytes.push(byte);
        }
        Ok(NucleotideBytes(bytes))
    }
}

impl<'a> Arbitrary<'a> for CanonicalKmerCodec {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let kmer_length = u.int_in_range(MIN_KMER_LEN..=MAX_KMER_LEN)?;
        CanonicalKmerCodec::new(kmer_length).map_err(|_| arbitrary::Error::IncorrectFormat)
    }
}

impl<'a> Arbitrary<'a> for FastaSeq {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(FastaSeq {
            name:     u.arbitrary()?,
            sequence: NucleotideBytes::arbitrary(u)?.0,
        })
    }
}

impl<'a> Arbitrary<'a> for SeqRecord {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(SeqRecord {
            id:       u.arbitrary()?,
            sequence: NucleotideBytes::arbitrary(u)?.0,
        })
    }
}
