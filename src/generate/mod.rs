/// Generate a random sequence of `length` bytes drawn uniformly from `alpha`,
/// reproducibly from `seed`.
///
/// # Panics
///
/// Panics if `alpha` is empty and `length` is non-zero.
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    use rand_xoshiro::{
        Xoshiro256PlusPlus,
        rand_core::{RngCore, SeedableRng},
    };

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    (1..=length).map(|_| alpha[rng.next_u32() as usize % alpha.len()]).collect()
}

#[cfg(test)]
mod test {
    use super::rand_sequence;
    use crate::kmer::{CanonicalCountTable, DegeneratePolicy};

    #[test]
    fn rand_test() {
        const LEN: usize = 10_000;

        let random_sequence = rand_sequence(b"ATGC", LEN, 42);
        assert_eq!(LEN, random_sequence.len());

        let (a, c, g, t) = random_sequence.iter().fold((0, 0, 0, 0), |(a, c, g, t), &b| match b {
            b'A' => (a + 1, c, g, t),
            b'C' => (a, c + 1, g, t),
            b'G' => (a, c, g + 1, t),
            b'T' => (a, c, g, t + 1),
            _ => (a, c, g, t),
        });

        assert!(a > 0);
        assert!(c > 0);
        assert!(g > 0);
        assert!(t > 0);
    }

    #[test]
    fn seeded_is_reproducible() {
        assert_eq!(rand_sequence(b"ACGTN", 500, 7), rand_sequence(b"ACGTN", 500, 7));
    }

    #[test]
    fn random_profiles_sum_to_one() {
        for k in 2..=10 {
            let seq = rand_sequence(b"ACGTacgtN", 2_000, k as u64);
            let mut table = CanonicalCountTable::new(k).unwrap();
            let tally = table.accumulate(&seq);
            assert!(tally.windows > 0);
            assert_eq!(table.total(), tally.windows as u64);

            let sum: f64 = table.frequencies(DegeneratePolicy::Zero).iter().sum();
            assert!((sum - 1.0).abs() < 1e-9);
        }
    }
}
