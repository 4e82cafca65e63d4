use std::fmt;

use crate::seq::NUCLEOTIDES;

/// Nucleotide composition of a sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Statistics {
    /// Percentage of each nucleotide, in `NUCLEOTIDES` order.
    pub frequencies: [(char, f64); 4],
    /// (C + G) as a percentage of (A + T).
    pub cg_ratio: f64,
}

impl Statistics {
    /// Characters outside the alphabet are ignored, so this must be run on
    /// the sequence before a name is spliced in.
    pub fn compute(seq: &str) -> Self {
        let mut counts = [0usize; 4];
        for c in seq.chars() {
            if let Some(i) = NUCLEOTIDES.iter().position(|&n| n == c) {
                counts[i] += 1;
            }
        }

        let total = counts.iter().sum::<usize>().max(1) as f64;
        let frequencies =
            std::array::from_fn(|i| (NUCLEOTIDES[i], counts[i] as f64 / total * 100.0));

        let [a, c, g, t] = counts;
        let at = (a + t).max(1);
        let cg_ratio = (c + g) as f64 / at as f64 * 100.0;

        Statistics {
            frequencies,
            cg_ratio,
        }
    }

    pub fn frequency(&self, nucleotide: char) -> Option<f64> {
        self.frequencies
            .iter()
            .find(|(n, _)| *n == nucleotide)
            .map(|&(_, pct)| pct)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, pct) in self.frequencies.iter() {
            writeln!(f, "{}: {:.1}%", n, pct)?;
        }
        write!(f, "%CG: {:.1}", self.cg_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::generate_sequence;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_percentages_sum_to_100() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for len in [1, 3, 10, 999] {
            let seq = generate_sequence(len, &mut rng).unwrap();
            let stats = Statistics::compute(&seq);
            let sum: f64 = stats.frequencies.iter().map(|&(_, pct)| pct).sum();
            assert!((sum - 100.0).abs() < 1e-6, "sum was {}", sum);
        }
    }

    #[test]
    fn test_cg_only() {
        let stats = Statistics::compute("CCGG");
        assert!(approx_eq(stats.cg_ratio, 400.0));
        assert!(approx_eq(stats.frequency('C').unwrap(), 50.0));
        assert!(approx_eq(stats.frequency('A').unwrap(), 0.0));
    }

    #[test]
    fn test_ratio() {
        // C+G = 3, A+T = 2
        let stats = Statistics::compute("ACGTG");
        assert!(approx_eq(stats.cg_ratio, 150.0));
        assert!(approx_eq(stats.frequency('G').unwrap(), 40.0));
    }

    #[test]
    fn test_frequency_order() {
        let stats = Statistics::compute("TTTG");
        let order: Vec<char> = stats.frequencies.iter().map(|&(n, _)| n).collect();
        assert_eq!(order, NUCLEOTIDES);
        assert!(approx_eq(stats.frequencies[3].1, 75.0));
        assert!(approx_eq(stats.frequencies[2].1, 25.0));
    }

    #[test]
    fn test_empty() {
        let stats = Statistics::compute("");
        assert!(stats.frequencies.iter().all(|&(_, pct)| pct == 0.0));
        assert_eq!(stats.cg_ratio, 0.0);
    }

    #[test]
    fn test_name_is_not_counted() {
        assert_eq!(Statistics::compute("AACG"), Statistics::compute("AAxyzCG"));
    }

    #[test]
    fn test_display() {
        let stats = Statistics::compute("AACG");
        assert_eq!(
            stats.to_string(),
            "A: 50.0%\nC: 25.0%\nG: 25.0%\nT: 0.0%\n%CG: 100.0"
        );
    }
}
