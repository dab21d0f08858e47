//! kmeans1d-testdata
//! Seeded synthetic 1-D datasets shared by benches and tests.
//! Output is in generation order (unsorted), like real caller input.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, LogNormal, Normal};

/// Available synthetic distributions.
#[derive(Clone, Copy, Debug)]
pub enum DistKind {
    /// Uniform in \[0,100)
    Uniform,
    /// Standard normal scaled by 10
    Normal,
    /// `groups` tight Gaussian clumps centred at 0, 100, 200, ...
    Clumps { groups: usize },
    /// Log-normal with a long right tail (outlier-skewed)
    Skewed,
    /// Integers in \[0,10) so nearly every value is repeated
    Ties,
}

/// Generate `n` samples for the chosen distribution.
pub fn gen_dataset(kind: DistKind, n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(n);

    match kind {
        DistKind::Uniform => {
            for _ in 0..n {
                out.push(rng.random::<f64>() * 100.0);
            }
        }
        DistKind::Normal => {
            let normal = Normal::new(0.0, 10.0).unwrap();
            for _ in 0..n {
                out.push(normal.sample(&mut rng));
            }
        }
        DistKind::Clumps { groups } => {
            let groups = groups.max(1);
            let noise = Normal::new(0.0, 1.0).unwrap();
            for i in 0..n {
                let center = 100.0 * (i % groups) as f64;
                out.push(center + noise.sample(&mut rng));
            }
            out.shuffle(&mut rng);
        }
        DistKind::Skewed => {
            let ln = LogNormal::new(0.0, 1.5).unwrap();
            for _ in 0..n {
                out.push(ln.sample(&mut rng));
            }
        }
        DistKind::Ties => {
            for _ in 0..n {
                out.push(rng.random_range(0..10) as f64);
            }
        }
    }
    out
}

/// A seeded permutation of `0..n`.
pub fn gen_permutation(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(&mut rng);
    perm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_gen() {
        for kind in [
            DistKind::Uniform,
            DistKind::Normal,
            DistKind::Clumps { groups: 3 },
            DistKind::Skewed,
            DistKind::Ties,
        ] {
            let xs = gen_dataset(kind, 1_000, 123);
            assert_eq!(xs.len(), 1_000);
            assert!(xs.iter().all(|x| x.is_finite()));
            assert_eq!(xs, gen_dataset(kind, 1_000, 123), "{kind:?} not seeded");
        }
    }

    #[test]
    fn permutation_is_a_bijection() {
        let mut p = gen_permutation(50, 7);
        p.sort_unstable();
        assert_eq!(p, (0..50).collect::<Vec<_>>());
    }
}
