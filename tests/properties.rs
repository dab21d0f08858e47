use gr_kmeans1d::kmeans1d::reference::{cluster_naive, same_partition};
use gr_kmeans1d::kmeans1d::test_helpers::{
    assert_abs_close, assert_exact, assert_monotone_chain, assert_rel_close,
};
use gr_kmeans1d::{cluster, cluster_with, ClusterOptions, Clustering, KmError, Mode};
use kmeans1d_testdata::{gen_dataset, gen_permutation, DistKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

const README_XS: [f64; 10] = [4.0, 4.1, 4.2, -50.0, 200.2, 200.4, 200.9, 80.0, 100.0, 102.0];

fn opts(k: usize, min_cluster_size: usize, mode: Mode) -> ClusterOptions {
    ClusterOptions {
        k,
        min_cluster_size,
        mode,
    }
}

fn check_shape(label: &str, out: &Clustering, n: usize, o: &ClusterOptions) {
    assert_eq!(out.len(), n, "{label}: one label per value");
    assert_eq!(out.k(), o.k, "{label}: centroid count");
    assert!(out.labels().iter().all(|&l| l < o.k), "{label}: label range");
    let mut seen = vec![0usize; o.k];
    for &l in out.labels() {
        seen[l] += 1;
    }
    assert_eq!(seen, out.sizes(), "{label}: sizes agree with labels");
    assert!(seen.iter().all(|&c| c > 0), "{label}: every cluster used");
    assert!(
        seen.iter().all(|&c| c >= o.min_cluster_size),
        "{label}: min size {} violated: {seen:?}",
        o.min_cluster_size
    );
    assert_monotone_chain(label, out.centroids());
}

#[test]
fn readme_scenario() {
    let out = cluster(&README_XS, 4, 0, Mode::Mean).expect("cluster");
    assert_eq!(out.labels(), &[1, 1, 1, 0, 3, 3, 3, 2, 2, 2]);
    let want = [-50.0, 4.1, 94.0, 200.5];
    for (c, (&w, &g)) in want.iter().zip(out.centroids()).enumerate() {
        assert_exact(&format!("centroid {c}"), w, g);
    }
    assert_abs_close("total cost", 296.28, out.cost(), 1e-9);
}

#[test]
fn matches_naive_dp_on_random_data() {
    let mut rng = StdRng::seed_from_u64(42);
    let xs: Vec<f64> = (0..60).map(|_| rng.random::<f64>() * 100.0).collect();

    for k in 1..=6 {
        for min_size in [0usize, 2, 5] {
            for mode in [Mode::Mean, Mode::Median] {
                let o = opts(k, min_size, mode);
                let label = format!("k={k} min={min_size} mode={mode:?}");
                let fast = cluster_with(&xs, &o).expect("fast");
                let slow = cluster_naive(&xs, &o).expect("naive");
                check_shape(&label, &fast, xs.len(), &o);
                assert_abs_close(&label, slow.cost(), fast.cost(), 1e-9 * slow.cost().max(1.0));
                assert!(
                    same_partition(fast.labels(), slow.labels()),
                    "{label}: partitions differ\nfast={:?}\nslow={:?}",
                    fast.labels(),
                    slow.labels()
                );
            }
        }
    }
}

#[test]
fn matches_naive_dp_across_distributions() {
    for (seed, kind) in [
        (1u64, DistKind::Normal),
        (2, DistKind::Skewed),
        (3, DistKind::Clumps { groups: 4 }),
    ] {
        let xs = gen_dataset(kind, 48, seed);
        for k in [2usize, 4, 6] {
            for mode in [Mode::Mean, Mode::Median] {
                let o = opts(k, 3, mode);
                let fast = cluster_with(&xs, &o).expect("fast");
                let slow = cluster_naive(&xs, &o).expect("naive");
                let label = format!("{kind:?} k={k} mode={mode:?}");
                assert_rel_close(&label, slow.cost(), fast.cost(), 1e-9);
            }
        }
    }
}

#[test]
fn feasibility_boundary_is_rejected_upfront() {
    assert_eq!(
        cluster(&[1.0, 2.0], 0, 0, Mode::Mean),
        Err(KmError::InvalidK { k: 0 })
    );
    assert_eq!(cluster(&[], 1, 0, Mode::Mean), Err(KmError::EmptyInput));
    assert_eq!(
        cluster(&[1.0, 2.0], 3, 0, Mode::Median),
        Err(KmError::TooManyClusters { k: 3, n: 2 })
    );
    let err = cluster(&[1.0, 2.0, 3.0, 4.0], 2, 3, Mode::Mean).unwrap_err();
    assert!(matches!(err, KmError::MinClusterSizeTooLarge { .. }));
    assert!(err.is_invalid_argument());

    // Exactly at the boundary is fine and forces equal-size clusters.
    let out = cluster(&[1.0, 2.0, 3.0, 4.0], 2, 2, Mode::Mean).expect("boundary");
    assert_eq!(out.sizes(), &[2, 2]);
}

#[test]
fn label_coverage_on_large_input() {
    let xs = gen_dataset(DistKind::Uniform, 1_000, 42);
    for k in [2usize, 3, 10, 20] {
        let o = opts(k, 0, Mode::Mean);
        let out = cluster_with(&xs, &o).expect("cluster");
        check_shape(&format!("k={k}"), &out, xs.len(), &o);
    }
}

#[test]
fn min_cluster_size_is_enforced() {
    let mut rng = StdRng::seed_from_u64(42);
    let xs: Vec<f64> = std::iter::repeat(10.0)
        .take(130)
        .chain(std::iter::repeat(20.0).take(20))
        .chain(std::iter::repeat(30.0).take(5))
        .map(|x| x + 0.01 * rng.random::<f64>())
        .collect();

    for min_size in [5usize, 10, 50] {
        for mode in [Mode::Mean, Mode::Median] {
            let o = opts(3, min_size, mode);
            let out = cluster_with(&xs, &o).expect("cluster");
            check_shape(&format!("min={min_size} {mode:?}"), &out, xs.len(), &o);
        }
    }

    // Without the bound the tiny group of 5 is its own cluster; with 50 it cannot be.
    let free = cluster(&xs, 3, 0, Mode::Mean).expect("free");
    assert_eq!(free.sizes(), &[130, 20, 5]);
    let bounded = cluster(&xs, 3, 50, Mode::Mean).expect("bounded");
    assert!(bounded.sizes().iter().all(|&s| s >= 50), "{:?}", bounded.sizes());
}

#[test]
fn mean_and_median_partitions_diverge_on_outliers() {
    let xs = [1.0, 2.0, 3.0, 4.0, 40.0, 41.0, 100.0];
    let mean = cluster(&xs, 2, 0, Mode::Mean).expect("mean");
    let median = cluster(&xs, 2, 0, Mode::Median).expect("median");
    assert_eq!(mean.labels(), &[0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(median.labels(), &[0, 0, 0, 0, 1, 1, 1]);
    assert_ne!(mean.labels(), median.labels());
}

#[test]
fn separated_clumps_are_recovered_exactly() {
    let xs = gen_dataset(DistKind::Clumps { groups: 8 }, 5_000, 9);
    for mode in [Mode::Mean, Mode::Median] {
        let out = cluster(&xs, 8, 0, mode).expect("cluster");
        assert_eq!(out.sizes(), &[625; 8], "{mode:?}");
        for (c, &centroid) in out.centroids().iter().enumerate() {
            assert_abs_close(&format!("{mode:?} clump {c}"), 100.0 * c as f64, centroid, 0.25);
        }
    }
}

#[test]
fn repeated_calls_are_deterministic_with_ties() {
    let xs = gen_dataset(DistKind::Ties, 300, 5);
    for mode in [Mode::Mean, Mode::Median] {
        let a = cluster(&xs, 4, 10, mode).expect("a");
        let b = cluster(&xs, 4, 10, mode).expect("b");
        assert_eq!(a, b, "{mode:?}");
    }
}

#[test]
fn shuffling_input_only_permutes_labels() {
    let xs = gen_dataset(DistKind::Uniform, 400, 77);
    let perm = gen_permutation(xs.len(), 78);
    let shuffled: Vec<f64> = perm.iter().map(|&i| xs[i]).collect();

    for mode in [Mode::Mean, Mode::Median] {
        let direct = cluster(&xs, 5, 3, mode).expect("direct");
        let via_shuffle = cluster(&shuffled, 5, 3, mode).expect("shuffled");

        let mut restored = vec![usize::MAX; xs.len()];
        for (pos, &orig) in perm.iter().enumerate() {
            restored[orig] = via_shuffle.labels()[pos];
        }
        assert_eq!(restored, direct.labels(), "{mode:?}");
        assert_eq!(via_shuffle.centroids(), direct.centroids(), "{mode:?}");
    }
}

#[test]
fn concurrent_callers_see_identical_results() {
    let expected = cluster(&README_XS, 4, 0, Mode::Mean).expect("baseline");
    let results: Vec<Clustering> = (0..256)
        .into_par_iter()
        .map(|_| cluster(&README_XS, 4, 0, Mode::Mean).expect("parallel"))
        .collect();
    assert!(results.iter().all(|r| *r == expected));
}
