use crate::algo::sorting::{evaluate, Algorithm};
use rand::Rng;
use serde_derive::Serialize;
use tracing::debug;

pub const DEFAULT_SIZES: [usize; 6] = [10, 20, 30, 40, 50, 60];
pub const DEFAULT_VALUE_BOUND: i64 = 100;

/// `size` values drawn from `0..value_bound`. A bound below 1 is treated as 1.
pub fn generate_array<R: Rng + ?Sized>(rng: &mut R, size: usize, value_bound: i64) -> Vec<i64> {
    let bound = value_bound.max(1);
    (0..size).map(|_| rng.gen_range(0..bound)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dataset {
    pub algorithm: Algorithm,
    pub label: String,
    pub steps: Vec<u64>,
}

impl Dataset {
    fn new(algorithm: Algorithm, capacity: usize) -> Dataset {
        Dataset {
            algorithm,
            label: format!("{} Steps", algorithm.label()),
            steps: Vec::with_capacity(capacity),
        }
    }
}

/// Step counts of every algorithm, one entry per size in `sizes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSeries {
    pub sizes: Vec<usize>,
    pub datasets: Vec<Dataset>,
}

impl StepSeries {
    pub fn steps_for(&self, algorithm: Algorithm) -> Option<&[u64]> {
        self.datasets
            .iter()
            .find(|d| d.algorithm == algorithm)
            .map(|d| &d.steps[..])
    }

    pub fn max_steps(&self) -> u64 {
        self.datasets
            .iter()
            .flat_map(|d| d.steps.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/*
* one random array per size. every algorithm sorts its own copy of that same array
* so the counts in a column are comparable.
*/
pub fn run_all_algorithms<R: Rng + ?Sized>(
    rng: &mut R,
    sizes: &[usize],
    value_bound: i64,
) -> StepSeries {
    let datasets = Algorithm::ALL
        .iter()
        .map(|a| Dataset::new(*a, sizes.len()))
        .collect::<Vec<_>>();
    let datasets = sizes.iter().fold(datasets, |mut acc, &size| {
        let array = generate_array(&mut *rng, size, value_bound);
        for dataset in acc.iter_mut() {
            dataset.steps.push(evaluate(dataset.algorithm, &array).steps);
        }
        debug!(
            size,
            steps = ?acc.iter().map(|d| d.steps[d.steps.len() - 1]).collect::<Vec<_>>(),
            "ran all algorithms"
        );
        acc
    });
    StepSeries {
        sizes: sizes.to_vec(),
        datasets,
    }
}

#[cfg(test)]
mod tests {
    use crate::algo::series::{generate_array, run_all_algorithms, DEFAULT_SIZES};
    use crate::algo::sorting::Algorithm;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn generate() {
        let mut rng = StdRng::seed_from_u64(1);
        let v = generate_array(&mut rng, 25, 100);
        assert_eq!(v.len(), 25);
        assert!(v.iter().all(|x| (0..100).contains(x)));
        assert!(generate_array(&mut rng, 0, 100).is_empty());
    }

    #[test]
    fn generate_is_reproducible_with_a_seed() {
        let a = generate_array(&mut StdRng::seed_from_u64(99), 30, 100);
        let b = generate_array(&mut StdRng::seed_from_u64(99), 30, 100);
        assert_eq!(a, b);
    }

    #[test]
    fn generate_with_degenerate_bound() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(generate_array(&mut rng, 4, 0), vec![0, 0, 0, 0]);
        assert_eq!(generate_array(&mut rng, 2, -5), vec![0, 0]);
    }

    #[test]
    fn six_entries_per_algorithm() {
        let mut rng = StdRng::seed_from_u64(2024);
        let series = run_all_algorithms(&mut rng, &DEFAULT_SIZES, 100);
        assert_eq!(series.sizes, DEFAULT_SIZES.to_vec());
        assert_eq!(series.datasets.len(), 3);
        for algorithm in Algorithm::ALL {
            assert_eq!(series.steps_for(algorithm).map(|s| s.len()), Some(6));
        }
        // bubble ignores the content of the array
        assert_eq!(
            series.steps_for(Algorithm::Bubble),
            Some(&[45, 190, 435, 780, 1225, 1770][..])
        );
        assert_eq!(series.max_steps(), 1770);
    }

    #[test]
    fn labels() {
        let series = run_all_algorithms(&mut StdRng::seed_from_u64(0), &[5], 10);
        let labels = series.datasets.iter().map(|d| d.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Bubble Sort Steps", "Merge Sort Steps", "Quick Sort Steps"]);
    }

    #[test]
    fn empty_sizes() {
        let series = run_all_algorithms(&mut StdRng::seed_from_u64(0), &[], 100);
        assert!(series.sizes.is_empty());
        assert!(series.datasets.iter().all(|d| d.steps.is_empty()));
        assert_eq!(series.max_steps(), 0);
    }
}
