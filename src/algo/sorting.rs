use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::trace;

pub use self::bubble::bubble_sort;
pub use self::merge::merge_sort;
pub use self::quick::quick_sort;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Merge, Algorithm::Quick];

    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// nominal label, never derived from the counted steps.
    pub fn complexity(&self) -> Complexity {
        match self {
            Algorithm::Bubble => Complexity::Quadratic,
            Algorithm::Merge | Algorithm::Quick => Complexity::Linearithmic,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}' (expected bubble, merge or quick)")]
pub struct ParseAlgorithmError(String);

// accepts `bubble`, `bubble-sort`, `bubble_sort` and `Bubble Sort`
impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match normalized.strip_suffix(" sort").unwrap_or(normalized.as_str()) {
            "bubble" => Ok(Algorithm::Bubble),
            "merge" => Ok(Algorithm::Merge),
            "quick" => Ok(Algorithm::Quick),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    #[serde(rename = "O(n^2)")]
    Quadratic,
    #[serde(rename = "O(n log n)")]
    Linearithmic,
}

impl Complexity {
    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Quadratic => "O(n^2)",
            Complexity::Linearithmic => "O(n log n)",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one run: the sorted copy, the counted steps and the nominal complexity.
///
/// What counts as a step is specific to each algorithm:
/// - bubble: every adjacent comparison
/// - merge: every head-to-head comparison while merging two runs
/// - quick: every element scanned while partitioning
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortResult<T> {
    pub sorted: Vec<T>,
    pub steps: u64,
    pub complexity: Complexity,
}

/// Sorts a copy of `input` with `algorithm`. `input` itself is left untouched.
pub fn evaluate<T: PartialOrd + Clone>(algorithm: Algorithm, input: &[T]) -> SortResult<T> {
    let result = match algorithm {
        Algorithm::Bubble => bubble_sort(input.to_vec()),
        Algorithm::Merge => merge_sort(input),
        Algorithm::Quick => quick_sort(input),
    };
    trace!(%algorithm, len = input.len(), steps = result.steps, "evaluated");
    result
}

pub mod bubble {
    use super::{Algorithm, SortResult};

    // sorts the owned vec in place. n - 1 sweeps, no early exit on sorted input.
    pub fn bubble_sort<T: PartialOrd>(mut vec: Vec<T>) -> SortResult<T> {
        let mut steps = 0;
        // each sweep floats the largest remaining element up to `end`
        for end in (1..vec.len()).rev() {
            for focus in 0..end {
                steps += 1;
                if vec[focus] > vec[focus + 1] {
                    vec.swap(focus, focus + 1);
                }
            }
        }
        SortResult {
            sorted: vec,
            steps,
            complexity: Algorithm::Bubble.complexity(),
        }
    }
}

pub mod merge {
    use super::{Algorithm, SortResult};

    pub fn merge_sort<T: PartialOrd + Clone>(input: &[T]) -> SortResult<T> {
        let mut steps = 0;
        let sorted = divide(input, &mut steps);
        SortResult {
            sorted,
            steps,
            complexity: Algorithm::Merge.complexity(),
        }
    }

    fn divide<T: PartialOrd + Clone>(slice: &[T], steps: &mut u64) -> Vec<T> {
        if slice.len() <= 1 {
            return slice.to_vec();
        }
        let (left, right) = slice.split_at(slice.len() / 2);
        let left = divide(left, steps);
        let right = divide(right, steps);
        merge(left, right, steps)
    }

    // note: ties take the right head.
    fn merge<T: PartialOrd>(left: Vec<T>, right: Vec<T>, steps: &mut u64) -> Vec<T> {
        let mut sorted = Vec::with_capacity(left.len() + right.len());
        let mut left = left.into_iter().peekable();
        let mut right = right.into_iter().peekable();
        loop {
            let take_left = match (left.peek(), right.peek()) {
                (Some(l), Some(r)) => l < r,
                _ => break,
            };
            *steps += 1;
            let next = if take_left { left.next() } else { right.next() };
            sorted.extend(next);
        }
        // whatever is left over is already sorted and costs nothing
        sorted.extend(left);
        sorted.extend(right);
        sorted
    }
}

pub mod quick {
    use super::{Algorithm, SortResult};

    pub fn quick_sort<T: PartialOrd + Clone>(input: &[T]) -> SortResult<T> {
        let mut vec = input.to_vec();
        let mut steps = 0;
        sort(&mut vec[..], &mut steps);
        SortResult {
            sorted: vec,
            steps,
            complexity: Algorithm::Quick.complexity(),
        }
    }

    fn sort<T: PartialOrd>(slice: &mut [T], steps: &mut u64) {
        if slice.len() > 1 {
            let pivot = partition(slice, steps);
            let (left, right) = slice.split_at_mut(pivot);
            sort(left, steps);
            sort(&mut right[1..], steps);
        }
    }

    /*
     * lomuto: the last element is the pivot. every scanned element is one step,
     * swaps are free. returns the final index of the pivot.
     */
    fn partition<T: PartialOrd>(slice: &mut [T], steps: &mut u64) -> usize {
        let high = slice.len() - 1;
        let mut store = 0;
        for j in 0..high {
            *steps += 1;
            if slice[j] < slice[high] {
                slice.swap(store, j);
                store += 1;
            }
        }
        slice.swap(store, high);
        store
    }
}
