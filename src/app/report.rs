use crate::algo::sorting::{Algorithm, SortResult};
use crate::app::error::Result;
use serde_derive::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortReport {
    pub algorithm: Algorithm,
    pub original: Vec<i64>,
    #[serde(flatten)]
    pub result: SortResult<i64>,
}

impl SortReport {
    pub fn new(algorithm: Algorithm, original: Vec<i64>, result: SortResult<i64>) -> SortReport {
        SortReport {
            algorithm,
            original,
            result,
        }
    }
}

pub fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_array(values: &[i64]) -> String {
    format!("Original Array: {}\n", join(values))
}

// expect: original, sorted, steps and complexity, one per line
pub fn render_sort(report: &SortReport) -> String {
    fmt(
        &join(&report.original),
        report.algorithm,
        &join(&report.result.sorted),
        report.result.steps,
        report.result.complexity.label(),
    )
}

fn fmt(original: &str, algorithm: Algorithm, sorted: &str, steps: u64, complexity: &str) -> String {
    format!(
        "Original Array: {}\nSorted Array ({}): {}\nSteps Taken: {}\nTime Complexity: {}\n",
        original, algorithm, sorted, steps, complexity
    )
}

pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)? + "\n")
}

#[cfg(test)]
mod tests {
    use crate::algo::sorting::{evaluate, Algorithm};
    use crate::app::report::{join, render_array, render_sort, to_json, SortReport};

    fn report(algorithm: Algorithm, original: Vec<i64>) -> SortReport {
        let result = evaluate(algorithm, &original);
        SortReport::new(algorithm, original, result)
    }

    #[test]
    fn text() {
        assert_eq!(join(&[]), "");
        assert_eq!(render_array(&[4, 1]), "Original Array: 4, 1\n");
        assert_eq!(
            render_sort(&report(Algorithm::Bubble, vec![5, 3, 8, 1])),
            "Original Array: 5, 3, 8, 1\n\
             Sorted Array (Bubble Sort): 1, 3, 5, 8\n\
             Steps Taken: 6\n\
             Time Complexity: O(n^2)\n"
        );
    }

    #[test]
    fn json() {
        let out = to_json(&report(Algorithm::Quick, vec![2, 2, 2])).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["algorithm"], "quick");
        assert_eq!(v["original"], serde_json::json!([2, 2, 2]));
        assert_eq!(v["sorted"], serde_json::json!([2, 2, 2]));
        assert_eq!(v["steps"], 3);
        assert_eq!(v["complexity"], "O(n log n)");
    }
}
