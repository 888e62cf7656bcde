//! Counts the steps bubble, merge and quick sort take on random arrays and
//! compares them across array sizes.
//!
//! [`algo::sorting`] holds the evaluator, [`algo::series`] the batch comparison,
//! and [`app`] the command line front end built on top of both.

pub mod algo;
pub mod app;

pub use algo::series::{generate_array, run_all_algorithms, Dataset, StepSeries};
pub use algo::sorting::{evaluate, Algorithm, Complexity, SortResult};
