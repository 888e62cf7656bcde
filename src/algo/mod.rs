pub mod series;
pub mod sorting;
