//! Best-result selection and run statistics behind the knapsack benchmark
//! dashboard.

pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod report;
pub mod select;
pub mod stats;

pub use dataset::{AlgorithmResult, Dataset, DatasetRegistry};
pub use error::CoreError;
pub use report::Report;
pub use select::select_best;
pub use stats::{compute_statistics, RunSequence, StatisticsBundle};
