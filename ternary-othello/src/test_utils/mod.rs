//! Utilities used for testing and benchmarking.

pub mod fixtures;
pub mod naive;

mod perft;
pub use perft::run_perft;
