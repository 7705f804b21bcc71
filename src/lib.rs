//! Best-of-N wall-clock timing of JSON decoding over a fixed set of
//! documents, summarized by the geometric mean of the per-document minimums.

pub mod config;
pub mod decoder;
pub mod error;
pub mod runner;

pub use config::{Config, REPETITIONS, SOURCES};
pub use decoder::{Decoder, SerdeValue};
pub use error::{BenchError, Result};
pub use runner::{SourceResult, Summary, aggregate, measure_source, run, time_trials};
