use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {name} ({}): {source}", .path.display())]
    Parse {
        name: String,
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("cannot write report: {0}")]
    Output(#[from] std::io::Error),
    #[error("repetition count must be positive")]
    NoRepetitions,
    #[error("geometric mean of an empty sequence")]
    EmptyAggregate,
    #[error("minimum time {0} is not strictly positive")]
    NonPositiveTime(f64),
}

pub type Result<T> = std::result::Result<T, BenchError>;
