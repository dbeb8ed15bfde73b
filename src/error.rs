use thiserror::Error;

/// Errors raised while building graphs, running the colouring engines, or
/// driving the experiments.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed graph construction or out-of-range parameters.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// CBIP found an odd cycle while revealing `vertex`.
    #[error("Graph is not bipartite (odd cycle detected at vertex {vertex})")]
    NotBipartite { vertex: usize },

    /// An engine produced an improper colouring.
    #[error("Invalid colouring: {0}")]
    InvalidColouring(String),

    /// Malformed line within an EDGES file.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or unwritable results CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
