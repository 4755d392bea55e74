use thiserror::Error;

/// Errors produced while mining, coding, or measuring a dataset.
#[derive(Error, Debug)]
pub enum Error {
    #[error("min_support must be in (0, 1], got {min_support}")]
    MiningParameter { min_support: f64 },

    #[error("compression ratio undefined: compressed output and dictionary are both empty")]
    Division,

    #[error("malformed transaction on line {line}: {reason}")]
    MalformedTransaction { line: usize, reason: String },

    #[error("code {0} is not present in the dictionary")]
    UnknownCode(u32),

    #[error("invalid generator config: {0}")]
    GeneratorConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
