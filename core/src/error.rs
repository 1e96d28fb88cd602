//! Error types shared by the hanyu crates.

use thiserror::Error;

/// Error type for pattern compilation, matching and configuration.
///
/// A pattern that simply does not match is never an error; matching
/// operations report that as `Ok(None)`, `Ok(false)` or an empty result.
#[derive(Debug, Error)]
pub enum Error {
    /// A pattern source failed to compile
    #[error("failed to compile {name} pattern: {source}")]
    Compile {
        name: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// The matching engine gave up (e.g. backtrack limit exceeded)
    #[error("matching error: {0}")]
    Match(#[from] fancy_regex::Error),

    /// Reading or writing a configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl Error {
    pub(crate) fn compile(name: &str, source: fancy_regex::Error) -> Self {
        Error::Compile {
            name: name.to_string(),
            source: Box::new(source),
        }
    }
}

/// Result type for hanyu operations
pub type Result<T> = std::result::Result<T, Error>;
