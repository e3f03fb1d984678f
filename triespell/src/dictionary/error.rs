//! Dictionary-loading errors.
use std::io::Error;

/// Errors that can occur when loading a frequency dictionary.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DictionaryError {
    /// Error opening or reading the dictionary source
    #[error("I/O error reading '{0}'")]
    Io(String, #[source] Error),

    /// A line could not be parsed as `word freq [tag]`
    #[error("Invalid entry on line {line}: {reason}")]
    Parse {
        /// 1-based line number in the source
        line: usize,
        /// what was wrong with the line
        reason: String,
    },
}
