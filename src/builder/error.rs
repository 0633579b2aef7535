//! Build errors for the container builder.

use thiserror::Error;

/// Errors that can occur when building containers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Container label is empty. Pass a non-blank label to .label() or omit it")]
    EmptyLabel,

    #[error("History limit is zero. Use a limit of at least 1 or .unbounded_history()")]
    ZeroHistoryLimit,
}
