//! Error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// A move token that cannot be played on the current board.
///
/// Malformed tokens, out-of-range coordinates and occupied cells are all
/// reported the same way.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid input {:?} at {}:{}", token, file, line)]
pub struct InvalidInput {
    /// The rejected token.
    pub token: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidInput {
    /// Creates a new invalid input error with caller location tracking.
    #[track_caller]
    #[instrument(skip(token))]
    pub fn new(token: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            token: token.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
