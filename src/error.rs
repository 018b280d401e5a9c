//! Error types for the engine boundary.

use derive_more::{Display, Error};

/// Cell index outside the 0-8 board range, with location tracking.
///
/// Distinct from selecting an occupied cell, which is a silent no-op: an
/// out-of-range index indicates an integration bug in the caller rather than
/// a normal UI race.
#[derive(Debug, Clone, Display, Error)]
#[display("cell index {} out of range 0-8 at {}:{}", index, file, line)]
pub struct IndexError {
    /// The offending index.
    pub index: usize,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl IndexError {
    /// Creates a new index error with caller location tracking.
    #[track_caller]
    pub fn new(index: usize) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            index,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
