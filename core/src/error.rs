use thiserror::Error;

/// Errors raised by the maze engine and its storage collaborators.
///
/// Every variant is a contract violation on the caller's side. An
/// unsolvable maze is not an error: the search reports it as `found == false`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// A row/column pair outside the grid bounds.
    #[error("Cell ({row}, {col}) is out of range for a {num_rows}x{num_cols} maze")]
    OutOfRange {
        row: usize,
        col: usize,
        num_rows: usize,
        num_cols: usize,
    },

    /// `pop` or `peek` on an empty stack.
    #[error("Attempted to access an empty stack")]
    EmptyStackAccess,

    /// The search was started before the maze was fully configured.
    #[error("Precondition failed: {0}")]
    PreconditionFailed(&'static str),
}
