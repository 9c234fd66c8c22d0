use crate::WIDTH;

/// Errors returned when a piece cannot be dropped into a column
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMoveError {
    #[error("invalid move, column {column} out of range (columns are 0 to {})", WIDTH - 1)]
    OutOfRange { column: usize },

    #[error("invalid move, column {column} is full")]
    ColumnFull { column: usize },
}

/// Returned when a move is requested for a board with no playable column
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no valid moves remain")]
pub struct EmptyMoveSetError;
