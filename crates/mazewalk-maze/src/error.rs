use std::fmt;

/// Errors produced while building or loading a maze grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Width or height is even or smaller than 3.
    InvalidDimension { width: usize, height: usize },
    /// A layout row does not match the width of the first row.
    RaggedLayout { row: usize, expected: usize, found: usize },
    /// A layout character is neither a wall nor a path marker.
    UnknownCell { row: usize, col: usize, ch: char },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimension { width, height } => write!(
                f,
                "invalid maze dimension {width}x{height}: both sides must be odd and at least 3"
            ),
            MazeError::RaggedLayout { row, expected, found } => write!(
                f,
                "layout row {row} has {found} cells, expected {expected}"
            ),
            MazeError::UnknownCell { row, col, ch } => {
                write!(f, "unknown layout cell {ch:?} at {row}:{col}")
            }
        }
    }
}

impl std::error::Error for MazeError {}
