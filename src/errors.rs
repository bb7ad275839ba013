use thiserror::Error;

/// Errors from building mazes and their meshes.
///
/// None of these are expected while generating or synthesising a correctly configured maze,
/// they point at a caller or configuration bug.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The coordinate is not a cell of the grid.
    #[error("Invalid cell: {cell} is not a cell of the grid")]
    InvalidCell { cell: String },

    /// A cell cannot link to itself.
    #[error("Self link: {cell} cannot be linked to itself")]
    SelfLink { cell: String },

    /// The grid or mesh configuration cannot produce a meaningful result.
    #[error("Degenerate configuration: {message}")]
    DegenerateConfiguration { message: String },

    /// A polygon refers to a point that does not exist.
    #[error("Point index {index} out of range for {points} points")]
    IndexOutOfRange { index: u32, points: usize },
}

impl MazeError {
    pub fn invalid_cell(cell: impl ToString) -> Self {
        Self::InvalidCell {
            cell: cell.to_string(),
        }
    }

    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateConfiguration {
            message: message.into(),
        }
    }
}

pub type MazeResult<T> = Result<T, MazeError>;
