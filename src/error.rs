use thiserror::Error;

use crate::grid::CellId;

#[derive(Debug, Error)]
pub enum MazeError {
    /// The solver ran out of cells to backtrack to. Only happens when the grid was not
    /// generated into a spanning tree.
    #[error("No path from cell {start} to cell {end}")]
    PathNotFound { start: CellId, end: CellId },
    #[error("Unknown maze algorithm: '{0}'")]
    UnknownAlgorithm(String),
    #[error("Invalid maze config: {0}")]
    Config(#[from] ron::error::SpannedError),
}
