use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};

use crate::{algorithms::Algorithm, error::MazeError};

pub const DEFAULT_ROWS: usize = 20;

/// Options a [`Maze`](crate::Maze) is built from.
///
/// Zero sizes are not rejected, they fall back to the defaults (see [`MazeConfig::dims`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub rows: usize,
    /// Same as `rows` when not set.
    pub cols: Option<usize>,
    pub algo: Algorithm,
    /// Seed of the maze.
    ///
    /// Used for deterministic generation and solving.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: None,
            algo: Algorithm::default(),
            seed: None,
        }
    }
}

impl MazeConfig {
    /// Square maze of `size` rows and columns.
    pub fn square(size: usize) -> Self {
        Self {
            rows: size,
            ..Default::default()
        }
    }

    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = Some(cols);
        self
    }

    pub fn with_algo(mut self, algo: Algorithm) -> Self {
        self.algo = algo;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses the config from RON, e.g. `(rows: 10, cols: 15, algo: kruskal, seed: 3)`.
    ///
    /// Omitted fields keep their defaults.
    pub fn from_ron(source: &str) -> Result<Self, MazeError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str(source)?)
    }

    /// Effective `(rows, cols)`.
    ///
    /// Zero rows become [`DEFAULT_ROWS`], missing or zero cols become the effective rows.
    pub fn dims(&self) -> (usize, usize) {
        let rows = if self.rows == 0 {
            log::warn!("Invalid value for 'rows' (0), using default value {DEFAULT_ROWS}");
            DEFAULT_ROWS
        } else {
            self.rows
        };

        let cols = match self.cols {
            None => rows,
            Some(0) => {
                log::warn!("Invalid value for 'cols' (0), using rows ({rows})");
                rows
            }
            Some(cols) => cols,
        };

        (rows, cols)
    }
}

impl From<usize> for MazeConfig {
    fn from(size: usize) -> Self {
        Self::square(size)
    }
}
