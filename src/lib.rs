//! Rectangular grid mazes: three randomized spanning-tree generators and a randomized solver.

pub mod algorithms;
pub mod array;
pub mod config;
pub mod dims;
pub mod error;
pub mod grid;
pub mod maze;
pub mod solver;
pub mod union_find;

pub use algorithms::{Algorithm, MazeGenerator, Random};
pub use config::MazeConfig;
pub use error::MazeError;
pub use grid::{Cell, CellId, Direction, Grid, Orientation, Wall, WallGroups, WallId};
pub use maze::Maze;
