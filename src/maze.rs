use rand::{thread_rng, Rng as _, SeedableRng as _};

use crate::{
    algorithms::{Algorithm, Random},
    config::MazeConfig,
    error::MazeError,
    grid::{Cell, CellId, Grid, WallGroups},
    solver,
};

/// Generated maze together with the random stream it was generated with.
///
/// The same stream is used by [`Maze::solve`], so a maze built from a seeded config gives
/// reproducible solutions too.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    algorithm: Algorithm,
    seed: Option<u64>,
    rng: Random,
}

impl Maze {
    pub fn new(config: impl Into<MazeConfig>) -> Self {
        let config = config.into();
        let (rows, cols) = config.dims();
        let seed = config.seed.unwrap_or_else(|| thread_rng().gen());

        let mut maze = Self {
            grid: Grid::new(rows, cols),
            algorithm: config.algo,
            seed: Some(seed),
            rng: Random::seed_from_u64(seed),
        };
        maze.algorithm.generate(&mut maze.grid, &mut maze.rng);

        maze
    }

    /// Generates into a caller-provided grid, drawing from a caller-provided random stream.
    ///
    /// Any wall the grid had open is closed first. The maze keeps `rng` for [`Maze::solve`].
    pub fn from_grid(mut grid: Grid, algorithm: Algorithm, mut rng: Random) -> Self {
        grid.reset();
        algorithm.generate(&mut grid, &mut rng);

        Self {
            grid,
            algorithm,
            seed: None,
            rng,
        }
    }

    /// Square maze using the default algorithm.
    pub fn square(size: usize) -> Self {
        Self::new(MazeConfig::square(size))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Seed the maze was generated from, either the configured one or a random one.
    ///
    /// `None` for mazes built with [`Maze::from_grid`].
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Iterates every cell in row-major order. Each call starts a fresh traversal.
    pub fn cells(&self) -> std::slice::Iter<'_, Cell> {
        self.grid.cells()
    }

    /// Top left cell.
    pub fn start(&self) -> CellId {
        CellId(0)
    }

    /// Bottom right cell.
    pub fn end(&self) -> CellId {
        CellId(self.grid.len() - 1)
    }

    pub fn group_walls(&self) -> WallGroups<'_> {
        self.grid.group_walls()
    }

    /// Path between two cells of this maze, using the maze's own random stream.
    pub fn solve(&mut self, start: CellId, end: CellId) -> Result<Vec<CellId>, MazeError> {
        solver::solve(&self.grid, start, end, &mut self.rng)
    }

    /// Path between two cells of this maze, using an external random stream.
    pub fn solve_with(
        &self,
        start: CellId,
        end: CellId,
        rng: &mut Random,
    ) -> Result<Vec<CellId>, MazeError> {
        solver::solve(&self.grid, start, end, rng)
    }
}

impl Default for Maze {
    fn default() -> Self {
        Self::new(MazeConfig::default())
    }
}

impl<'a> IntoIterator for &'a Maze {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells()
    }
}
