mod recursive_backtracker;
mod rnd_kruskals;
mod rnd_prims;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::MazeError, grid::Grid};
pub use recursive_backtracker::RecursiveBacktracker;
pub use rnd_kruskals::RndKruskals;
pub use rnd_prims::RndPrims;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Carves a perfect maze into a grid.
///
/// The grid is expected to have every wall closed. Afterwards exactly `n - 1` walls are open
/// and every cell is reachable from every other one.
pub trait MazeGenerator: fmt::Debug + Sync + Send {
    fn generate(&self, grid: &mut Grid, rng: &mut Random);
}

/// Selects one of the built-in generators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Randomized depth-first backtracker, see [`RecursiveBacktracker`].
    #[default]
    Recursive,
    /// See [`RndPrims`].
    Prim,
    /// See [`RndKruskals`].
    Kruskal,
}

impl Algorithm {
    pub fn all() -> [Algorithm; 3] {
        [Algorithm::Recursive, Algorithm::Prim, Algorithm::Kruskal]
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Recursive => "recursive",
            Algorithm::Prim => "prim",
            Algorithm::Kruskal => "kruskal",
        }
    }

    pub fn generator(self) -> &'static dyn MazeGenerator {
        match self {
            Algorithm::Recursive => &RecursiveBacktracker,
            Algorithm::Prim => &RndPrims,
            Algorithm::Kruskal => &RndKruskals,
        }
    }

    pub fn generate(self, grid: &mut Grid, rng: &mut Random) {
        log::debug!(
            "Generating {}x{} maze using '{}'",
            grid.rows(),
            grid.cols(),
            self.name()
        );

        self.generator().generate(grid, rng);

        log::debug!(
            "Opened {} of {} walls",
            grid.open_wall_count(),
            grid.wall_count()
        );
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::all()
            .into_iter()
            .find(|algo| algo.name() == s)
            .ok_or_else(|| MazeError::UnknownAlgorithm(s.to_string()))
    }
}
