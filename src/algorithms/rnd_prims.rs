use hashbrown::HashSet;
use rand::Rng as _;

use super::{MazeGenerator, Random};
use crate::grid::{Grid, WallId};

/// Randomized Prim's algorithm.
///
/// Grows the maze from a random cell by opening random walls on the frontier between the
/// visited area and the rest of the grid.
#[derive(Debug)]
pub struct RndPrims;

impl MazeGenerator for RndPrims {
    fn generate(&self, grid: &mut Grid, rng: &mut Random) {
        let mut visited = HashSet::with_capacity(grid.len());

        let start = grid.random_cell(rng);
        visited.insert(start);

        let mut frontier: Vec<WallId> = grid.cell(start).walls().map(|(_, wall)| wall).collect();

        while !frontier.is_empty() {
            let wall = frontier.swap_remove(rng.gen_range(0..frontier.len()));
            let (a, b) = grid.wall(wall).cells();

            let new_cell = match (visited.contains(&a), visited.contains(&b)) {
                // would close a loop
                (true, true) => continue,
                (true, false) => b,
                (false, true) => a,
                (false, false) => unreachable!("frontier wall with no visited side"),
            };

            grid.open_wall(wall);
            visited.insert(new_cell);
            frontier.extend(grid.cell(new_cell).walls().map(|(_, wall)| wall));
        }

        debug_assert_eq!(visited.len(), grid.len());
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;

    #[test]
    fn visits_every_cell_once() {
        let mut grid = Grid::new(17, 23);
        RndPrims.generate(&mut grid, &mut Random::seed_from_u64(3));

        assert_eq!(grid.open_wall_count(), 17 * 23 - 1);
        assert!(grid.is_perfect());
    }
}
