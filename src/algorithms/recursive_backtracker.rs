use hashbrown::HashSet;
use rand::seq::SliceRandom;
use smallvec::SmallVec;

use super::{MazeGenerator, Random};
use crate::grid::{CellId, Grid};

/// Randomized depth-first search with an explicit stack.
///
/// Walks from a random cell into random unvisited neighbours, backtracking when stuck.
/// Produces long winding corridors.
#[derive(Debug)]
pub struct RecursiveBacktracker;

impl MazeGenerator for RecursiveBacktracker {
    fn generate(&self, grid: &mut Grid, rng: &mut Random) {
        let mut visited = HashSet::with_capacity(grid.len());
        let mut stack: Vec<CellId> = Vec::new();

        let mut current = grid.random_cell(rng);
        visited.insert(current);

        loop {
            let unvisited_neighbors = grid
                .neighbors(current)
                .into_iter()
                .filter(|cell| !visited.contains(cell))
                .collect::<SmallVec<[_; 4]>>();

            if let Some(&next) = unvisited_neighbors.choose(rng) {
                let wall = grid
                    .wall_between(current, next)
                    .expect("neighbors share a wall");
                grid.open_wall(wall);
                stack.push(current);
                visited.insert(next);
                current = next;
            } else if let Some(previous) = stack.pop() {
                current = previous;
            } else {
                break;
            }
        }
    }
}
