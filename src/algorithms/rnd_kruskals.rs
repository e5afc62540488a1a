use rand::seq::SliceRandom;

use super::{MazeGenerator, Random};
use crate::{
    grid::{CellId, Grid, WallId},
    union_find::UnionFind,
};

/// Randomized Kruskal's algorithm.
///
/// Opens walls in random order, skipping any wall whose cells are already connected.
#[derive(Debug)]
pub struct RndKruskals;

impl MazeGenerator for RndKruskals {
    fn generate(&self, grid: &mut Grid, rng: &mut Random) {
        let mut walls: Vec<WallId> = grid.walls().map(|wall| wall.id()).collect();
        walls.shuffle(rng);

        let mut sets = UnionFind::<CellId>::with_capacity(grid.len());

        for wall in walls {
            let (a, b) = grid.wall(wall).cells();
            if sets.join(a, b) {
                grid.open_wall(wall);
            }
        }
    }
}
