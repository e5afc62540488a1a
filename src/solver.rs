use hashbrown::HashSet;
use rand::seq::SliceRandom;
use smallvec::SmallVec;

use crate::{
    algorithms::Random,
    error::MazeError,
    grid::{CellId, Grid},
};

/// Finds a path from `start` to `end` through open walls.
///
/// Randomized depth-first search with backtracking. The path is simple and starts and ends
/// with the given cells, but is not necessarily the shortest one. On a generated (perfect) maze
/// there is exactly one simple path, so any path found is also the shortest.
pub fn solve(
    grid: &Grid,
    start: CellId,
    end: CellId,
    rng: &mut Random,
) -> Result<Vec<CellId>, MazeError> {
    let mut visited = HashSet::with_capacity(grid.len());
    let mut path = vec![start];
    visited.insert(start);

    let mut current = start;
    while current != end {
        let unvisited = grid
            .reachable_neighbors(current)
            .into_iter()
            .filter(|cell| !visited.contains(cell))
            .collect::<SmallVec<[_; 4]>>();

        if let Some(&next) = unvisited.choose(rng) {
            visited.insert(next);
            path.push(next);
            current = next;
        } else {
            path.pop();
            current = *path.last().ok_or(MazeError::PathNotFound { start, end })?;
        }
    }

    log::trace!("Found path {} -> {} of {} cells", start, end, path.len());

    Ok(path)
}
