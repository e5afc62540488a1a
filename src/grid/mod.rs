pub mod cell;
pub mod wall;

pub use cell::{Cell, CellId, Direction};
pub use wall::{Orientation, Wall, WallId};

use std::{collections::VecDeque, ops};

use hashbrown::HashSet;
use rand::Rng as _;
use smallvec::SmallVec;

use crate::{algorithms::Random, array::Array2D, dims::Dims};

/// Neighbour list of a single cell, there are at most four of them.
pub type Neighbors = SmallVec<[CellId; 4]>;

/// Rectangular grid of cells with a wall between every pair of adjacent cells.
///
/// The topology is fixed at construction, only the open/closed state of the walls changes.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array2D<Cell>,
    walls: Vec<Wall>,
}

impl Grid {
    /// Builds a grid with every wall closed.
    ///
    /// Walls are created in row-major order of their first cell, the right wall of a cell
    /// before its bottom wall.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid must have at least one cell");

        let size = Dims::from((rows, cols));
        let mut cells = Array2D::from_fn(rows, cols, |pos| {
            Cell::new(CellId(pos.linear_index(size)), pos)
        });

        let mut walls = Vec::with_capacity(rows * (cols - 1) + cols * (rows - 1));
        for pos in Dims::iter_fill(Dims::ZERO, size) {
            let from = pos.linear_index(size);

            for side in [Direction::Right, Direction::Down] {
                let Some(to) = cells.dim_to_idx(pos + side.to_coord()) else {
                    continue;
                };

                let id = WallId(walls.len());
                walls.push(Wall::new(id, CellId(from), CellId(to), side));
                cells[from].set_wall(side, id);
                cells[to].set_wall(side.reverse(), id);
            }
        }

        Self { cells, walls }
    }

    pub fn rows(&self) -> usize {
        self.size().0 as usize
    }

    pub fn cols(&self) -> usize {
        self.size().1 as usize
    }

    /// `Dims(rows, cols)`
    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates every cell in row-major order. Each call starts a fresh traversal.
    pub fn cells(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Iterates every wall in construction order.
    pub fn walls(&self) -> std::slice::Iter<'_, Wall> {
        self.walls.iter()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    pub fn open_wall_count(&self) -> usize {
        self.walls.iter().filter(|wall| wall.is_open()).count()
    }

    /// # Panics
    ///
    /// Panics if the id does not belong to this grid.
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    pub fn cell_at(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    /// # Panics
    ///
    /// Panics if the id does not belong to this grid.
    pub fn wall(&self, id: WallId) -> &Wall {
        &self.walls[id.0]
    }

    /// Wall shared by two cells, `None` if they are not adjacent.
    pub fn wall_between(&self, a: CellId, b: CellId) -> Option<WallId> {
        let (from, to) = (self.cell(a), self.cell(b));
        Direction::between(from.pos(), to.pos()).and_then(|dir| from.wall(dir))
    }

    pub fn open_wall(&mut self, id: WallId) {
        self.walls[id.0].open();
    }

    /// Closes every wall again, so the grid can be handed to a generator once more.
    pub fn reset(&mut self) {
        self.walls.iter_mut().for_each(Wall::close);
    }

    /// Splits the walls by orientation, keeping construction order inside each group.
    pub fn group_walls(&self) -> WallGroups<'_> {
        let (vertical, horizontal): (Vec<_>, Vec<_>) = self
            .walls
            .iter()
            .partition(|wall| wall.orientation() == Orientation::Vertical);

        WallGroups {
            vertical,
            horizontal,
        }
    }

    /// All adjacent cells, no matter if the wall between them is open.
    pub fn neighbors(&self, id: CellId) -> Neighbors {
        self.cell(id)
            .walls()
            .filter_map(|(_, wall)| self.wall(wall).other(id))
            .collect()
    }

    /// Adjacent cells connected to `id` by an open wall.
    pub fn reachable_neighbors(&self, id: CellId) -> Neighbors {
        self.cell(id)
            .walls()
            .map(|(_, wall)| self.wall(wall))
            .filter(|wall| wall.is_open())
            .filter_map(|wall| wall.other(id))
            .collect()
    }

    pub fn random_cell(&self, rng: &mut Random) -> CellId {
        CellId(rng.gen_range(0..self.len()))
    }

    /// Cells reachable from `start` through open walls, in breadth-first order.
    pub fn flood(&self, start: CellId) -> Vec<CellId> {
        let mut visited = HashSet::with_capacity(self.len());
        let mut order = Vec::with_capacity(self.len());
        let mut queue = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
            order.push(current);
            for next in self.reachable_neighbors(current) {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        order
    }

    /// Whether the open walls form a spanning tree: `n - 1` of them and every cell connected.
    pub fn is_perfect(&self) -> bool {
        self.open_wall_count() == self.len() - 1 && self.flood(CellId(0)).len() == self.len()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells()
    }
}

/// Walls of a grid split by [`Orientation`].
#[derive(Debug, Clone)]
pub struct WallGroups<'a> {
    pub vertical: Vec<&'a Wall>,
    pub horizontal: Vec<&'a Wall>,
}

impl<'a> WallGroups<'a> {
    pub fn get(&self, orientation: Orientation) -> &[&'a Wall] {
        match orientation {
            Orientation::Vertical => &self.vertical,
            Orientation::Horizontal => &self.horizontal,
        }
    }
}

impl<'a> ops::Index<Orientation> for WallGroups<'a> {
    type Output = [&'a Wall];

    fn index(&self, index: Orientation) -> &Self::Output {
        self.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall_total(rows: usize, cols: usize) -> usize {
        rows * (cols - 1) + cols * (rows - 1)
    }

    #[test]
    fn wall_count() {
        for (rows, cols) in [(1, 1), (1, 7), (7, 1), (2, 2), (3, 5), (20, 20)] {
            let grid = Grid::new(rows, cols);
            assert_eq!(grid.len(), rows * cols);
            assert_eq!(grid.wall_count(), wall_total(rows, cols));
            assert_eq!(grid.open_wall_count(), 0);
        }
    }

    #[test]
    fn walls_join_adjacent_cells_in_order() {
        let grid = Grid::new(4, 6);

        for wall in grid.walls() {
            let (a, b) = (grid.cell(wall.cell1()), grid.cell(wall.cell2()));
            assert!(a.pos().is_adjacent(b.pos()));
            assert!(a.pos() < b.pos());
            assert!(wall.is_closed());
        }
    }

    #[test]
    fn walls_are_registered_on_both_sides() {
        let grid = Grid::new(5, 3);

        for wall in grid.walls() {
            let side = wall.side();
            assert_eq!(grid.cell(wall.cell1()).wall(side), Some(wall.id()));
            assert_eq!(
                grid.cell(wall.cell2()).wall(side.reverse()),
                Some(wall.id())
            );
        }

        let registered: usize = grid.cells().map(|cell| cell.walls().count()).sum();
        assert_eq!(registered, 2 * grid.wall_count());
    }

    #[test]
    fn edges_have_no_walls() {
        let grid = Grid::new(3, 3);

        let corner = grid.cell_at(Dims(0, 0)).unwrap();
        assert_eq!(corner.wall(Direction::Up), None);
        assert_eq!(corner.wall(Direction::Left), None);
        assert!(corner.wall(Direction::Right).is_some());
        assert!(corner.wall(Direction::Down).is_some());

        let center = grid.cell_at(Dims(1, 1)).unwrap();
        assert_eq!(center.walls().count(), 4);
    }

    #[test]
    fn cells_are_row_major_and_restartable() {
        let grid = Grid::new(2, 3);

        let first: Vec<_> = grid.cells().map(Cell::pos).collect();
        let second: Vec<_> = (&grid).into_iter().map(Cell::pos).collect();
        assert_eq!(first, second);
        assert_eq!(
            first,
            Dims::iter_fill(Dims::ZERO, Dims(2, 3)).collect::<Vec<_>>()
        );

        for (i, cell) in grid.cells().enumerate() {
            assert_eq!(cell.id(), CellId(i));
        }
    }

    #[test]
    fn group_walls_by_orientation() {
        let grid = Grid::new(3, 4);
        let groups = grid.group_walls();

        assert_eq!(groups.vertical.len(), 3 * 3);
        assert_eq!(groups.horizontal.len(), 4 * 2);

        for wall in &groups[Orientation::Vertical] {
            assert_eq!(grid.cell(wall.cell1()).row(), grid.cell(wall.cell2()).row());
        }
        for wall in &groups[Orientation::Horizontal] {
            assert_eq!(grid.cell(wall.cell1()).col(), grid.cell(wall.cell2()).col());
        }

        for group in [&groups.vertical, &groups.horizontal] {
            assert!(group.windows(2).all(|pair| pair[0].id() < pair[1].id()));
        }
    }

    #[test]
    fn neighbors_ignore_walls_reachable_do_not() {
        let mut grid = Grid::new(3, 3);
        let center = grid.cell_at(Dims(1, 1)).unwrap().id();

        assert_eq!(grid.neighbors(center).len(), 4);
        assert!(grid.reachable_neighbors(center).is_empty());

        let right = grid.cell_at(Dims(1, 2)).unwrap().id();
        let wall = grid.wall_between(center, right).unwrap();
        grid.open_wall(wall);

        assert_eq!(grid.reachable_neighbors(center).as_slice(), &[right]);
        assert_eq!(grid.reachable_neighbors(right).as_slice(), &[center]);
        assert_eq!(grid.open_wall_count(), 1);

        grid.reset();
        assert_eq!(grid.open_wall_count(), 0);
    }

    #[test]
    fn wall_between_non_adjacent() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.wall_between(CellId(0), CellId(4)), None);
        assert_eq!(grid.wall_between(CellId(0), CellId(0)), None);
        assert_eq!(grid.wall_between(CellId(0), CellId(1)), Some(WallId(0)));
    }

    #[test]
    fn single_column_walls_are_horizontal() {
        let grid = Grid::new(4, 1);
        let groups = grid.group_walls();

        assert!(groups.vertical.is_empty());
        assert_eq!(groups.horizontal.len(), 3);
    }

    #[test]
    fn closed_grid_is_not_perfect() {
        assert!(Grid::new(1, 1).is_perfect());
        assert!(!Grid::new(2, 2).is_perfect());
    }
}
