use std::fmt;

use crate::dims::Dims;

use super::WallId;

/// Handle of a cell inside its [`Grid`](super::Grid). Equal to the row-major index of the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub usize);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

use Direction::*;

impl Direction {
    pub fn get_in_order() -> [Direction; 4] {
        [Up, Down, Left, Right]
    }

    pub fn to_coord(&self) -> Dims {
        match self {
            Up => Dims(-1, 0),
            Down => Dims(1, 0),
            Left => Dims(0, -1),
            Right => Dims(0, 1),
        }
    }

    pub fn reverse(&self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// Returns the direction leading from `from` to `to`, if they are adjacent.
    pub fn between(from: Dims, to: Dims) -> Option<Direction> {
        match (to.0 - from.0, to.1 - from.1) {
            (-1, 0) => Some(Up),
            (1, 0) => Some(Down),
            (0, -1) => Some(Left),
            (0, 1) => Some(Right),
            _ => None,
        }
    }

    fn slot(self) -> usize {
        match self {
            Up => 0,
            Down => 1,
            Left => 2,
            Right => 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cell {
    id: CellId,
    pos: Dims,
    walls: [Option<WallId>; 4],
}

impl Cell {
    pub(crate) fn new(id: CellId, pos: Dims) -> Cell {
        Cell {
            id,
            pos,
            walls: [None; 4],
        }
    }

    pub(crate) fn set_wall(&mut self, dir: Direction, wall: WallId) {
        self.walls[dir.slot()] = Some(wall);
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn pos(&self) -> Dims {
        self.pos
    }

    pub fn row(&self) -> usize {
        self.pos.0 as usize
    }

    pub fn col(&self) -> usize {
        self.pos.1 as usize
    }

    /// Wall bordering this cell in the given direction, `None` on the grid edge.
    pub fn wall(&self, dir: Direction) -> Option<WallId> {
        self.walls[dir.slot()]
    }

    /// All walls of this cell together with their direction, in [`Direction::get_in_order`]
    /// order.
    pub fn walls(&self) -> impl Iterator<Item = (Direction, WallId)> + '_ {
        Direction::get_in_order()
            .into_iter()
            .filter_map(|dir| self.wall(dir).map(|wall| (dir, wall)))
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Cell {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_is_involution() {
        for dir in Direction::get_in_order() {
            assert_eq!(dir.reverse().reverse(), dir);
            assert_eq!(dir.to_coord() + dir.reverse().to_coord(), Dims::ZERO);
        }
    }

    #[test]
    fn between() {
        let origin = Dims(3, 3);
        for dir in Direction::get_in_order() {
            assert_eq!(Direction::between(origin, origin + dir.to_coord()), Some(dir));
        }
        assert_eq!(Direction::between(origin, Dims(4, 4)), None);
        assert_eq!(Direction::between(origin, origin), None);
    }

    #[test]
    fn sparse_walls() {
        let mut cell = Cell::new(CellId(0), Dims::ZERO);
        cell.set_wall(Right, WallId(0));
        cell.set_wall(Down, WallId(1));

        assert_eq!(cell.wall(Up), None);
        assert_eq!(cell.wall(Left), None);
        assert_eq!(cell.wall(Right), Some(WallId(0)));
        assert_eq!(
            cell.walls().collect::<Vec<_>>(),
            vec![(Down, WallId(1)), (Right, WallId(0))]
        );
    }
}
