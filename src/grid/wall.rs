use std::fmt;

use super::{CellId, Direction};

/// Handle of a wall inside its [`Grid`](super::Grid), equal to its construction index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallId(pub usize);

/// Which way the wall segment is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `|`, separates two cells of the same row.
    Vertical,
    /// `-`, separates two cells of the same column.
    Horizontal,
}

impl Orientation {
    pub fn symbol(self) -> char {
        match self {
            Orientation::Vertical => '|',
            Orientation::Horizontal => '-',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Door between two adjacent cells.
///
/// `cell1` always precedes `cell2` in row-major order, so `side` (the direction from `cell1`
/// to `cell2`) is either [`Direction::Right`] or [`Direction::Down`].
#[derive(Debug, Clone)]
pub struct Wall {
    id: WallId,
    cell1: CellId,
    cell2: CellId,
    side: Direction,
    closed: bool,
}

impl Wall {
    pub(crate) fn new(id: WallId, cell1: CellId, cell2: CellId, side: Direction) -> Self {
        debug_assert!(cell1 < cell2);
        debug_assert!(matches!(side, Direction::Right | Direction::Down));

        Self {
            id,
            cell1,
            cell2,
            side,
            closed: true,
        }
    }

    pub fn id(&self) -> WallId {
        self.id
    }

    pub fn cell1(&self) -> CellId {
        self.cell1
    }

    pub fn cell2(&self) -> CellId {
        self.cell2
    }

    pub fn cells(&self) -> (CellId, CellId) {
        (self.cell1, self.cell2)
    }

    /// Direction from `cell1` to `cell2`.
    pub fn side(&self) -> Direction {
        self.side
    }

    /// The cell on the other side of the wall, `None` if `cell` is not one of its endpoints.
    pub fn other(&self, cell: CellId) -> Option<CellId> {
        if cell == self.cell1 {
            Some(self.cell2)
        } else if cell == self.cell2 {
            Some(self.cell1)
        } else {
            None
        }
    }

    pub fn orientation(&self) -> Orientation {
        match self.side {
            Direction::Left | Direction::Right => Orientation::Vertical,
            Direction::Up | Direction::Down => Orientation::Horizontal,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_open(&self) -> bool {
        !self.closed
    }

    pub(crate) fn open(&mut self) {
        self.closed = false;
    }

    pub(crate) fn close(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_endpoint() {
        let wall = Wall::new(WallId(0), CellId(1), CellId(2), Direction::Right);

        assert_eq!(wall.other(CellId(1)), Some(CellId(2)));
        assert_eq!(wall.other(CellId(2)), Some(CellId(1)));
        assert_eq!(wall.other(CellId(3)), None);
    }

    #[test]
    fn orientation_follows_side() {
        let vertical = Wall::new(WallId(0), CellId(0), CellId(1), Direction::Right);
        let horizontal = Wall::new(WallId(1), CellId(0), CellId(4), Direction::Down);

        assert_eq!(vertical.orientation(), Orientation::Vertical);
        assert_eq!(vertical.orientation().symbol(), '|');
        assert_eq!(horizontal.orientation(), Orientation::Horizontal);
        assert_eq!(horizontal.orientation().to_string(), "-");
    }

    #[test]
    fn open_close() {
        let mut wall = Wall::new(WallId(0), CellId(0), CellId(1), Direction::Right);
        assert!(wall.is_closed());

        wall.open();
        assert!(wall.is_open());

        wall.close();
        assert!(wall.is_closed());
    }
}
