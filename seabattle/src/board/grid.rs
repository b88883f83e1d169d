//! Defines the cell matrix backing a board. It is shared between the board's
//! setup and playing versions.

use std::ops::{Index, IndexMut};

use crate::board::Coordinate;

/// Visible state of a single cell in a player's grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellState {
    /// Open water that has not been shot at.
    Empty,
    /// An intact ship cell.
    Ship,
    /// A ship cell that has been shot.
    Hit,
    /// Open water that has been shot at.
    Miss,
    /// Open water adjacent to a destroyed ship. Rendered like a miss, but the
    /// cell itself was never shot.
    Blocked,
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Empty
    }
}

/// Square cell matrix shared between [`BoardSetup`] and [`Board`].
///
/// [`BoardSetup`]: crate::board::BoardSetup
/// [`Board`]: crate::board::Board
#[derive(Debug)]
pub(super) struct Grid {
    /// Number of cells along each edge.
    size: usize,
    /// Cells in row-major order.
    cells: Box<[CellState]>,
}

impl Grid {
    pub(super) fn new(size: usize) -> Self {
        let cells = (0..size * size).map(|_| Default::default()).collect();
        Self { size, cells }
    }

    pub(super) fn size(&self) -> usize {
        self.size
    }

    /// True if the coordinate falls within the matrix.
    pub(super) fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    /// Row-major index of the coordinate, if it is in bounds.
    fn try_linearize(&self, coord: Coordinate) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.y * self.size + coord.x)
        } else {
            None
        }
    }

    /// Get the state of the cell at the given [`Coordinate`].
    pub(super) fn get(&self, coord: Coordinate) -> Option<&CellState> {
        self.try_linearize(coord).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: Coordinate) -> Option<&mut CellState> {
        self.try_linearize(coord)
            .and_then(move |i| self.cells.get_mut(i))
    }
}

impl Index<Coordinate> for Grid {
    type Output = CellState;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}

/// Iterator over the in-bounds cells bordering `coord` on a `size` by `size`
/// grid, diagonals included.
pub(super) fn neighbors(coord: Coordinate, size: usize) -> impl Iterator<Item = Coordinate> {
    const OFFSETS: [(isize, isize); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ];
    OFFSETS.iter().filter_map(move |&(dx, dy)| {
        let x = coord.x as isize + dx;
        let y = coord.y as isize + dy;
        if (0..size as isize).contains(&x) && (0..size as isize).contains(&y) {
            Some(Coordinate::new(x as usize, y as usize))
        } else {
            None
        }
    })
}
