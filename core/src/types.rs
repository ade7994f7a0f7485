/// Position of a cell on the board, `0..CELL_COUNT` in row-major order.
pub type CellIndex = u8;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (u8, u8);

pub const SIDE: u8 = 3;

pub const CELL_COUNT: usize = 9;

/// A winning line, three cell indices.
pub type Triple = [CellIndex; 3];

/// Rows, then columns, then diagonals. `check_win` reports the first match.
pub const TRIPLES: [Triple; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub trait ToCoords {
    fn to_coords(self) -> Coord2;
}

impl ToCoords for CellIndex {
    fn to_coords(self) -> Coord2 {
        (self / SIDE, self % SIDE)
    }
}

pub const fn index_of((row, col): Coord2) -> Option<CellIndex> {
    if row < SIDE && col < SIDE {
        Some(row * SIDE + col)
    } else {
        None
    }
}
