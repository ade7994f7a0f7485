use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// The 3x3 grid. Cells only ever go from empty to marked; `reset` is the only way back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell_at(&self, index: CellIndex) -> Option<Cell> {
        self.cells.get(usize::from(index)).copied()
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn try_place_mark(&mut self, index: CellIndex, mark: Mark) -> Result<()> {
        let cell = self
            .cells
            .get_mut(usize::from(index))
            .ok_or(GameError::InvalidIndex)?;

        if !cell.is_empty() {
            return Err(GameError::Occupied);
        }

        *cell = Cell::Marked(mark);
        Ok(())
    }

    /// Returns `false` without touching the board when the cell is taken or out of range.
    pub fn place_mark(&mut self, index: CellIndex, mark: Mark) -> bool {
        self.try_place_mark(index, mark).is_ok()
    }

    pub fn winning_line(&self) -> Option<(Triple, Mark)> {
        TRIPLES.iter().find_map(|&triple| {
            let [a, b, c] = triple.map(|index| self[index]);
            match a {
                Cell::Marked(mark) if a == b && a == c => Some((triple, mark)),
                _ => None,
            }
        })
    }

    pub fn check_win(&self) -> Option<Mark> {
        self.winning_line().map(|(_, mark)| mark)
    }

    /// Full board. Check `check_win` first, a full board may also hold a line.
    pub fn check_tie(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[usize::from(index)]
    }
}
