//! Board view: the 5 x 15 grid of every ball and whether it has been called.

use crate::ball::{BallId, COLUMN_SIZE, Letter};
use crate::engine::DrawEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    Uncalled,
    Called,
    /// The most recently called ball.
    MostRecent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCell {
    pub ball: BallId,
    pub status: CellStatus,
}

/// Snapshot of the board, one row per position within a column.
///
/// Row `r`, column `c` holds the number `1 + r + 15 * c`.
#[derive(Debug, Clone)]
pub struct Board {
    rows: Vec<Vec<BoardCell>>,
}

impl Board {
    pub fn from_engine(engine: &DrawEngine) -> Self {
        let last = engine.last_called();
        let rows = (0..COLUMN_SIZE)
            .map(|row| {
                Letter::ALL
                    .iter()
                    .filter_map(|letter| BallId::from_number(letter.first_number() + row))
                    .map(|ball| {
                        let status = if last == Some(ball) {
                            CellStatus::MostRecent
                        } else if engine.is_called(&ball) {
                            CellStatus::Called
                        } else {
                            CellStatus::Uncalled
                        };
                        BoardCell { ball, status }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<BoardCell>] {
        &self.rows
    }

    pub fn cell(&self, letter: Letter, row: usize) -> Option<&BoardCell> {
        self.rows.get(row)?.get(letter.column())
    }

    pub fn count(&self, status: CellStatus) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.status == status)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_layout() {
        let engine = DrawEngine::with_seed(Some(3));
        let board = Board::from_engine(&engine);

        assert_eq!(board.rows().len(), 15);
        assert_eq!(board.cell(Letter::B, 0).unwrap().ball.to_string(), "B1");
        assert_eq!(board.cell(Letter::N, 0).unwrap().ball.to_string(), "N31");
        assert_eq!(board.cell(Letter::O, 14).unwrap().ball.to_string(), "O75");
        assert!(board.cell(Letter::B, 15).is_none());
        assert_eq!(board.count(CellStatus::Uncalled), 75);
    }

    #[test]
    fn test_board_marks_called_and_most_recent() {
        let mut engine = DrawEngine::with_seed(Some(3));
        for _ in 0..10 {
            engine.draw_next();
        }
        let board = Board::from_engine(&engine);

        assert_eq!(board.count(CellStatus::MostRecent), 1);
        assert_eq!(board.count(CellStatus::Called), 9);
        assert_eq!(board.count(CellStatus::Uncalled), 65);

        let last = engine.last_called().unwrap();
        let row = (last.number() - last.letter().first_number()) as usize;
        assert_eq!(
            board.cell(last.letter(), row).unwrap().status,
            CellStatus::MostRecent
        );
    }
}
