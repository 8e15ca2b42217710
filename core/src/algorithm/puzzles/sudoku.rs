//! Sudoku by backtracking over the first empty cell
//!
//! Row, column and box occupancy are kept as 9-bit masks so candidate
//! digits come from a single AND. Recursion depth is bounded by the 81
//! cells.

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

pub type SudokuBoard = [[u8; 9]; 9];

struct Masks {
    rows: [u16; 9],
    cols: [u16; 9],
    boxes: [u16; 9],
}

impl Masks {
    fn toggle(&mut self, r: usize, c: usize, digit: u8) {
        let bit = 1 << digit;
        self.rows[r] ^= bit;
        self.cols[c] ^= bit;
        self.boxes[(r / 3) * 3 + c / 3] ^= bit;
    }

    fn taken(&self, r: usize, c: usize) -> u16 {
        self.rows[r] | self.cols[c] | self.boxes[(r / 3) * 3 + c / 3]
    }
}

fn solve_from(board: &mut SudokuBoard, masks: &mut Masks) -> bool {
    let empty = (0..81).map(|i| (i / 9, i % 9)).find(|&(r, c)| board[r][c] == 0);
    let Some((r, c)) = empty else {
        return true;
    };

    let taken = masks.taken(r, c);
    for digit in 1..=9u8 {
        if taken & (1 << digit) != 0 {
            continue;
        }
        board[r][c] = digit;
        masks.toggle(r, c, digit);
        if solve_from(board, masks) {
            return true;
        }
        masks.toggle(r, c, digit);
        board[r][c] = 0;
    }
    false
}

/// Fills the zero cells in place; `Ok(false)` leaves the board unchanged
///
/// Digits above 9 and givens that already clash are rejected.
pub fn solve_sudoku(board: &mut SudokuBoard) -> AlgorithmResult<bool> {
    let mut masks = Masks {
        rows: [0; 9],
        cols: [0; 9],
        boxes: [0; 9],
    };
    for r in 0..9 {
        for c in 0..9 {
            let digit = board[r][c];
            if digit == 0 {
                continue;
            }
            if digit > 9 {
                return Err(AlgorithmError::invalid_argument(format!(
                    "cell ({}, {}) holds {}",
                    r, c, digit
                )));
            }
            if masks.taken(r, c) & (1 << digit) != 0 {
                return Err(AlgorithmError::invalid_argument(format!(
                    "given {} at ({}, {}) repeats in its row, column or box",
                    digit, r, c
                )));
            }
            masks.toggle(r, c, digit);
        }
    }
    Ok(solve_from(board, &mut masks))
}
