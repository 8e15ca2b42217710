//! Classic puzzles and applied problems
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod autocomplete;
pub mod eight_puzzle;
pub mod hanoi;
pub mod huffman;
pub mod maze;
pub mod n_queens;
pub mod sudoku;

pub use autocomplete::Autocomplete;
pub use eight_puzzle::{is_solvable, solve_eight_puzzle, Board};
pub use hanoi::{hanoi, HanoiMove, MAX_HANOI_DISKS};
pub use huffman::HuffmanTree;
pub use maze::{Cell, Maze};
pub use n_queens::{count_n_queens, solve_n_queens};
pub use sudoku::{solve_sudoku, SudokuBoard};
