//! 8-puzzle solved by A* with the Manhattan distance heuristic
//!
//! Boards are row-major arrays of the tiles 0..=8 where 0 is the blank.
//! Manhattan distance is consistent, so the first time the goal is popped
//! the path is optimal. A board can reach the goal only if both have the
//! same inversion parity; unreachable goals are rejected before searching.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use log::debug;

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

pub type Board = [u8; 9];

const SIDE: usize = 3;

fn validate(board: &Board, name: &str) -> AlgorithmResult<()> {
    let mut seen = [false; 9];
    for &tile in board {
        match seen.get_mut(tile as usize) {
            Some(slot) if !*slot => *slot = true,
            _ => {
                return Err(AlgorithmError::invalid_argument(format!(
                    "{} board {:?} is not a permutation of 0..=8",
                    name, board
                )))
            }
        }
    }
    Ok(())
}

fn inversions(board: &Board) -> usize {
    let tiles: Vec<u8> = board.iter().copied().filter(|&t| t != 0).collect();
    (0..tiles.len())
        .map(|i| tiles[i + 1..].iter().filter(|&&t| t < tiles[i]).count())
        .sum()
}

/// Whether `start` can be slid into `goal`
pub fn is_solvable(start: &Board, goal: &Board) -> bool {
    inversions(start) % 2 == inversions(goal) % 2
}

fn manhattan(board: &Board, goal_pos: &[usize; 9]) -> usize {
    board
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(i, &tile)| {
            let target = goal_pos[tile as usize];
            (i / SIDE).abs_diff(target / SIDE) + (i % SIDE).abs_diff(target % SIDE)
        })
        .sum()
}

fn neighbors(board: &Board) -> Vec<Board> {
    let Some(blank) = board.iter().position(|&t| t == 0) else {
        return Vec::new();
    };
    let (row, col) = (blank / SIDE, blank % SIDE);
    let mut out = Vec::with_capacity(4);
    for (dr, dc) in [(1isize, 0isize), (-1, 0), (0, 1), (0, -1)] {
        let r = row as isize + dr;
        let c = col as isize + dc;
        if (0..SIDE as isize).contains(&r) && (0..SIDE as isize).contains(&c) {
            let mut next = *board;
            next.swap(blank, r as usize * SIDE + c as usize);
            out.push(next);
        }
    }
    out
}

/// Shortest sequence of boards from `start` to `goal`, both included;
/// `None` when the goal is unreachable
pub fn solve_eight_puzzle(start: Board, goal: Board) -> AlgorithmResult<Option<Vec<Board>>> {
    validate(&start, "start")?;
    validate(&goal, "goal")?;
    if !is_solvable(&start, &goal) {
        debug!("8-puzzle {:?} has the wrong parity for {:?}", start, goal);
        return Ok(None);
    }

    let mut goal_pos = [0usize; 9];
    for (i, &tile) in goal.iter().enumerate() {
        goal_pos[tile as usize] = i;
    }

    let mut g_score: HashMap<Board, usize> = HashMap::from([(start, 0)]);
    let mut parent: HashMap<Board, Board> = HashMap::new();
    let mut open = BinaryHeap::from([Reverse((manhattan(&start, &goal_pos), 0usize, start))]);
    let mut expanded = 0usize;

    while let Some(Reverse((_, g, board))) = open.pop() {
        if g_score.get(&board).is_some_and(|&best| g > best) {
            continue;
        }
        if board == goal {
            let mut path = vec![board];
            let mut current = board;
            while let Some(&prev) = parent.get(&current) {
                path.push(prev);
                current = prev;
            }
            path.reverse();
            debug!("8-puzzle solved in {} moves after {} expansions", g, expanded);
            return Ok(Some(path));
        }
        expanded += 1;

        for next in neighbors(&board) {
            let tentative = g + 1;
            if g_score.get(&next).map_or(true, |&best| tentative < best) {
                g_score.insert(next, tentative);
                parent.insert(next, board);
                open.push(Reverse((tentative + manhattan(&next, &goal_pos), tentative, next)));
            }
        }
    }
    Ok(None)
}
