//! Tower of Hanoi move generation with an explicit frame stack

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

/// Largest tower accepted; the move list has 2ⁿ - 1 entries
pub const MAX_HANOI_DISKS: u32 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HanoiMove {
    /// Disk number, 1 being the smallest
    pub disk: u32,
    pub from: char,
    pub to: char,
}

enum Frame {
    Solve { n: u32, from: char, via: char, to: char },
    Move(HanoiMove),
}

/// Moves transferring `n` disks from peg `from` to peg `to`
pub fn hanoi(n: u32, from: char, via: char, to: char) -> AlgorithmResult<Vec<HanoiMove>> {
    if n > MAX_HANOI_DISKS {
        return Err(AlgorithmError::ResourceExhausted(format!(
            "{} disks need {} moves",
            n,
            (1u64 << n) - 1
        )));
    }

    let mut moves = Vec::with_capacity((1usize << n) - 1);
    let mut stack = vec![Frame::Solve { n, from, via, to }];
    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Move(step) => moves.push(step),
            Frame::Solve { n: 0, .. } => {}
            Frame::Solve { n, from, via, to } => {
                // pushed in reverse of execution order
                stack.push(Frame::Solve { n: n - 1, from: via, via: from, to });
                stack.push(Frame::Move(HanoiMove { disk: n, from, to }));
                stack.push(Frame::Solve { n: n - 1, from, via: to, to: via });
            }
        }
    }
    Ok(moves)
}
