//! Grid mazes searched depth-first and breadth-first
//!
//! `#` cells are walls; every other cell, including markers such as `S`
//! and `E`, is open. Neighbours are tried in the order down, up, right,
//! left. Both searches use explicit stacks or queues.

use std::collections::VecDeque;

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

/// (row, column)
pub type Cell = (usize, usize);

const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Vec<Vec<char>>,
    cols: usize,
}

impl Maze {
    /// Parses rows of equal length
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> AlgorithmResult<Self> {
        let grid: Vec<Vec<char>> = rows.iter().map(|row| row.as_ref().chars().collect()).collect();
        let cols = grid.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(AlgorithmError::EmptyInput("maze"));
        }
        if let Some(r) = grid.iter().position(|row| row.len() != cols) {
            return Err(AlgorithmError::invalid_argument(format!(
                "maze row {} has {} cells, expected {}",
                r,
                grid[r].len(),
                cols
            )));
        }
        Ok(Self { grid, cols })
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// First cell holding `marker`, scanning row by row
    pub fn find(&self, marker: char) -> Option<Cell> {
        self.grid.iter().enumerate().find_map(|(r, row)| {
            row.iter().position(|&ch| ch == marker).map(|c| (r, c))
        })
    }

    pub fn is_open(&self, (r, c): Cell) -> bool {
        self.grid.get(r).and_then(|row| row.get(c)).is_some_and(|&ch| ch != '#')
    }

    fn check(&self, cell: Cell) -> AlgorithmResult<()> {
        if cell.0 < self.rows() && cell.1 < self.cols {
            Ok(())
        } else {
            Err(AlgorithmError::invalid_argument(format!(
                "cell {:?} lies outside the {}x{} maze",
                cell,
                self.rows(),
                self.cols
            )))
        }
    }

    fn step(&self, (r, c): Cell, direction: usize) -> Option<Cell> {
        let (dr, dc) = DIRECTIONS[direction];
        let next = (r.checked_add_signed(dr)?, c.checked_add_signed(dc)?);
        self.is_open(next).then_some(next)
    }

    fn index(&self, (r, c): Cell) -> usize {
        r * self.cols + c
    }

    /// First path found by depth-first search, `None` if unreachable
    pub fn dfs_path(&self, start: Cell, end: Cell) -> AlgorithmResult<Option<Vec<Cell>>> {
        self.check(start)?;
        self.check(end)?;
        if !self.is_open(start) {
            return Ok(None);
        }

        let mut visited = vec![false; self.rows() * self.cols];
        visited[self.index(start)] = true;
        // The stack is the current path; each frame remembers the next
        // direction to try
        let mut stack: Vec<(Cell, usize)> = vec![(start, 0)];
        while let Some(frame) = stack.last_mut() {
            let (cell, direction) = *frame;
            if cell == end {
                return Ok(Some(stack.into_iter().map(|(cell, _)| cell).collect()));
            }
            if direction == DIRECTIONS.len() {
                stack.pop();
                continue;
            }
            frame.1 += 1;
            if let Some(next) = self.step(cell, direction) {
                let idx = self.index(next);
                if !visited[idx] {
                    visited[idx] = true;
                    stack.push((next, 0));
                }
            }
        }
        Ok(None)
    }

    /// Shortest path by breadth-first search, `None` if unreachable
    pub fn bfs_path(&self, start: Cell, end: Cell) -> AlgorithmResult<Option<Vec<Cell>>> {
        self.check(start)?;
        self.check(end)?;
        if !self.is_open(start) {
            return Ok(None);
        }

        let mut parent: Vec<Option<Cell>> = vec![None; self.rows() * self.cols];
        let mut visited = vec![false; self.rows() * self.cols];
        visited[self.index(start)] = true;
        let mut queue = VecDeque::from([start]);
        while let Some(cell) = queue.pop_front() {
            if cell == end {
                let mut path = vec![end];
                let mut current = end;
                while let Some(prev) = parent[self.index(current)] {
                    path.push(prev);
                    current = prev;
                }
                path.reverse();
                return Ok(Some(path));
            }
            for direction in 0..DIRECTIONS.len() {
                if let Some(next) = self.step(cell, direction) {
                    let idx = self.index(next);
                    if !visited[idx] {
                        visited[idx] = true;
                        parent[idx] = Some(cell);
                        queue.push_back(next);
                    }
                }
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Maze {
        Maze::parse(&["S..#", ".##.", ".#E.", "...."]).unwrap()
    }

    #[test]
    fn test_markers_are_open() {
        let maze = sample();
        assert_eq!(maze.find('S'), Some((0, 0)));
        assert_eq!(maze.find('E'), Some((2, 2)));
        assert!(maze.is_open((2, 2)));
        assert!(!maze.is_open((0, 3)));
        assert!(!maze.is_open((9, 9)));
    }

    #[test]
    fn test_dfs_and_bfs_paths() {
        let maze = sample();
        let expected = vec![(0, 0), (1, 0), (2, 0), (3, 0), (3, 1), (3, 2), (2, 2)];
        assert_eq!(maze.dfs_path((0, 0), (2, 2)), Ok(Some(expected.clone())));
        assert_eq!(maze.bfs_path((0, 0), (2, 2)), Ok(Some(expected)));
    }

    #[test]
    fn test_bfs_is_shortest_where_dfs_wanders() {
        // DFS goes down first and loops around; BFS takes the top row
        let maze = Maze::parse(&["...", "...", "..."]).unwrap();
        let bfs = maze.bfs_path((0, 0), (0, 2)).unwrap().unwrap();
        assert_eq!(bfs.len(), 3);
        let dfs = maze.dfs_path((0, 0), (0, 2)).unwrap().unwrap();
        assert!(dfs.len() > bfs.len());
        assert_eq!(dfs.last(), Some(&(0, 2)));
    }

    #[test]
    fn test_unreachable_and_invalid() {
        let maze = Maze::parse(&[".#.", ".#.", ".#."]).unwrap();
        assert_eq!(maze.dfs_path((0, 0), (0, 2)), Ok(None));
        assert_eq!(maze.bfs_path((0, 0), (0, 2)), Ok(None));
        assert_eq!(maze.bfs_path((0, 1), (0, 2)), Ok(None));
        assert!(maze.dfs_path((0, 0), (5, 0)).is_err());

        assert!(Maze::parse(&["..", "."]).is_err());
        let empty: [&str; 0] = [];
        assert!(Maze::parse(&empty).is_err());
    }
}
