//! N-queens by row-wise backtracking
//!
//! Column and both diagonal occupancies are tracked in boolean tables, so
//! each placement test is O(1). Recursion depth equals `n`.

/// Calls `on_solution` with the queen column of every row, for each
/// solution in lexicographic order of those columns
fn place_queens(n: usize, on_solution: &mut dyn FnMut(&[usize])) {
    struct Search<'a> {
        n: usize,
        columns: Vec<usize>,
        col_used: Vec<bool>,
        // r + c and r - c + n - 1
        diag_used: Vec<bool>,
        anti_used: Vec<bool>,
        on_solution: &'a mut dyn FnMut(&[usize]),
    }

    impl Search<'_> {
        fn row(&mut self, r: usize) {
            if r == self.n {
                (self.on_solution)(&self.columns);
                return;
            }
            for c in 0..self.n {
                let (d, a) = (r + c, r + self.n - 1 - c);
                if self.col_used[c] || self.diag_used[d] || self.anti_used[a] {
                    continue;
                }
                self.col_used[c] = true;
                self.diag_used[d] = true;
                self.anti_used[a] = true;
                self.columns.push(c);
                self.row(r + 1);
                self.columns.pop();
                self.col_used[c] = false;
                self.diag_used[d] = false;
                self.anti_used[a] = false;
            }
        }
    }

    let diagonals = (2 * n).saturating_sub(1);
    Search {
        n,
        columns: Vec::with_capacity(n),
        col_used: vec![false; n],
        diag_used: vec![false; diagonals],
        anti_used: vec![false; diagonals],
        on_solution,
    }
    .row(0);
}

/// Every solution as rows of `'Q'` and `'.'`
///
/// `n = 0` has a single, empty, solution.
pub fn solve_n_queens(n: usize) -> Vec<Vec<String>> {
    let mut boards = Vec::new();
    place_queens(n, &mut |columns| {
        boards.push(
            columns
                .iter()
                .map(|&c| (0..n).map(|col| if col == c { 'Q' } else { '.' }).collect())
                .collect(),
        );
    });
    boards
}

/// Number of solutions without materialising the boards
pub fn count_n_queens(n: usize) -> usize {
    let mut count = 0;
    place_queens(n, &mut |_| count += 1);
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_queens() {
        assert_eq!(
            solve_n_queens(4),
            vec![
                vec![".Q..", "...Q", "Q...", "..Q."],
                vec!["..Q.", "Q...", "...Q", ".Q.."],
            ]
        );
    }

    #[test]
    fn test_counts() {
        let expected = [1, 1, 0, 0, 2, 10, 4, 40, 92];
        for (n, &count) in expected.iter().enumerate() {
            assert_eq!(count_n_queens(n), count, "n = {}", n);
        }
        assert_eq!(solve_n_queens(8).len(), 92);
    }

    #[test]
    fn test_solutions_do_not_attack() {
        for board in solve_n_queens(6) {
            let cols: Vec<usize> = board.iter().map(|row| row.find('Q').unwrap()).collect();
            for i in 0..cols.len() {
                for j in i + 1..cols.len() {
                    assert_ne!(cols[i], cols[j]);
                    assert_ne!(j - i, cols[i].abs_diff(cols[j]));
                }
            }
        }
    }
}
