//! Greedy interval scheduling

/// Largest set of pairwise non-overlapping `(start, end)` intervals
///
/// Intervals are taken by earliest end, ties kept in input order; an
/// interval may start exactly where the previous one ended.
pub fn interval_scheduling(intervals: &[(i64, i64)]) -> Vec<(i64, i64)> {
    let mut by_end = intervals.to_vec();
    by_end.sort_by_key(|&(_, end)| end);

    let mut chosen = Vec::new();
    let mut last_end: Option<i64> = None;
    for (start, end) in by_end {
        if last_end.map_or(true, |last| start >= last) {
            chosen.push((start, end));
            last_end = Some(end);
        }
    }
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_selection() {
        let activities = [
            (1, 4),
            (3, 5),
            (0, 6),
            (5, 7),
            (3, 9),
            (5, 9),
            (6, 10),
            (8, 11),
            (8, 12),
            (2, 14),
            (12, 16),
        ];
        assert_eq!(
            interval_scheduling(&activities),
            vec![(1, 4), (5, 7), (8, 11), (12, 16)]
        );
    }

    #[test]
    fn test_touching_and_empty() {
        assert_eq!(interval_scheduling(&[(2, 3), (1, 2)]), vec![(1, 2), (2, 3)]);
        assert!(interval_scheduling(&[]).is_empty());
    }
}
