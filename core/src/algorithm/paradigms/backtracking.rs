//! Permutation and combination generation by backtracking
//!
//! Output sizes grow factorially and binomially; recursion depth is the
//! output length.

/// All orderings of `items`, positions taken in index order
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    fn extend<T: Clone>(items: &[T], used: &mut [bool], current: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
        if current.len() == items.len() {
            out.push(current.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            current.push(items[i].clone());
            extend(items, used, current, out);
            current.pop();
            used[i] = false;
        }
    }

    let mut out = Vec::new();
    extend(items, &mut vec![false; items.len()], &mut Vec::with_capacity(items.len()), &mut out);
    out
}

/// All `k`-element selections preserving input order
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    fn extend<T: Clone>(items: &[T], k: usize, start: usize, current: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        // Leave enough items to fill the remaining slots
        let last_start = items.len() + current.len() + 1 - k;
        for i in start..last_start.min(items.len()) {
            current.push(items[i].clone());
            extend(items, k, i + 1, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    if k <= items.len() {
        extend(items, k, 0, &mut Vec::with_capacity(k), &mut out);
    }
    out
}
