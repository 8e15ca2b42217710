//! Bit manipulation

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

/// Largest input accepted by [`subsets`]
pub const MAX_SUBSET_ITEMS: usize = 20;

/// The element appearing once when every other appears exactly twice
pub fn single_number(nums: &[i64]) -> i64 {
    nums.iter().fold(0, |acc, &x| acc ^ x)
}

/// Set bits, clearing the lowest one per step (Kernighan)
pub fn count_bits(mut n: u64) -> u32 {
    let mut count = 0;
    while n != 0 {
        n &= n - 1;
        count += 1;
    }
    count
}

/// Every subset, ordered by the bitmask that selects it
pub fn subsets<T: Clone>(items: &[T]) -> AlgorithmResult<Vec<Vec<T>>> {
    if items.len() > MAX_SUBSET_ITEMS {
        return Err(AlgorithmError::ResourceExhausted(format!(
            "{} items have 2^{} subsets",
            items.len(),
            items.len()
        )));
    }
    Ok((0..1usize << items.len())
        .map(|mask| {
            items
                .iter()
                .enumerate()
                .filter(|&(i, _)| mask & (1 << i) != 0)
                .map(|(_, item)| item.clone())
                .collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_number() {
        assert_eq!(single_number(&[2, 1, 4, 5, 2, 4, 1]), 5);
        assert_eq!(single_number(&[-3]), -3);
    }

    #[test]
    fn test_count_bits() {
        assert_eq!(count_bits(13), 3);
        assert_eq!(count_bits(0b101010), 3);
        assert_eq!(count_bits(0), 0);
        assert_eq!(count_bits(u64::MAX), 64);
    }

    #[test]
    fn test_subsets() {
        assert_eq!(
            subsets(&[1, 2, 3]).unwrap(),
            vec![
                vec![],
                vec![1],
                vec![2],
                vec![1, 2],
                vec![3],
                vec![1, 3],
                vec![2, 3],
                vec![1, 2, 3],
            ]
        );
        assert_eq!(subsets::<u8>(&[]).unwrap(), vec![Vec::<u8>::new()]);
        assert!(subsets(&[0u8; 21]).is_err());
    }
}
