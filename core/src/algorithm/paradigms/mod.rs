//! Algorithmic paradigms: number theory, bit tricks, backtracking, greedy
//! choice, divide and conquer, geometry and offline queries
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod arrays;
pub mod backtracking;
pub mod bits;
pub mod fft;
pub mod geometry;
pub mod greedy;
pub mod math;
pub mod mo;

pub use arrays::{
    max_crossing_subarray, max_subarray, max_subarray_divide_conquer, rotate_array,
    subarray_with_sum, two_sum, two_sum_sorted,
};
pub use backtracking::{combinations, permutations};
pub use bits::{count_bits, single_number, subsets, MAX_SUBSET_ITEMS};
pub use fft::{fft, inverse_fft, multiply_polynomials, Complex};
pub use geometry::{graham_scan, Point};
pub use greedy::interval_scheduling;
pub use math::{gcd, is_prime, lcm, mod_inverse, mod_pow, n_cr, prime_factors, sieve};
pub use mo::MoSolver;
