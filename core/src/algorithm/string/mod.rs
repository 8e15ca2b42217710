//! String algorithms: pattern matching, suffix structures and tries
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod aho_corasick;
pub mod compressed_trie;
pub mod matching;
pub mod suffix_array;
pub mod text;

pub use aho_corasick::{AhoCorasick, Match};
pub use compressed_trie::CompressedTrie;
pub use matching::{compute_lps, kmp_search, rabin_karp_search, z_array, RabinKarp};
pub use suffix_array::{build_lcp_array, build_suffix_array};
pub use text::{group_anagrams, is_palindrome, length_of_longest_substring, reverse_string};
