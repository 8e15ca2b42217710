//! Catalog of the library's routines with their asymptotic costs
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Deserialize, Serialize};

use super::traits::{AlgorithmComplexity, AlgorithmId};

/// Algorithm family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmCategory {
    Sorting,
    Searching,
    Graph,
    Flow,
    String,
    DynamicProgramming,
    Puzzle,
    DataStructure,
    Paradigm,
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmDescriptor {
    pub id: AlgorithmId,
    pub name: String,
    pub category: AlgorithmCategory,
    pub complexity: AlgorithmComplexity,
}

impl AlgorithmDescriptor {
    pub fn new(id: &str, name: &str, category: AlgorithmCategory, time: &str, space: &str) -> Self {
        Self {
            id: AlgorithmId::new(id),
            name: name.to_owned(),
            category,
            complexity: AlgorithmComplexity::new(time, space),
        }
    }
}

use AlgorithmCategory as C;

// (id, name, category, time, space)
const STANDARD: &[(&str, &str, AlgorithmCategory, &str, &str)] = &[
    ("bubble_sort", "Bubble sort", C::Sorting, "O(n^2)", "O(n)"),
    ("selection_sort", "Selection sort", C::Sorting, "O(n^2)", "O(n)"),
    ("insertion_sort", "Insertion sort", C::Sorting, "O(n^2)", "O(n)"),
    ("merge_sort", "Merge sort", C::Sorting, "O(n log n)", "O(n)"),
    ("quick_sort", "Quicksort", C::Sorting, "O(n log n) expected", "O(n)"),
    ("counting_sort", "Counting sort", C::Sorting, "O(n + k)", "O(n + k)"),
    ("radix_sort", "LSD radix sort", C::Sorting, "O(d (n + b))", "O(n + b)"),
    ("bucket_sort", "Bucket sort", C::Sorting, "O(n + k) average", "O(n + k)"),
    ("binary_search", "Binary search", C::Searching, "O(log n)", "O(1)"),
    ("find_first", "First occurrence", C::Searching, "O(log n)", "O(1)"),
    ("find_last", "Last occurrence", C::Searching, "O(log n)", "O(1)"),
    ("search_matrix", "Sorted matrix search", C::Searching, "O(log(mn))", "O(1)"),
    ("min_max_pages", "Book allocation", C::Searching, "O(n log S)", "O(1)"),
    ("ship_capacity", "Ship within days", C::Searching, "O(n log S)", "O(1)"),
    ("dfs", "Depth-first search", C::Graph, "O(V + E)", "O(V)"),
    ("bfs", "Breadth-first search", C::Graph, "O(V + E)", "O(V)"),
    ("dijkstra", "Dijkstra shortest paths", C::Graph, "O((V + E) log V)", "O(V)"),
    ("bellman_ford", "Bellman-Ford shortest paths", C::Graph, "O(VE)", "O(V)"),
    ("floyd_warshall", "Floyd-Warshall all pairs", C::Graph, "O(V^3)", "O(V^2)"),
    ("a_star", "A* search", C::Graph, "O(E log V)", "O(V)"),
    ("kruskal", "Kruskal minimum spanning tree", C::Graph, "O(E log E)", "O(V)"),
    ("prim", "Prim minimum spanning tree", C::Graph, "O(V^2)", "O(V)"),
    ("topological_sort", "Topological sort", C::Graph, "O(V + E)", "O(V)"),
    ("has_cycle", "Cycle detection", C::Graph, "O(V + E)", "O(V)"),
    ("kosaraju", "Kosaraju strongly connected components", C::Graph, "O(V + E)", "O(V + E)"),
    ("edmonds_karp", "Edmonds-Karp maximum flow", C::Flow, "O(VE^2)", "O(V + E)"),
    ("dinic", "Dinic maximum flow", C::Flow, "O(V^2 E)", "O(V + E)"),
    ("kmp_search", "Knuth-Morris-Pratt search", C::String, "O(n + m)", "O(m)"),
    ("rabin_karp_search", "Rabin-Karp search", C::String, "O(n + m) expected", "O(1)"),
    ("z_array", "Z-function", C::String, "O(n)", "O(n)"),
    ("aho_corasick", "Aho-Corasick multi-pattern search", C::String, "O(n + m + z)", "O(m)"),
    ("suffix_array", "Suffix array by prefix doubling", C::String, "O(n log^2 n)", "O(n)"),
    ("lcp_array", "Kasai LCP array", C::String, "O(n)", "O(n)"),
    ("compressed_trie", "Radix tree", C::String, "O(m) per operation", "O(total length)"),
    ("longest_substring", "Longest substring without repeats", C::String, "O(n)", "O(k)"),
    ("group_anagrams", "Anagram grouping", C::String, "O(n m log m)", "O(n m)"),
    ("fib", "Fibonacci", C::DynamicProgramming, "O(n)", "O(1)"),
    ("lcs", "Longest common subsequence", C::DynamicProgramming, "O(nm)", "O(nm)"),
    ("edit_distance", "Levenshtein distance", C::DynamicProgramming, "O(nm)", "O(nm)"),
    ("min_cut_palindrome", "Palindrome partitioning", C::DynamicProgramming, "O(n^2)", "O(n^2)"),
    ("knapsack_01", "0/1 knapsack", C::DynamicProgramming, "O(nW)", "O(W)"),
    ("knapsack_fractional", "Fractional knapsack", C::DynamicProgramming, "O(n log n)", "O(n)"),
    ("min_coins", "Coin change", C::DynamicProgramming, "O(n A)", "O(A)"),
    ("min_path_sum", "Minimum grid path", C::DynamicProgramming, "O(mn)", "O(n)"),
    ("assignment_min_cost", "Bitmask assignment", C::DynamicProgramming, "O(n 2^n)", "O(2^n)"),
    ("word_break", "Word break", C::DynamicProgramming, "O(n^2)", "O(n + dictionary)"),
    ("hanoi", "Towers of Hanoi", C::Puzzle, "O(2^n)", "O(n)"),
    ("eight_puzzle", "Eight puzzle by A*", C::Puzzle, "O(9!) worst", "O(9!)"),
    ("n_queens", "N-queens", C::Puzzle, "O(n!)", "O(n)"),
    ("sudoku", "Sudoku backtracking", C::Puzzle, "O(9^k)", "O(1)"),
    ("maze", "Maze path search", C::Puzzle, "O(rc)", "O(rc)"),
    ("huffman", "Huffman coding", C::Puzzle, "O(k log k)", "O(k)"),
    ("autocomplete", "Prefix autocomplete", C::Puzzle, "O(p + output)", "O(total length)"),
    ("heap", "Binary heap", C::DataStructure, "O(log n)", "O(n)"),
    ("median_finder", "Running median", C::DataStructure, "O(log n)", "O(n)"),
    ("segment_tree", "Segment tree", C::DataStructure, "O(log n)", "O(n)"),
    ("fenwick_tree", "Fenwick tree", C::DataStructure, "O(log n)", "O(n)"),
    ("avl_tree", "AVL tree", C::DataStructure, "O(log n)", "O(n)"),
    ("red_black_tree", "Red-black tree", C::DataStructure, "O(log n)", "O(n)"),
    ("interval_tree", "Interval tree", C::DataStructure, "O(log n) insert", "O(n)"),
    ("trie", "Trie", C::DataStructure, "O(m)", "O(total length)"),
    ("union_find", "Disjoint-set union", C::DataStructure, "O(alpha(n))", "O(n)"),
    ("linked_list", "Linked lists", C::DataStructure, "O(n)", "O(n)"),
    ("min_stack", "Minimum stack", C::DataStructure, "O(1)", "O(n)"),
    ("circular_queue", "Circular queue", C::DataStructure, "O(1)", "O(k)"),
    ("lru_cache", "LRU cache", C::DataStructure, "O(1)", "O(k)"),
    ("binary_tree", "Binary tree traversals", C::DataStructure, "O(n)", "O(n)"),
    ("gcd", "Euclid's algorithm", C::Paradigm, "O(log n)", "O(1)"),
    ("sieve", "Sieve of Eratosthenes", C::Paradigm, "O(n log log n)", "O(n)"),
    ("prime_factors", "Trial division", C::Paradigm, "O(sqrt n)", "O(log n)"),
    ("mod_pow", "Modular exponentiation", C::Paradigm, "O(log e)", "O(1)"),
    ("mod_inverse", "Modular inverse", C::Paradigm, "O(log m)", "O(1)"),
    ("n_cr", "Binomial coefficient", C::Paradigm, "O(r)", "O(1)"),
    ("subsets", "Subset enumeration", C::Paradigm, "O(n 2^n)", "O(n 2^n)"),
    ("permutations", "Permutations", C::Paradigm, "O(n n!)", "O(n n!)"),
    ("combinations", "Combinations", C::Paradigm, "O(k C(n, k))", "O(k C(n, k))"),
    ("interval_scheduling", "Activity selection", C::Paradigm, "O(n log n)", "O(n)"),
    ("max_subarray", "Kadane maximum subarray", C::Paradigm, "O(n)", "O(1)"),
    ("max_subarray_divide_conquer", "Divide and conquer maximum subarray", C::Paradigm, "O(n log n)", "O(log n)"),
    ("two_sum", "Two sum", C::Paradigm, "O(n)", "O(n)"),
    ("subarray_with_sum", "Subarray with given sum", C::Paradigm, "O(n)", "O(n)"),
    ("graham_scan", "Convex hull", C::Paradigm, "O(n log n)", "O(n)"),
    ("fft", "Fast Fourier transform", C::Paradigm, "O(n log n)", "O(n)"),
    ("mo", "Mo's range queries", C::Paradigm, "O((n + q) sqrt n)", "O(q)"),
];

/// Searchable set of algorithm descriptors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<AlgorithmDescriptor>,
}

impl Catalog {
    /// Every routine the library ships
    pub fn standard() -> Self {
        STANDARD
            .iter()
            .map(|&(id, name, category, time, space)| AlgorithmDescriptor::new(id, name, category, time, space))
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&AlgorithmDescriptor> {
        self.entries.iter().find(|d| d.id.as_str() == id)
    }

    pub fn by_category(&self, category: AlgorithmCategory) -> impl Iterator<Item = &AlgorithmDescriptor> + '_ {
        self.entries.iter().filter(move |d| d.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmDescriptor> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }
}

impl FromIterator<AlgorithmDescriptor> for Catalog {
    fn from_iter<I: IntoIterator<Item = AlgorithmDescriptor>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
