//! Data structures used directly by callers and by the algorithm families
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod avl;
pub mod binary_tree;
pub mod fenwick;
pub mod graph;
pub mod interval_tree;
pub mod linked_list;
pub mod lru;
pub mod priority_queue;
pub mod red_black;
pub mod segment_tree;
pub mod stack_queue;
pub mod trie;
pub mod union_find;

pub use self::avl::AvlTree;
pub use self::binary_tree::BinaryTree;
pub use self::fenwick::FenwickTree;
pub use self::graph::{Edge, Graph, Weight, WeightedEdge};
pub use self::interval_tree::{Interval, IntervalTree};
pub use self::linked_list::{DoublyLinkedList, LinkedList};
pub use self::lru::LruCache;
pub use self::priority_queue::{Heap, HeapOrder, MedianFinder};
pub use self::red_black::{Color, RedBlackTree};
pub use self::segment_tree::SegmentTree;
pub use self::stack_queue::{CircularQueue, MinStack};
pub use self::trie::{Trie, TrieCursor};
pub use self::union_find::UnionFind;
