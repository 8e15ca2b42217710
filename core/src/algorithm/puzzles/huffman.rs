//! Huffman coding
//!
//! The two lightest trees are merged until one remains; the lighter one
//! becomes the left (`0`) child. Ties are broken by creation order, leaves
//! first in input order, so codes are deterministic.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

use log::debug;

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

#[derive(Debug, Clone)]
struct HuffmanNode {
    weight: u64,
    symbol: Option<char>,
    children: Option<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<HuffmanNode>,
    root: usize,
    codes: HashMap<char, String>,
}

impl HuffmanTree {
    /// Builds the tree from `(symbol, frequency)` pairs
    pub fn build(frequencies: &[(char, u64)]) -> AlgorithmResult<Self> {
        if frequencies.is_empty() {
            return Err(AlgorithmError::EmptyInput("frequencies"));
        }

        let mut nodes = Vec::with_capacity(2 * frequencies.len() - 1);
        let mut heap = BinaryHeap::new();
        for &(symbol, weight) in frequencies {
            if nodes.iter().any(|n: &HuffmanNode| n.symbol == Some(symbol)) {
                return Err(AlgorithmError::invalid_argument(format!(
                    "symbol {:?} listed twice",
                    symbol
                )));
            }
            heap.push(Reverse((weight, nodes.len())));
            nodes.push(HuffmanNode {
                weight,
                symbol: Some(symbol),
                children: None,
            });
        }

        // Node index doubles as the tie-breaking sequence number
        while let (Some(Reverse((wa, a))), Some(Reverse((wb, b)))) = (heap.pop(), heap.pop()) {
            let weight = wa.checked_add(wb).ok_or_else(|| {
                AlgorithmError::ResourceExhausted("total frequency overflows u64".to_owned())
            })?;
            heap.push(Reverse((weight, nodes.len())));
            nodes.push(HuffmanNode {
                weight,
                symbol: None,
                children: Some((a, b)),
            });
        }
        let root = nodes.len() - 1;

        let mut tree = Self {
            nodes,
            root,
            codes: HashMap::new(),
        };
        tree.codes = tree.collect_codes();
        debug!(
            "huffman tree over {} symbols, total weight {}",
            frequencies.len(),
            tree.nodes[root].weight
        );
        Ok(tree)
    }

    /// Builds the tree from the character counts of `text`
    pub fn from_text(text: &str) -> AlgorithmResult<Self> {
        let mut counts: Vec<(char, u64)> = Vec::new();
        for ch in text.chars() {
            match counts.iter_mut().find(|(c, _)| *c == ch) {
                Some((_, n)) => *n += 1,
                None => counts.push((ch, 1)),
            }
        }
        Self::build(&counts)
    }

    fn collect_codes(&self) -> HashMap<char, String> {
        let mut codes = HashMap::new();
        let mut stack = vec![(self.root, String::new())];
        while let Some((node, prefix)) = stack.pop() {
            let HuffmanNode { symbol, children, .. } = &self.nodes[node];
            match (symbol, children) {
                // A lone symbol still needs a one-bit code
                (Some(symbol), _) if prefix.is_empty() => {
                    codes.insert(*symbol, "0".to_owned());
                }
                (Some(symbol), _) => {
                    codes.insert(*symbol, prefix);
                }
                (None, Some((left, right))) => {
                    stack.push((*right, format!("{}1", prefix)));
                    stack.push((*left, format!("{}0", prefix)));
                }
                (None, None) => {}
            }
        }
        codes
    }

    /// Code of every symbol, ordered by symbol
    pub fn codes(&self) -> BTreeMap<char, String> {
        self.codes.iter().map(|(&c, code)| (c, code.clone())).collect()
    }

    pub fn code(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Concatenated codes as a string of `'0'` and `'1'`
    pub fn encode(&self, text: &str) -> AlgorithmResult<String> {
        let mut bits = String::new();
        for ch in text.chars() {
            let code = self.codes.get(&ch).ok_or_else(|| {
                AlgorithmError::invalid_argument(format!("symbol {:?} has no code", ch))
            })?;
            bits.push_str(code);
        }
        Ok(bits)
    }

    pub fn decode(&self, bits: &str) -> AlgorithmResult<String> {
        let mut out = String::new();
        let mut node = self.root;
        for bit in bits.chars() {
            node = match (self.nodes[node].children, bit) {
                (Some((left, _)), '0') => left,
                (Some((_, right)), '1') => right,
                // single-symbol tree: the root is the leaf
                (None, '0') => node,
                _ => {
                    return Err(AlgorithmError::invalid_argument(format!(
                        "unexpected bit {:?}",
                        bit
                    )))
                }
            };
            if let Some(symbol) = self.nodes[node].symbol {
                out.push(symbol);
                node = self.root;
            }
        }
        if node != self.root {
            return Err(AlgorithmError::invalid_argument("bit string ends inside a code"));
        }
        Ok(out)
    }

    /// Encoded length in bits of a message with the build frequencies
    pub fn weighted_length(&self) -> u64 {
        self.nodes
            .iter()
            .filter_map(|n| {
                let symbol = n.symbol?;
                Some(n.weight * self.codes.get(&symbol).map_or(0, |c| c.len() as u64))
            })
            .sum()
    }
}
