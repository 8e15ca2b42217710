//! Radix (compressed) trie
//!
//! Chains of single-child nodes are collapsed into string-labelled edges.
//! Sibling labels never share a first character, so every descent step
//! inspects at most one edge.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

#[derive(Debug, Clone, Default)]
struct RadixNode {
    /// (edge label, child index)
    edges: Vec<(String, usize)>,
    terminal: bool,
}

#[derive(Debug, Clone)]
pub struct CompressedTrie {
    nodes: Vec<RadixNode>,
    words: usize,
}

impl Default for CompressedTrie {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte length of the longest common prefix, on a char boundary
fn common_prefix(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, x), y)| x != y)
        .map_or_else(|| a.len().min(b.len()), |((idx, _), _)| idx)
}

impl CompressedTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![RadixNode::default()],
            words: 0,
        }
    }

    /// Number of distinct words stored
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Nodes including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_starting_with(&self, node: usize, ch: char) -> Option<usize> {
        self.nodes[node]
            .edges
            .iter()
            .position(|(label, _)| label.starts_with(ch))
    }

    fn new_node(&mut self, terminal: bool) -> usize {
        self.nodes.push(RadixNode {
            edges: Vec::new(),
            terminal,
        });
        self.nodes.len() - 1
    }

    fn mark_terminal(&mut self, node: usize) {
        if !self.nodes[node].terminal {
            self.nodes[node].terminal = true;
            self.words += 1;
        }
    }

    pub fn insert(&mut self, word: &str) {
        let mut node = 0;
        let mut rest = word;
        loop {
            let Some(first) = rest.chars().next() else {
                self.mark_terminal(node);
                return;
            };
            let Some(slot) = self.edge_starting_with(node, first) else {
                let leaf = self.new_node(false);
                self.nodes[node].edges.push((rest.to_owned(), leaf));
                self.mark_terminal(leaf);
                return;
            };

            let (label, child) = self.nodes[node].edges[slot].clone();
            let shared = common_prefix(&label, rest);
            if shared == label.len() {
                node = child;
                rest = &rest[shared..];
                continue;
            }

            // Split the edge at the divergence point
            let middle = self.new_node(false);
            self.nodes[middle].edges.push((label[shared..].to_owned(), child));
            self.nodes[node].edges[slot] = (label[..shared].to_owned(), middle);
            node = middle;
            rest = &rest[shared..];
        }
    }

    /// Node reached by consuming all of `prefix`, and how much of the
    /// last edge label was left over
    fn descend(&self, prefix: &str) -> Option<(usize, usize)> {
        let mut node = 0;
        let mut rest = prefix;
        while let Some(first) = rest.chars().next() {
            let slot = self.edge_starting_with(node, first)?;
            let (label, child) = &self.nodes[node].edges[slot];
            if rest.starts_with(label.as_str()) {
                rest = &rest[label.len()..];
                node = *child;
            } else if label.starts_with(rest) {
                return Some((*child, label.len() - rest.len()));
            } else {
                return None;
            }
        }
        Some((node, 0))
    }

    pub fn search(&self, word: &str) -> bool {
        matches!(self.descend(word), Some((node, 0)) if self.nodes[node].terminal)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.descend(prefix).is_some()
    }
}

impl<'a> FromIterator<&'a str> for CompressedTrie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Self::new();
        for word in iter {
            trie.insert(word);
        }
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_after_splits() {
        let trie: CompressedTrie = ["test", "team", "teal"].into_iter().collect();
        assert!(trie.search("team"));
        assert!(!trie.search("tea"));
        assert!(trie.search("teal"));
        assert!(trie.search("test"));
        assert!(!trie.search("te"));
        // root, "te", "st", "a", "m", "l"
        assert_eq!(trie.node_count(), 6);
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn test_word_that_is_prefix_of_another() {
        let mut trie = CompressedTrie::new();
        trie.insert("romane");
        trie.insert("rom");
        assert!(trie.search("rom"));
        assert!(!trie.search("roma"));
        trie.insert("romanus");
        trie.insert("rom");
        assert_eq!(trie.len(), 3);
        assert!(trie.search("romanus"));
        assert!(trie.search("romane"));
    }

    #[test]
    fn test_starts_with_inside_edge() {
        let trie: CompressedTrie = ["banana"].into_iter().collect();
        assert!(trie.starts_with("ban"));
        assert!(trie.starts_with(""));
        assert!(!trie.starts_with("bx"));
        assert!(!trie.search("ban"));
    }

    #[test]
    fn test_empty_word_and_unicode() {
        let mut trie = CompressedTrie::new();
        assert!(!trie.search(""));
        trie.insert("");
        assert!(trie.search(""));
        trie.insert("ação");
        trie.insert("açúcar");
        assert!(trie.search("ação"));
        assert!(trie.starts_with("aç"));
        assert!(!trie.search("aç"));
    }
}
