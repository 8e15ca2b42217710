//! Prefix tree over `char` sequences
//!
//! Nodes are stored in an arena; each keeps its children in insertion order
//! so prefix enumeration is deterministic. The cursor API (`root`, `step`,
//! `is_terminal`) lets callers walk the trie one character at a time, which
//! is how word-break scans every dictionary word starting at an offset.

/// Position inside a [`Trie`], obtained from [`Trie::root`] or [`Trie::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrieCursor(usize);

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: Vec<(char, usize)>,
    terminal: bool,
}

impl TrieNode {
    fn child(&self, ch: char) -> Option<usize> {
        self.children
            .iter()
            .find_map(|&(label, index)| (label == ch).then_some(index))
    }
}

#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
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

    pub fn insert(&mut self, word: &str) {
        let mut current = 0;
        for ch in word.chars() {
            current = match self.nodes[current].child(ch) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.push((ch, next));
                    next
                }
            };
        }
        if !self.nodes[current].terminal {
            self.nodes[current].terminal = true;
            self.words += 1;
        }
    }

    fn walk(&self, prefix: &str) -> Option<usize> {
        prefix
            .chars()
            .try_fold(0, |node, ch| self.nodes[node].child(ch))
    }

    /// Whether `word` was inserted exactly
    pub fn search(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| self.nodes[node].terminal)
    }

    /// Whether any stored word begins with `prefix`
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Every stored word beginning with `prefix`, in depth-first insertion order
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.walk(prefix) else {
            return Vec::new();
        };

        let mut words = Vec::new();
        // (node, edge label, path length below the prefix before the label)
        let mut stack = vec![(start, None::<char>, 0usize)];
        let mut path: Vec<char> = prefix.chars().collect();
        let base = path.len();
        while let Some((node, label, depth)) = stack.pop() {
            path.truncate(base + depth);
            if let Some(ch) = label {
                path.push(ch);
            }
            if self.nodes[node].terminal {
                words.push(path.iter().collect());
            }
            let child_depth = path.len() - base;
            for &(ch, child) in self.nodes[node].children.iter().rev() {
                stack.push((child, Some(ch), child_depth));
            }
        }
        words
    }

    pub fn root(&self) -> TrieCursor {
        TrieCursor(0)
    }

    /// Follows the edge labelled `ch` from `cursor`
    pub fn step(&self, cursor: TrieCursor, ch: char) -> Option<TrieCursor> {
        self.nodes.get(cursor.0)?.child(ch).map(TrieCursor)
    }

    /// Whether a stored word ends at `cursor`
    pub fn is_terminal(&self, cursor: TrieCursor) -> bool {
        self.nodes.get(cursor.0).is_some_and(|node| node.terminal)
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Self::new();
        for word in iter {
            trie.insert(word);
        }
        trie
    }
}
