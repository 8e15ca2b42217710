//! Prefix suggestions backed by the character trie

use crate::data_structures::trie::Trie;

#[derive(Debug, Clone, Default)]
pub struct Autocomplete {
    trie: Trie,
}

impl Autocomplete {
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            trie: words.iter().map(|word| word.as_ref()).collect(),
        }
    }

    pub fn insert(&mut self, word: &str) {
        self.trie.insert(word);
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Stored words starting with `prefix`, depth-first with siblings in
    /// insertion order
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        self.trie.words_with_prefix(prefix)
    }

    /// At most `limit` suggestions
    pub fn suggest_top(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut words = self.suggest(prefix);
        words.truncate(limit);
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest() {
        let ac = Autocomplete::new(&["auto", "autocomplete", "author", "aux", "banana"]);
        assert_eq!(ac.suggest("au"), vec!["auto", "autocomplete", "author", "aux"]);
        assert_eq!(ac.suggest("ban"), vec!["banana"]);
        assert!(ac.suggest("zz").is_empty());
        assert_eq!(ac.suggest_top("au", 2), vec!["auto", "autocomplete"]);
        assert_eq!(ac.len(), 5);
    }

    #[test]
    fn test_insert_extends_suggestions() {
        let mut ac = Autocomplete::default();
        assert!(ac.is_empty());
        ac.insert("car");
        ac.insert("cart");
        ac.insert("car");
        assert_eq!(ac.suggest("car"), vec!["car", "cart"]);
        assert_eq!(ac.len(), 2);
    }
}
