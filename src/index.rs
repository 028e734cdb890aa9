//! Textonym index: a word list keyed by keypad signature.
//!
//! The index stores one signature per word and answers "which other words
//! would a phone render the same way?" queries against it.

use ahash::AHashMap;

use crate::keypad::KeypadTable;

/// An immutable word-to-signature index over a word list.
///
/// Built once from a word list and a [`KeypadTable`] and never mutated
/// afterward; rebuilding requires constructing a new index.
#[derive(Debug, Clone, Default)]
pub struct TextonymIndex {
    /// Original words (case preserved) and their signatures.
    entries: AHashMap<String, String>,
}

impl TextonymIndex {
    /// Build an index from a word list.
    ///
    /// Words keep the case they were given; duplicated words keep the
    /// signature of their last occurrence (map overwrite semantics). An
    /// empty word list yields an empty index.
    pub fn build<I, S>(words: I, table: &KeypadTable) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries = AHashMap::new();

        for word in words {
            let word = word.into();
            let signature = table.signature(&word);
            entries.insert(word, signature);
        }

        TextonymIndex { entries }
    }

    /// Find all indexed words sharing `input_word`'s signature.
    ///
    /// The signature is computed with the given table, which must be the one
    /// the index was built with for meaningful results. `input_word` itself
    /// is excluded by exact string equality only: an indexed word that
    /// differs in case still matches. Results are sorted lexicographically;
    /// empty when nothing else shares the signature.
    pub fn query(&self, input_word: &str, table: &KeypadTable) -> Vec<String> {
        let signature = table.signature(input_word);

        let mut matches: Vec<String> = self
            .entries
            .iter()
            .filter(|(word, sig)| sig.as_str() == signature && word.as_str() != input_word)
            .map(|(word, _)| word.clone())
            .collect();

        matches.sort_unstable();
        matches
    }

    /// The stored signature of an indexed word, if present.
    pub fn signature_of(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    /// Number of indexed words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the indexed words, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Group the indexed words into textonym classes.
    ///
    /// Returns (signature, words) pairs for every signature shared by at
    /// least `min_size` words, sorted by signature with the words of each
    /// class sorted lexicographically. `min_size` of 1 lists every distinct
    /// signature; 2 lists only genuine textonym classes.
    pub fn groups(&self, min_size: usize) -> Vec<(String, Vec<String>)> {
        let mut by_signature: AHashMap<&str, Vec<&str>> = AHashMap::new();

        for (word, signature) in &self.entries {
            by_signature
                .entry(signature.as_str())
                .or_default()
                .push(word.as_str());
        }

        let mut groups: Vec<(String, Vec<String>)> = by_signature
            .into_iter()
            .filter(|(_, words)| words.len() >= min_size)
            .map(|(signature, mut words)| {
                words.sort_unstable();
                (
                    signature.to_string(),
                    words.into_iter().map(str::to_string).collect(),
                )
            })
            .collect();

        groups.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_index(words: &[&str]) -> (TextonymIndex, KeypadTable) {
        let table = KeypadTable::standard();
        let index = TextonymIndex::build(words.iter().copied(), &table);
        (index, table)
    }

    #[test]
    fn test_build_and_signatures() {
        let (index, _) = standard_index(&["good", "home", "textonyms"]);

        assert_eq!(index.len(), 3);
        assert_eq!(index.signature_of("good"), Some("4663"));
        assert_eq!(index.signature_of("home"), Some("4663"));
        assert_eq!(index.signature_of("textonyms"), Some("839866967"));
        assert_eq!(index.signature_of("absent"), None);
    }

    #[test]
    fn test_query_standard_example() {
        let (index, table) = standard_index(&["good", "home"]);

        assert_eq!(index.query("good", &table), vec!["home"]);
    }

    #[test]
    fn test_query_excludes_input_word() {
        let (index, table) = standard_index(&["good", "home", "gone", "hood"]);

        let matches = index.query("good", &table);
        assert_eq!(matches, vec!["gone", "home", "hood"]);
        assert!(!matches.contains(&"good".to_string()));
    }

    #[test]
    fn test_query_is_symmetric() {
        let (index, table) = standard_index(&["good", "home", "textonyms"]);

        assert!(index.query("good", &table).contains(&"home".to_string()));
        assert!(index.query("home", &table).contains(&"good".to_string()));
    }

    #[test]
    fn test_query_word_absent_from_index() {
        let (index, table) = standard_index(&["good", "home"]);

        // "hoof" shares 4663 without being indexed itself
        assert_eq!(index.query("hoof", &table), vec!["good", "home"]);
        assert!(index.query("zzz", &table).is_empty());
    }

    #[test]
    fn test_empty_index_queries_empty() {
        let (index, table) = standard_index(&[]);

        assert!(index.is_empty());
        assert!(index.query("good", &table).is_empty());
    }

    #[test]
    fn test_duplicate_words_collapse() {
        let (index, _) = standard_index(&["cat", "cat"]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.signature_of("cat"), Some("228"));
    }

    // Self-exclusion is by exact string equality: a dictionary entry that
    // differs from the input only in case is still returned.
    #[test]
    fn test_self_exclusion_is_case_sensitive() {
        let (index, table) = standard_index(&["Good", "home"]);

        assert_eq!(index.query("good", &table), vec!["Good", "home"]);
        assert_eq!(index.query("Good", &table), vec!["home"]);
    }

    #[test]
    fn test_groups() {
        let (index, _) = standard_index(&["good", "home", "gone", "cat", "bat"]);

        let classes = index.groups(2);
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0].0, "228");
        assert_eq!(classes[0].1, vec!["bat", "cat"]);
        assert_eq!(classes[1].0, "4663");
        assert_eq!(classes[1].1, vec!["gone", "good", "home"]);

        // min_size 1 lists every distinct signature
        assert_eq!(index.groups(1).len(), 2);
    }

    #[test]
    fn test_words_iterator() {
        let (index, _) = standard_index(&["good", "home"]);

        let mut words: Vec<&str> = index.words().collect();
        words.sort_unstable();
        assert_eq!(words, vec!["good", "home"]);
    }
}
