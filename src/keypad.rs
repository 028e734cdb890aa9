//! Keypad layout tables and digit signatures.
//!
//! A [`KeypadTable`] maps lowercase letters to the digit key they share on a
//! multi-tap phone keypad. Applying the table to a word yields the word's
//! digit *signature*; two words with equal signatures are textonyms of each
//! other.

use std::collections::HashMap;

use crate::error::{Result, TextonymError};

/// An immutable letter-to-digit translation table built from a keypad layout.
///
/// Built once from an ordered sequence of layout entries and read-only
/// afterward, so it can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadTable {
    mapping: HashMap<char, char>,
}

impl KeypadTable {
    /// Build a table from layout entries, one entry per line.
    ///
    /// Each entry is either a bare single character (a key with no letters,
    /// which contributes nothing) or `<digit><space><letters>`, assigning
    /// every character of `<letters>` to the digit. Entries are trimmed of
    /// trailing whitespace and lowercased before interpretation.
    ///
    /// A letter assigned by more than one entry keeps the digit of the last
    /// entry that names it.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mapping = HashMap::new();

        for line in lines {
            let entry = line.as_ref().trim_end().to_lowercase();

            // A key with no assigned letters (or a blank line) maps nothing.
            if entry.chars().count() <= 1 {
                continue;
            }

            let (key, letters) = entry.split_once(' ').ok_or_else(|| {
                TextonymError::layout(format!(
                    "malformed entry {entry:?}: expected `<digit> <letters>`"
                ))
            })?;

            let mut key_chars = key.chars();
            let digit = match (key_chars.next(), key_chars.next()) {
                (Some(d), None) => d,
                (None, _) => {
                    return Err(TextonymError::layout(format!(
                        "entry {entry:?} has an empty key"
                    )));
                }
                (Some(_), Some(_)) => {
                    return Err(TextonymError::layout(format!(
                        "entry {entry:?} has a multi-character key"
                    )));
                }
            };

            if letters.contains(' ') {
                return Err(TextonymError::layout(format!(
                    "entry {entry:?} has an embedded space in its letters"
                )));
            }

            for letter in letters.chars() {
                mapping.insert(letter, digit);
            }
        }

        Ok(KeypadTable { mapping })
    }

    /// The standard ITU E.161 phone layout: letters on keys 2-9, bare 1 and 0.
    pub fn standard() -> Self {
        const STANDARD_LAYOUT: [&str; 10] = [
            "1", "2 abc", "3 def", "4 ghi", "5 jkl", "6 mno", "7 pqrs", "8 tuv", "9 wxyz", "0",
        ];

        KeypadTable::from_lines(STANDARD_LAYOUT).expect("standard layout is well formed")
    }

    /// Look up the digit assigned to a character, if any.
    pub fn digit_for(&self, c: char) -> Option<char> {
        self.mapping.get(&c).copied()
    }

    /// Number of mapped letters.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Whether the table maps no letters at all.
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Compute the digit signature of a word.
    ///
    /// The word is lowercased, then every character is mapped through the
    /// table; characters absent from the table (unmapped letters, digits,
    /// punctuation, whitespace) pass through unchanged. Total over all
    /// inputs and deterministic for a given (word, table) pair.
    pub fn signature(&self, word: &str) -> String {
        word.to_lowercase()
            .chars()
            .map(|c| self.mapping.get(&c).copied().unwrap_or(c))
            .collect()
    }
}
