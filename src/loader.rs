//! Line-oriented loaders for layout and word-list files.
//!
//! File I/O is kept out of the core types: these helpers read a file into
//! the plain sequences [`KeypadTable`] and [`TextonymIndex`] consume.
//!
//! [`TextonymIndex`]: crate::index::TextonymIndex

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::keypad::KeypadTable;

/// Load a keypad layout file and build its translation table.
///
/// One layout entry per line, in the format [`KeypadTable::from_lines`]
/// accepts. Empty lines are ignored.
pub fn load_layout<P: AsRef<Path>>(path: P) -> Result<KeypadTable> {
    KeypadTable::from_lines(read_lines(path)?)
}

/// Load a word-list file: one word per line, trailing whitespace stripped,
/// case preserved. Empty lines are ignored.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    read_lines(path)
}

fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }

    Ok(lines)
}
