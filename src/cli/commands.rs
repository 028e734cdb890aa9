//! Command implementations for the textonym CLI.

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::index::TextonymIndex;
use crate::keypad::KeypadTable;
use crate::loader;

/// Execute a CLI command.
pub fn execute_command(args: TextonymArgs) -> Result<()> {
    match &args.command {
        Command::Lookup(lookup_args) => lookup(lookup_args.clone(), &args),
        Command::Signature(signature_args) => signature(signature_args.clone(), &args),
        Command::Groups(groups_args) => groups(groups_args.clone(), &args),
        Command::Stats(stats_args) => stats(stats_args.clone(), &args),
    }
}

/// Load the layout file from the global flag, or fall back to the built-in
/// standard layout.
fn load_table(cli_args: &TextonymArgs) -> Result<KeypadTable> {
    match &cli_args.layout {
        Some(path) => {
            if cli_args.verbosity() > 1 {
                println!("Loading layout from: {}", path.display());
            }
            loader::load_layout(path)
        }
        None => Ok(KeypadTable::standard()),
    }
}

fn build_index(words_file: &std::path::Path, table: &KeypadTable) -> Result<TextonymIndex> {
    let words = loader::load_word_list(words_file)?;
    Ok(TextonymIndex::build(words, table))
}

/// Find the textonyms of a word.
fn lookup(args: LookupArgs, cli_args: &TextonymArgs) -> Result<()> {
    let table = load_table(cli_args)?;
    let index = build_index(&args.words, &table)?;

    let signature = table.signature(&args.word);
    let matches = index.query(&args.word, &table);

    output_result(
        "Lookup complete",
        &LookupResult {
            word: args.word,
            signature,
            matches,
        },
        cli_args,
    )
}

/// Print the keypad signature of a word.
fn signature(args: SignatureArgs, cli_args: &TextonymArgs) -> Result<()> {
    let table = load_table(cli_args)?;
    let signature = table.signature(&args.word);

    output_result(
        "Signature computed",
        &SignatureResult {
            word: args.word,
            signature,
        },
        cli_args,
    )
}

/// List the textonym classes of a word list.
fn groups(args: GroupsArgs, cli_args: &TextonymArgs) -> Result<()> {
    let table = load_table(cli_args)?;
    let index = build_index(&args.words, &table)?;

    let classes: Vec<TextonymClass> = index
        .groups(args.min_size)
        .into_iter()
        .map(|(signature, words)| TextonymClass { signature, words })
        .collect();
    let total_classes = classes.len();

    output_result(
        "Textonym classes",
        &GroupsResult {
            classes,
            total_classes,
        },
        cli_args,
    )
}

/// Show word-list statistics.
fn stats(args: StatsArgs, cli_args: &TextonymArgs) -> Result<()> {
    let table = load_table(cli_args)?;
    let index = build_index(&args.words, &table)?;

    output_result(
        "Word-list statistics",
        &StatsResult {
            words: index.len(),
            distinct_signatures: index.groups(1).len(),
            textonym_classes: index.groups(2).len(),
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    fn word_file(words: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for word in words {
            writeln!(file, "{word}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_execute_lookup_with_builtin_layout() {
        let words = word_file(&["good", "home", "textonyms"]);
        let args = TextonymArgs::try_parse_from([
            "textonym",
            "--quiet",
            "lookup",
            "--words",
            words.path().to_str().unwrap(),
            "good",
        ])
        .unwrap();

        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_execute_lookup_with_layout_file() {
        let mut layout = NamedTempFile::new().unwrap();
        for line in ["1", "2 abc", "3 def", "4 ghi", "5 jkl", "6 mno"] {
            writeln!(layout, "{line}").unwrap();
        }
        layout.flush().unwrap();
        let words = word_file(&["good", "home"]);

        let args = TextonymArgs::try_parse_from([
            "textonym",
            "--quiet",
            "--layout",
            layout.path().to_str().unwrap(),
            "lookup",
            "--words",
            words.path().to_str().unwrap(),
            "good",
        ])
        .unwrap();

        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_execute_with_malformed_layout_fails() {
        let mut layout = NamedTempFile::new().unwrap();
        writeln!(layout, "2abc").unwrap();
        layout.flush().unwrap();

        let args = TextonymArgs::try_parse_from([
            "textonym",
            "--quiet",
            "--layout",
            layout.path().to_str().unwrap(),
            "signature",
            "good",
        ])
        .unwrap();

        assert!(execute_command(args).is_err());
    }

    #[test]
    fn test_execute_stats_json() {
        let words = word_file(&["good", "home", "cat"]);
        let args = TextonymArgs::try_parse_from([
            "textonym",
            "--format",
            "json",
            "stats",
            "--words",
            words.path().to_str().unwrap(),
        ])
        .unwrap();

        assert!(execute_command(args).is_ok());
    }
}
