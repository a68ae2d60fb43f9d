//! Dictionary loading utilities
//!
//! Any source of text lines is accepted. Each line is trimmed and lowercased; lines
//! that are not exactly one word of the configured size are skipped without error.
//! Bytes that are not valid UTF-8 only spoil their own line.

use super::{Dictionary, DictionaryError};
use crate::core::Word;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be opened or read, and
/// `DictionaryError::Empty` if it holds no usable words.
///
/// # Examples
/// ```no_run
/// use wordle_engine::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let dictionary = load_from_reader(BufReader::new(file))?;
    info!(
        "loaded {} words from {}",
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}

/// Load a dictionary from any buffered reader
///
/// # Errors
///
/// Returns `DictionaryError::Io` on a read failure and `DictionaryError::Empty` if
/// no line yields a usable word.
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Dictionary, DictionaryError> {
    let mut lines = Vec::new();
    for line in reader.split(b'\n') {
        lines.push(String::from_utf8_lossy(&line?).into_owned());
    }

    if let Some(stripped) = lines
        .first()
        .and_then(|first| first.strip_prefix(BYTE_ORDER_MARK))
        .map(str::to_owned)
    {
        lines[0] = stripped;
    }

    dictionary_from_lines(&lines)
}

/// Build a dictionary from text lines, skipping lines that are not words
///
/// # Errors
///
/// Returns `DictionaryError::Empty` if no line yields a usable word.
///
/// # Examples
/// ```
/// use wordle_engine::dictionary::loader::dictionary_from_lines;
///
/// let dictionary = dictionary_from_lines(&["Tares", "toolong", "abc", "crane"]).unwrap();
/// assert_eq!(dictionary.len(), 2);
/// ```
pub fn dictionary_from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Dictionary, DictionaryError> {
    let words = words_from_lines(lines);
    let skipped = lines.len() - words.len();
    if skipped > 0 {
        debug!("skipped {skipped} dictionary lines that are not words of the required size");
    }
    Dictionary::new(words)
}

/// Convert text lines to words, dropping anything that is not a valid word
#[must_use]
pub fn words_from_lines<S: AsRef<str>>(lines: &[S]) -> Vec<Word> {
    lines
        .iter()
        .filter_map(|line| Word::new(line.as_ref()).ok())
        .collect()
}
