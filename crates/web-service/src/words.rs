use std::fmt;

/// Words with more characters than this count as long.
pub const LONG_WORD_LEN: usize = 5;

/// Splits a comma separated body into tokens and strips every non-letter
/// character from each token.
///
/// A body that is not valid UTF-8 is treated as empty. Empty tokens are kept,
/// so an empty body yields a single empty string.
pub fn parse_words(body: &[u8]) -> Vec<String> {
    let text = std::str::from_utf8(body).unwrap_or_default();
    text.split(',').map(letters_only).collect()
}

// Non-comma separators are dropped along with punctuation, so "ab cd" becomes
// "abcd" rather than two words.
fn letters_only(token: &str) -> String {
    token.chars().filter(|c| c.is_alphabetic()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters, not bytes.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The words returned by one successful fetch, in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parser for the words endpoint. Never declines, since any body can be
    /// split into letter-only tokens.
    pub fn from_body(body: &[u8]) -> Option<Self> {
        Some(Self {
            words: parse_words(body),
        })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn long_words(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|word| word.chars().count() > LONG_WORD_LEN)
    }

    pub fn word_at(&self, index: usize) -> Option<Word> {
        self.words.get(index).cloned().map(Word)
    }
}
