use std::fmt::Write;

use web_service::{WordList, LONG_WORD_LEN};

/// What happened to a completed request when it reached the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Received {
    Shown,
    Failed,
    /// A newer request was issued in the meantime; the result was discarded.
    Stale,
}

/// Terminal stand-in for the word form: the current list plus the tag of
/// the most recent request.
#[derive(Debug, Default)]
pub struct WordsView {
    words: Option<WordList>,
    latest: u64,
    failed: bool,
}

impl WordsView {
    /// Tags a new request. Results for older tags will be ignored.
    pub fn begin_request(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn receive(&mut self, tag: u64, words: Option<WordList>) -> Received {
        if tag != self.latest {
            tracing::debug!(tag, latest = self.latest, "discarding stale words");
            return Received::Stale;
        }
        match words {
            Some(words) => {
                self.words = Some(words);
                self.failed = false;
                Received::Shown
            }
            None => {
                self.failed = true;
                Received::Failed
            }
        }
    }

    pub fn words(&self) -> Option<&WordList> {
        self.words.as_ref()
    }

    /// Whether the latest request failed. The previous list is kept.
    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn render_list(&self) -> String {
        let Some(words) = &self.words else {
            return "No words yet.\n".to_owned();
        };
        let mut out = String::new();
        for (index, word) in words.iter().enumerate() {
            let _ = writeln!(out, "[{}]: {}", index + 1, word);
        }
        out
    }

    pub fn render_long(&self) -> String {
        let Some(words) = &self.words else {
            return "No words yet.\n".to_owned();
        };
        let long = words.long_words().collect::<Vec<&str>>();
        if long.is_empty() {
            format!("No words longer than {LONG_WORD_LEN} letters.\n")
        } else {
            format!("{}\n", long.join(", "))
        }
    }

    pub fn render_count(&self) -> String {
        match &self.words {
            Some(words) => format!("{} words.\n", words.len()),
            None => "No words yet.\n".to_owned(),
        }
    }

    /// `position` is 1-based, as shown by `render_list`.
    pub fn render_word(&self, position: usize) -> String {
        let word = self
            .words
            .as_ref()
            .and_then(|words| words.word_at(position.wrapping_sub(1)));
        match word {
            Some(word) => format!("{word} ({} letters)\n", word.len()),
            None => format!("There is no word {position}.\n"),
        }
    }
}
