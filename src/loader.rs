//! Line-oriented grammar text.
//!
//! ```text
//! S a S b
//! S
//! ```
//!
//! Each non-blank line is one production: the first whitespace-separated word
//! is the left-hand side, the remaining words are the right-hand side, and a
//! line holding a single word is an epsilon production. There are no comments
//! and no escapes; every word is taken literally as a symbol.

use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::grammar::{Grammar, Production};
use crate::{GrammarError, LoadError};

fn line_breaks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\r\n|[\n\x0B\x0C\r\x{85}\x{2028}\x{2029}]").expect("line break pattern"))
}

fn spaces() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t\n\x0B\x0C\r]+").expect("whitespace pattern"))
}

/// Splits grammar text into productions. Blank lines yield nothing.
///
/// Only ASCII whitespace separates words; a no-break space is part of a
/// symbol.
pub(crate) fn productions(text: &str) -> impl Iterator<Item = Production> + '_ {
    line_breaks()
        .split(text)
        .map(|line| line.trim_matches(|c: char| c <= ' '))
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut words = spaces().split(line);
            // a trimmed, non-empty line has a first word
            let lhs = words.next().unwrap_or_default();
            Production::new(lhs, words)
        })
}

impl Grammar {
    /// Reads a grammar from its text form; the first production's left-hand
    /// side becomes the start symbol.
    pub fn parse(text: &str) -> Result<Grammar, GrammarError> {
        Grammar::new(productions(text).collect())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Grammar, LoadError> {
        let path = path.as_ref();
        let _span = tracing::debug_span!("grammar_from_path", path = %path.display()).entered();
        let text = fs_err::read_to_string(path)?;
        Ok(Grammar::parse(&text)?)
    }
}

impl FromStr for Grammar {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grammar::parse(s)
    }
}

#[cfg(test)]
#[path = "tests/loader.rs"]
mod tests_for_loader;
