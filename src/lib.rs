//! Earley recognition for context-free grammars.
//!
//! A [`Grammar`] is built once from its productions (or from the line-oriented
//! text format, see [`Grammar::parse`]) and can then answer, through a
//! [`Recognizer`], whether a sequence of terminal tokens is in its language.
//! Only a yes/no verdict is produced; no parse trees are built.
//!
//! ```
//! use earley_recognizer::{Grammar, Recognizer};
//!
//! let g = Grammar::parse("S a S b\nS\n").unwrap();
//! let r = Recognizer::new(&g);
//! assert!(r.recognize(&["a", "a", "b", "b"]));
//! assert!(!r.recognize(&["a", "a", "b"]));
//! ```

use thiserror::Error;

pub mod grammar;
pub mod earley;
mod item;
mod loader;
mod display;
pub mod rendering;

pub use grammar::{Grammar, Production, Symbol};
pub use earley::Recognizer;
pub use rendering::Rendered;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrammarError {
    #[error("a grammar needs at least one production")]
    NoProductions,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("grammar io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid grammar: {0}")]
    Grammar(#[from] GrammarError),
}
