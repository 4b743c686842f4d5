//! Traditional earley: gradually build, from left-to-right, set of "Earley
//! items" for each position in input.
//!
//! The Earley sets memoize: rather than reparse portions of input, it reuses
//! the information from the Earley sets. Each set `chart[i]` is closed under
//! three rules before anything at `i + 1` is looked at:
//!
//! * predict: `(A -> α • B β, k)` in `chart[i]` adds `(B -> • γ, i)` for
//!   every production of `B`;
//! * complete: `(B -> γ •, j)` in `chart[i]` adds `(A -> α B • β, k)` for every
//!   `(A -> α • B β, k)` in `chart[j]`;
//! * scan: `(A -> α • c β, k)` in `chart[i]` with `word[i] == c` adds
//!   `(A -> α c • β, k)` to `chart[i + 1]`.
//!
//! Scan results are buffered and only enter the worklist once the closure at
//! `i` has reached its fixed point.
//!
//! Completion reads `chart[j]` as it stands when the completed item is popped.
//! For `j == i` that set may still grow, which loses completions of empty
//! derivations (`S -> A A`, `A -> ` would reject the empty word). Prediction
//! therefore also steps over a nullable non-terminal directly, following
//! Aycock and Horspool, "Practical Earley Parsing" (2002).
//!
//! The verdict looks for a completed start item in the last set that began at
//! position 0. An item for the start symbol with a later origin only exists
//! when the start symbol also occurs on a right-hand side, and it covers a
//! proper suffix of the word, not the word itself.

use std::collections::VecDeque;

use crate::grammar::{Grammar, SymbolRef, TermId};
use crate::item::{Chart, Item};

/// Decides membership of words in the language of a borrowed grammar.
///
/// A recognizer holds no state between calls; every call to
/// [`Recognizer::recognize`] builds its own chart, so one grammar can serve
/// any number of concurrent recognitions.
#[derive(Copy, Clone, Debug)]
pub struct Recognizer<'g> {
    grammar: &'g Grammar,
}

impl<'g> Recognizer<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Recognizer { grammar }
    }

    pub fn grammar(&self) -> &'g Grammar { self.grammar }

    /// Whether `word` is in the language of the grammar.
    ///
    /// Tokens that are not terminals of the grammar simply never match, so
    /// this never fails.
    pub fn recognize<S: AsRef<str>>(&self, word: &[S]) -> bool {
        let _span = tracing::debug_span!("recognize", len = word.len()).entered();
        let chart = self.run(word);
        let accepted = self.accepts(&chart);
        tracing::debug!(accepted, cells = ?chart.cell_sizes(), "recognition finished");
        accepted
    }

    /// Builds the complete chart for `word`.
    pub(crate) fn run<S: AsRef<str>>(&self, word: &[S]) -> Chart {
        let grammar = self.grammar;
        let tokens: Vec<Option<TermId>> = word.iter()
            .map(|tok| grammar.term_id(tok.as_ref()))
            .collect();
        let n = tokens.len();

        let mut chart = Chart::new(n);
        let mut worklist = VecDeque::new();

        for &prod in grammar.production_ids(grammar.start_id()) {
            let item = Item::new(prod, 0);
            if chart.insert(0, item) {
                worklist.push_back(item);
            }
        }

        for i in 0..=n {
            let mut scanned = Vec::new();
            while let Some(item) = worklist.pop_front() {
                match item.next_symbol(grammar) {
                    None => self.complete(&mut chart, &mut worklist, i, item),
                    Some(SymbolRef::NonTerm(nt)) => {
                        tracing::trace!(pos = i, item = %item.display(grammar), "predict");
                        for &prod in grammar.production_ids(nt) {
                            let predicted = Item::new(prod, i);
                            if chart.insert(i, predicted) {
                                worklist.push_back(predicted);
                            }
                        }
                        if grammar.nonterm_nullable(nt) {
                            let advanced = item.advance();
                            if chart.insert(i, advanced) {
                                worklist.push_back(advanced);
                            }
                        }
                    }
                    Some(SymbolRef::Term(term)) => {
                        if i < n && tokens[i] == Some(term) {
                            tracing::trace!(pos = i, item = %item.display(grammar), "scan");
                            let advanced = item.advance();
                            if chart.insert(i + 1, advanced) {
                                scanned.push(advanced);
                            }
                        }
                    }
                }
            }
            // closure at `i` is exhausted; only now may `i + 1` start.
            worklist.extend(scanned);
        }

        chart
    }

    fn complete(&self, chart: &mut Chart, worklist: &mut VecDeque<Item>, i: usize, item: Item) {
        let grammar = self.grammar;
        tracing::trace!(pos = i, item = %item.display(grammar), "complete");

        let name = SymbolRef::NonTerm(item.name(grammar));
        let parents: Vec<Item> = chart.cell(item.origin).iter()
            .filter(|parent| parent.next_symbol(grammar) == Some(name))
            .copied()
            .collect();
        for parent in parents {
            let advanced = parent.advance();
            if chart.insert(i, advanced) {
                worklist.push_back(advanced);
            }
        }
    }

    fn accepts(&self, chart: &Chart) -> bool {
        let grammar = self.grammar;
        let start = grammar.start_id();
        chart.last().iter()
            .any(|item| item.origin == 0 && item.is_done(grammar) && item.name(grammar) == start)
    }
}

impl Grammar {
    /// Shorthand for `Recognizer::new(self).recognize(word)`.
    pub fn recognizes<S: AsRef<str>>(&self, word: &[S]) -> bool {
        Recognizer::new(self).recognize(word)
    }
}

#[cfg(test)]
#[path = "tests/earley.rs"]
mod tests_for_earley;
