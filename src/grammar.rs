use std::borrow::Borrow;
use std::collections::HashMap;

use derive_more::{Display, From};

use crate::GrammarError;

// A grammar G is a tuple (Sigma, Delta, A_0, R), where
//   Sigma is a finite set of terminals
//   Delta is a finite set of non-terminals
//   A_0 in Delta is the start non-terminal, and
//   R maps non-terminals to their ordered list of productions
//
// Delta is exactly the set of left-hand sides in R; every right-hand side
// symbol outside of Delta lands in Sigma.

/// A grammar symbol. Whether it is a terminal or a non-terminal is decided by
/// the grammar it appears in, not by the symbol itself.
#[derive(PartialEq, Eq, Clone, Hash, Debug, PartialOrd, Ord, Display, From)]
pub struct Symbol(pub(crate) String);

impl Symbol {
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for Symbol { fn from(s: &str) -> Self { Symbol(s.into()) } }

impl AsRef<str> for Symbol { fn as_ref(&self) -> &str { &self.0 } }

impl Borrow<str> for Symbol { fn borrow(&self) -> &str { &self.0 } }

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Production {
    pub(crate) lhs: Symbol,
    pub(crate) rhs: Vec<Symbol>,
}

impl Production {
    pub fn new(lhs: impl Into<Symbol>, rhs: impl IntoIterator<Item = impl Into<Symbol>>) -> Self {
        Production { lhs: lhs.into(), rhs: rhs.into_iter().map(Into::into).collect() }
    }

    pub fn lhs(&self) -> &Symbol { &self.lhs }
    pub fn rhs(&self) -> &[Symbol] { &self.rhs }

    /// True for an epsilon production, `A -> `.
    pub fn is_empty(&self) -> bool { self.rhs.is_empty() }
}

/// Index of a production in the grammar's production arena.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) struct ProductionId(pub(crate) usize);

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) struct NonTermId(usize);

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) struct TermId(usize);

/// A right-hand side symbol after interning.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) enum SymbolRef {
    NonTerm(NonTermId),
    Term(TermId),
}

/// Interned symbol table: dense ids handed out in order of first appearance.
#[derive(Debug)]
struct SymbolTable<I> {
    names: Vec<Symbol>,
    ids: HashMap<Symbol, I>,
}

impl<I> Default for SymbolTable<I> {
    fn default() -> Self { SymbolTable { names: Vec::new(), ids: HashMap::new() } }
}

impl<I: Copy> SymbolTable<I> {
    fn intern(&mut self, sym: &Symbol, mk: impl FnOnce(usize) -> I) -> I {
        if let Some(id) = self.ids.get(sym) {
            return *id;
        }
        let id = mk(self.names.len());
        self.names.push(sym.clone());
        self.ids.insert(sym.clone(), id);
        id
    }

    fn get(&self, sym: &str) -> Option<I> {
        self.ids.get(sym).copied()
    }
}

/// An immutable context-free grammar.
///
/// The start symbol is the left-hand side of the first production. Any
/// right-hand side symbol that never occurs as a left-hand side is a
/// terminal; no other validation is performed, so a misspelled non-terminal
/// quietly becomes a terminal that no input will ever supply.
#[derive(Debug)]
pub struct Grammar {
    productions: Vec<Production>,
    /// Parallel to `productions`.
    lhs_refs: Vec<NonTermId>,
    /// Parallel to `productions`.
    rhs_refs: Vec<Vec<SymbolRef>>,
    nonterms: SymbolTable<NonTermId>,
    terms: SymbolTable<TermId>,
    /// Indexed by `NonTermId`; each list is in the order supplied.
    by_lhs: Vec<Vec<ProductionId>>,
    /// Indexed by `NonTermId`.
    nullable: Vec<bool>,
    start: NonTermId,
}

impl PartialEq for Grammar {
    fn eq(&self, other: &Self) -> bool { self.productions == other.productions }
}

impl Eq for Grammar {}

impl Grammar {
    pub fn new(productions: Vec<Production>) -> Result<Grammar, GrammarError> {
        let _span = tracing::debug_span!("grammar_new", productions = productions.len()).entered();

        if productions.is_empty() {
            return Err(GrammarError::NoProductions);
        }

        // Non-terminals first: they must all be known before a right-hand side
        // symbol can be classified.
        let mut nonterms = SymbolTable::default();
        let lhs_refs: Vec<NonTermId> = productions.iter()
            .map(|p| nonterms.intern(&p.lhs, NonTermId))
            .collect();

        let mut terms = SymbolTable::default();
        let rhs_refs: Vec<Vec<SymbolRef>> = productions.iter()
            .map(|p| p.rhs.iter().map(|sym| match nonterms.get(sym.as_str()) {
                Some(nt) => SymbolRef::NonTerm(nt),
                None => SymbolRef::Term(terms.intern(sym, TermId)),
            }).collect())
            .collect();

        let mut by_lhs = vec![Vec::new(); nonterms.names.len()];
        for (idx, lhs) in lhs_refs.iter().enumerate() {
            by_lhs[lhs.0].push(ProductionId(idx));
        }

        let nullable = nullable_nonterms(&lhs_refs, &rhs_refs, nonterms.names.len());
        let start = lhs_refs[0];

        tracing::debug!(
            nonterminals = nonterms.names.len(),
            terminals = terms.names.len(),
            start = %nonterms.names[start.0],
            "built grammar"
        );

        Ok(Grammar { productions, lhs_refs, rhs_refs, nonterms, terms, by_lhs, nullable, start })
    }

    pub fn start(&self) -> &Symbol { &self.nonterms.names[self.start.0] }

    /// All productions, in the order supplied.
    pub fn productions(&self) -> &[Production] { &self.productions }

    /// Non-terminals in order of first appearance as a left-hand side.
    pub fn nonterminals(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.nonterms.names.iter()
    }

    /// Terminals in order of first appearance on a right-hand side.
    pub fn terminals(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.terms.names.iter()
    }

    /// The productions of `nonterm`, in the order supplied. Empty when
    /// `nonterm` is not a non-terminal of this grammar.
    pub fn productions_for(&self, nonterm: &str) -> impl Iterator<Item = &Production> + '_ {
        self.nonterms.get(nonterm)
            .into_iter()
            .flat_map(move |nt| self.by_lhs[nt.0].iter())
            .map(move |&id| self.production(id))
    }

    pub fn is_nonterminal(&self, sym: &str) -> bool { self.nonterms.get(sym).is_some() }

    pub fn is_terminal(&self, sym: &str) -> bool { self.terms.get(sym).is_some() }

    /// Whether `sym` is a non-terminal deriving the empty word.
    pub fn is_nullable(&self, sym: &str) -> bool {
        self.nonterms.get(sym).map_or(false, |nt| self.nullable[nt.0])
    }
}

impl Grammar {
    pub(crate) fn start_id(&self) -> NonTermId { self.start }

    pub(crate) fn production(&self, id: ProductionId) -> &Production { &self.productions[id.0] }

    pub(crate) fn lhs_ref(&self, id: ProductionId) -> NonTermId { self.lhs_refs[id.0] }

    pub(crate) fn rhs_refs(&self, id: ProductionId) -> &[SymbolRef] { &self.rhs_refs[id.0] }

    pub(crate) fn production_ids(&self, nt: NonTermId) -> &[ProductionId] { &self.by_lhs[nt.0] }

    pub(crate) fn nonterm_nullable(&self, nt: NonTermId) -> bool { self.nullable[nt.0] }

    pub(crate) fn term_id(&self, sym: &str) -> Option<TermId> { self.terms.get(sym) }
}

/// Least fixed point: a non-terminal is nullable when one of its productions
/// consists solely of nullable non-terminals (vacuously so for `A -> `).
fn nullable_nonterms(lhs_refs: &[NonTermId], rhs_refs: &[Vec<SymbolRef>], count: usize) -> Vec<bool> {
    let mut nullable = vec![false; count];
    let mut changed = true;
    while changed {
        changed = false;
        for (lhs, rhs) in lhs_refs.iter().zip(rhs_refs) {
            if nullable[lhs.0] {
                continue;
            }
            let all_nullable = rhs.iter().all(|sym| match sym {
                SymbolRef::NonTerm(nt) => nullable[nt.0],
                SymbolRef::Term(_) => false,
            });
            if all_nullable {
                nullable[lhs.0] = true;
                changed = true;
            }
        }
    }
    nullable
}

// This is a trick: we have the source code for our tests under a single
// `src/tests/` subdirectory, but we declare it as a module *here*, under this
// module. That way, it has access to private constructors and state that a
// sibling module would not have access to.
#[cfg(test)]
#[path = "tests/grammar.rs"]
mod tests_for_grammar;
