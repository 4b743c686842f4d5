//! Earley items and the chart that stores them.
//!
//! An item `(A -> α • β, k)` records that the production `A -> αβ` began at
//! input position `k` and that `α` has been matched so far. The production is
//! held by its arena index, so an item is four machine words and compares in
//! constant time.

use indexmap::IndexSet;

use crate::grammar::{Grammar, NonTermId, ProductionId, SymbolRef};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) struct Item {
    pub(crate) prod: ProductionId,
    /// Index of the next unmatched right-hand side symbol.
    pub(crate) dot: usize,
    /// Input position where this production began.
    pub(crate) origin: usize,
}

impl Item {
    pub(crate) fn new(prod: ProductionId, origin: usize) -> Self {
        Item { prod, dot: 0, origin }
    }

    /// The same item with the dot moved over one symbol. The receiver is left
    /// untouched.
    pub(crate) fn advance(&self) -> Self {
        Item { dot: self.dot + 1, ..*self }
    }

    pub(crate) fn name(&self, grammar: &Grammar) -> NonTermId {
        grammar.lhs_ref(self.prod)
    }

    /// The symbol right after the dot, or `None` once the item is done.
    pub(crate) fn next_symbol(&self, grammar: &Grammar) -> Option<SymbolRef> {
        grammar.rhs_refs(self.prod).get(self.dot).copied()
    }

    pub(crate) fn is_done(&self, grammar: &Grammar) -> bool {
        self.dot >= grammar.rhs_refs(self.prod).len()
    }
}

/// One chart cell. Insertion order is kept so that completion visits parents
/// deterministically.
pub(crate) type Cell = IndexSet<Item>;

/// Item sets for input positions `0..=n`. Cells only ever grow.
#[derive(Debug)]
pub(crate) struct Chart {
    cells: Vec<Cell>,
}

impl Chart {
    pub(crate) fn new(word_len: usize) -> Self {
        Chart { cells: (0..=word_len).map(|_| Cell::new()).collect() }
    }

    /// Returns whether `item` was new to cell `pos`.
    pub(crate) fn insert(&mut self, pos: usize, item: Item) -> bool {
        self.cells[pos].insert(item)
    }

    pub(crate) fn cell(&self, pos: usize) -> &Cell { &self.cells[pos] }

    pub(crate) fn last(&self) -> &Cell {
        // `new` always allocates at least one cell.
        &self.cells[self.cells.len() - 1]
    }

    pub(crate) fn cell_sizes(&self) -> Vec<usize> {
        self.cells.iter().map(Cell::len).collect()
    }
}
