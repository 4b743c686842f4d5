use crate::grammar::{Grammar, Production};
use crate::item::Item;

impl std::fmt::Display for Production {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(w, "{} ->", self.lhs)?;
        for sym in &self.rhs {
            write!(w, " {}", sym)?;
        }
        Ok(())
    }
}

/// An item needs its grammar to be rendered; see [`Item::display`].
pub(crate) struct ItemDisplay<'a> {
    item: Item,
    grammar: &'a Grammar,
}

impl Item {
    pub(crate) fn display<'a>(&self, grammar: &'a Grammar) -> ItemDisplay<'a> {
        ItemDisplay { item: *self, grammar }
    }
}

// notation: `A -> a • B c @k`, with k the origin
impl std::fmt::Display for ItemDisplay<'_> {
    fn fmt(&self, w: &mut std::fmt::Formatter) -> std::fmt::Result {
        let Production { lhs, rhs } = self.grammar.production(self.item.prod);
        write!(w, "{} ->", lhs)?;
        for (idx, sym) in rhs.iter().enumerate() {
            if idx == self.item.dot {
                write!(w, " •")?;
            }
            write!(w, " {}", sym)?;
        }
        if self.item.dot == rhs.len() {
            write!(w, " •")?;
        }
        write!(w, " @{}", self.item.origin)
    }
}
