use crate::grammar::{Grammar, Symbol};

pub trait Rendered {
    fn rendered(&self) -> String;
}

/// One production per line, in the loader's text format; an epsilon
/// production is a line holding only its left-hand side.
impl Rendered for Grammar {
    fn rendered(&self) -> String {
        self.productions()
            .iter()
            .map(|p| {
                if p.is_empty() {
                    format!("{}\n", p.lhs())
                } else {
                    format!("{} {}\n", p.lhs(), p.rhs().rendered())
                }
            })
            .collect()
    }
}

/// Space-separated tokens.
impl Rendered for [Symbol] {
    fn rendered(&self) -> String {
        self.iter()
            .map(Symbol::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
#[path = "tests/rendering.rs"]
mod tests_for_rendering;
