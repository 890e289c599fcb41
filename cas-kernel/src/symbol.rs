//! Named symbolic atoms.

use crate::assumptions::{Assumption, Assumptions};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named symbol, such as `i` or `p`, together with the assumptions declared for it.
///
/// The identity of a symbol is its name **and** its assumptions: two symbols named `i` with
/// different assumptions are different symbols, and never compare equal.
///
/// Symbols are ordered by name first, then by their assumptions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Symbol {
    name: String,
    assumptions: Assumptions,
}

impl Symbol {
    /// Creates a symbol with no assumptions.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_assumptions(name, Assumptions::new())
    }

    /// Creates a symbol with the given assumptions.
    pub fn with_assumptions(name: impl Into<String>, assumptions: Assumptions) -> Self {
        Self {
            name: name.into(),
            assumptions,
        }
    }

    /// Creates a symbol assumed to lie above the Fermi level.
    pub fn above_fermi(name: impl Into<String>) -> Self {
        Self::with_assumptions(name, Assumptions::new().with(Assumption::AboveFermi, true))
    }

    /// Creates a symbol assumed to lie below the Fermi level.
    pub fn below_fermi(name: impl Into<String>) -> Self {
        Self::with_assumptions(name, Assumptions::new().with(Assumption::BelowFermi, true))
    }

    /// The name of the symbol.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The assumptions declared for the symbol.
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Returns true if the given assumption was declared `true` for this symbol.
    pub fn is(&self, assumption: Assumption) -> bool {
        self.assumptions.is(assumption)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Declares several symbols sharing the same assumptions at once. Names are separated by
/// whitespace and / or commas.
///
/// ```
/// use cas_kernel::{assumptions::{Assumption, Assumptions}, symbol::symbols};
///
/// let below = Assumptions::new().with(Assumption::BelowFermi, true);
/// let [i, j] = <[_; 2]>::try_from(symbols("i, j", &below)).unwrap();
/// assert_eq!(i.name(), "i");
/// assert!(j.is(Assumption::BelowFermi));
/// ```
pub fn symbols(names: &str, assumptions: &Assumptions) -> Vec<Symbol> {
    names
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|name| !name.is_empty())
        .map(|name| Symbol::with_assumptions(name, assumptions.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_different_assumptions() {
        let plain = Symbol::new("i");
        let below = Symbol::below_fermi("i");
        assert_ne!(plain, below);
        assert_eq!(plain.name(), below.name());
    }

    #[test]
    fn ordered_by_name_first() {
        let a = Symbol::above_fermi("a");
        let i = Symbol::new("i");
        assert!(a < i);
    }

    #[test]
    fn declare_many() {
        let syms = symbols("i j  k,l", &Assumptions::new());
        let names = syms.iter().map(Symbol::name).collect::<Vec<_>>();
        assert_eq!(names, ["i", "j", "k", "l"]);
    }
}
