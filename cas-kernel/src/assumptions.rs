//! Declared assumptions attached to symbols.
//!
//! Every [`Symbol`](crate::symbol::Symbol) carries an [`Assumptions`] record, fixed at the time
//! the symbol is declared. The record is a plain mapping from an [`Assumption`] to a boolean: an
//! assumption that is absent from the record is simply unknown. Records are immutable and cheap
//! to clone, since the underlying map is shared between all clones.
//!
//! ```
//! use cas_kernel::assumptions::{Assumption, Assumptions};
//!
//! let assumptions = Assumptions::from_iter([(Assumption::BelowFermi, true)]);
//! assert!(assumptions.is(Assumption::BelowFermi));
//! assert!(!assumptions.is(Assumption::AboveFermi));
//! assert_eq!(assumptions.get(Assumption::AboveFermi), None);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, sync::Arc};

/// A single fact that can be declared about a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum Assumption {
    /// The index lies above the reference boundary (the Fermi level), i.e. it labels a virtual /
    /// particle state.
    AboveFermi,

    /// The index lies below the reference boundary (the Fermi level), i.e. it labels an occupied
    /// / hole state.
    BelowFermi,

    /// The symbol is integer-valued.
    Integer,

    /// The symbol is greater than or equal to zero.
    Nonnegative,

    /// The symbol is real-valued.
    Real,

    /// The symbol represents a Hermitian (self-adjoint) operator.
    Hermitian,
}

impl Assumption {
    /// Returns the name of the assumption, as used when declaring it.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AboveFermi => "above_fermi",
            Self::BelowFermi => "below_fermi",
            Self::Integer => "integer",
            Self::Nonnegative => "nonnegative",
            Self::Real => "real",
            Self::Hermitian => "hermitian",
        }
    }

    /// Looks up an assumption by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "above_fermi" => Self::AboveFermi,
            "below_fermi" => Self::BelowFermi,
            "integer" => Self::Integer,
            "nonnegative" => Self::Nonnegative,
            "real" => Self::Real,
            "hermitian" => Self::Hermitian,
            _ => return None,
        })
    }
}

impl fmt::Display for Assumption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An immutable set of declared assumptions.
///
/// There is no way to change a record in place. [`Assumptions::with`] returns a new record and
/// leaves the original untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Assumptions(Arc<BTreeMap<Assumption, bool>>);

impl Assumptions {
    /// Creates an empty record, where nothing is known.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the declared value of the assumption, or `None` if it was never declared.
    pub fn get(&self, assumption: Assumption) -> Option<bool> {
        self.0.get(&assumption).copied()
    }

    /// Returns true if the assumption was declared to be `true`.
    ///
    /// Unknown assumptions are treated as `false`.
    pub fn is(&self, assumption: Assumption) -> bool {
        self.get(assumption).unwrap_or(false)
    }

    /// Returns a new record with the given assumption declared, replacing any previous value.
    pub fn with(&self, assumption: Assumption, value: bool) -> Self {
        let mut map = BTreeMap::clone(&self.0);
        map.insert(assumption, value);
        Self(Arc::new(map))
    }

    /// Returns true if nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the declared assumptions, in a fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (Assumption, bool)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

impl FromIterator<(Assumption, bool)> for Assumptions {
    fn from_iter<I: IntoIterator<Item = (Assumption, bool)>>(iter: I) -> Self {
        Self(Arc::new(iter.into_iter().collect()))
    }
}

impl fmt::Display for Assumptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.iter();
        if let Some((assumption, value)) = iter.next() {
            write!(f, "{}: {}", assumption, value)?;
            for (assumption, value) in iter {
                write!(f, ", {}: {}", assumption, value)?;
            }
        }
        write!(f, "}}")
    }
}
