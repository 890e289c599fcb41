//! Decides which index of a Kronecker delta to keep, and which to substitute away.
//!
//! When a delta `d(p,q)` is summed over or multiplied into another expression, one of its indices
//! can be replaced by the other. The index worth keeping is the one carrying more information
//! about where it lies relative to the Fermi level. Everything here is a pure function of the
//! [`Level`]s of the two indices.

use crate::{assumptions::Assumption, expr::Expr};

/// What is known about where an index lies relative to the Fermi level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Level {
    /// The index is known to lie above the Fermi level.
    pub above: bool,

    /// The index is known to lie below the Fermi level.
    pub below: bool,
}

impl Level {
    /// Reads the level information from the assumptions of an index. Compound expressions carry
    /// no level information.
    pub fn of(expr: &Expr) -> Self {
        Self {
            above: expr.is(Assumption::AboveFermi),
            below: expr.is(Assumption::BelowFermi),
        }
    }
}

/// True if a delta with indices at these levels can be non-zero above the Fermi level.
pub fn can_be_above(levels: [Level; 2]) -> bool {
    !levels[0].below && !levels[1].below
}

/// True if a delta with indices at these levels can be non-zero below the Fermi level.
pub fn can_be_below(levels: [Level; 2]) -> bool {
    !levels[0].above && !levels[1].above
}

/// Returns the slot (0 or 1) of the preferred index.
///
/// If the delta can only be non-zero below the Fermi level, the index marked below is preferred;
/// if it can only be non-zero above, the index marked above is preferred. Otherwise both indices
/// carry the same information and slot 0 wins.
pub fn preferred_slot(levels: [Level; 2]) -> usize {
    if !can_be_above(levels) {
        if levels[0].below {
            0
        } else {
            1
        }
    } else if !can_be_below(levels) {
        if levels[0].above {
            0
        } else {
            1
        }
    } else {
        0
    }
}

/// True if both indices carry the same information about the Fermi level.
///
/// Two indices both below or both above agree. Otherwise, they agree only if neither is
/// restricted at all, which is exactly when the delta can be non-zero on both sides.
pub fn contain_equal_information(levels: [Level; 2]) -> bool {
    if levels[0].below && levels[1].below {
        return true;
    }
    if levels[0].above && levels[1].above {
        return true;
    }

    can_be_below(levels) && can_be_above(levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FREE: Level = Level { above: false, below: false };
    const ABOVE: Level = Level { above: true, below: false };
    const BELOW: Level = Level { above: false, below: true };

    #[test]
    fn prefers_restricted_index() {
        assert_eq!(preferred_slot([FREE, BELOW]), 1);
        assert_eq!(preferred_slot([BELOW, FREE]), 0);
        assert_eq!(preferred_slot([FREE, ABOVE]), 1);
        assert_eq!(preferred_slot([ABOVE, FREE]), 0);
    }

    #[test]
    fn ties_prefer_first_slot() {
        assert_eq!(preferred_slot([FREE, FREE]), 0);
        assert_eq!(preferred_slot([BELOW, BELOW]), 0);
        assert_eq!(preferred_slot([ABOVE, ABOVE]), 0);
    }

    #[test]
    fn regions() {
        assert!(can_be_above([FREE, ABOVE]));
        assert!(!can_be_below([FREE, ABOVE]));
        assert!(!can_be_above([FREE, BELOW]));
        assert!(can_be_below([FREE, BELOW]));
        assert!(can_be_above([FREE, FREE]) && can_be_below([FREE, FREE]));
    }

    #[test]
    fn equal_information() {
        assert!(contain_equal_information([FREE, FREE]));
        assert!(contain_equal_information([BELOW, BELOW]));
        assert!(contain_equal_information([ABOVE, ABOVE]));
        assert!(!contain_equal_information([BELOW, FREE]));
        assert!(!contain_equal_information([FREE, ABOVE]));
    }
}
