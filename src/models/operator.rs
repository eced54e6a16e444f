//! Flag set scanned from an operator token, and the comparison it selects
use std::fmt;
use std::ops::BitOr;

/// Bitmask over the four recognized relational characters. Flags are OR'd
/// together as characters are scanned, so repeated or reordered characters
/// produce the same set.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct OperatorFlags(u8);

impl OperatorFlags {
    pub const GREATER: OperatorFlags = OperatorFlags(1 << 1);
    pub const LESS: OperatorFlags = OperatorFlags(1 << 2);
    pub const EQUAL: OperatorFlags = OperatorFlags(1 << 3);
    pub const NOT: OperatorFlags = OperatorFlags(1 << 4);

    pub fn empty() -> Self {
        OperatorFlags(0)
    }

    pub fn insert(&mut self, other: OperatorFlags) {
        self.0 |= other.0;
    }

    pub fn contains(self, other: OperatorFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for OperatorFlags {
    type Output = OperatorFlags;

    fn bitor(self, rhs: OperatorFlags) -> OperatorFlags {
        OperatorFlags(self.0 | rhs.0)
    }
}

impl fmt::Debug for OperatorFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let named = [
            (Self::GREATER, "GREATER"),
            (Self::LESS, "LESS"),
            (Self::EQUAL, "EQUAL"),
            (Self::NOT, "NOT"),
        ];

        let set: Vec<&str> = named
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();

        if set.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", set.join("|"))
        }
    }
}

/// The comparisons a flag set can decode to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparator {
    GreaterThanOrEqual,
    LessThanOrEqual,
    NotEqual,
    GreaterThan,
    LessThan,
    Equal,
}

impl Comparator {
    /// Selects the comparison for a flag set, first match wins. Pairings of
    /// EQUAL with another flag are checked before the bare flags, so a set
    /// scanned from ">=" resolves to GreaterThanOrEqual rather than
    /// GreaterThan. NOT on its own decodes to no comparison at all.
    pub fn from_flags(flags: OperatorFlags) -> Option<Comparator> {
        use OperatorFlags as Flags;

        if flags.contains(Flags::GREATER) && flags.contains(Flags::EQUAL) {
            Some(Comparator::GreaterThanOrEqual)
        } else if flags.contains(Flags::LESS) && flags.contains(Flags::EQUAL) {
            Some(Comparator::LessThanOrEqual)
        } else if flags.contains(Flags::NOT) && flags.contains(Flags::EQUAL) {
            Some(Comparator::NotEqual)
        } else if flags.contains(Flags::GREATER) {
            Some(Comparator::GreaterThan)
        } else if flags.contains(Flags::LESS) {
            Some(Comparator::LessThan)
        } else if flags.contains(Flags::EQUAL) {
            Some(Comparator::Equal)
        } else {
            None
        }
    }

    pub fn holds<T: PartialOrd>(self, lhs: T, rhs: T) -> bool {
        match self {
            Comparator::GreaterThanOrEqual => lhs >= rhs,
            Comparator::LessThanOrEqual => lhs <= rhs,
            Comparator::NotEqual => lhs != rhs,
            Comparator::GreaterThan => lhs > rhs,
            Comparator::LessThan => lhs < rhs,
            Comparator::Equal => lhs == rhs,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Comparator::GreaterThanOrEqual => write!(f, ">="),
            Comparator::LessThanOrEqual => write!(f, "<="),
            Comparator::NotEqual => write!(f, "!="),
            Comparator::GreaterThan => write!(f, ">"),
            Comparator::LessThan => write!(f, "<"),
            Comparator::Equal => write!(f, "="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_ops() {
        let mut flags = OperatorFlags::empty();
        assert!(flags.is_empty());

        flags.insert(OperatorFlags::GREATER);
        flags.insert(OperatorFlags::EQUAL);

        assert!(!flags.is_empty());
        assert!(flags.contains(OperatorFlags::GREATER));
        assert!(flags.contains(OperatorFlags::EQUAL));
        assert!(!flags.contains(OperatorFlags::LESS));
        assert_eq!(flags, OperatorFlags::GREATER | OperatorFlags::EQUAL);
    }

    #[test]
    fn test_flag_debug_names() {
        let flags = OperatorFlags::NOT | OperatorFlags::EQUAL;
        assert_eq!(format!("{:?}", flags), "EQUAL|NOT");
        assert_eq!(format!("{:?}", OperatorFlags::empty()), "(none)");
    }

    #[test]
    fn test_from_flags_pairings_win() {
        use OperatorFlags as Flags;

        assert_eq!(
            Comparator::from_flags(Flags::GREATER | Flags::EQUAL),
            Some(Comparator::GreaterThanOrEqual),
        );
        assert_eq!(
            Comparator::from_flags(Flags::LESS | Flags::EQUAL),
            Some(Comparator::LessThanOrEqual),
        );
        assert_eq!(
            Comparator::from_flags(Flags::NOT | Flags::EQUAL),
            Some(Comparator::NotEqual),
        );

        // The first matching pairing wins even when extra flags are set
        assert_eq!(
            Comparator::from_flags(Flags::GREATER | Flags::LESS | Flags::EQUAL),
            Some(Comparator::GreaterThanOrEqual),
        );
    }

    #[test]
    fn test_from_flags_bare_relations() {
        use OperatorFlags as Flags;

        assert_eq!(Comparator::from_flags(Flags::GREATER), Some(Comparator::GreaterThan));
        assert_eq!(Comparator::from_flags(Flags::LESS), Some(Comparator::LessThan));
        assert_eq!(Comparator::from_flags(Flags::EQUAL), Some(Comparator::Equal));

        // Without EQUAL, NOT contributes nothing to the selection
        assert_eq!(
            Comparator::from_flags(Flags::GREATER | Flags::NOT),
            Some(Comparator::GreaterThan),
        );
    }

    #[test]
    fn test_from_flags_undecodable() {
        assert_eq!(Comparator::from_flags(OperatorFlags::empty()), None);
        assert_eq!(Comparator::from_flags(OperatorFlags::NOT), None);
    }

    #[test]
    fn test_holds() {
        assert!(Comparator::GreaterThanOrEqual.holds(3, 3));
        assert!(!Comparator::GreaterThan.holds(3, 3));
        assert!(Comparator::LessThanOrEqual.holds(2, 3));
        assert!(Comparator::LessThan.holds(2, 3));
        assert!(Comparator::NotEqual.holds(2, 3));
        assert!(Comparator::Equal.holds(3, 3));
    }
}
