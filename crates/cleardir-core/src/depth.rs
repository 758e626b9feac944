//! Recursion budget for the walker.

/// How many more directory levels the walker may descend into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Depth {
    /// No limit. Never counts down.
    #[default]
    Unlimited,
    /// At `Remaining(0)` subdirectories are not inspected at all.
    Remaining(u32),
}

impl Depth {
    /// Convert a user-supplied maximum. Any negative value means unlimited;
    /// `-1` is the documented spelling.
    pub fn from_max(max: i64) -> Self {
        if max < 0 {
            Self::Unlimited
        } else {
            Self::Remaining(u32::try_from(max).unwrap_or(u32::MAX))
        }
    }

    /// The budget for a subdirectory, or `None` if descending is not allowed.
    pub fn descend(self) -> Option<Self> {
        match self {
            Self::Unlimited => Some(Self::Unlimited),
            Self::Remaining(0) => None,
            Self::Remaining(n) => Some(Self::Remaining(n - 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_max_is_unlimited() {
        assert_eq!(Depth::from_max(-1), Depth::Unlimited);
        assert_eq!(Depth::from_max(-7), Depth::Unlimited);
    }

    #[test]
    fn unlimited_never_decrements() {
        let mut depth = Depth::Unlimited;
        for _ in 0..10_000 {
            depth = depth.descend().unwrap();
        }
        assert_eq!(depth, Depth::Unlimited);
    }

    #[test]
    fn remaining_counts_down_to_no_descent() {
        let depth = Depth::from_max(2);
        let one = depth.descend().unwrap();
        let zero = one.descend().unwrap();
        assert_eq!(one, Depth::Remaining(1));
        assert_eq!(zero, Depth::Remaining(0));
        assert_eq!(zero.descend(), None);
    }

    #[test]
    fn huge_max_saturates() {
        assert_eq!(Depth::from_max(i64::MAX), Depth::Remaining(u32::MAX));
    }
}
