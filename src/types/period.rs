use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A slot in the weekly master schedule: eight full blocks that meet every day the
/// course runs, plus four half-blocks (A/B/C/D) that each cover a fraction of the
/// week and overlap specific full blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Period {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
    A,
    B,
    C,
    D,
}

const OVERLAP_TABLE: [(Period, Period); 8] = [
    (Period::Second, Period::A),
    (Period::Second, Period::B),
    (Period::Sixth, Period::A),
    (Period::Sixth, Period::B),
    (Period::Third, Period::C),
    (Period::Third, Period::D),
    (Period::Seventh, Period::C),
    (Period::Seventh, Period::D),
];

impl Period {
    pub const ALL: [Period; 12] = [
        Period::First,
        Period::Second,
        Period::Third,
        Period::Fourth,
        Period::Fifth,
        Period::Sixth,
        Period::Seventh,
        Period::Eighth,
        Period::A,
        Period::B,
        Period::C,
        Period::D,
    ];

    pub const HALF_BLOCKS: [Period; 4] = [Period::A, Period::B, Period::C, Period::D];

    pub fn is_half_block(self) -> bool {
        matches!(self, Period::A | Period::B | Period::C | Period::D)
    }

    pub fn is_full_block(self) -> bool {
        !self.is_half_block()
    }

    /// Reflexive, symmetric overlap relation. Equal to equality outside the fixed
    /// half-block/full-block overlap table.
    pub fn overlaps(self, other: Period) -> bool {
        if self == other {
            return true;
        }
        OVERLAP_TABLE
            .iter()
            .any(|&(a, b)| (a == self && b == other) || (a == other && b == self))
    }

    /// Subset of all periods that overlap none of `occupied`.
    pub fn non_overlapping_with(occupied: &HashSet<Period>) -> HashSet<Period> {
        Period::ALL
            .iter()
            .copied()
            .filter(|p| occupied.iter().all(|o| !p.overlaps(*o)))
            .collect()
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Period::First => "1st",
            Period::Second => "2nd",
            Period::Third => "3rd",
            Period::Fourth => "4th",
            Period::Fifth => "5th",
            Period::Sixth => "6th",
            Period::Seventh => "7th",
            Period::Eighth => "8th",
            Period::A => "A",
            Period::B => "B",
            Period::C => "C",
            Period::D => "D",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_reflexive_and_symmetric() {
        for p in Period::ALL {
            assert!(p.overlaps(p));
        }
        assert!(Period::Second.overlaps(Period::A));
        assert!(Period::A.overlaps(Period::Second));
    }

    #[test]
    fn unrelated_periods_do_not_overlap() {
        assert!(!Period::First.overlaps(Period::A));
        assert!(!Period::Fourth.overlaps(Period::B));
        assert!(!Period::A.overlaps(Period::C));
    }

    #[test]
    fn half_block_classification() {
        for p in Period::HALF_BLOCKS {
            assert!(p.is_half_block());
            assert!(!p.is_full_block());
        }
        assert!(Period::First.is_full_block());
    }

    #[test]
    fn non_overlapping_excludes_conflicts() {
        let occupied: HashSet<Period> = [Period::Second].into_iter().collect();
        let free = Period::non_overlapping_with(&occupied);
        assert!(!free.contains(&Period::Second));
        assert!(!free.contains(&Period::A));
        assert!(!free.contains(&Period::B));
        assert!(free.contains(&Period::First));
        assert!(free.contains(&Period::C));
    }
}
