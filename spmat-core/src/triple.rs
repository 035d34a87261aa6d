//! Coordinate triples, the unit of the text interchange format
//!
//! A triple describes one nonzero entry as (row, col, value). The loader
//! produces triples and matrix enumeration yields them back for display.

/// One nonzero matrix entry at a (row, col) coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triple {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
    /// Entry value (nonzero by convention, zero triples are dropped on
    /// construction)
    pub value: i64,
}

impl Triple {
    /// Create a new triple
    pub const fn new(row: usize, col: usize, value: i64) -> Self {
        Self { row, col, value }
    }
}

impl From<(usize, usize, i64)> for Triple {
    fn from((row, col, value): (usize, usize, i64)) -> Self {
        Self { row, col, value }
    }
}

impl core::fmt::Display for Triple {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display() {
        assert_eq!(Triple::new(0, 2, -7).to_string(), "(0, 2, -7)");
    }

    #[test]
    fn test_from_tuple() {
        let t: Triple = (1, 4, 9).into();
        assert_eq!(t, Triple::new(1, 4, 9));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        use alloc::vec;
        use alloc::vec::Vec;

        let triples = vec![Triple::new(0, 0, 1), Triple::new(2, 1, -3)];
        let json = serde_json::to_string(&triples).unwrap();
        let back: Vec<Triple> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, triples);
    }
}
