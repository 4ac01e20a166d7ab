use std::fmt;

/// The knowledge about a single cell of a nonogram
///
/// `Filled` and `Blank` are final. The solver only ever overwrites `Unknown`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum CellState {
    /// Not yet deduced
    Unknown,
    /// Part of a run
    Filled,
    /// Empty, not part of any run
    Blank,
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Unknown
    }
}

impl CellState {
    /// Returns `true` if the cell is either `Filled` or `Blank`
    #[inline]
    pub fn is_known(self) -> bool {
        self != CellState::Unknown
    }

    /// Returns `true` for `Filled`
    #[inline]
    pub fn is_filled(self) -> bool {
        self == CellState::Filled
    }

    /// A known cell is compatible with everything but its opposite.
    /// `Unknown` is compatible with everything.
    #[inline]
    pub(crate) fn admits(self, value: CellState) -> bool {
        self == CellState::Unknown || self == value
    }

    /// The character used to display this state: `█` filled, `·` blank, `?` unknown.
    pub fn glyph(self) -> char {
        match self {
            CellState::Filled => '█',
            CellState::Blank => '·',
            CellState::Unknown => '?',
        }
    }

    /// Parses a single display character.
    ///
    /// Besides the glyphs returned by [`CellState::glyph`], the ascii
    /// placeholders `#`, `X`, `x`, `1` (filled), `.`, `_`, `0` (blank) and
    /// space (unknown) are accepted.
    pub fn from_glyph(ch: char) -> Option<CellState> {
        match ch {
            '█' | '#' | 'X' | 'x' | '1' => Some(CellState::Filled),
            '·' | '.' | '_' | '0' => Some(CellState::Blank),
            '?' | ' ' => Some(CellState::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::CellState;
    use strum::IntoEnumIterator;

    #[test]
    fn glyph_roundtrip() {
        for state in CellState::iter() {
            assert_eq!(CellState::from_glyph(state.glyph()), Some(state));
        }
    }

    #[test]
    fn unknown_admits_everything() {
        for state in CellState::iter() {
            assert!(CellState::Unknown.admits(state));
            assert!(state.admits(state));
        }
        assert!(!CellState::Filled.admits(CellState::Blank));
        assert!(!CellState::Blank.admits(CellState::Filled));
    }

    #[test]
    fn rejects_foreign_glyphs() {
        assert_eq!(CellState::from_glyph('a'), None);
        assert_eq!(CellState::from_glyph('|'), None);
    }
}
