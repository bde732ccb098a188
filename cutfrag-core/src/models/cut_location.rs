use crate::models::{CutRange, VerticalCutRange};

///
/// Where an enzyme cuts each strand, relative to the start of one
/// recognition site occurrence.
///
/// Offsets use the same between-base convention as every other index in
/// this crate: `0` cuts immediately after the first base of the site.
///
/// # Examples
///
/// ```
/// use cutfrag_core::models::{CutLocationPair, CutRange, VerticalCutRange};
///
/// // EcoRI: G^AATT_C
/// let ecori = CutLocationPair::new(Some(0), Some(4));
///
/// assert_eq!(
///     ecori.to_cut_range(10),
///     CutRange::from(VerticalCutRange::new(Some(10), None, None, Some(14)))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CutLocationPair {
    #[cfg_attr(feature = "serde", serde(default))]
    pub primary: Option<isize>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub complement: Option<isize>,
}

impl CutLocationPair {
    pub fn new(primary: Option<isize>, complement: Option<isize>) -> Self {
        CutLocationPair {
            primary,
            complement,
        }
    }

    /// Both strands cut at the same offset.
    pub fn blunt(at: isize) -> Self {
        CutLocationPair::new(Some(at), Some(at))
    }

    pub fn is_blunt(&self) -> bool {
        self.primary.is_some() && self.primary == self.complement
    }

    ///
    /// Place this pair at an occurrence starting at `offset`.
    ///
    /// A complement cut at or after the primary cut leaves a 5' overhang: the
    /// primary index fills `p_cut_left` and the complement index fills
    /// `c_cut_right`. Otherwise the primary index fills `p_cut_right` and the
    /// complement index fills `c_cut_left`.
    ///
    pub fn to_cut_range(&self, offset: isize) -> CutRange {
        let p = self.primary.map(|p| p + offset);
        let c = self.complement.map(|c| c + offset);

        let vertical = match (p, c) {
            (Some(p), Some(c)) if c < p => VerticalCutRange::new(None, Some(p), Some(c), None),
            _ => VerticalCutRange::new(p, None, None, c),
        };
        CutRange::Vertical(vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(
        CutLocationPair::new(Some(0), Some(4)),
        10,
        VerticalCutRange::new(Some(10), None, None, Some(14))
    )]
    #[case(
        CutLocationPair::new(Some(4), Some(0)),
        10,
        VerticalCutRange::new(None, Some(14), Some(10), None)
    )]
    #[case(CutLocationPair::blunt(2), 0, VerticalCutRange::new(Some(2), None, None, Some(2)))]
    #[case(
        CutLocationPair::new(Some(3), None),
        1,
        VerticalCutRange::new(Some(4), None, None, None)
    )]
    #[case(
        CutLocationPair::new(None, Some(3)),
        1,
        VerticalCutRange::new(None, None, None, Some(4))
    )]
    fn test_to_cut_range(
        #[case] pair: CutLocationPair,
        #[case] offset: isize,
        #[case] expected: VerticalCutRange,
    ) {
        assert_eq!(pair.to_cut_range(offset), CutRange::Vertical(expected));
    }

    #[rstest]
    fn test_is_blunt() {
        assert!(CutLocationPair::blunt(3).is_blunt());
        assert!(!CutLocationPair::new(Some(1), Some(5)).is_blunt());
        assert!(!CutLocationPair::new(None, None).is_blunt());
    }
}
