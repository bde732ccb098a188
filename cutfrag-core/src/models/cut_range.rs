use std::ops::RangeInclusive;

use crate::errors::CutError;

/// A span with no members, returned when a cut range separates no strands.
#[allow(clippy::reversed_empty_ranges)]
const EMPTY_SPAN: RangeInclusive<isize> = 1..=0;

///
/// A cut through the backbone of one or both strands.
///
/// Every strand carries a left and a right candidate index, any of which may
/// be missing. When the candidates span more than a single index the strands
/// are held apart between the extremes, which the reduction step records as
/// horizontal cuts (see [`VerticalCutRange::hcuts`]).
///
/// ```text
///    0 1 2 3 4 5
///    G|A A T T C        p_cut_left  = 0
///     +-----+
///    C T T A|A G        c_cut_right = 3
/// ```
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VerticalCutRange {
    pub p_cut_left: Option<isize>,
    pub p_cut_right: Option<isize>,
    pub c_cut_left: Option<isize>,
    pub c_cut_right: Option<isize>,
}

impl VerticalCutRange {
    pub fn new(
        p_cut_left: Option<isize>,
        p_cut_right: Option<isize>,
        c_cut_left: Option<isize>,
        c_cut_right: Option<isize>,
    ) -> Self {
        VerticalCutRange {
            p_cut_left,
            p_cut_right,
            c_cut_left,
            c_cut_right,
        }
    }

    /// The four candidate indices in `p_left, p_right, c_left, c_right` order.
    pub fn corners(&self) -> [Option<isize>; 4] {
        [
            self.p_cut_left,
            self.p_cut_right,
            self.c_cut_left,
            self.c_cut_right,
        ]
    }

    pub fn min(&self) -> Option<isize> {
        self.corners().into_iter().flatten().min()
    }

    pub fn max(&self) -> Option<isize> {
        self.corners().into_iter().flatten().max()
    }

    /// `min..=max`, or `None` when no candidate index is set.
    pub fn range(&self) -> Option<RangeInclusive<isize>> {
        Some(self.min()?..=self.max()?)
    }

    pub fn contains(&self, index: isize) -> bool {
        self.range().is_some_and(|r| r.contains(&index))
    }

    ///
    /// Indices where the two strands are separated by this cut: everything
    /// after `min` up to and including `max`. Empty for a point cut.
    ///
    pub fn hcuts(&self) -> RangeInclusive<isize> {
        match (self.min(), self.max()) {
            (Some(min), Some(max)) if min < max => (min + 1)..=max,
            _ => EMPTY_SPAN,
        }
    }

    pub fn shifted(&self, delta: isize) -> Self {
        let shift = |i: Option<isize>| i.map(|i| i + delta);
        VerticalCutRange {
            p_cut_left: shift(self.p_cut_left),
            p_cut_right: shift(self.p_cut_right),
            c_cut_left: shift(self.c_cut_left),
            c_cut_right: shift(self.c_cut_right),
        }
    }
}

///
/// A separation of the two strands from each other over the inclusive
/// span `[left, right]`, without any backbone severance.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawHorizontalCutRange"))]
pub struct HorizontalCutRange {
    left: isize,
    right: isize,
}

impl HorizontalCutRange {
    pub fn new(left: isize, right: isize) -> Result<Self, CutError> {
        if left > right {
            return Err(CutError::InvalidRange { left, right });
        }
        Ok(HorizontalCutRange { left, right })
    }

    /// A horizontal cut covering a single index.
    pub fn single(index: isize) -> Self {
        HorizontalCutRange {
            left: index,
            right: index,
        }
    }

    pub fn left(&self) -> isize {
        self.left
    }

    pub fn right(&self) -> isize {
        self.right
    }

    pub fn min(&self) -> isize {
        self.left
    }

    pub fn max(&self) -> isize {
        self.right
    }

    pub fn hcuts(&self) -> RangeInclusive<isize> {
        self.left..=self.right
    }

    pub fn contains(&self, index: isize) -> bool {
        self.left <= index && index <= self.right
    }

    pub fn shifted(&self, delta: isize) -> Self {
        HorizontalCutRange {
            left: self.left + delta,
            right: self.right + delta,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHorizontalCutRange {
    left: isize,
    right: Option<isize>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawHorizontalCutRange> for HorizontalCutRange {
    type Error = CutError;

    fn try_from(raw: RawHorizontalCutRange) -> Result<Self, Self::Error> {
        HorizontalCutRange::new(raw.left, raw.right.unwrap_or(raw.left))
    }
}

///
/// One declared cut locus, either through the backbones or between the strands.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum CutRange {
    Vertical(VerticalCutRange),
    Horizontal(HorizontalCutRange),
}

impl CutRange {
    pub fn min(&self) -> Option<isize> {
        match self {
            CutRange::Vertical(v) => v.min(),
            CutRange::Horizontal(h) => Some(h.min()),
        }
    }

    pub fn max(&self) -> Option<isize> {
        match self {
            CutRange::Vertical(v) => v.max(),
            CutRange::Horizontal(h) => Some(h.max()),
        }
    }

    pub fn range(&self) -> Option<RangeInclusive<isize>> {
        Some(self.min()?..=self.max()?)
    }

    pub fn contains(&self, index: isize) -> bool {
        match self {
            CutRange::Vertical(v) => v.contains(index),
            CutRange::Horizontal(h) => h.contains(index),
        }
    }

    /// Backbone cut candidates. A horizontal cut severs no backbone.
    pub fn corners(&self) -> [Option<isize>; 4] {
        match self {
            CutRange::Vertical(v) => v.corners(),
            CutRange::Horizontal(_) => [None; 4],
        }
    }

    /// Indices at which this cut holds the strands apart.
    pub fn hcuts(&self) -> RangeInclusive<isize> {
        match self {
            CutRange::Vertical(v) => v.hcuts(),
            CutRange::Horizontal(h) => h.hcuts(),
        }
    }

    pub fn shifted(&self, delta: isize) -> Self {
        match self {
            CutRange::Vertical(v) => CutRange::Vertical(v.shifted(delta)),
            CutRange::Horizontal(h) => CutRange::Horizontal(h.shifted(delta)),
        }
    }
}

impl From<VerticalCutRange> for CutRange {
    fn from(value: VerticalCutRange) -> Self {
        CutRange::Vertical(value)
    }
}

impl From<HorizontalCutRange> for CutRange {
    fn from(value: HorizontalCutRange) -> Self {
        CutRange::Horizontal(value)
    }
}
