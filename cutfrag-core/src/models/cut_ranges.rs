use crate::models::CutRange;

///
/// Ordered collection of declared cut ranges, in insertion order.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CutRanges {
    ranges: Vec<CutRange>,
}

impl CutRanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cut_range: impl Into<CutRange>) {
        self.ranges.push(cut_range.into());
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CutRange> {
        self.ranges.iter()
    }

    /// Smallest index spanned by any member. Members without coordinates are skipped.
    pub fn min(&self) -> Option<isize> {
        self.ranges.iter().filter_map(CutRange::min).min()
    }

    /// Largest index spanned by any member. Members without coordinates are skipped.
    pub fn max(&self) -> Option<isize> {
        self.ranges.iter().filter_map(CutRange::max).max()
    }

    pub fn contains(&self, index: isize) -> bool {
        self.ranges.iter().any(|r| r.contains(index))
    }

    /// Every member translated by `delta`.
    pub fn shifted(&self, delta: isize) -> Self {
        self.ranges.iter().map(|r| r.shifted(delta)).collect()
    }
}

impl FromIterator<CutRange> for CutRanges {
    fn from_iter<I: IntoIterator<Item = CutRange>>(iter: I) -> Self {
        CutRanges {
            ranges: iter.into_iter().collect(),
        }
    }
}

impl Extend<CutRange> for CutRanges {
    fn extend<I: IntoIterator<Item = CutRange>>(&mut self, iter: I) {
        self.ranges.extend(iter);
    }
}

impl IntoIterator for CutRanges {
    type Item = CutRange;
    type IntoIter = std::vec::IntoIter<CutRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.into_iter()
    }
}

impl<'a> IntoIterator for &'a CutRanges {
    type Item = &'a CutRange;
    type IntoIter = std::slice::Iter<'a, CutRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}
