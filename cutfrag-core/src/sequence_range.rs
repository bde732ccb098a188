use std::cell::OnceCell;
use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};

use crate::bins::{BinId, Bins};
use crate::calculated_cuts::{CalculatedCuts, Topology};
use crate::errors::CutError;
use crate::models::{
    Column, CutRange, CutRanges, Fragment, Fragments, HorizontalCutRange, VerticalCutRange,
};

///
/// One contiguous double-stranded region and the cuts declared on it.
///
/// Cut ranges and tags are added incrementally. The resulting fragments are
/// assembled on first request and cached until the next mutation.
///
/// # Examples
///
/// ```
/// use cutfrag_core::SequenceRange;
///
/// let mut range: SequenceRange = SequenceRange::linear(6).unwrap();
/// range.add_cut_range(Some(0), None, None, Some(3)).unwrap();
/// range.add_cut_range(None, Some(2), None, None).unwrap();
///
/// let fragments = range.fragments().unwrap();
/// assert_eq!(fragments.len(), 3);
/// assert_eq!(fragments.get(0).unwrap().complement_bin(), &[0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceRange<T = String> {
    p_left: Option<isize>,
    p_right: Option<isize>,
    c_left: Option<isize>,
    c_right: Option<isize>,
    left: isize,
    right: isize,
    size: usize,
    topology: Topology,
    cut_ranges: CutRanges,
    tags: BTreeMap<isize, T>,
    fragments: OnceCell<Fragments<T>>,
}

impl<T: Clone> SequenceRange<T> {
    /// A linear region. See [`SequenceRange::with_topology`].
    pub fn new(
        p_left: Option<isize>,
        p_right: Option<isize>,
        c_left: Option<isize>,
        c_right: Option<isize>,
    ) -> Result<Self, CutError> {
        Self::with_topology(p_left, p_right, c_left, c_right, Topology::Linear)
    }

    ///
    /// Create a region from the extent of each strand.
    ///
    /// The region spans from the smallest left end to the largest right end.
    ///
    /// # Errors
    /// - [`CutError::UndefinedExtent`] if a strand has neither end, or the
    ///   region has no left or no right end.
    /// - [`CutError::InvalidRange`] if any end lies left of its start.
    pub fn with_topology(
        p_left: Option<isize>,
        p_right: Option<isize>,
        c_left: Option<isize>,
        c_right: Option<isize>,
        topology: Topology,
    ) -> Result<Self, CutError> {
        if p_left.is_none() && p_right.is_none() {
            return Err(CutError::UndefinedExtent(
                "primary strand has no left or right end".to_string(),
            ));
        }
        if c_left.is_none() && c_right.is_none() {
            return Err(CutError::UndefinedExtent(
                "complement strand has no left or right end".to_string(),
            ));
        }
        for pair in [(p_left, p_right), (c_left, c_right)] {
            if let (Some(left), Some(right)) = pair {
                if left > right {
                    return Err(CutError::InvalidRange { left, right });
                }
            }
        }

        let left = [p_left, c_left].into_iter().flatten().min().ok_or_else(|| {
            CutError::UndefinedExtent("neither strand has a left end".to_string())
        })?;
        let right = [p_right, c_right].into_iter().flatten().max().ok_or_else(|| {
            CutError::UndefinedExtent("neither strand has a right end".to_string())
        })?;
        if left > right {
            return Err(CutError::InvalidRange { left, right });
        }

        Ok(SequenceRange {
            p_left,
            p_right,
            c_left,
            c_right,
            left,
            right,
            size: (right - left + 1) as usize,
            topology,
            cut_ranges: CutRanges::new(),
            tags: BTreeMap::new(),
            fragments: OnceCell::new(),
        })
    }

    /// A linear region covering indices `0..length`.
    pub fn linear(length: usize) -> Result<Self, CutError> {
        Self::from_length(length, Topology::Linear)
    }

    /// A circular region covering indices `0..length`.
    pub fn circular(length: usize) -> Result<Self, CutError> {
        Self::from_length(length, Topology::Circular)
    }

    fn from_length(length: usize, topology: Topology) -> Result<Self, CutError> {
        if length == 0 {
            return Err(CutError::UndefinedExtent("length must be positive".to_string()));
        }
        let right = length as isize - 1;
        Self::with_topology(Some(0), Some(right), Some(0), Some(right), topology)
    }

    pub fn p_left(&self) -> Option<isize> {
        self.p_left
    }

    pub fn p_right(&self) -> Option<isize> {
        self.p_right
    }

    pub fn c_left(&self) -> Option<isize> {
        self.c_left
    }

    pub fn c_right(&self) -> Option<isize> {
        self.c_right
    }

    pub fn left(&self) -> isize {
        self.left
    }

    pub fn right(&self) -> isize {
        self.right
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn cut_ranges(&self) -> &CutRanges {
        &self.cut_ranges
    }

    pub fn tags(&self) -> &BTreeMap<isize, T> {
        &self.tags
    }

    ///
    /// Declare a backbone cut from raw strand indices.
    ///
    /// # Errors
    /// Returns [`CutError::IndexOutOfRange`] if any index lies outside `[left, right]`.
    pub fn add_cut_range(
        &mut self,
        p_cut_left: Option<isize>,
        p_cut_right: Option<isize>,
        c_cut_left: Option<isize>,
        c_cut_right: Option<isize>,
    ) -> Result<(), CutError> {
        self.add_cut(VerticalCutRange::new(
            p_cut_left,
            p_cut_right,
            c_cut_left,
            c_cut_right,
        ))
    }

    ///
    /// Declare a pre-built cut range.
    ///
    /// Backbone indices must lie in `[left, right]`. Inter-strand indices may
    /// also sit at `left - 1`, the position before the first base.
    ///
    pub fn add_cut(&mut self, cut_range: impl Into<CutRange>) -> Result<(), CutError> {
        let cut_range = cut_range.into();
        self.check_cut_range(&cut_range)?;
        self.cut_ranges.push(cut_range);
        self.invalidate();
        Ok(())
    }

    /// Declare several cut ranges. Nothing is added if any of them is out of range.
    pub fn add_cut_ranges(
        &mut self,
        cut_ranges: impl IntoIterator<Item = CutRange>,
    ) -> Result<(), CutError> {
        let cut_ranges: Vec<CutRange> = cut_ranges.into_iter().collect();
        for cut_range in &cut_ranges {
            self.check_cut_range(cut_range)?;
        }
        self.cut_ranges.extend(cut_ranges);
        self.invalidate();
        Ok(())
    }

    /// Declare a separation of the strands over `[left, right]`.
    pub fn add_horizontal_cut_range(&mut self, left: isize, right: isize) -> Result<(), CutError> {
        self.add_cut(HorizontalCutRange::new(left, right)?)
    }

    ///
    /// Attach an annotation to an index. Fragments covering the index carry it.
    ///
    /// # Errors
    /// Returns [`CutError::IndexOutOfRange`] if `index` lies outside `[left, right]`.
    pub fn add_tag(&mut self, index: isize, info: T) -> Result<(), CutError> {
        self.check_index(index, self.left)?;
        self.tags.insert(index, info);
        self.invalidate();
        Ok(())
    }

    /// The reduced cut sets, in this region's coordinates.
    pub fn calculated_cuts(&self) -> Result<CalculatedCuts, CutError> {
        Ok(self.reduce()?.shifted(self.left))
    }

    ///
    /// The fragments left once every declared cut has been made.
    ///
    /// Assembled on the first call and cached until the region is mutated.
    ///
    pub fn fragments(&self) -> Result<&Fragments<T>, CutError> {
        if let Some(fragments) = self.fragments.get() {
            trace!("fragments cache hit for [{}, {}]", self.left, self.right);
            return Ok(fragments);
        }

        debug!(
            "assembling fragments for [{}, {}] from {} cut ranges",
            self.left,
            self.right,
            self.cut_ranges.len()
        );
        let cuts = self.reduce()?;
        let walk = match self.topology {
            Topology::Linear => Walk::linear(&cuts, self.size),
            Topology::Circular => Walk::circular(&cuts, self.size),
        };
        let fragments = self.collect_fragments(walk);
        debug!("assembled {} fragments", fragments.len());

        Ok(self.fragments.get_or_init(|| fragments))
    }

    fn invalidate(&mut self) {
        self.fragments = OnceCell::new();
    }

    fn check_index(&self, index: isize, left: isize) -> Result<(), CutError> {
        if index < left || index > self.right {
            return Err(CutError::IndexOutOfRange {
                index,
                left,
                right: self.right,
            });
        }
        Ok(())
    }

    fn check_cut_range(&self, cut_range: &CutRange) -> Result<(), CutError> {
        match cut_range {
            CutRange::Vertical(v) => {
                for index in v.corners().into_iter().flatten() {
                    self.check_index(index, self.left)?;
                }
                Ok(())
            }
            CutRange::Horizontal(h) => {
                self.check_index(h.left(), self.left - 1)?;
                self.check_index(h.right(), self.left - 1)
            }
        }
    }

    /// Reduce the declared cuts in zero-based coordinates.
    fn reduce(&self) -> Result<CalculatedCuts, CutError> {
        let mut cuts = CalculatedCuts::new(Some(self.size), self.topology);
        cuts.add_cuts_from_cut_ranges(&self.cut_ranges.shifted(-self.left));
        cuts.remove_incomplete_cuts(None)?;
        Ok(cuts)
    }

    fn collect_fragments(&self, walk: Walk) -> Fragments<T> {
        #[derive(Default)]
        struct Group {
            primary: Vec<(isize, isize)>,
            complement: Vec<(isize, isize)>,
        }

        let Walk {
            mut bins, steps, ..
        } = walk;

        let mut groups: BTreeMap<BinId, Group> = BTreeMap::new();
        for step in &steps {
            let index = step.index + self.left;
            let p_root = bins.find(step.primary.bin);
            let c_root = bins.find(step.complement.bin);
            groups
                .entry(p_root)
                .or_default()
                .primary
                .push((step.primary.coord, index));
            groups
                .entry(c_root)
                .or_default()
                .complement
                .push((step.complement.coord, index));
        }

        let fragments = groups
            .into_values()
            .map(|mut group| {
                group.primary.sort_unstable();
                group.complement.sort_unstable();

                let mut columns: BTreeMap<isize, Column> = BTreeMap::new();
                for &(coord, index) in &group.primary {
                    columns.entry(coord).or_default().0 = Some(index);
                }
                for &(coord, index) in &group.complement {
                    columns.entry(coord).or_default().1 = Some(index);
                }

                let primary_bin: Vec<isize> = group.primary.iter().map(|&(_, i)| i).collect();
                let complement_bin: Vec<isize> =
                    group.complement.iter().map(|&(_, i)| i).collect();

                let mut tags = BTreeMap::new();
                for index in primary_bin.iter().chain(complement_bin.iter()) {
                    if let Some(info) = self.tags.get(index) {
                        tags.entry(*index).or_insert_with(|| info.clone());
                    }
                }

                Fragment::from_parts(
                    primary_bin,
                    complement_bin,
                    columns.into_values().collect(),
                    tags,
                )
            })
            .collect();

        Fragments::new(fragments)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strand {
    Primary,
    Complement,
}

/// Where one strand's position landed during the walk.
#[derive(Debug, Clone, Copy)]
struct StrandStep {
    bin: BinId,
    /// Number of cuts on this strand passed before this position.
    segment: usize,
    /// Position along the strand once the molecule is laid out flat.
    coord: isize,
}

#[derive(Debug, Clone, Copy)]
struct Step {
    index: isize,
    separated: bool,
    primary: StrandStep,
    complement: StrandStep,
}

impl Step {
    fn strand_mut(&mut self, strand: Strand) -> &mut StrandStep {
        match strand {
            Strand::Primary => &mut self.primary,
            Strand::Complement => &mut self.complement,
        }
    }

    fn strand(&self, strand: Strand) -> &StrandStep {
        match strand {
            Strand::Primary => &self.primary,
            Strand::Complement => &self.complement,
        }
    }
}

///
/// A single pass over the molecule that assigns every position of both
/// strands to a bin.
///
/// A cut on a strand opens a new bin for that strand from the next position
/// on. Wherever the strands are not held apart by an inter-strand cut they
/// are paired, so if they sit in different bins there the two bins are
/// merged.
///
struct Walk {
    p_cut: BTreeSet<isize>,
    c_cut: BTreeSet<isize>,
    hcuts: BTreeSet<isize>,
    bins: Bins,
    p_bin: BinId,
    c_bin: BinId,
    p_segment: usize,
    c_segment: usize,
    steps: Vec<Step>,
}

impl Walk {
    fn new(cuts: &CalculatedCuts) -> Self {
        let mut bins = Bins::new();
        let sentinel = bins.open();
        Walk {
            p_cut: cuts.vc_primary().iter().copied().collect(),
            c_cut: cuts.vc_complement().iter().copied().collect(),
            hcuts: cuts.hc_between_strands().iter().copied().collect(),
            bins,
            p_bin: sentinel,
            c_bin: sentinel,
            p_segment: 0,
            c_segment: 0,
            steps: Vec::new(),
        }
    }

    /// Walk `-1..size`. Position `-1` is cut on both strands and only seeds the bins.
    fn linear(cuts: &CalculatedCuts, size: usize) -> Self {
        let mut walk = Walk::new(cuts);
        walk.p_cut.insert(-1);
        walk.c_cut.insert(-1);

        for index in -1..size as isize {
            walk.visit(index, index);
        }
        walk.steps.retain(|s| s.index != -1);
        walk
    }

    ///
    /// Walk once around the circle, starting right after the lowest cut on
    /// either strand and ending on it.
    ///
    /// A strand that is not cut at the starting position is continuous
    /// through it, so its last bin is merged back into its first and its
    /// first and last stretches are laid out next to each other.
    ///
    fn circular(cuts: &CalculatedCuts, size: usize) -> Self {
        let mut walk = Walk::new(cuts);
        let size = size as isize;

        let start = [walk.p_cut.first(), walk.c_cut.first()]
            .into_iter()
            .flatten()
            .min()
            .copied();
        let Some(start) = start else {
            for index in 0..size {
                walk.visit(index, index);
            }
            return walk;
        };

        walk.cut(start);
        let (p_first, c_first) = (walk.p_bin, walk.c_bin);
        walk.p_segment = 0;
        walk.c_segment = 0;

        for offset in 1..=size {
            walk.visit((start + offset).rem_euclid(size), start + offset);
        }

        if !walk.p_cut.contains(&start) {
            walk.close_circle(Strand::Primary, p_first, size);
        }
        if !walk.c_cut.contains(&start) {
            walk.close_circle(Strand::Complement, c_first, size);
        }
        walk
    }

    fn visit(&mut self, index: isize, coord: isize) {
        let separated = self.hcuts.contains(&index);
        if !separated && !self.bins.same(self.p_bin, self.c_bin) {
            let bin = self.bins.merge(self.p_bin, self.c_bin);
            self.p_bin = bin;
            self.c_bin = bin;
        }

        self.steps.push(Step {
            index,
            separated,
            primary: StrandStep {
                bin: self.p_bin,
                segment: self.p_segment,
                coord,
            },
            complement: StrandStep {
                bin: self.c_bin,
                segment: self.c_segment,
                coord,
            },
        });

        self.cut(index);
    }

    fn cut(&mut self, index: isize) {
        if self.p_cut.contains(&index) {
            self.p_bin = self.bins.open();
            self.p_segment += 1;
        }
        if self.c_cut.contains(&index) {
            self.c_bin = self.bins.open();
            self.c_segment += 1;
        }
    }

    fn close_circle(&mut self, strand: Strand, first_bin: BinId, size: isize) {
        let (last_bin, last_segment) = match strand {
            Strand::Primary => (self.p_bin, self.p_segment),
            Strand::Complement => (self.c_bin, self.c_segment),
        };
        self.bins.merge(last_bin, first_bin);
        if last_segment == 0 {
            // never cut: already one stretch
            return;
        }

        // keep whichever stretch is paired with the other strand in place
        let last_is_paired = self
            .steps
            .iter()
            .any(|s| s.strand(strand).segment == last_segment && !s.separated);
        for step in self.steps.iter_mut() {
            let strand_step = step.strand_mut(strand);
            if last_is_paired && strand_step.segment == 0 {
                strand_step.coord += size;
            } else if !last_is_paired && strand_step.segment == last_segment {
                strand_step.coord -= size;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn range() -> SequenceRange {
        SequenceRange::linear(6).unwrap()
    }

    fn bins(fragments: &Fragments) -> Vec<(Vec<isize>, Vec<isize>)> {
        fragments
            .iter()
            .map(|f| (f.primary_bin().to_vec(), f.complement_bin().to_vec()))
            .collect()
    }

    #[rstest]
    fn test_extent() {
        let range: SequenceRange =
            SequenceRange::new(Some(2), Some(9), Some(1), Some(7)).unwrap();
        assert_eq!(range.left(), 1);
        assert_eq!(range.right(), 9);
        assert_eq!(range.size(), 9);
        assert_eq!(range.topology(), Topology::Linear);
    }

    #[rstest]
    #[case(None, None, Some(0), Some(5))]
    #[case(Some(0), Some(5), None, None)]
    #[case(Some(0), None, Some(1), None)]
    #[case(None, Some(5), None, Some(3))]
    fn test_undefined_extent(
        #[case] p_left: Option<isize>,
        #[case] p_right: Option<isize>,
        #[case] c_left: Option<isize>,
        #[case] c_right: Option<isize>,
    ) {
        let result: Result<SequenceRange, _> =
            SequenceRange::new(p_left, p_right, c_left, c_right);
        assert!(matches!(result, Err(CutError::UndefinedExtent(_))));
    }

    #[rstest]
    fn test_reversed_extent() {
        let result: Result<SequenceRange, _> =
            SequenceRange::new(Some(5), Some(1), Some(0), Some(5));
        assert_eq!(result.unwrap_err(), CutError::InvalidRange { left: 5, right: 1 });

        let result: Result<SequenceRange, _> = SequenceRange::new(Some(5), None, None, Some(2));
        assert_eq!(result.unwrap_err(), CutError::InvalidRange { left: 5, right: 2 });
    }

    #[rstest]
    fn test_zero_length() {
        let result: Result<SequenceRange, _> = SequenceRange::linear(0);
        assert!(matches!(result, Err(CutError::UndefinedExtent(_))));
    }

    #[rstest]
    fn test_add_cut_range_out_of_range(mut range: SequenceRange) {
        assert_eq!(
            range.add_cut_range(Some(10), None, None, None),
            Err(CutError::IndexOutOfRange {
                index: 10,
                left: 0,
                right: 5
            })
        );
        assert!(range.add_cut_range(Some(-1), None, None, None).is_err());
        assert!(range.cut_ranges().is_empty());
    }

    #[rstest]
    fn test_add_tag_out_of_range(mut range: SequenceRange) {
        assert!(range.add_tag(6, "EcoRI".to_string()).is_err());
        assert!(range.add_tag(5, "EcoRI".to_string()).is_ok());
    }

    #[rstest]
    fn test_add_horizontal_cut_range(mut range: SequenceRange) {
        assert_eq!(
            range.add_horizontal_cut_range(3, 1),
            Err(CutError::InvalidRange { left: 3, right: 1 })
        );
        assert!(range.add_horizontal_cut_range(-1, 0).is_ok());
        assert!(range.add_horizontal_cut_range(-2, 0).is_err());
        assert_eq!(range.cut_ranges().len(), 1);
    }

    #[rstest]
    fn test_add_cut_ranges_is_all_or_nothing(mut range: SequenceRange) {
        let result = range.add_cut_ranges(vec![
            CutRange::from(VerticalCutRange::new(Some(1), None, None, Some(1))),
            CutRange::from(VerticalCutRange::new(Some(9), None, None, None)),
        ]);
        assert!(result.is_err());
        assert!(range.cut_ranges().is_empty());
    }

    #[rstest]
    fn test_no_cuts_single_fragment(range: SequenceRange) {
        let fragments = range.fragments().unwrap();
        assert_eq!(
            bins(fragments),
            vec![(vec![0, 1, 2, 3, 4, 5], vec![0, 1, 2, 3, 4, 5])]
        );
    }

    #[rstest]
    fn test_blunt_cut_at_last_index_adds_no_empty_fragment(mut range: SequenceRange) {
        range.add_cut_range(None, Some(5), None, Some(5)).unwrap();
        assert_eq!(range.fragments().unwrap().len(), 1);
    }

    #[rstest]
    fn test_fragments_are_cached(mut range: SequenceRange) {
        range.add_cut_range(None, Some(3), None, Some(3)).unwrap();
        let first = range.fragments().unwrap() as *const Fragments;
        let second = range.fragments().unwrap() as *const Fragments;
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_mutation_invalidates_cache(mut range: SequenceRange) {
        assert_eq!(range.fragments().unwrap().len(), 1);

        range.add_cut_range(None, Some(3), None, Some(3)).unwrap();
        assert_eq!(range.fragments().unwrap().len(), 2);

        range.add_tag(4, "SmaI".to_string()).unwrap();
        let fragments = range.fragments().unwrap();
        assert!(fragments.get(0).unwrap().tags().is_empty());
        assert_eq!(
            fragments.get(1).unwrap().tags().get(&4),
            Some(&"SmaI".to_string())
        );
    }

    #[rstest]
    fn test_tags_follow_both_strands(mut range: SequenceRange) {
        range.add_cut_range(Some(0), None, None, Some(3)).unwrap();
        range.add_cut_range(None, Some(2), None, None).unwrap();
        range.add_tag(2, "overhang".to_string()).unwrap();

        let fragments = range.fragments().unwrap();
        // index 2 sits in the first fragment's complement and the second's primary
        assert!(fragments.get(0).unwrap().tags().contains_key(&2));
        assert!(fragments.get(1).unwrap().tags().contains_key(&2));
        assert!(fragments.get(2).unwrap().tags().is_empty());
    }

    #[rstest]
    fn test_generic_tags() {
        let mut range: SequenceRange<u32> = SequenceRange::linear(4).unwrap();
        range.add_tag(1, 42).unwrap();
        let fragments = range.fragments().unwrap();
        assert_eq!(fragments.get(0).unwrap().tags().get(&1), Some(&42));
    }

    #[rstest]
    fn test_offset_region() {
        let mut range: SequenceRange =
            SequenceRange::new(Some(100), Some(105), Some(100), Some(105)).unwrap();
        range.add_cut_range(Some(100), None, None, Some(103)).unwrap();
        range.add_cut_range(None, Some(102), None, None).unwrap();

        let cuts = range.calculated_cuts().unwrap();
        assert_eq!(cuts.vc_primary(), &[100, 102]);
        assert_eq!(cuts.vc_complement(), &[103]);
        assert_eq!(cuts.hc_between_strands(), &[101, 102, 103]);

        assert_eq!(
            bins(range.fragments().unwrap()),
            vec![
                (vec![100], vec![100, 101, 102, 103]),
                (vec![101, 102], vec![]),
                (vec![103, 104, 105], vec![104, 105]),
            ]
        );
    }

    #[rstest]
    fn test_circular_single_blunt_cut_linearizes() {
        let mut range: SequenceRange = SequenceRange::circular(6).unwrap();
        range.add_cut_range(None, Some(3), None, Some(3)).unwrap();
        assert_eq!(
            bins(range.fragments().unwrap()),
            vec![(vec![4, 5, 0, 1, 2, 3], vec![4, 5, 0, 1, 2, 3])]
        );
    }

    #[rstest]
    fn test_circular_uncut_stays_whole() {
        let range: SequenceRange = SequenceRange::circular(4).unwrap();
        assert_eq!(
            bins(range.fragments().unwrap()),
            vec![(vec![0, 1, 2, 3], vec![0, 1, 2, 3])]
        );
    }

    #[rstest]
    fn test_circular_two_blunt_cuts() {
        let mut range: SequenceRange = SequenceRange::circular(6).unwrap();
        range.add_cut_range(None, Some(1), None, Some(1)).unwrap();
        range.add_cut_range(None, Some(3), None, Some(3)).unwrap();
        assert_eq!(
            bins(range.fragments().unwrap()),
            vec![
                (vec![2, 3], vec![2, 3]),
                (vec![4, 5, 0, 1], vec![4, 5, 0, 1]),
            ]
        );
    }

    #[rstest]
    fn test_circular_sticky_cut_lays_out_overhangs() {
        let mut range: SequenceRange = SequenceRange::circular(8).unwrap();
        range.add_cut_range(Some(1), None, None, Some(3)).unwrap();

        let fragments = range.fragments().unwrap();
        assert_eq!(fragments.len(), 1);

        let fragment = fragments.get(0).unwrap();
        assert_eq!(fragment.primary_bin(), &[2, 3, 4, 5, 6, 7, 0, 1]);
        assert_eq!(fragment.complement_bin(), &[4, 5, 6, 7, 0, 1, 2, 3]);

        let display = fragment.for_display("01234567", "01234567").unwrap();
        assert_eq!(display.primary, "23456701  ");
        assert_eq!(display.complement, "  45670123");
    }

    #[rstest]
    fn test_circular_overhang_across_start() {
        // the complement overhang 7,0,1 sits at the left end
        let mut range: SequenceRange = SequenceRange::circular(8).unwrap();
        range.add_cut_range(None, None, None, Some(6)).unwrap();
        range.add_horizontal_cut_range(7, 7).unwrap();
        range.add_horizontal_cut_range(0, 1).unwrap();
        range.add_cut_range(Some(1), None, None, None).unwrap();

        let fragments = range.fragments().unwrap();
        assert_eq!(fragments.len(), 1);

        let display = fragments
            .get(0)
            .unwrap()
            .for_display("abcdefgh", "ABCDEFGH")
            .unwrap();
        assert_eq!(display.primary, "   cdefghab");
        assert_eq!(display.complement, "HABCDEFG   ");
    }
}
