//! Reduction of declared cut ranges to the cuts that actually sever the molecule.
//!
//! Declared cuts are flattened into three index sets (primary backbone cuts,
//! complement backbone cuts and inter-strand cuts) and then pruned: a stretch
//! of separated strands only counts when a backbone cut sits on both of its
//! ends, and a backbone cut only counts when it either borders such a stretch
//! or is matched by a cut on the other strand at the same index.

use std::collections::BTreeSet;

use log::debug;

use crate::errors::CutError;
use crate::models::{CutRange, CutRanges};

/// Shape of the molecule being cut.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Topology {
    /// Two free ends, each an implicit severance point.
    #[default]
    Linear,
    /// No ends: index `size - 1` is followed by index `0`.
    Circular,
}

///
/// The reduced cut sets for one molecule.
///
/// All three sets are kept sorted ascending without duplicates.
///
/// # Examples
///
/// ```
/// use cutfrag_core::{CalculatedCuts, Topology};
/// use cutfrag_core::models::{CutRanges, VerticalCutRange};
///
/// let mut ranges = CutRanges::new();
/// ranges.push(VerticalCutRange::new(Some(0), None, None, Some(3)));
/// ranges.push(VerticalCutRange::new(None, Some(2), None, None));
///
/// let mut cuts = CalculatedCuts::new(Some(6), Topology::Linear);
/// cuts.add_cuts_from_cut_ranges(&ranges);
/// cuts.remove_incomplete_cuts(None).unwrap();
///
/// assert_eq!(cuts.vc_primary(), &[0, 2]);
/// assert_eq!(cuts.vc_complement(), &[3]);
/// assert_eq!(cuts.hc_between_strands(), &[1, 2, 3]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatedCuts {
    size: Option<usize>,
    topology: Topology,
    vc_primary: Vec<isize>,
    vc_complement: Vec<isize>,
    hc_between_strands: Vec<isize>,
}

impl CalculatedCuts {
    pub fn new(size: Option<usize>, topology: Topology) -> Self {
        CalculatedCuts {
            size,
            topology,
            ..Default::default()
        }
    }

    pub fn size(&self) -> Option<usize> {
        self.size
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn vc_primary(&self) -> &[isize] {
        &self.vc_primary
    }

    pub fn vc_complement(&self) -> &[isize] {
        &self.vc_complement
    }

    pub fn hc_between_strands(&self) -> &[isize] {
        &self.hc_between_strands
    }

    ///
    /// Flatten `cut_ranges` into the three index sets.
    ///
    /// Vertical ranges contribute their backbone candidates to the strand
    /// they belong to, and any span between their extremes to the
    /// inter-strand set. Horizontal ranges contribute their whole span to the
    /// inter-strand set.
    ///
    pub fn add_cuts_from_cut_ranges(&mut self, cut_ranges: &CutRanges) {
        for cut_range in cut_ranges {
            match cut_range {
                CutRange::Vertical(v) => {
                    self.vc_primary
                        .extend([v.p_cut_left, v.p_cut_right].into_iter().flatten());
                    self.vc_complement
                        .extend([v.c_cut_left, v.c_cut_right].into_iter().flatten());
                    self.hc_between_strands.extend(v.hcuts());
                }
                CutRange::Horizontal(h) => {
                    self.hc_between_strands.extend(h.hcuts());
                }
            }
        }
        self.clean_all();
    }

    ///
    /// Drop every cut that does not take part in severing the molecule.
    ///
    /// `size` replaces the size given at construction when provided. A linear
    /// molecule treats `-1` and `size - 1` as backbone cuts (its free ends).
    ///
    /// Running this twice is a no-op the second time.
    ///
    /// # Errors
    /// - [`CutError::MissingSize`] for a linear molecule of unknown size.
    /// - [`CutError::IndexOutOfRange`] for an inter-strand index outside `[-1, size - 1]`.
    pub fn remove_incomplete_cuts(&mut self, size: Option<usize>) -> Result<(), CutError> {
        if size.is_some() {
            self.size = size;
        }
        if self.size.is_none() && self.topology == Topology::Linear {
            return Err(CutError::MissingSize);
        }

        if let Some(size) = self.size {
            let last_index = size as isize - 1;
            if let Some(&index) = self
                .hc_between_strands
                .iter()
                .find(|&&i| i < -1 || i > last_index)
            {
                return Err(CutError::IndexOutOfRange {
                    index,
                    left: -1,
                    right: last_index,
                });
            }
            if self.topology == Topology::Circular {
                self.wrap_indices(size as isize);
            }
        }

        let counts_before = self.counts();

        let good_hcuts = self.complete_hcuts();
        let wrap = match self.topology {
            Topology::Circular => self.size.map(|s| s as isize),
            Topology::Linear => None,
        };
        self.vc_primary =
            complete_vertical_cuts(&self.vc_primary, &self.vc_complement, &good_hcuts, wrap);
        self.vc_complement =
            complete_vertical_cuts(&self.vc_complement, &self.vc_primary, &good_hcuts, wrap);
        self.hc_between_strands = good_hcuts.into_iter().collect();
        self.clean_all();

        let counts_after = self.counts();
        debug!(
            "removed incomplete cuts: {} primary, {} complement, {} between strands",
            counts_before.0 - counts_after.0,
            counts_before.1 - counts_after.1,
            counts_before.2 - counts_after.2,
        );

        Ok(())
    }

    /// Translate every index by `delta`.
    pub fn shifted(&self, delta: isize) -> Self {
        let shift = |v: &[isize]| -> Vec<isize> { v.iter().map(|i| i + delta).collect() };
        CalculatedCuts {
            size: self.size,
            topology: self.topology,
            vc_primary: shift(&self.vc_primary),
            vc_complement: shift(&self.vc_complement),
            hc_between_strands: shift(&self.hc_between_strands),
        }
    }

    fn counts(&self) -> (usize, usize, usize) {
        (
            self.vc_primary.len(),
            self.vc_complement.len(),
            self.hc_between_strands.len(),
        )
    }

    /// Map `-1` (and anything else off the circle) into `0..size`.
    fn wrap_indices(&mut self, size: isize) {
        for set in [
            &mut self.vc_primary,
            &mut self.vc_complement,
            &mut self.hc_between_strands,
        ] {
            for i in set.iter_mut() {
                *i = i.rem_euclid(size);
            }
        }
        self.clean_all();
    }

    /// Inter-strand cuts that are anchored by backbone cuts on both ends.
    fn complete_hcuts(&self) -> BTreeSet<isize> {
        let mut vcuts: BTreeSet<isize> = self
            .vc_primary
            .iter()
            .chain(self.vc_complement.iter())
            .copied()
            .collect();

        match (self.topology, self.size) {
            (Topology::Linear, size) => {
                vcuts.insert(-1);
                if let Some(size) = size {
                    vcuts.insert(size as isize - 1);
                }
                anchored_runs(self.hc_between_strands.iter().copied(), |i| {
                    vcuts.contains(&i)
                })
                .into_iter()
                .collect()
            }
            (Topology::Circular, None) => anchored_runs(
                self.hc_between_strands.iter().copied(),
                |i| vcuts.contains(&i),
            )
            .into_iter()
            .collect(),
            (Topology::Circular, Some(size)) => {
                let Some(&first_vcut) = vcuts.first() else {
                    return BTreeSet::new();
                };
                let size = size as isize;

                // start scanning right after the first backbone cut and go once around
                let mut order: Vec<isize> = self
                    .hc_between_strands
                    .iter()
                    .map(|&i| if i <= first_vcut { i + size } else { i })
                    .collect();
                order.sort_unstable();

                anchored_runs(order, |i| vcuts.contains(&i.rem_euclid(size)))
                    .into_iter()
                    .map(|i| i.rem_euclid(size))
                    .collect()
            }
        }
    }

    fn clean_all(&mut self) {
        for set in [
            &mut self.vc_primary,
            &mut self.vc_complement,
            &mut self.hc_between_strands,
        ] {
            set.sort_unstable();
            set.dedup();
        }
    }
}

///
/// Scan ascending inter-strand indices and keep the runs that open right
/// after a backbone cut and close on one.
///
/// A run is abandoned as soon as an index is skipped, since the strands
/// rejoin there without having been severed.
///
fn anchored_runs(
    hcuts: impl IntoIterator<Item = isize>,
    is_vcut: impl Fn(isize) -> bool,
) -> Vec<isize> {
    let mut good_hcuts = Vec::new();
    let mut potential_hcuts: Vec<isize> = Vec::new();

    for hcut in hcuts {
        if potential_hcuts
            .last()
            .is_some_and(|&last| (hcut - last).abs() > 1)
        {
            potential_hcuts.clear();
        }

        if potential_hcuts.is_empty() {
            if is_vcut(hcut - 1) {
                if is_vcut(hcut) {
                    good_hcuts.push(hcut);
                } else {
                    potential_hcuts.push(hcut);
                }
            }
        } else if is_vcut(hcut) {
            good_hcuts.append(&mut potential_hcuts);
            good_hcuts.push(hcut);
        } else {
            potential_hcuts.push(hcut);
        }
    }

    good_hcuts
}

///
/// Backbone cuts that border a kept inter-strand cut (at the same index or
/// the next one), or that are matched by a cut on the opposing strand.
///
fn complete_vertical_cuts(
    cuts: &[isize],
    opposing: &[isize],
    good_hcuts: &BTreeSet<isize>,
    wrap: Option<isize>,
) -> Vec<isize> {
    let next = |i: isize| match wrap {
        Some(size) => (i + 1).rem_euclid(size),
        None => i + 1,
    };
    cuts.iter()
        .copied()
        .filter(|&vc| {
            good_hcuts.contains(&vc)
                || good_hcuts.contains(&next(vc))
                || opposing.binary_search(&vc).is_ok()
        })
        .collect()
}
