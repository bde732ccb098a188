use std::collections::{BTreeMap, BTreeSet};

use crate::errors::CutError;

///
/// One piece of the digested molecule.
///
/// The piece is held as two parallel index lists, one per strand, rather
/// than as copied sequence. Either list may be empty when the piece is a
/// single strand released between two nicks.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<T = String> {
    primary_bin: Vec<isize>,
    complement_bin: Vec<isize>,
    columns: Vec<Column>,
    tags: BTreeMap<isize, T>,
}

/// One aligned position of a fragment: the primary and complement index
/// paired there, either of which may be absent in an overhang.
pub type Column = (Option<isize>, Option<isize>);

/// A fragment projected onto a pair of strand strings.
///
/// Positions present on only one strand are padded with a blank on the other.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayFragment {
    pub primary: String,
    pub complement: String,
    pub p_left: Option<isize>,
    pub p_right: Option<isize>,
    pub c_left: Option<isize>,
    pub c_right: Option<isize>,
}

impl<T> Fragment<T> {
    /// Build an untagged fragment from two ascending bins, pairing equal indices.
    pub fn new(primary_bin: Vec<isize>, complement_bin: Vec<isize>) -> Self {
        let mut columns: BTreeMap<isize, Column> = BTreeMap::new();
        for &i in &primary_bin {
            columns.entry(i).or_default().0 = Some(i);
        }
        for &i in &complement_bin {
            columns.entry(i).or_default().1 = Some(i);
        }
        Fragment {
            primary_bin,
            complement_bin,
            columns: columns.into_values().collect(),
            tags: BTreeMap::new(),
        }
    }

    pub(crate) fn from_parts(
        primary_bin: Vec<isize>,
        complement_bin: Vec<isize>,
        columns: Vec<Column>,
        tags: BTreeMap<isize, T>,
    ) -> Self {
        Fragment {
            primary_bin,
            complement_bin,
            columns,
            tags,
        }
    }

    pub fn primary_bin(&self) -> &[isize] {
        &self.primary_bin
    }

    pub fn complement_bin(&self) -> &[isize] {
        &self.complement_bin
    }

    /// The fragment laid out left to right, one entry per aligned position.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tags(&self) -> &BTreeMap<isize, T> {
        &self.tags
    }

    ///
    /// Project the fragment onto full-length strand strings.
    ///
    /// Both strings are indexed by fragment index, so character `i` of
    /// `primary` is the base at index `i` of the primary strand.
    ///
    /// # Errors
    /// Returns [`CutError::IndexOutOfRange`] if a fragment index falls outside a string.
    pub fn for_display(
        &self,
        primary: &str,
        complement: &str,
    ) -> Result<DisplayFragment, CutError> {
        let primary: Vec<char> = primary.chars().collect();
        let complement: Vec<char> = complement.chars().collect();
        self.project(&primary, &complement)
    }

    fn project(&self, primary: &[char], complement: &[char]) -> Result<DisplayFragment, CutError> {
        let mut p_text = String::with_capacity(self.columns.len());
        let mut c_text = String::with_capacity(self.columns.len());
        for &(p, c) in &self.columns {
            p_text.push(match p {
                Some(i) => char_at(primary, i)?,
                None => ' ',
            });
            c_text.push(match c {
                Some(i) => char_at(complement, i)?,
                None => ' ',
            });
        }

        Ok(DisplayFragment {
            primary: p_text,
            complement: c_text,
            p_left: self.primary_bin.first().copied(),
            p_right: self.primary_bin.last().copied(),
            c_left: self.complement_bin.first().copied(),
            c_right: self.complement_bin.last().copied(),
        })
    }
}

/// Character `index` of a strand, counted in characters rather than bytes.
fn char_at(strand: &[char], index: isize) -> Result<char, CutError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| strand.get(i))
        .copied()
        .ok_or(CutError::IndexOutOfRange {
            index,
            left: 0,
            right: strand.len() as isize - 1,
        })
}

///
/// The ordered fragments produced by one digest.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragments<T = String> {
    fragments: Vec<Fragment<T>>,
}

impl<T> Fragments<T> {
    pub fn new(fragments: Vec<Fragment<T>>) -> Self {
        Fragments { fragments }
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Fragment<T>> {
        self.fragments.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment<T>> {
        self.fragments.iter()
    }

    pub fn for_display(
        &self,
        primary: &str,
        complement: &str,
    ) -> Result<Vec<DisplayFragment>, CutError> {
        let primary: Vec<char> = primary.chars().collect();
        let complement: Vec<char> = complement.chars().collect();
        self.fragments
            .iter()
            .map(|f| f.project(&primary, &complement))
            .collect()
    }

    ///
    /// The primary strand text of every fragment, stripped of padding,
    /// sorted and de-duplicated. Fragments with no primary bases are omitted.
    ///
    pub fn primary(&self, primary: &str, complement: &str) -> Result<Vec<String>, CutError> {
        Ok(strip_sort_dedup(
            self.for_display(primary, complement)?
                .into_iter()
                .map(|d| d.primary),
        ))
    }

    /// The complement counterpart of [`Fragments::primary`].
    pub fn complement(&self, primary: &str, complement: &str) -> Result<Vec<String>, CutError> {
        Ok(strip_sort_dedup(
            self.for_display(primary, complement)?
                .into_iter()
                .map(|d| d.complement),
        ))
    }
}

fn strip_sort_dedup(texts: impl Iterator<Item = String>) -> Vec<String> {
    let stripped: BTreeSet<String> = texts
        .map(|t| t.trim_matches(' ').to_string())
        .filter(|t| !t.is_empty())
        .collect();
    stripped.into_iter().collect()
}

impl<T> IntoIterator for Fragments<T> {
    type Item = Fragment<T>;
    type IntoIter = std::vec::IntoIter<Fragment<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Fragments<T> {
    type Item = &'a Fragment<T>;
    type IntoIter = std::slice::Iter<'a, Fragment<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    const STRAND: &str = "012345";

    #[fixture]
    fn fragments() -> Fragments {
        Fragments::new(vec![
            Fragment::new(vec![0], vec![0, 1, 2, 3]),
            Fragment::new(vec![1, 2], vec![]),
            Fragment::new(vec![3, 4, 5], vec![4, 5]),
        ])
    }

    #[rstest]
    fn test_for_display_pads_single_strand(fragments: Fragments) {
        let display = fragments.for_display(STRAND, STRAND).unwrap();
        assert_eq!(display[0].primary, "0   ");
        assert_eq!(display[0].complement, "0123");
        assert_eq!(display[1].primary, "12");
        assert_eq!(display[1].complement, "  ");
        assert_eq!(display[2].primary, "345");
        assert_eq!(display[2].complement, " 45");
    }

    #[rstest]
    fn test_for_display_bounds(fragments: Fragments) {
        let display = fragments.for_display(STRAND, STRAND).unwrap();
        assert_eq!(display[1].p_left, Some(1));
        assert_eq!(display[1].p_right, Some(2));
        assert_eq!(display[1].c_left, None);
        assert_eq!(display[1].c_right, None);
        assert_eq!(display[2].c_left, Some(4));
    }

    #[rstest]
    fn test_for_display_short_string(fragments: Fragments) {
        assert_eq!(
            fragments.for_display("0123", STRAND),
            Err(CutError::IndexOutOfRange {
                index: 4,
                left: 0,
                right: 3
            })
        );
    }

    #[rstest]
    fn test_primary_and_complement(fragments: Fragments) {
        assert_eq!(
            fragments.primary(STRAND, STRAND).unwrap(),
            vec!["0", "12", "345"]
        );
        assert_eq!(
            fragments.complement(STRAND, STRAND).unwrap(),
            vec!["0123", "45"]
        );
    }

    #[rstest]
    fn test_for_display_counts_characters_not_bytes() {
        let fragment: Fragment = Fragment::new(vec![0, 1, 2], vec![1, 2]);
        let display = fragment.for_display("ÄCG", "TGC").unwrap();
        assert_eq!(display.primary, "ÄCG");
        assert_eq!(display.complement, " GC");

        let fragments: Fragments = Fragments::new(vec![fragment]);
        assert_eq!(fragments.primary("ÄCG", "TGC").unwrap(), vec!["ÄCG"]);
        assert_eq!(
            fragments.for_display("ÄC", "TGC"),
            Err(CutError::IndexOutOfRange {
                index: 2,
                left: 0,
                right: 1
            })
        );
    }

    #[rstest]
    fn test_primary_dedups() {
        let fragments: Fragments = Fragments::new(vec![
            Fragment::new(vec![0, 1], vec![0, 1]),
            Fragment::new(vec![2, 3], vec![2, 3]),
        ]);
        assert_eq!(fragments.primary("AAAA", "TTTT").unwrap(), vec!["AA"]);
    }

    #[rstest]
    fn test_columns_pair_equal_indices() {
        let fragment: Fragment = Fragment::new(vec![3, 4, 5], vec![4, 5, 6]);
        assert_eq!(
            fragment.columns(),
            &[
                (Some(3), None),
                (Some(4), Some(4)),
                (Some(5), Some(5)),
                (None, Some(6))
            ]
        );
        assert!(fragment.tags().is_empty());
    }
}
