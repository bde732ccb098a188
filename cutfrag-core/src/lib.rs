//! Restriction digest cut reduction and fragment assembly.
//!
//! A molecule is modelled as two paired strands addressed by between-base
//! indices: index `i` sits right after base `i`, and `-1` sits before the
//! first base. Cuts are declared as backbone cuts on either strand plus the
//! stretches where the strands are held apart. They are reduced to the cuts
//! that actually sever the molecule, and the molecule is then split into the
//! fragments those cuts release.
//!
//! ## Quick Start
//!
//! ```rust
//! use cutfrag_core::SequenceRange;
//!
//! // a sticky end plus a nick on the primary strand
//! let mut range: SequenceRange = SequenceRange::linear(6).unwrap();
//! range.add_cut_range(Some(0), None, None, Some(3)).unwrap();
//! range.add_cut_range(None, Some(2), None, None).unwrap();
//!
//! let fragments = range.fragments().unwrap();
//! assert_eq!(
//!     fragments.primary("012345", "012345").unwrap(),
//!     vec!["0", "12", "345"]
//! );
//! assert_eq!(
//!     fragments.complement("012345", "012345").unwrap(),
//!     vec!["0123", "45"]
//! );
//! ```
//!
//! ## Circular molecules
//!
//! ```rust
//! use cutfrag_core::SequenceRange;
//!
//! // a single blunt cut opens a plasmid into one linear piece
//! let mut plasmid: SequenceRange = SequenceRange::circular(8).unwrap();
//! plasmid.add_cut_range(None, Some(3), None, Some(3)).unwrap();
//!
//! let fragments = plasmid.fragments().unwrap();
//! assert_eq!(fragments.len(), 1);
//! assert_eq!(fragments.get(0).unwrap().primary_bin(), &[4, 5, 6, 7, 0, 1, 2, 3]);
//! ```

/// Union-find over the bins of the assembly walk.
pub mod bins;

/// Reduction of declared cuts to severing cuts.
///
/// See [`CalculatedCuts`] for details.
pub mod calculated_cuts;

pub mod errors;
pub mod models;

/// Region bookkeeping and fragment assembly.
///
/// See [`SequenceRange`] for details.
pub mod sequence_range;

pub use calculated_cuts::{CalculatedCuts, Topology};
pub use errors::CutError;
pub use sequence_range::SequenceRange;
