pub mod cut_location;
pub mod cut_range;
pub mod cut_ranges;
pub mod fragment;

// re-export for cleaner imports
pub use self::cut_location::CutLocationPair;
pub use self::cut_range::{CutRange, HorizontalCutRange, VerticalCutRange};
pub use self::cut_ranges::CutRanges;
pub use self::fragment::{Column, DisplayFragment, Fragment, Fragments};
