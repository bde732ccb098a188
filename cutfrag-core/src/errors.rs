use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CutError {
    #[error("Invalid range: left ({left}) is greater than right ({right})")]
    InvalidRange { left: isize, right: isize },

    #[error("Size of the strand must be provided for a linear molecule")]
    MissingSize,

    #[error("Index {index} is out of range [{left}, {right}]")]
    IndexOutOfRange {
        index: isize,
        left: isize,
        right: isize,
    },

    #[error("Sequence range extent is undefined: {0}")]
    UndefinedExtent(String),
}
