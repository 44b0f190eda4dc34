use std::fmt::Display;

/// Possible errors that arise from the checked disjoint set operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DisjointSetError {
    #[error("element index {index} is out of range for a disjoint set of size {size}")]
    IndexOutOfRange { index: String, size: String },
}

impl DisjointSetError {
    pub(crate) fn index_out_of_range(index: impl Display, size: impl Display) -> Self {
        DisjointSetError::IndexOutOfRange {
            index: index.to_string(),
            size: size.to_string(),
        }
    }
}
