use thiserror::Error;

use crate::list::NodeId;

/// Errors reported by the sorting strategies and the render helper.
///
/// Every variant is raised before the sequence is touched, so a caller that
/// receives one still holds its input in the original order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SortError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl SortError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        SortError::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Errors reported by list construction and the reversal strategies.
///
/// A cyclic chain handed to [`crate::Iterative`] or [`crate::HeadInsertion`]
/// is not one of these: it never terminates.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ListError {
    #[error("node {0} does not belong to this arena")]
    UnknownNode(NodeId),
    #[error("chain is longer than the recursion limit of {limit} nodes")]
    DepthExceeded { limit: usize },
}
