//! Ordo Core
//!
//! Interchangeable sorting strategies over mutable sequences, and
//! singly-linked list reversal over an index arena.

pub mod error;
pub mod list;
pub mod reverse;
pub mod sort;

pub use error::{ListError, SortError};
pub use list::{Node, NodeArena, NodeId};
pub use reverse::{
    HeadInsertion, Iterative, Recursive, ReverseStrategy, Reverser, StrategyReverser,
    DEFAULT_MAX_DEPTH,
};
pub use sort::{render, ExchangeSort, HeapSort, SortStats, SortStrategy, Sorter};
