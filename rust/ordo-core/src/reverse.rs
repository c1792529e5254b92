//! In-place list reversal strategies.
//!
//! Each [`Reverser`] rewires the forward links of the chain reachable from
//! `head` so that every node points at its former predecessor, and returns
//! the former tail as the new head. Node ids and values are untouched.
//!
//! The old head id stays valid after a reversal but now names the tail:
//! walking from it yields a one-node list. Callers must switch to the
//! returned head.
//!
//! The chain must be finite and acyclic. [`Iterative`] and [`HeadInsertion`]
//! loop forever on a cycle; [`Recursive`] bounds its depth and reports
//! [`ListError::DepthExceeded`] instead.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};
use tracing::debug;

use crate::error::ListError;
use crate::list::{NodeArena, NodeId};

/// Longest chain [`Recursive`] accepts unless told otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// A list reversal strategy.
pub trait Reverser {
    /// Reverse the chain starting at `head` and return the new head.
    ///
    /// `None` reverses to `None`. A head id that does not belong to `arena`
    /// is rejected before any link changes.
    fn reverse<T>(
        &self,
        arena: &mut NodeArena<T>,
        head: Option<NodeId>,
    ) -> Result<Option<NodeId>, ListError>;
}

fn checked_head<T>(
    arena: &NodeArena<T>,
    head: Option<NodeId>,
) -> Result<Option<NodeId>, ListError> {
    if let Some(id) = head {
        arena.check(id)?;
    }
    Ok(head)
}

// ── Iterative ───────────────────────────────────────────────────────

/// Single pass with three cursors: `current`, `previous`, and the saved
/// successor of `current`. `O(n)` time, `O(1)` extra space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iterative;

impl Reverser for Iterative {
    fn reverse<T>(
        &self,
        arena: &mut NodeArena<T>,
        head: Option<NodeId>,
    ) -> Result<Option<NodeId>, ListError> {
        let mut current = checked_head(arena, head)?;
        let mut previous = None;
        let mut rewired = 0usize;

        while let Some(node) = current {
            // Save the successor before its link is overwritten.
            let successor = arena.next_of(node);
            arena.set_next(node, previous);
            previous = Some(node);
            current = successor;
            rewired += 1;
        }

        debug!(nodes = rewired, "iterative reversal finished");
        Ok(previous)
    }
}

// ── Recursive ───────────────────────────────────────────────────────

/// Post-order reversal: reverse the rest of the chain, then point the old
/// successor back at this node and clear this node's link.
///
/// Uses one stack frame per node. The chain is measured first, and one
/// longer than `max_depth` nodes is refused with
/// [`ListError::DepthExceeded`] without touching any link. That bound also
/// turns a cyclic chain into an error rather than stack exhaustion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recursive {
    max_depth: usize,
}

impl Recursive {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn measure<T>(&self, arena: &NodeArena<T>, head: NodeId) -> Result<usize, ListError> {
        let mut walked = 0usize;
        let mut cursor = Some(head);
        while let Some(node) = cursor {
            walked += 1;
            if walked > self.max_depth {
                return Err(ListError::DepthExceeded {
                    limit: self.max_depth,
                });
            }
            cursor = arena.next_of(node);
        }
        Ok(walked)
    }
}

impl Default for Recursive {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

fn pivot<T>(arena: &mut NodeArena<T>, node: NodeId) -> NodeId {
    let Some(second) = arena.next_of(node) else {
        return node;
    };
    let new_head = pivot(arena, second);
    arena.set_next(second, Some(node));
    arena.set_next(node, None);
    new_head
}

impl Reverser for Recursive {
    fn reverse<T>(
        &self,
        arena: &mut NodeArena<T>,
        head: Option<NodeId>,
    ) -> Result<Option<NodeId>, ListError> {
        let Some(head) = checked_head(arena, head)? else {
            return Ok(None);
        };
        let depth = self.measure(arena, head)?;
        let new_head = pivot(arena, head);

        debug!(nodes = depth, "recursive reversal finished");
        Ok(Some(new_head))
    }
}

// ── Head insertion ──────────────────────────────────────────────────

/// Repeatedly detaches the node that follows the original head and splices
/// it in at the front. The original head drifts to the tail one step per
/// iteration. `O(n)` time, `O(1)` extra space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadInsertion;

impl Reverser for HeadInsertion {
    fn reverse<T>(
        &self,
        arena: &mut NodeArena<T>,
        head: Option<NodeId>,
    ) -> Result<Option<NodeId>, ListError> {
        let Some(first) = checked_head(arena, head)? else {
            return Ok(None);
        };
        let mut front = first;
        let mut moved_count = 0usize;

        while let Some(moved) = arena.next_of(first) {
            let rest = arena.next_of(moved);
            arena.set_next(first, rest);
            arena.set_next(moved, Some(front));
            front = moved;
            moved_count += 1;
        }

        debug!(nodes = moved_count + 1, "head-insertion reversal finished");
        Ok(Some(front))
    }
}

// ── Strategy selection ──────────────────────────────────────────────

/// Runtime choice between the reversal strategies.
///
/// Parses from and prints as `iterative`, `recursive` or `head-insertion`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ReverseStrategy {
    #[default]
    Iterative,
    Recursive,
    HeadInsertion,
}

impl ReverseStrategy {
    /// Pair the strategy with the depth bound the recursive variant uses.
    pub fn reverser(self, max_depth: usize) -> StrategyReverser {
        StrategyReverser {
            strategy: self,
            max_depth,
        }
    }
}

impl Reverser for ReverseStrategy {
    fn reverse<T>(
        &self,
        arena: &mut NodeArena<T>,
        head: Option<NodeId>,
    ) -> Result<Option<NodeId>, ListError> {
        self.reverser(DEFAULT_MAX_DEPTH).reverse(arena, head)
    }
}

/// A [`ReverseStrategy`] with its recursion bound, built by
/// [`ReverseStrategy::reverser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyReverser {
    strategy: ReverseStrategy,
    max_depth: usize,
}

impl StrategyReverser {
    pub fn strategy(&self) -> ReverseStrategy {
        self.strategy
    }
}

impl Reverser for StrategyReverser {
    fn reverse<T>(
        &self,
        arena: &mut NodeArena<T>,
        head: Option<NodeId>,
    ) -> Result<Option<NodeId>, ListError> {
        debug!(strategy = %self.strategy, "reversing");
        match self.strategy {
            ReverseStrategy::Iterative => Iterative.reverse(arena, head),
            ReverseStrategy::Recursive => Recursive::new(self.max_depth).reverse(arena, head),
            ReverseStrategy::HeadInsertion => HeadInsertion.reverse(arena, head),
        }
    }
}
