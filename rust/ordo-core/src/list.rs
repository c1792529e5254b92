//! Singly-linked lists stored in an index arena.
//!
//! Nodes live in a `Vec` and point at their successor through a [`NodeId`]
//! rather than a reference. Reversal strategies rewire those indices in
//! place; no node is ever copied or moved inside the arena.
//!
//! A list is whatever chain is reachable from a head id. One arena can hold
//! several disjoint lists. Links are only created through [`NodeArena::link`]
//! and [`NodeArena::from_values`], so every stored successor is in bounds.

use std::fmt;

use crate::error::ListError;

/// Handle to a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One value plus a forward link; `None` marks the tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

impl<T> Node<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }
}

/// Owner of every node; lists are chains of [`NodeId`]s through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeArena<T> {
    nodes: Vec<Node<T>>,
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Build a single chain from `values`, head first.
    ///
    /// Returns the arena together with the head id, or `None` for an empty
    /// iterator.
    pub fn from_values<I>(values: I) -> (Self, Option<NodeId>)
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        let mut arena = Self::with_capacity(values.size_hint().0);
        let mut head = None;
        let mut tail: Option<NodeId> = None;
        for value in values {
            let id = arena.push(value);
            match tail {
                Some(prev) => arena.set_next(prev, Some(id)),
                None => head = Some(id),
            }
            tail = Some(id);
        }
        (arena, head)
    }

    /// Add a detached node and return its id.
    pub fn push(&mut self, value: T) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { value, next: None });
        id
    }

    /// Point `from` at `to`, replacing whatever `from` linked to before.
    pub fn link(&mut self, from: NodeId, to: NodeId) -> Result<(), ListError> {
        self.check(from)?;
        self.check(to)?;
        self.set_next(from, Some(to));
        Ok(())
    }

    /// Clear the forward link of `id`, returning the former successor.
    pub fn unlink(&mut self, id: NodeId) -> Result<Option<NodeId>, ListError> {
        self.check(id)?;
        Ok(self.nodes[id.0].next.take())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    /// Successor of `id`; `None` for a tail or an id from another arena.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::next)
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(Node::value)
    }

    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id.0).map(|node| &mut node.value)
    }

    /// Total number of nodes in the arena, across all chains.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Walk the chain starting at `head`.
    ///
    /// The iterator does not detect cycles.
    pub fn iter_from(&self, head: Option<NodeId>) -> Iter<'_, T> {
        Iter {
            arena: self,
            cursor: head,
        }
    }

    /// Number of nodes reachable from `head`. Does not terminate on a cycle.
    pub fn len_from(&self, head: Option<NodeId>) -> usize {
        self.iter_from(head).count()
    }

    /// Values reachable from `head`, head first.
    pub fn values_from(&self, head: Option<NodeId>) -> Vec<&T> {
        self.iter_from(head).collect()
    }

    pub(crate) fn check(&self, id: NodeId) -> Result<(), ListError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(ListError::UnknownNode(id))
        }
    }

    /// Successor of a node already known to be in this arena.
    pub(crate) fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].next
    }

    pub(crate) fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        self.nodes[id.0].next = next;
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the values of one chain, produced by
/// [`NodeArena::iter_from`].
pub struct Iter<'a, T> {
    arena: &'a NodeArena<T>,
    cursor: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.node(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_links_in_order() {
        let (arena, head) = NodeArena::from_values([0, 1, 3, 5, 7]);
        assert_eq!(arena.len(), 5);
        assert_eq!(arena.values_from(head), vec![&0, &1, &3, &5, &7]);
        assert_eq!(arena.len_from(head), 5);
    }

    #[test]
    fn test_from_values_empty() {
        let (arena, head) = NodeArena::<i32>::from_values([]);
        assert!(arena.is_empty());
        assert_eq!(head, None);
        assert_eq!(arena.len_from(head), 0);
    }

    #[test]
    fn test_push_and_link() {
        let mut arena = NodeArena::new();
        let a = arena.push('a');
        let b = arena.push('b');
        assert_eq!(arena.next(a), None);

        arena.link(a, b).unwrap();
        assert_eq!(arena.next(a), Some(b));
        assert_eq!(arena.values_from(Some(a)), vec![&'a', &'b']);

        assert_eq!(arena.unlink(a).unwrap(), Some(b));
        assert_eq!(arena.values_from(Some(a)), vec![&'a']);
    }

    #[test]
    fn test_link_rejects_foreign_id() {
        let (mut arena, head) = NodeArena::from_values([1, 2]);
        let (other, _) = NodeArena::from_values([1, 2, 3, 4]);
        let foreign = NodeId(other.len() - 1);

        let head = head.unwrap();
        assert_eq!(
            arena.link(head, foreign),
            Err(ListError::UnknownNode(foreign))
        );
        assert_eq!(arena.unlink(foreign), Err(ListError::UnknownNode(foreign)));
        // Failed link leaves the chain alone.
        assert_eq!(arena.values_from(Some(head)), vec![&1, &2]);
    }

    #[test]
    fn test_value_mut() {
        let (mut arena, head) = NodeArena::from_values([1, 2]);
        let head = head.unwrap();
        *arena.value_mut(head).unwrap() = 10;
        assert_eq!(arena.value(head), Some(&10));
        assert_eq!(arena.value(NodeId(9)), None);
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId(3).to_string(), "#3");
        assert_eq!(NodeId(3).index(), 3);
    }
}
