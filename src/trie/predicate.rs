//! Elimination predicates consulted while pruning

use super::NodeRef;

/// Decides whether the subtree rooted at a node should be removed
///
/// `depth` is the node's position within the word: children of the root are
/// at depth 0.
pub trait Predicate {
    fn eliminates(&self, node: &NodeRef<'_>, depth: usize) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&NodeRef<'_>, usize) -> bool,
{
    #[inline]
    fn eliminates(&self, node: &NodeRef<'_>, depth: usize) -> bool {
        self(node, depth)
    }
}

/// Work done by a single [`Trie::prune`](super::Trie::prune) call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneStats {
    /// Nodes tested against the predicates
    pub visited: usize,
    /// Subtrees cut because some predicate matched
    pub removed_subtrees: usize,
    /// Nodes released back to the arena, including collapsed ancestors
    pub freed_nodes: usize,
    /// Complete words that disappeared
    pub removed_words: usize,
}
