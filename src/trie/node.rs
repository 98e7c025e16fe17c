//! Arena node storage and read-only node views

use super::Trie;
use std::collections::BTreeMap;

/// Index of a node inside a [`Trie`] arena
///
/// Ids are only meaningful for the trie that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(super) usize);

impl NodeId {
    /// The root node, present in every trie
    pub const ROOT: Self = Self(0);

    /// Raw arena index
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A single-character node owned by its parent's `children` map
#[derive(Debug, Clone)]
pub(super) struct TrieNode {
    /// `None` only for the root
    pub(super) character: Option<char>,
    pub(super) children: BTreeMap<char, NodeId>,
    pub(super) is_terminal: bool,
    /// Non-owning back-reference, `None` only for the root
    pub(super) parent: Option<NodeId>,
}

impl TrieNode {
    pub(super) const fn root() -> Self {
        Self {
            character: None,
            children: BTreeMap::new(),
            is_terminal: false,
            parent: None,
        }
    }

    pub(super) const fn child(character: char, parent: NodeId) -> Self {
        Self {
            character: Some(character),
            children: BTreeMap::new(),
            is_terminal: false,
            parent: Some(parent),
        }
    }
}

/// Borrowed view of a live node, handed to pruning predicates
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    trie: &'a Trie,
    id: NodeId,
    node: &'a TrieNode,
}

impl<'a> NodeRef<'a> {
    pub(super) const fn new(trie: &'a Trie, id: NodeId, node: &'a TrieNode) -> Self {
        Self { trie, id, node }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The node's character, `None` for the root
    #[inline]
    #[must_use]
    pub const fn character(&self) -> Option<char> {
        self.node.character
    }

    /// Whether an inserted word ends exactly here
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.node.is_terminal
    }

    #[inline]
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.node.children.len()
    }

    /// Parent view, `None` for the root
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.node.parent.and_then(|id| self.trie.get(id))
    }

    /// Reconstruct the prefix ending at this node by walking upward
    #[must_use]
    pub fn word(&self) -> String {
        self.trie.word_at(self.id)
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("character", &self.node.character)
            .field("is_terminal", &self.node.is_terminal)
            .field("children", &self.node.children.len())
            .finish()
    }
}
