//! Prefix tree with predicate-driven subtree pruning
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. Each node is
//! owned by its parent's `children` map; the `parent` field is a plain index
//! used for upward word reconstruction and for collapsing dead branches.
//!
//! Children are kept in a `BTreeMap`, so enumeration is in lexicographic order.

mod node;
mod predicate;

pub use node::{NodeId, NodeRef};
pub use predicate::{Predicate, PruneStats};

use node::TrieNode;

/// Arena-backed prefix tree of words
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Option<TrieNode>>,
    free: Vec<NodeId>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create an empty trie holding only the root
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Some(TrieNode::root())],
            free: Vec::new(),
            words: 0,
        }
    }

    fn node(&self, id: NodeId) -> &TrieNode {
        self.nodes[id.0]
            .as_ref()
            .expect("node ids handed out by this trie stay live until freed")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut TrieNode {
        self.nodes[id.0]
            .as_mut()
            .expect("node ids handed out by this trie stay live until freed")
    }

    fn alloc(&mut self, node: TrieNode) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.nodes[id.0] = Some(node);
            id
        } else {
            self.nodes.push(Some(node));
            NodeId(self.nodes.len() - 1)
        }
    }

    /// View of a live node, or `None` if `id` was freed or never allocated
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.nodes
            .get(id.0)
            .and_then(Option::as_ref)
            .map(|node| NodeRef::new(self, id, node))
    }

    #[must_use]
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, NodeId::ROOT, self.node(NodeId::ROOT))
    }

    /// Insert a word, creating nodes for any new prefix characters
    ///
    /// Inserting the empty string marks the root terminal.
    pub fn insert(&mut self, word: &str) {
        let mut current = NodeId::ROOT;

        for ch in word.chars() {
            current = if let Some(&child) = self.node(current).children.get(&ch) {
                child
            } else {
                let child = self.alloc(TrieNode::child(ch, current));
                self.node_mut(current).children.insert(ch, child);
                child
            };
        }

        let node = self.node_mut(current);
        if !node.is_terminal {
            node.is_terminal = true;
            self.words += 1;
        }
    }

    /// Insert every word; the resulting shape does not depend on order
    pub fn insert_many<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    /// Check whether `word` is stored as a complete word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let mut current = NodeId::ROOT;
        for ch in word.chars() {
            match self.node(current).children.get(&ch) {
                Some(&child) => current = child,
                None => return false,
            }
        }
        self.node(current).is_terminal
    }

    /// Number of complete words stored
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Live nodes below the root
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len() - 1
    }

    /// All stored words in lexicographic order
    #[must_use]
    pub fn enumerate(&self) -> Vec<String> {
        let mut result = Vec::with_capacity(self.words);
        let mut prefix = String::new();
        self.collect_words(NodeId::ROOT, &mut prefix, &mut result);
        result
    }

    fn collect_words(&self, id: NodeId, prefix: &mut String, result: &mut Vec<String>) {
        let node = self.node(id);
        if node.is_terminal {
            result.push(prefix.clone());
        }
        for (&ch, &child) in &node.children {
            prefix.push(ch);
            self.collect_words(child, prefix, result);
            prefix.pop();
        }
    }

    /// The lexicographically smallest stored word
    ///
    /// Follows the first child until a terminal node, which relies on every
    /// branch ending in a word.
    #[must_use]
    pub fn first(&self) -> Option<String> {
        let mut current = self.node(NodeId::ROOT);
        let mut word = String::new();

        loop {
            if current.is_terminal {
                return Some(word);
            }
            let (&ch, &child) = current.children.iter().next()?;
            word.push(ch);
            current = self.node(child);
        }
    }

    /// Reconstruct the prefix ending at `id` by walking parent links
    pub(crate) fn word_at(&self, id: NodeId) -> String {
        let mut letters = Vec::new();
        let mut current = Some(id);

        while let Some(node_id) = current {
            let node = self.node(node_id);
            if let Some(ch) = node.character {
                letters.push(ch);
            }
            current = node.parent;
        }

        letters.iter().rev().collect()
    }

    /// Remove every subtree whose root matches any predicate
    ///
    /// Nodes are visited top-down. When a predicate matches, the whole subtree
    /// goes without its descendants being tested. Otherwise the children are
    /// visited at `depth + 1`. Predicates are OR'd; their order only affects how
    /// soon the check short-circuits.
    pub fn prune<P: Predicate>(&mut self, predicates: &[P]) -> PruneStats {
        let mut stats = PruneStats::default();
        self.prune_children(NodeId::ROOT, 0, predicates, &mut stats);
        stats
    }

    fn prune_children<P: Predicate>(
        &mut self,
        parent: NodeId,
        depth: usize,
        predicates: &[P],
        stats: &mut PruneStats,
    ) {
        // Snapshot: removals below only ever detach the child being visited or
        // single-child ancestors, so the remaining ids stay live.
        let children: Vec<NodeId> = self.node(parent).children.values().copied().collect();

        for child in children {
            stats.visited += 1;

            let doomed = {
                let view = NodeRef::new(self, child, self.node(child));
                predicates.iter().any(|p| p.eliminates(&view, depth))
            };

            if doomed {
                self.destroy(child, stats);
            } else {
                self.prune_children(child, depth + 1, predicates, stats);
            }
        }
    }

    /// Detach `id`, collapsing ancestors that would be left as dead chains
    ///
    /// Walks upward while the parent is not the root, not a word end, and has
    /// `id`'s branch as its only child. The highest such node is detached.
    fn destroy(&mut self, id: NodeId, stats: &mut PruneStats) {
        let mut target = id;

        while let Some(parent) = self.node(target).parent {
            let parent_node = self.node(parent);
            if parent == NodeId::ROOT || parent_node.is_terminal || parent_node.children.len() != 1
            {
                break;
            }
            target = parent;
        }

        let node = self.node(target);
        if let (Some(parent), Some(ch)) = (node.parent, node.character) {
            self.node_mut(parent).children.remove(&ch);
        }

        stats.removed_subtrees += 1;
        self.free_subtree(target, stats);
    }

    fn free_subtree(&mut self, id: NodeId, stats: &mut PruneStats) {
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes[current.0].take() {
                if node.is_terminal {
                    self.words -= 1;
                    stats.removed_words += 1;
                }
                stack.extend(node.children.values().copied());
                self.free.push(current);
                stats.freed_nodes += 1;
            }
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.insert_many(iter);
        trie
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.insert_many(iter);
    }
}
