//! Huffman tree construction.
//!
//! Nodes live in an arena (`Vec<Node>`) and refer to their children by
//! [`NodeId`]. The builder drives a min-heap of `(weight, sequence, id)`
//! entries, so nodes of equal weight leave the heap in the order they entered
//! it (FIFO). Leaves enter in ascending symbol order.
//!
//! # Historical Context
//!
//! David Huffman (1952) showed that repeatedly merging the two least frequent
//! nodes yields an optimal prefix code. Different tie-breaking rules give
//! different trees, all with the same total encoded length.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;

/// Handle of a node inside a [`HuffmanTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single symbol and its frequency.
    Leaf {
        /// The symbol.
        symbol: char,
        /// Its frequency in the training text.
        weight: u64,
    },
    /// A merge of two subtrees.
    Internal {
        /// Sum of the children's weights.
        weight: u64,
        /// The lighter (or first extracted) child, reached with bit 0.
        left: NodeId,
        /// The strictly heavier (or second extracted) child, reached with bit 1.
        right: NodeId,
    },
}

impl Node {
    /// Aggregate frequency of the subtree rooted here.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// True for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

// Field order matters: the derived Ord compares weight, then sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry {
    weight: u64,
    seq: u64,
    id: NodeId,
}

/// A full binary tree built from a [`FrequencyTable`].
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build the tree by repeatedly merging the two lightest nodes.
    ///
    /// # Errors
    /// Returns `Error::EmptyAlphabet` if `freq` has no entries.
    pub fn build(freq: &FrequencyTable) -> Result<Self> {
        if freq.is_empty() {
            return Err(Error::EmptyAlphabet);
        }

        let mut nodes = Vec::with_capacity(2 * freq.len() - 1);
        let mut heap = BinaryHeap::with_capacity(freq.len());
        let mut seq = 0u64;

        for (symbol, weight) in freq.iter() {
            let id = NodeId(nodes.len());
            nodes.push(Node::Leaf { symbol, weight });
            heap.push(Reverse(HeapEntry { weight, seq, id }));
            seq += 1;
        }

        let root = loop {
            let Reverse(a) = heap.pop().ok_or(Error::EmptyAlphabet)?;
            let Some(Reverse(b)) = heap.pop() else {
                break a.id;
            };

            // Heavier node goes right; on a tie the first extracted stays left.
            let (left, right) = if a.weight > b.weight { (b, a) } else { (a, b) };
            let weight = a.weight + b.weight;
            let id = NodeId(nodes.len());
            nodes.push(Node::Internal {
                weight,
                left: left.id,
                right: right.id,
            });
            log::trace!(
                "merge {:?}({}) + {:?}({}) -> {:?}({})",
                left.id,
                left.weight,
                right.id,
                right.weight,
                id,
                weight
            );
            heap.push(Reverse(HeapEntry { weight, seq, id }));
            seq += 1;
        };

        let tree = Self { nodes, root };
        log::debug!(
            "built huffman tree: {} symbols, {} nodes, root weight {}",
            tree.leaf_count(),
            tree.len(),
            tree.weight()
        );
        Ok(tree)
    }

    /// Handle of the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Weight of the root, equal to the sum of all frequencies.
    pub fn weight(&self) -> u64 {
        self.nodes[self.root.0].weight()
    }

    /// Look up a node by handle.
    ///
    /// Handles are only ever produced by this tree, so lookups are in bounds.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Total number of nodes, leaves and internal.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; a built tree has at least one leaf.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of leaves, i.e. the alphabet size.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// All nodes in arena order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }
}
