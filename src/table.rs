//! Encode and decode tables derived from a [`HuffmanTree`].

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node, NodeId};

/// Branch choices from the root to a leaf: 0 = left, 1 = right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodePath(Vec<u8>);

impl CodePath {
    /// The bits of this path.
    pub fn bits(&self) -> &[u8] {
        &self.0
    }

    /// Code length in bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty path. Never true for a path stored in a table.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if `self` is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &CodePath) -> bool {
        other.0.starts_with(&self.0)
    }

    fn child(&self, bit: u8) -> CodePath {
        let mut bits = Vec::with_capacity(self.0.len() + 1);
        bits.extend_from_slice(&self.0);
        bits.push(bit);
        CodePath(bits)
    }
}

impl fmt::Display for CodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::bits::format(&self.0))
    }
}

/// Symbol to code path.
#[derive(Debug, Clone, Default)]
pub struct EncodeTable {
    codes: BTreeMap<char, CodePath>,
}

impl EncodeTable {
    /// Code path for `symbol`, if it was trained.
    pub fn get(&self, symbol: char) -> Option<&CodePath> {
        self.codes.get(&symbol)
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &CodePath)> {
        self.codes.iter().map(|(&s, p)| (s, p))
    }

    /// Length of the longest code.
    pub fn max_code_length(&self) -> usize {
        self.codes.values().map(CodePath::len).max().unwrap_or(0)
    }

    /// Frequency-weighted mean code length, in bits per symbol.
    ///
    /// Symbols of `freq` missing from this table are ignored.
    pub fn average_code_length(&self, freq: &FrequencyTable) -> f64 {
        let (bits, count) = freq
            .iter()
            .filter_map(|(s, c)| self.get(s).map(|p| (p.len() as u64 * c, c)))
            .fold((0u64, 0u64), |(b, n), (pb, pc)| (b + pb, n + pc));
        if count == 0 {
            0.0
        } else {
            bits as f64 / count as f64
        }
    }
}

/// `0`/`1` string form of a code path to symbol.
#[derive(Debug, Clone, Default)]
pub struct DecodeTable {
    symbols: HashMap<String, char>,
}

impl DecodeTable {
    /// Symbol whose code is exactly `code`.
    pub fn get(&self, code: &str) -> Option<char> {
        self.symbols.get(code).copied()
    }

    /// Number of codes.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, char)> {
        self.symbols.iter().map(|(k, &s)| (k.as_str(), s))
    }
}

/// Both lookup directions, built together so they stay exact inverses.
#[derive(Debug, Clone, Default)]
pub struct CodeTables {
    /// Symbol to path.
    pub encode: EncodeTable,
    /// Path string to symbol.
    pub decode: DecodeTable,
}

impl CodeTables {
    /// Walk `tree` depth-first, left before right, recording one entry per leaf.
    ///
    /// A tree that is a lone leaf assigns that symbol the one-bit code `0`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut tables = Self::default();
        let mut stack: Vec<(NodeId, CodePath)> = vec![(tree.root(), CodePath::default())];

        while let Some((id, path)) = stack.pop() {
            match tree.node(id) {
                Node::Leaf { symbol, .. } => {
                    let path = if path.is_empty() { path.child(0) } else { path };
                    tables.decode.symbols.insert(path.to_string(), *symbol);
                    tables.encode.codes.insert(*symbol, path);
                }
                Node::Internal { left, right, .. } => {
                    stack.push((*right, path.child(1)));
                    stack.push((*left, path.child(0)));
                }
            }
        }

        log::debug!(
            "derived code tables: {} codes, max length {}",
            tables.encode.len(),
            tables.encode.max_code_length()
        );
        tables
    }
}
