//! Bit-level encoding and decoding against a trained alphabet.
//!
//! An [`Engine`] is built once from a training text and is read-only from then
//! on, so it can be shared between threads for concurrent encode/decode.
//! Retraining means building a new engine.

use crate::bits;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::report::Report;
use crate::table::{CodeTables, DecodeTable, EncodeTable};
use crate::tree::HuffmanTree;

/// Huffman engine trained on a single text.
#[derive(Debug, Clone)]
pub struct Engine {
    frequencies: FrequencyTable,
    tree: HuffmanTree,
    tables: CodeTables,
}

impl Engine {
    /// Train an engine: count frequencies, build the tree, derive the tables.
    ///
    /// # Errors
    /// Returns `Error::EmptyAlphabet` if `training` is empty.
    pub fn new(training: &str) -> Result<Self> {
        let frequencies = FrequencyTable::from_text(training);
        let tree = HuffmanTree::build(&frequencies)?;
        let tables = CodeTables::from_tree(&tree);
        Ok(Self {
            frequencies,
            tree,
            tables,
        })
    }

    /// Encode `text` as the concatenation of each symbol's code.
    ///
    /// # Errors
    /// Returns `Error::UnknownSymbol` for the first symbol not seen in training.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        for (position, symbol) in text.chars().enumerate() {
            let path = self
                .tables
                .encode
                .get(symbol)
                .ok_or(Error::UnknownSymbol { symbol, position })?;
            out.extend_from_slice(path.bits());
        }
        Ok(out)
    }

    /// Decode a bit sequence produced by [`encode`](Self::encode).
    ///
    /// Bits accumulate until they spell a code in the decode table, at which
    /// point the symbol is emitted and the accumulator resets.
    ///
    /// # Errors
    /// - `Error::InvalidBit` if an element is not 0 or 1.
    /// - `Error::TruncatedInput` if bits remain unmatched at the end.
    pub fn decode(&self, input: &[u8]) -> Result<String> {
        let mut out = String::new();
        let mut pending = String::new();

        for (position, &value) in input.iter().enumerate() {
            pending.push(match value {
                0 => '0',
                1 => '1',
                value => return Err(Error::InvalidBit { position, value }),
            });
            if let Some(symbol) = self.tables.decode.get(&pending) {
                out.push(symbol);
                pending.clear();
            }
        }

        if !pending.is_empty() {
            return Err(Error::TruncatedInput { pending });
        }
        Ok(out)
    }

    /// Decode a `"0101"` string.
    ///
    /// # Errors
    /// As [`decode`](Self::decode), plus `Error::InvalidBitChar` for characters
    /// other than '0' and '1'.
    pub fn decode_str(&self, input: &str) -> Result<String> {
        self.decode(&bits::parse(input)?)
    }

    /// Round-trip `text` and report encoded against one-byte-per-symbol size.
    ///
    /// # Errors
    /// Any error from [`encode`](Self::encode) or [`decode`](Self::decode).
    pub fn check(&self, text: &str) -> Result<Report> {
        let encoded = self.encode(text)?;
        let decoded = self.decode(&encoded)?;
        debug_assert_eq!(decoded, text, "round trip mismatch");
        Ok(Report::new(decoded.chars().count(), encoded.len()))
    }

    /// Frequencies counted from the training text.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// The built tree.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// Symbol to code path.
    pub fn encode_table(&self) -> &EncodeTable {
        &self.tables.encode
    }

    /// Code string to symbol.
    pub fn decode_table(&self) -> &DecodeTable {
        &self.tables.decode
    }
}
