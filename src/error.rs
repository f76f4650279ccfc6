//! Error types for the Huffman engine.

use thiserror::Error;

/// Error variants for engine construction and codec operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Training text contained no symbols, so no tree can be built.
    #[error("empty alphabet: training text has no symbols")]
    EmptyAlphabet,

    /// Encoding met a symbol that never appeared in the training text.
    #[error("unknown symbol {symbol:?} at position {position}")]
    UnknownSymbol {
        /// The untrained symbol.
        symbol: char,
        /// Index of the symbol in the input, counted in chars.
        position: usize,
    },

    /// Decoding input ended partway through a code.
    #[error("truncated input: trailing bits {pending:?} do not form a complete code")]
    TruncatedInput {
        /// The unmatched tail, in `0`/`1` form.
        pending: String,
    },

    /// A bit sequence element was neither 0 nor 1.
    #[error("invalid bit value {value} at position {position}")]
    InvalidBit {
        /// Index of the element.
        position: usize,
        /// The element itself.
        value: u8,
    },

    /// A textual bit string contained something other than '0' or '1'.
    #[error("invalid bit character {found:?} at position {position}")]
    InvalidBitChar {
        /// Index of the character, counted in chars.
        position: usize,
        /// The character found.
        found: char,
    },

    /// An I/O error occurred while reading a corpus.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
