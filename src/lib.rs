//! # Huffman Coding Engine
//!
//! *Optimal prefix codes from observed symbol frequencies.*
//!
//! ## Intuition First
//!
//! Morse code gives the most common letters the shortest signals. Huffman
//! coding does the same thing systematically: count how often each symbol
//! occurs, then give frequent symbols short bit strings and rare symbols long
//! ones. Because no code is a prefix of another, the bit strings can be
//! concatenated without separators and still be read back unambiguously.
//!
//! ## The Algorithm
//!
//! 1. Count each distinct symbol of a training text.
//! 2. Make one leaf per symbol, weighted by its count.
//! 3. Repeatedly merge the two lightest nodes under a new parent whose weight
//!    is their sum, until a single root remains.
//! 4. Read each leaf's code off the path from the root: 0 for left, 1 for right.
//!
//! ```text
//! text -> FrequencyTable -> HuffmanTree -> CodeTables -> Engine::{encode, decode}
//! ```
//!
//! ## Complexity Analysis
//!
//! - **Construction**: $O(n \log n)$ for an alphabet of $n$ symbols.
//! - **Encode**: $O(1)$ table lookup per symbol.
//! - **Decode**: $O(\ell)$ per symbol, where $\ell$ is its code length.
//!
//! ## Failure Modes
//!
//! 1. **Untrained symbols**: the code only covers the training alphabet;
//!    encoding anything else fails with [`Error::UnknownSymbol`].
//! 2. **Truncated input**: a bit sequence cut mid-code fails with
//!    [`Error::TruncatedInput`] rather than silently dropping the tail.
//!
//! ## Example
//!
//! ```
//! use huffman_engine::Engine;
//!
//! let engine = Engine::new("abracadabra")?;
//! let bits = engine.encode("cab")?;
//! assert_eq!(engine.decode(&bits)?, "cab");
//! # Ok::<(), huffman_engine::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod report;
pub mod table;
pub mod tree;

pub use codec::Engine;
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use report::Report;
pub use table::{CodePath, CodeTables, DecodeTable, EncodeTable};
pub use tree::{HuffmanTree, Node, NodeId};
