//! Text form of bit sequences.
//!
//! The engine works on unpacked bits (`Vec<u8>` of 0/1). These helpers convert
//! to and from the `"0110"` strings used on the command line and as decode
//! table keys.

use crate::error::{Error, Result};

/// Parse a string of `'0'` and `'1'` characters.
///
/// # Errors
/// Returns `Error::InvalidBitChar` on any other character.
pub fn parse(s: &str) -> Result<Vec<u8>> {
    s.chars()
        .enumerate()
        .map(|(position, c)| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            found => Err(Error::InvalidBitChar { position, found }),
        })
        .collect()
}

/// Render bits as `'0'`/`'1'` characters. Any nonzero value renders as `'1'`.
pub fn format(bits: &[u8]) -> String {
    bits.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect()
}
