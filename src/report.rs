//! Size comparison between encoded bits and the plain text they came from.

use std::fmt;

/// Outcome of [`Engine::check`](crate::Engine::check).
///
/// The decoded size assumes one byte per symbol, for comparison only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Number of symbols round-tripped.
    pub symbols: usize,
    /// Length of the encoded bit sequence.
    pub encoded_bits: usize,
    /// `symbols * 8`.
    pub decoded_bits: usize,
}

impl Report {
    /// Build a report for `symbols` symbols that encoded to `encoded_bits` bits.
    pub fn new(symbols: usize, encoded_bits: usize) -> Self {
        Self {
            symbols,
            encoded_bits,
            decoded_bits: symbols * 8,
        }
    }

    /// `encoded_bits / decoded_bits`, or `None` for empty input.
    pub fn ratio(&self) -> Option<f64> {
        if self.decoded_bits == 0 {
            None
        } else {
            Some(self.encoded_bits as f64 / self.decoded_bits as f64)
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Encoded Size: {}", self.encoded_bits)?;
        writeln!(f, "Decoded Size: {}", self.decoded_bits)?;
        match self.ratio() {
            Some(r) => write!(f, "Compression Ratio: {:.2} %", r * 100.0),
            None => write!(f, "Compression Ratio: n/a"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        let r = Report::new(4, 8);
        assert_eq!(r.decoded_bits, 32);
        assert_eq!(r.ratio(), Some(0.25));
    }

    #[test]
    fn test_empty_has_no_ratio() {
        let r = Report::new(0, 0);
        assert_eq!(r.ratio(), None);
        assert!(r.to_string().ends_with("n/a"));
    }

    #[test]
    fn test_display() {
        let r = Report::new(2, 4);
        assert_eq!(
            r.to_string(),
            "Encoded Size: 4\nDecoded Size: 16\nCompression Ratio: 25.00 %"
        );
    }
}
