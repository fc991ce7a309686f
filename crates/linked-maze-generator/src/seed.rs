use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Error returned when parsing a [`PuzzleSeed`] from hex fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string does not have exactly 64 characters.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected string.
        len: usize,
    },
    /// A character is not a hex digit.
    #[display("invalid hex digit {ch:?} at index {index}")]
    InvalidDigit {
        /// Character offset of the bad digit.
        index: usize,
        /// The bad digit.
        ch: char,
    },
}

/// A 256-bit seed that makes puzzle generation reproducible.
///
/// Seeds are displayed and parsed as 64 lowercase hex digits.
///
/// # Examples
///
/// ```
/// use linked_maze_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("linked maze");
/// let parsed: PuzzleSeed = seed.to_string().parse()?;
/// assert_eq!(seed, parsed);
/// # Ok::<(), linked_maze_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Wraps raw seed bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from the SHA-256 digest of a phrase.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Creates the generator stream for this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { len });
        }
        let digits = s
            .chars()
            .enumerate()
            .map(|(index, ch)| {
                ch.to_digit(16)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or(ParseSeedError::InvalidDigit { index, ch })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(digits.chunks_exact(2)) {
            *byte = (pair[0] << 4) | pair[1];
        }
        Ok(Self(bytes))
    }
}
