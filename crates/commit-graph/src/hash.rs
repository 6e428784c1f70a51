// Copyright 2026 Oxide Computer Company

//! Commit hash types.

use crate::CommitHashParseError;
use std::{fmt, str::FromStr};

/// A commit hash, as used to identify nodes and parents in the graph.
///
/// This type guarantees the contained value is either:
///
/// - 20 bytes (SHA-1, displayed as 40 lowercase hex characters)
/// - 32 bytes (SHA-256, displayed as 64 lowercase hex characters)
///
/// # Parsing
///
/// Parse from a hex string using [`FromStr`]:
///
/// ```
/// use commit_graph::CommitHash;
///
/// let hash: CommitHash =
///     "0123456789abcdef0123456789abcdef01234567".parse().unwrap();
/// assert_eq!(hash.short(), "0123456");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommitHash {
    /// A SHA-1 hash: the one traditionally used in Git.
    Sha1([u8; 20]),
    /// A SHA-256 hash, supported by newer versions of Git.
    Sha256([u8; 32]),
}

impl CommitHash {
    /// The number of hex characters in an abbreviated hash.
    pub const SHORT_LEN: usize = 7;

    /// Returns the raw bytes of the hash.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            CommitHash::Sha1(bytes) => bytes,
            CommitHash::Sha256(bytes) => bytes,
        }
    }

    /// Returns the abbreviated form of the hash, as shown next to graph
    /// rows.
    pub fn short(&self) -> String {
        let mut s = self.to_string();
        s.truncate(Self::SHORT_LEN);
        s
    }
}

impl FromStr for CommitHash {
    type Err = CommitHashParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.len();
        match len {
            40 => {
                let mut bytes = [0; 20];
                hex::decode_to_slice(s, &mut bytes)
                    .map_err(CommitHashParseError::InvalidHex)?;
                Ok(CommitHash::Sha1(bytes))
            }
            64 => {
                let mut bytes = [0; 32];
                hex::decode_to_slice(s, &mut bytes)
                    .map_err(CommitHashParseError::InvalidHex)?;
                Ok(CommitHash::Sha256(bytes))
            }
            _ => Err(CommitHashParseError::InvalidLength(len)),
        }
    }
}

impl fmt::Display for CommitHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        hex::encode(self.as_bytes()).fmt(f)
    }
}

impl serde::Serialize for CommitHash {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
