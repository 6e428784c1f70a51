// Copyright 2026 Oxide Computer Company

//! Error types for commit graph construction.
//!
//! The layout pass itself is total and has no error type. Errors only arise
//! at the boundaries where untrusted input becomes a typed value.

use thiserror::Error;

/// An error that occurs while parsing a [`CommitHash`](crate::CommitHash).
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum CommitHashParseError {
    /// The commit hash has an invalid length.
    #[error(
        "invalid length: expected 40 (SHA-1) or 64 (SHA-256) hex characters, \
         got {0}"
    )]
    InvalidLength(usize),

    /// The commit hash is not valid hexadecimal.
    #[error("invalid hexadecimal")]
    InvalidHex(hex::FromHexError),
}

/// An error that occurs while building a [`Palette`](crate::Palette).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum PaletteError {
    /// The palette has no colors, so lanes could not be colored.
    #[error("palette must contain at least one color")]
    Empty,

    /// A palette entry was empty or whitespace-only.
    #[error("palette color at index {index} is blank")]
    BlankColor {
        /// The position of the blank entry in the palette.
        index: usize,
    },
}
