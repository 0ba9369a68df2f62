use thiserror::Error;

/// Errors produced by the base32 codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base32Error {
    /// The caller passed no input at all.
    #[error("missing argument: {argument}")]
    MissingInput { argument: &'static str },

    /// The encoded length is not one the encoder ever produces.
    #[error(
        "invalid base32 length: {length}. 1 less character is enough to encode the same number of bytes ({byte_count})"
    )]
    InvalidLength { length: usize, byte_count: usize },

    /// A character outside the alphabet.
    #[error("'{character}' is not a valid base32 character (position {position})")]
    InvalidCharacter { character: char, position: usize },
}
