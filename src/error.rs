use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Every sentence starts with `$`. Anything else (including
    /// encapsulated `!` sentences) is rejected.
    #[error("missing start delimiter '$'")]
    MissingStartDelimiter,

    /// The checksum delimiter `*` was not found.
    #[error("missing checksum delimiter '*'")]
    MissingChecksum,

    /// Checksum delimiter is present but not followed by two hex digits.
    #[error("invalid checksum field \"{0}\"")]
    InvalidChecksum(String),

    /// Checksum computed over the sentence body does not match
    /// the transmitted value. This is never tolerated, whatever the
    /// [DecodeMode](crate::prelude::DecodeMode).
    #[error("checksum mismatch: expected {expected:02X}, found {found:02X}")]
    ChecksumMismatch { expected: u8, found: u8 },

    /// Leading token does not carry a talker and a 3 letter sentence identifier.
    #[error("invalid sentence header \"{0}\"")]
    InvalidHeader(String),

    /// No codec is registered for this sentence identifier.
    /// Only returned in [DecodeMode::Strict](crate::prelude::DecodeMode::Strict).
    #[error("unknown sentence \"{0}\"")]
    UnknownSentence(String),
}
