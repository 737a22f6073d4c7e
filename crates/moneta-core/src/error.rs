//! Error types shared across the crate.
//!
//! Codec failures are a closed taxonomy ([`CodecError`]): every validation
//! failure aborts the call and reports a specific kind. Nothing is clamped,
//! truncated, or repaired on the way out. RPC failures ([`RpcError`]) keep
//! transport and server errors apart so callers can tell a dead daemon from
//! a rejected request.

/// A validation failure in the base58 or mnemonic codecs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("character `{0}` is not in the base58 alphabet")]
    InvalidCharacter(char),

    #[error("{0} is not a valid encoded block length")]
    InvalidLength(usize),

    #[error("decoded value exceeds the 64-bit block range")]
    Overflow,

    #[error("word `{0}` does not belong to the wordset")]
    InvalidWord(String),

    #[error("word list length does not form whole word triples")]
    TooFewWords,

    #[error("word list is missing its trailing checksum word")]
    MissingChecksum,

    #[error("mnemonic matches {0} wordsets; language cannot be inferred")]
    AmbiguousWordset(usize),

    #[error("unknown wordset `{0}`")]
    UnknownWordset(String),
}

/// A failure talking JSON-RPC to the wallet daemon.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("invalid RPC endpoint: {0}")]
    Endpoint(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("wallet RPC error {code}: {message}")]
    ServerError { code: i64, message: String },

    #[error("invalid RPC response: {0}")]
    InvalidResponse(String),
}

/// Top-level error for `moneta-core` operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("RPC communication failure: {0}")]
    Rpc(#[from] RpcError),
}
