//! Shared fixtures for `moneta-core` unit tests.
//!
//! One canonical 32-byte seed and its English phrase, so codec and RPC
//! tests agree on a single source of truth for seed material.

use crate::mnemonic;

/// A fixed 32-byte wallet seed.
pub const TEST_SEED_HEX: &str =
    "9f3a5c1e847b20d6113acdd2fe09b846c5a20f88e7d341bb56cd09770abc14e2";

/// [`TEST_SEED_HEX`] as a 25-word English phrase (24 words plus checksum),
/// space-joined the way the daemon returns it from `query_key`.
pub fn test_seed_phrase() -> String {
    mnemonic::encode_with_checksum(TEST_SEED_HEX, Some("english"))
        .expect("test seed is valid")
        .join(" ")
}
