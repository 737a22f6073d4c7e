pub mod base58;
pub mod error;
pub mod mnemonic;
pub mod rpc;
#[cfg(test)]
pub(crate) mod test_util;
pub mod types;
pub mod wordsets;

pub use error::{CodecError, CoreError, RpcError};
pub use types::{Amount, TransferDestination, TransferPriority};
