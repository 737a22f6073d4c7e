//! Wallet daemon RPC abstraction layer.
//!
//! Defines the [`RpcTransport`] seam (one JSON-RPC invocation), provides an
//! HTTP implementation ([`HttpTransport`]) plus a test mock
//! (`mock::MockTransport`), and wraps the daemon's method surface in the
//! typed [`WalletClient`]. Every wallet method is a pure parameter-forwarding
//! call; the only local logic is (de)serialization and the seed helpers that
//! run the daemon's mnemonic through the codec.

mod http_adapter;
#[cfg(test)]
pub mod mock;
pub mod types;

pub use http_adapter::HttpTransport;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::{CoreError, RpcError};
use crate::mnemonic;

use types::{
    AddedBookEntry, AddressBookEntry, AddressBookResult, AddressResult, AddressValidity, Balance,
    CreatedAddress, GetTransfersRequest, HeightResult, IntegratedAddress, KeyType,
    LanguagesResult, QueryKeyResult, RefreshResult, RestoreRequest, RestoredWallet, SignResult,
    SplitAddress, SweepAllRequest, SweepResult, TransferByTxid, TransferRequest, TransferResult,
    TransfersResult, VerifyResult, VersionInfo,
};

/// One JSON-RPC method invocation against the wallet daemon.
///
/// Implementations are expected to handle authentication, connection
/// management, and the JSON-RPC envelope internally; `params` is always the
/// named-parameter object the daemon expects.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, CoreError>;
}

/// Typed client for the monero-wallet-rpc method surface.
pub struct WalletClient<T> {
    transport: T,
}

impl WalletClient<HttpTransport> {
    /// Connect to a daemon base URL with optional basic-auth credentials.
    pub fn connect(
        connection: &str,
        user: Option<&str>,
        pass: Option<&str>,
    ) -> Result<Self, CoreError> {
        Ok(Self::new(HttpTransport::new(connection, user, pass)?))
    }
}

impl<T: RpcTransport> WalletClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn call<R: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<R, CoreError> {
        let raw = self.transport.call(method, params).await?;
        serde_json::from_value(raw).map_err(|e| {
            RpcError::InvalidResponse(format!("decode `{method}` result: {e}")).into()
        })
    }

    /// Invoke a method whose result body carries nothing we need.
    async fn call_unit(&self, method: &str, params: serde_json::Value) -> Result<(), CoreError> {
        self.transport.call(method, params).await.map(|_| ())
    }

    // ========================================================================
    // Wallet & daemon info
    // ========================================================================

    pub async fn get_version(&self) -> Result<VersionInfo, CoreError> {
        self.call("get_version", json!({})).await
    }

    pub async fn get_height(&self) -> Result<u64, CoreError> {
        let result: HeightResult = self.call("get_height", json!({})).await?;
        Ok(result.height)
    }

    // ========================================================================
    // Balances & addresses
    // ========================================================================

    pub async fn get_balance(&self, account_index: u32) -> Result<Balance, CoreError> {
        self.call("get_balance", json!({ "account_index": account_index }))
            .await
    }

    pub async fn get_address(&self, account_index: u32) -> Result<AddressResult, CoreError> {
        self.call("get_address", json!({ "account_index": account_index }))
            .await
    }

    pub async fn create_address(
        &self,
        account_index: u32,
        label: &str,
    ) -> Result<CreatedAddress, CoreError> {
        self.call(
            "create_address",
            json!({ "account_index": account_index, "label": label }),
        )
        .await
    }

    pub async fn validate_address(&self, address: &str) -> Result<AddressValidity, CoreError> {
        self.call("validate_address", json!({ "address": address }))
            .await
    }

    pub async fn make_integrated_address(
        &self,
        standard_address: Option<&str>,
        payment_id: Option<&str>,
    ) -> Result<IntegratedAddress, CoreError> {
        self.call(
            "make_integrated_address",
            json!({
                "standard_address": standard_address.unwrap_or(""),
                "payment_id": payment_id.unwrap_or(""),
            }),
        )
        .await
    }

    pub async fn split_integrated_address(
        &self,
        integrated_address: &str,
    ) -> Result<SplitAddress, CoreError> {
        self.call(
            "split_integrated_address",
            json!({ "integrated_address": integrated_address }),
        )
        .await
    }

    // ========================================================================
    // Transfers
    // ========================================================================

    pub async fn transfer(&self, request: &TransferRequest) -> Result<TransferResult, CoreError> {
        self.call("transfer", to_params("transfer", request)?).await
    }

    pub async fn sweep_all(&self, request: &SweepAllRequest) -> Result<SweepResult, CoreError> {
        self.call("sweep_all", to_params("sweep_all", request)?)
            .await
    }

    pub async fn get_transfers(
        &self,
        request: &GetTransfersRequest,
    ) -> Result<TransfersResult, CoreError> {
        self.call("get_transfers", to_params("get_transfers", request)?)
            .await
    }

    pub async fn get_transfer_by_txid(
        &self,
        txid: &str,
        account_index: u32,
    ) -> Result<TransferByTxid, CoreError> {
        self.call(
            "get_transfer_by_txid",
            json!({ "txid": txid, "account_index": account_index }),
        )
        .await
    }

    /// Flush the wallet state to disk.
    pub async fn store(&self) -> Result<(), CoreError> {
        self.call_unit("store", json!({})).await
    }

    // ========================================================================
    // Keys & seed material
    // ========================================================================

    pub async fn query_key(&self, key_type: KeyType) -> Result<String, CoreError> {
        let result: QueryKeyResult = self
            .call("query_key", json!({ "key_type": key_type.as_str() }))
            .await?;
        Ok(result.key)
    }

    /// The wallet's seed phrase in its configured language.
    pub async fn mnemonic(&self) -> Result<String, CoreError> {
        self.query_key(KeyType::Mnemonic).await
    }

    pub async fn view_key(&self) -> Result<String, CoreError> {
        self.query_key(KeyType::ViewKey).await
    }

    pub async fn spend_key(&self) -> Result<String, CoreError> {
        self.query_key(KeyType::SpendKey).await
    }

    /// Fetch the daemon's seed phrase and decode it to raw key hex.
    ///
    /// When `wordset_name` is `None` the language is inferred from the words
    /// themselves; a phrase matching no known wordset is an
    /// [`crate::CodecError::InvalidWord`] on the first unresolvable word.
    pub async fn seed_hex(&self, wordset_name: Option<&str>) -> Result<String, CoreError> {
        let phrase = self.mnemonic().await?;
        let words: Vec<&str> = phrase.split_whitespace().collect();
        let wordset_name = match wordset_name {
            Some(name) => Some(name),
            None => mnemonic::find_wordset_by_mnemonic(&words)?,
        };
        Ok(mnemonic::decode(&words, wordset_name)?)
    }

    pub async fn sign(&self, data: &str) -> Result<String, CoreError> {
        let result: SignResult = self.call("sign", json!({ "data": data })).await?;
        Ok(result.signature)
    }

    pub async fn verify(
        &self,
        data: &str,
        address: &str,
        signature: &str,
    ) -> Result<bool, CoreError> {
        let result: VerifyResult = self
            .call(
                "verify",
                json!({ "data": data, "address": address, "signature": signature }),
            )
            .await?;
        Ok(result.good)
    }

    // ========================================================================
    // Wallet lifecycle
    // ========================================================================

    pub async fn get_languages(&self) -> Result<Vec<String>, CoreError> {
        let result: LanguagesResult = self.call("get_languages", json!({})).await?;
        Ok(result.languages)
    }

    pub async fn create_wallet(
        &self,
        filename: &str,
        password: Option<&str>,
        language: &str,
    ) -> Result<(), CoreError> {
        self.call_unit(
            "create_wallet",
            json!({ "filename": filename, "password": password, "language": language }),
        )
        .await
    }

    pub async fn open_wallet(
        &self,
        filename: &str,
        password: Option<&str>,
    ) -> Result<(), CoreError> {
        self.call_unit(
            "open_wallet",
            json!({ "filename": filename, "password": password }),
        )
        .await
    }

    pub async fn close_wallet(&self) -> Result<(), CoreError> {
        self.call_unit("close_wallet", json!({})).await
    }

    pub async fn restore_deterministic_wallet(
        &self,
        request: &RestoreRequest,
    ) -> Result<RestoredWallet, CoreError> {
        self.call(
            "restore_deterministic_wallet",
            to_params("restore_deterministic_wallet", request)?,
        )
        .await
    }

    pub async fn refresh(&self, start_height: Option<u64>) -> Result<RefreshResult, CoreError> {
        self.call("refresh", json!({ "start_height": start_height }))
            .await
    }

    pub async fn stop_wallet(&self) -> Result<(), CoreError> {
        self.call_unit("stop_wallet", json!({})).await
    }

    // ========================================================================
    // Mining
    // ========================================================================

    pub async fn start_mining(
        &self,
        threads_count: u32,
        do_background_mining: bool,
        ignore_battery: bool,
    ) -> Result<(), CoreError> {
        self.call_unit(
            "start_mining",
            json!({
                "threads_count": threads_count,
                "do_background_mining": do_background_mining,
                "ignore_battery": ignore_battery,
            }),
        )
        .await
    }

    pub async fn stop_mining(&self) -> Result<(), CoreError> {
        self.call_unit("stop_mining", json!({})).await
    }

    // ========================================================================
    // Address book
    // ========================================================================

    /// Fetch address book entries by index; an empty slice fetches all.
    pub async fn get_address_book(
        &self,
        entries: &[u64],
    ) -> Result<Vec<AddressBookEntry>, CoreError> {
        let result: AddressBookResult = self
            .call("get_address_book", json!({ "entries": entries }))
            .await?;
        Ok(result.entries)
    }

    pub async fn add_address_book(
        &self,
        address: &str,
        description: &str,
    ) -> Result<u64, CoreError> {
        let result: AddedBookEntry = self
            .call(
                "add_address_book",
                json!({ "address": address, "description": description }),
            )
            .await?;
        Ok(result.index)
    }

    pub async fn delete_address_book(&self, index: u64) -> Result<(), CoreError> {
        self.call_unit("delete_address_book", json!({ "index": index }))
            .await
    }
}

/// Serialize a typed request struct into the named-parameter object.
fn to_params<R: serde::Serialize>(
    method: &str,
    request: &R,
) -> Result<serde_json::Value, CoreError> {
    serde_json::to_value(request).map_err(|e| {
        RpcError::InvalidResponse(format!("encode `{method}` params: {e}")).into()
    })
}
