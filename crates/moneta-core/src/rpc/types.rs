//! Typed request and response shapes for the wallet RPC surface.
//!
//! These mirror monero-wallet-rpc's JSON bodies field-for-field. Responses
//! lean on `#[serde(default)]` for fields the daemon omits depending on
//! wallet mode and flags; requests serialize exactly what the daemon expects
//! (amounts in piconero, priorities as integers, named parameters).

use serde::{Deserialize, Serialize};

use crate::types::{Amount, TransferDestination, TransferPriority};

// ==============================================================================
// Wallet & daemon info
// ==============================================================================

/// Result of `get_version`. The daemon packs `major << 16 | minor`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VersionInfo {
    pub version: u32,
}

impl VersionInfo {
    pub fn major(self) -> u32 {
        self.version >> 16
    }

    pub fn minor(self) -> u32 {
        self.version & 0xFFFF
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeightResult {
    pub height: u64,
}

// ==============================================================================
// Balances & addresses
// ==============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Balance {
    pub balance: Amount,
    pub unlocked_balance: Amount,
    #[serde(default)]
    pub multisig_import_needed: bool,
    #[serde(default)]
    pub per_subaddress: Vec<SubaddressBalance>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubaddressBalance {
    pub address_index: u32,
    pub address: String,
    pub balance: Amount,
    pub unlocked_balance: Amount,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub num_unspent_outputs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressResult {
    /// The account's primary address.
    pub address: String,
    #[serde(default)]
    pub addresses: Vec<SubaddressInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubaddressInfo {
    pub address: String,
    #[serde(default)]
    pub label: String,
    pub address_index: u32,
    #[serde(default)]
    pub used: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedAddress {
    pub address: String,
    pub address_index: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressValidity {
    pub valid: bool,
    #[serde(default)]
    pub integrated: bool,
    #[serde(default)]
    pub subaddress: bool,
    #[serde(default)]
    pub nettype: String,
    #[serde(default)]
    pub openalias_address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntegratedAddress {
    pub integrated_address: String,
    pub payment_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SplitAddress {
    pub standard_address: String,
    pub payment_id: String,
    #[serde(default)]
    pub is_subaddress: bool,
}

// ==============================================================================
// Transfers
// ==============================================================================

/// Parameters for `transfer`.
#[derive(Debug, Clone, Serialize)]
pub struct TransferRequest {
    pub destinations: Vec<TransferDestination>,
    pub account_index: u32,
    pub subaddr_indices: Vec<u32>,
    pub priority: TransferPriority,
    pub ring_size: u32,
    pub unlock_time: u64,
    pub get_tx_key: bool,
    pub do_not_relay: bool,
    pub get_tx_hex: bool,
    pub get_tx_metadata: bool,
}

impl Default for TransferRequest {
    fn default() -> Self {
        Self {
            destinations: Vec::new(),
            account_index: 0,
            subaddr_indices: Vec::new(),
            priority: TransferPriority::default(),
            ring_size: 11,
            unlock_time: 0,
            get_tx_key: true,
            do_not_relay: false,
            get_tx_hex: false,
            get_tx_metadata: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferResult {
    pub amount: Amount,
    pub fee: Amount,
    pub tx_hash: String,
    #[serde(default)]
    pub tx_key: String,
    #[serde(default)]
    pub tx_blob: String,
    #[serde(default)]
    pub tx_metadata: String,
    #[serde(default)]
    pub unsigned_txset: String,
    #[serde(default)]
    pub multisig_txset: String,
}

/// Parameters for `sweep_all`.
#[derive(Debug, Clone, Serialize)]
pub struct SweepAllRequest {
    pub address: String,
    pub account_index: u32,
    pub subaddr_indices: Vec<u32>,
    pub priority: TransferPriority,
    pub ring_size: u32,
    pub unlock_time: u64,
    pub get_tx_keys: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub below_amount: Option<Amount>,
    pub do_not_relay: bool,
    pub get_tx_hex: bool,
}

impl SweepAllRequest {
    pub fn to_address(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            account_index: 0,
            subaddr_indices: Vec::new(),
            priority: TransferPriority::default(),
            ring_size: 11,
            unlock_time: 0,
            get_tx_keys: true,
            below_amount: None,
            do_not_relay: false,
            get_tx_hex: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SweepResult {
    #[serde(default)]
    pub tx_hash_list: Vec<String>,
    #[serde(default)]
    pub tx_key_list: Vec<String>,
    #[serde(default)]
    pub amount_list: Vec<Amount>,
    #[serde(default)]
    pub fee_list: Vec<Amount>,
    #[serde(default)]
    pub tx_blob_list: Vec<String>,
}

/// Parameters for `get_transfers`. The five booleans select which buckets
/// the daemon reports.
#[derive(Debug, Clone, Serialize)]
pub struct GetTransfersRequest {
    #[serde(rename = "in")]
    pub incoming: bool,
    pub out: bool,
    pub pending: bool,
    pub failed: bool,
    pub pool: bool,
    pub filter_by_height: bool,
    pub min_height: u64,
    pub max_height: u64,
    pub account_index: u32,
    pub subaddr_indices: Vec<u32>,
}

impl Default for GetTransfersRequest {
    fn default() -> Self {
        Self {
            incoming: true,
            out: true,
            pending: false,
            failed: false,
            pool: false,
            filter_by_height: false,
            min_height: 0,
            max_height: 0,
            account_index: 0,
            subaddr_indices: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransfersResult {
    #[serde(default, rename = "in")]
    pub incoming: Vec<TransferEntry>,
    #[serde(default)]
    pub out: Vec<TransferEntry>,
    #[serde(default)]
    pub pending: Vec<TransferEntry>,
    #[serde(default)]
    pub failed: Vec<TransferEntry>,
    #[serde(default)]
    pub pool: Vec<TransferEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferEntry {
    pub txid: String,
    #[serde(default)]
    pub payment_id: String,
    /// Block height; zero for unconfirmed transfers.
    #[serde(default)]
    pub height: u64,
    #[serde(default)]
    pub timestamp: u64,
    pub amount: Amount,
    #[serde(default)]
    pub fee: Amount,
    #[serde(default)]
    pub note: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub unlock_time: u64,
    #[serde(default)]
    pub subaddr_index: SubaddrIndex,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub double_spend_seen: bool,
    #[serde(default)]
    pub confirmations: u64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SubaddrIndex {
    pub major: u32,
    pub minor: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferByTxid {
    pub transfer: TransferEntry,
    #[serde(default)]
    pub transfers: Vec<TransferEntry>,
}

// ==============================================================================
// Keys, signing, wallet lifecycle
// ==============================================================================

/// Key material retrievable through `query_key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    /// The seed phrase in the wallet's configured language.
    Mnemonic,
    ViewKey,
    SpendKey,
}

impl KeyType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mnemonic => "mnemonic",
            Self::ViewKey => "view_key",
            Self::SpendKey => "spend_key",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryKeyResult {
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignResult {
    pub signature: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResult {
    pub good: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguagesResult {
    pub languages: Vec<String>,
    #[serde(default)]
    pub languages_local: Vec<String>,
}

/// Parameters for `restore_deterministic_wallet`.
#[derive(Debug, Clone, Serialize)]
pub struct RestoreRequest {
    pub filename: String,
    pub password: String,
    pub seed: String,
    pub restore_height: u64,
    pub language: String,
    pub seed_offset: String,
    pub autosave_current: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestoredWallet {
    pub address: String,
    pub info: String,
    #[serde(default)]
    pub seed: String,
    #[serde(default)]
    pub was_deprecated: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResult {
    #[serde(default)]
    pub blocks_fetched: u64,
    #[serde(default)]
    pub received_money: bool,
}

// ==============================================================================
// Address book
// ==============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AddressBookEntry {
    pub index: u64,
    pub address: String,
    #[serde(default)]
    pub payment_id: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressBookResult {
    #[serde(default)]
    pub entries: Vec<AddressBookEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddedBookEntry {
    pub index: u64,
}
