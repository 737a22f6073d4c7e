use clap::{Parser, Subcommand};

use moneta_core::{Amount, TransferPriority};

/// Moneta — Monero wallet companion: base58 and mnemonic codecs plus a
/// typed monero-wallet-rpc client.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// monero-wallet-rpc base URL.
    #[arg(long, default_value = "http://127.0.0.1:18083", env = "MONETA_RPC_URL")]
    pub rpc_url: String,

    /// RPC username (must be set together with --rpc-pass).
    #[arg(long, env = "MONETA_RPC_USER")]
    pub rpc_user: Option<String>,

    /// RPC password (must be set together with --rpc-user).
    #[arg(long, env = "MONETA_RPC_PASS")]
    pub rpc_pass: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encode or decode block-wise base58.
    #[command(subcommand)]
    Base58(Base58Cmd),

    /// Mnemonic seed phrase tools.
    #[command(subcommand)]
    Mnemonic(MnemonicCmd),

    /// Talk to a running monero-wallet-rpc daemon.
    #[command(subcommand)]
    Wallet(WalletCmd),
}

#[derive(Subcommand)]
pub enum Base58Cmd {
    /// Encode a hexadecimal byte string as base58.
    Encode { hex: String },

    /// Decode a base58 string back to hexadecimal.
    Decode { text: String },
}

#[derive(Subcommand)]
pub enum MnemonicCmd {
    /// Encode a hexadecimal seed as a word list.
    Encode {
        seed_hex: String,

        /// Wordset language.
        #[arg(long, default_value = "english")]
        wordset: String,

        /// Append the checksum word.
        #[arg(long)]
        with_checksum: bool,
    },

    /// Decode a seed phrase back to its hexadecimal seed.
    Decode {
        /// The phrase; quoted as one argument or as separate words.
        #[arg(required = true)]
        words: Vec<String>,

        /// Wordset language; inferred from the words when omitted.
        #[arg(long)]
        wordset: Option<String>,
    },

    /// Check the trailing checksum word of a phrase.
    Validate {
        #[arg(required = true)]
        words: Vec<String>,

        /// Wordset language; inferred from the words when omitted.
        #[arg(long)]
        wordset: Option<String>,
    },

    /// Report which wordset a phrase belongs to.
    Identify {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List available wordsets.
    Languages,
}

#[derive(Subcommand)]
pub enum WalletCmd {
    /// Wallet RPC version.
    Version,

    /// Current wallet height.
    Height,

    /// Account balance.
    Balance {
        #[arg(long, default_value = "0")]
        account: u32,
    },

    /// Account primary address and subaddresses.
    Address {
        #[arg(long, default_value = "0")]
        account: u32,
    },

    /// Wallet seed phrase and its raw key hex.
    Seed {
        /// Wordset language; inferred from the phrase when omitted.
        #[arg(long)]
        wordset: Option<String>,
    },

    /// Send XMR to a single address.
    Transfer {
        /// Destination address.
        address: String,

        /// Amount in XMR (decimal).
        amount: Amount,

        /// Fee priority: default, unimportant, normal, or elevated.
        #[arg(long, default_value = "normal")]
        priority: TransferPriority,

        #[arg(long, default_value = "0")]
        account: u32,

        /// Build the transaction but do not relay it.
        #[arg(long)]
        dry_run: bool,
    },
}
