use eyre::WrapErr;

use moneta_core::rpc::types::TransferRequest;
use moneta_core::rpc::{HttpTransport, WalletClient};
use moneta_core::{base58, mnemonic, wordsets, TransferDestination};

use crate::cli::{Base58Cmd, Cli, Command, MnemonicCmd, WalletCmd};

pub async fn run(args: Cli) -> eyre::Result<()> {
    let Cli {
        rpc_url,
        rpc_user,
        rpc_pass,
        command,
    } = args;

    match command {
        Command::Base58(cmd) => base58_cmd(cmd),
        Command::Mnemonic(cmd) => mnemonic_cmd(cmd),
        Command::Wallet(cmd) => {
            let client = connect(&rpc_url, rpc_user.as_deref(), rpc_pass.as_deref()).await?;
            wallet_cmd(&client, cmd).await
        }
    }
}

fn base58_cmd(cmd: Base58Cmd) -> eyre::Result<()> {
    match cmd {
        Base58Cmd::Encode { hex } => println!("{}", base58::encode_hex(&hex)?),
        Base58Cmd::Decode { text } => println!("{}", base58::decode_hex(&text)?),
    }
    Ok(())
}

fn mnemonic_cmd(cmd: MnemonicCmd) -> eyre::Result<()> {
    match cmd {
        MnemonicCmd::Encode {
            seed_hex,
            wordset,
            with_checksum,
        } => {
            let words = if with_checksum {
                mnemonic::encode_with_checksum(&seed_hex, Some(&wordset))?
            } else {
                mnemonic::encode(&seed_hex, Some(&wordset))?
            };
            println!("{}", words.join(" "));
        }
        MnemonicCmd::Decode { words, wordset } => {
            let words = split_phrase(&words);
            let wordset = resolve_wordset(&words, wordset)?;
            println!("{}", mnemonic::decode(&words, wordset.as_deref())?);
        }
        MnemonicCmd::Validate { words, wordset } => {
            let words = split_phrase(&words);
            let wordset = resolve_wordset(&words, wordset)?;
            let prefix_length = wordsets::get_wordset(wordset.as_deref())?.prefix_length;
            if mnemonic::validate_checksum(&words, prefix_length)? {
                println!("checksum ok");
            } else {
                eyre::bail!("checksum mismatch");
            }
        }
        MnemonicCmd::Identify { words } => {
            let words = split_phrase(&words);
            match mnemonic::find_wordset_by_mnemonic(&words)? {
                Some(name) => println!("{name}"),
                None => eyre::bail!("phrase matches no known wordset"),
            }
        }
        MnemonicCmd::Languages => {
            for name in wordsets::list_wordset_names() {
                let ws = wordsets::get_wordset(Some(name))?;
                println!(
                    "{name}: {} ({}), {} words, prefix length {}",
                    ws.native_name,
                    ws.english_name,
                    ws.words.len(),
                    ws.prefix_length
                );
            }
        }
    }
    Ok(())
}

async fn wallet_cmd(client: &WalletClient<HttpTransport>, cmd: WalletCmd) -> eyre::Result<()> {
    match cmd {
        WalletCmd::Version => {
            let version = client.get_version().await?;
            println!("wallet RPC version {}.{}", version.major(), version.minor());
        }
        WalletCmd::Height => {
            println!("{}", client.get_height().await?);
        }
        WalletCmd::Balance { account } => {
            let balance = client.get_balance(account).await?;
            println!(
                "balance: {} (unlocked {})",
                balance.balance, balance.unlocked_balance
            );
            for sub in &balance.per_subaddress {
                println!(
                    "  [{}] {} — {}",
                    sub.address_index, sub.address, sub.balance
                );
            }
        }
        WalletCmd::Address { account } => {
            let result = client.get_address(account).await?;
            println!("{}", result.address);
            for sub in &result.addresses {
                let label = if sub.label.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", sub.label)
                };
                println!("  [{}] {}{label}", sub.address_index, sub.address);
            }
        }
        WalletCmd::Seed { wordset } => {
            let phrase = client.mnemonic().await?;
            let words: Vec<&str> = phrase.split_whitespace().collect();
            let wordset = match wordset.as_deref() {
                Some(name) => Some(name),
                None => mnemonic::find_wordset_by_mnemonic(&words)?,
            };
            println!("{phrase}");
            if let Some(name) = wordset {
                println!("wordset: {name}");
            }
            println!("seed hex: {}", mnemonic::decode(&words, wordset)?);
        }
        WalletCmd::Transfer {
            address,
            amount,
            priority,
            account,
            dry_run,
        } => {
            let request = TransferRequest {
                destinations: vec![TransferDestination::new(address, amount)],
                account_index: account,
                priority,
                do_not_relay: dry_run,
                ..TransferRequest::default()
            };
            let result = client.transfer(&request).await?;
            println!("sent:    {}", result.amount);
            println!("fee:     {}", result.fee);
            println!("tx hash: {}", result.tx_hash);
            if dry_run {
                println!("(dry run — transaction was not relayed)");
            }
        }
    }
    Ok(())
}

/// Connect and verify the daemon responds before running the real command.
async fn connect(
    rpc_url: &str,
    rpc_user: Option<&str>,
    rpc_pass: Option<&str>,
) -> eyre::Result<WalletClient<HttpTransport>> {
    let client = WalletClient::connect(rpc_url, rpc_user, rpc_pass)
        .wrap_err("while configuring the wallet RPC client")?;

    let version = client.get_version().await.map_err(|err| {
        eyre::eyre!(format_rpc_connect_error(rpc_url, &err.to_string()))
            .wrap_err("while attempting to connect to monero-wallet-rpc")
    })?;
    tracing::debug!(
        major = version.major(),
        minor = version.minor(),
        "connected to wallet RPC"
    );

    Ok(client)
}

/// Re-join then re-split command-line words so a phrase works both quoted
/// as one argument and as separate arguments.
fn split_phrase(args: &[String]) -> Vec<String> {
    args.join(" ")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Resolve an explicit wordset choice, falling back to detection.
fn resolve_wordset(words: &[String], chosen: Option<String>) -> eyre::Result<Option<String>> {
    match chosen {
        Some(name) => Ok(Some(name)),
        None => Ok(mnemonic::find_wordset_by_mnemonic(words)?.map(str::to_owned)),
    }
}

fn format_rpc_connect_error(rpc_url: &str, source_error: &str) -> String {
    let mut lines = vec![
        format!("could not reach wallet RPC endpoint `{rpc_url}`"),
        format!("RPC error: {source_error}"),
    ];

    if source_error.contains("Could not resolve host") || source_error.contains("dns error") {
        lines.push(
            "hint: hostname resolution failed; verify the endpoint hostname and your DNS/network"
                .into(),
        );
    } else if source_error.contains("401") || source_error.contains("403") {
        lines.push(
            "hint: authentication failed; verify --rpc-user/--rpc-pass match the daemon's \
             --rpc-login"
                .into(),
        );
    } else if source_error.contains("error sending request for url") {
        lines.push(
            "hint: request could not be sent; verify monero-wallet-rpc is running and the URL \
             is reachable"
                .into(),
        );
    }

    lines.join("\n")
}
