//! Native JSON-RPC transport for monero-wallet-rpc compatible endpoints.
//!
//! Implements [`RpcTransport`](super::RpcTransport) over HTTP using
//! `reqwest`, with basic auth, request timeouts, and monotonic request ids.

mod client;
mod connection;
mod protocol;

pub use client::HttpTransport;
