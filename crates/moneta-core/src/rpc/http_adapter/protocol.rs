use crate::error::{CoreError, RpcError};

#[derive(serde::Serialize)]
pub(super) struct JsonRpcRequest<'a> {
    pub(super) jsonrpc: &'static str,
    pub(super) id: u64,
    pub(super) method: &'a str,
    /// monero-wallet-rpc takes named parameters, so this is always an object.
    pub(super) params: serde_json::Value,
}

#[derive(serde::Deserialize)]
pub(super) struct JsonRpcResponse {
    pub(super) result: Option<serde_json::Value>,
    pub(super) error: Option<serde_json::Value>,
}

/// Parse a JSON-RPC error value into a structured `CoreError`.
///
/// The JSON-RPC spec defines errors as `{"code": <int>, "message": <string>}`.
/// If the error value matches that shape, we produce a `ServerError`;
/// otherwise we fall back to `InvalidResponse` with the raw JSON.
pub(super) fn parse_jsonrpc_error(err: serde_json::Value) -> CoreError {
    #[derive(serde::Deserialize)]
    struct JsonRpcError {
        code: i64,
        message: String,
    }

    if let Ok(parsed) = serde_json::from_value::<JsonRpcError>(err.clone()) {
        RpcError::ServerError {
            code: parsed.code,
            message: parsed.message,
        }
        .into()
    } else {
        RpcError::InvalidResponse(format!("non-standard JSON-RPC error: {err}")).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_standard_error() {
        let err = parse_jsonrpc_error(serde_json::json!({
            "code": -32601, "message": "Method not found"
        }));
        assert!(matches!(
            err,
            CoreError::Rpc(RpcError::ServerError { code: -32601, .. })
        ));
    }

    #[test]
    fn parse_nonstandard_error() {
        let err = parse_jsonrpc_error(serde_json::json!("boom"));
        assert!(matches!(
            err,
            CoreError::Rpc(RpcError::InvalidResponse(msg)) if msg.contains("boom")
        ));
    }
}
