use reqwest::Url;

use crate::error::{CoreError, RpcError};

/// JSON-RPC endpoint path exposed by monero-wallet-rpc.
const JSON_RPC_PATH: &str = "/json_rpc";

pub(super) fn resolve_auth(
    user: Option<&str>,
    pass: Option<&str>,
) -> Result<Option<(String, String)>, CoreError> {
    match (user, pass) {
        (Some(u), Some(p)) => Ok(Some((u.to_owned(), p.to_owned()))),
        (None, None) => Ok(None),
        _ => Err(RpcError::Endpoint(
            "both rpc user and rpc pass must be set together".to_owned(),
        )
        .into()),
    }
}

/// Validate the daemon base URL and resolve the full `/json_rpc` endpoint.
pub(super) fn parse_connection(connection: &str) -> Result<String, CoreError> {
    let parsed = Url::parse(connection).map_err(|e| {
        RpcError::Endpoint(format!(
            "invalid connection `{connection}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(format!(
            "{}{JSON_RPC_PATH}",
            connection.trim_end_matches('/')
        )),
        other => Err(RpcError::Endpoint(format!(
            "unsupported connection scheme `{other}`; expected http or https"
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_connection_appends_rpc_path() {
        let parsed = parse_connection("http://127.0.0.1:18083").expect("should parse");
        assert_eq!(parsed, "http://127.0.0.1:18083/json_rpc");

        let parsed = parse_connection("http://127.0.0.1:18083/").expect("should parse");
        assert_eq!(parsed, "http://127.0.0.1:18083/json_rpc");
    }

    #[test]
    fn parse_connection_invalid_scheme() {
        let err = parse_connection("ftp://example.com").expect_err("must reject ftp");
        assert!(err.to_string().contains("unsupported connection scheme"));
    }

    #[test]
    fn resolve_auth_rejects_partial_credentials() {
        let err = resolve_auth(Some("user"), None).expect_err("must reject partial auth");
        assert!(err.to_string().contains("must be set together"));
    }

    #[test]
    fn resolve_auth_accepts_user_and_pass() {
        let auth = resolve_auth(Some("alice"), Some("secret")).expect("auth must parse");
        assert_eq!(auth, Some(("alice".to_owned(), "secret".to_owned())));
    }
}
