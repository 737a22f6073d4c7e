use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{CoreError, RpcError};

use super::RpcTransport;

/// A mock wallet RPC transport for testing. Returns canned result bodies
/// per method (queued in registration order) and records every call so
/// tests can assert on the exact wire parameters.
pub struct MockTransport {
    responses: Mutex<HashMap<String, VecDeque<Result<serde_json::Value, (i64, String)>>>>,
    calls: Mutex<Vec<(String, serde_json::Value)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful result body for `method`.
    pub fn with_response(self, method: &str, result: serde_json::Value) -> Self {
        self.responses
            .lock()
            .expect("mock responses lock poisoned")
            .entry(method.to_owned())
            .or_default()
            .push_back(Ok(result));
        self
    }

    /// Queue a JSON-RPC server error for `method`.
    pub fn with_error(self, method: &str, code: i64, message: &str) -> Self {
        self.responses
            .lock()
            .expect("mock responses lock poisoned")
            .entry(method.to_owned())
            .or_default()
            .push_back(Err((code, message.to_owned())));
        self
    }

    /// Every `(method, params)` pair seen so far, in call order.
    pub fn calls(&self) -> Vec<(String, serde_json::Value)> {
        self.calls.lock().expect("mock calls lock poisoned").clone()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, CoreError> {
        self.calls
            .lock()
            .expect("mock calls lock poisoned")
            .push((method.to_owned(), params));

        let next = self
            .responses
            .lock()
            .expect("mock responses lock poisoned")
            .get_mut(method)
            .and_then(VecDeque::pop_front);

        match next {
            Some(Ok(result)) => Ok(result),
            Some(Err((code, message))) => Err(RpcError::ServerError { code, message }.into()),
            None => Err(RpcError::ServerError {
                code: -32601,
                message: format!("method `{method}` not stubbed"),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn responses_drain_in_registration_order() {
        let mock = MockTransport::new()
            .with_response("get_height", serde_json::json!({ "height": 1 }))
            .with_response("get_height", serde_json::json!({ "height": 2 }));

        let first = mock.call("get_height", serde_json::json!({})).await.unwrap();
        let second = mock.call("get_height", serde_json::json!({})).await.unwrap();
        assert_eq!(first["height"], 1);
        assert_eq!(second["height"], 2);

        let third = mock.call("get_height", serde_json::json!({})).await;
        assert!(third.is_err());
        assert_eq!(mock.calls().len(), 3);
    }
}
