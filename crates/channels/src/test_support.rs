//! Shared helpers for unit tests.

use async_trait::async_trait;
use serde_json::Value;

use crosstalk_transport::{Transport, TransportResult};

/// Transport that answers every request with an empty body.
pub(crate) struct NullTransport;

#[async_trait]
impl Transport for NullTransport {
    async fn get(&self, _path: &[&str], _params: &[(String, String)]) -> TransportResult<Value> {
        Ok(Value::Null)
    }

    async fn post(
        &self,
        _path: &[&str],
        _params: &[(String, String)],
        _body: Option<Value>,
    ) -> TransportResult<Value> {
        Ok(Value::Null)
    }

    async fn delete(&self, _path: &[&str], _params: &[(String, String)]) -> TransportResult<Value> {
        Ok(Value::Null)
    }
}
