//! In-memory transport double for operation tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crosstalk_transport::{Transport, TransportResult};

/// A request captured by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub params: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Scripted transport double: replays queued responses in order and records
/// every request it sees. When the queue is empty it answers with an empty
/// body, like the service's fire-and-forget endpoints.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<Value>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&self, response: Value) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .expect("no request was recorded")
            .clone()
    }

    fn record(
        &self,
        method: &'static str,
        path: &[&str],
        params: &[(String, String)],
        body: Option<Value>,
    ) -> Value {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.join("/"),
            params: params.to_vec(),
            body,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Value::Null)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &[&str], params: &[(String, String)]) -> TransportResult<Value> {
        Ok(self.record("GET", path, params, None))
    }

    async fn post(
        &self,
        path: &[&str],
        params: &[(String, String)],
        body: Option<Value>,
    ) -> TransportResult<Value> {
        Ok(self.record("POST", path, params, body))
    }

    async fn delete(&self, path: &[&str], params: &[(String, String)]) -> TransportResult<Value> {
        Ok(self.record("DELETE", path, params, None))
    }
}
