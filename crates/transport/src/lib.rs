//! # Crosstalk Transport Crate
//!
//! Signed HTTP plumbing for the Crosstalk chat client. This crate owns the
//! request/response mechanics only: building URLs from path segments,
//! attaching authentication, dispatching via `reqwest`, and classifying
//! failures into [`TransportError`]. It performs no retries and keeps no
//! per-channel state, so a single handle can be shared across any number of
//! channel handles.
//!
//! Higher layers talk to the [`Transport`] trait rather than the concrete
//! [`RestClient`], which keeps them testable with an in-memory double.

use async_trait::async_trait;
use serde_json::Value;

pub mod error;
mod rest;
mod token;

pub use error::{TransportError, TransportResult};
pub use rest::RestClient;

/// Request/response interface to the chat service.
///
/// Paths are passed as raw segments; the implementation is responsible for
/// escaping them and joining onto its base URL. Every method resolves to the
/// decoded JSON body, or [`Value::Null`] when the service returns no body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &[&str], params: &[(String, String)]) -> TransportResult<Value>;

    async fn post(
        &self,
        path: &[&str],
        params: &[(String, String)],
        body: Option<Value>,
    ) -> TransportResult<Value>;

    async fn delete(&self, path: &[&str], params: &[(String, String)]) -> TransportResult<Value>;
}
