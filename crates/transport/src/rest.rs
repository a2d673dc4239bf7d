//! `reqwest`-backed implementation of the [`Transport`] trait.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Method, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crosstalk_config::ClientConfig;

use crate::error::{TransportError, TransportResult};
use crate::token::sign_server_token;
use crate::Transport;

const USER_AGENT: &str = concat!("crosstalk-rust-client/", env!("CARGO_PKG_VERSION"));
const AUTH_TYPE_HEADER: &str = "x-crosstalk-auth-type";
const AUTH_TYPE_JWT: &str = "jwt";

/// Non-success response envelope returned by the service.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

/// Signed HTTP client for the chat service.
///
/// Carries only configuration and credentials; safe to share across channel
/// handles via `Arc`. Cloning is cheap, the underlying `reqwest::Client`
/// pools connections internally.
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    token: String,
}

impl RestClient {
    /// Build a client from the given configuration.
    ///
    /// Fails when credentials are missing, the base URL does not parse, or
    /// the underlying HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> TransportResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(TransportError::MissingCredentials)?;
        let api_secret = config
            .api_secret
            .as_deref()
            .filter(|secret| !secret.is_empty())
            .ok_or(TransportError::MissingCredentials)?;

        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| TransportError::InvalidBaseUrl(config.base_url.clone()))?;

        let token = sign_server_token(api_secret)?;

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key: api_key.to_string(),
            token,
        })
    }

    fn endpoint(&self, path: &[&str], params: &[(String, String)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(path);
        }
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api_key", &self.api_key);
            for (name, value) in params {
                query.append_pair(name, value);
            }
        }
        url
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &[&str],
        params: &[(String, String)],
        body: Option<Value>,
    ) -> TransportResult<Value> {
        let url = self.endpoint(path, params);
        debug!(%method, path = url.path(), "dispatching chat api request");

        let mut request = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, self.token.as_str())
            .header(AUTH_TYPE_HEADER, AUTH_TYPE_JWT);

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(classify_failure(status, &bytes));
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn classify_failure(status: StatusCode, body: &[u8]) -> TransportError {
    match serde_json::from_slice::<ApiErrorBody>(body) {
        Ok(parsed) => TransportError::Api {
            status: status.as_u16(),
            code: parsed.code,
            message: parsed.message,
        },
        Err(_) => TransportError::Api {
            status: status.as_u16(),
            code: 0,
            message: String::from_utf8_lossy(body).into_owned(),
        },
    }
}

#[async_trait]
impl Transport for RestClient {
    async fn get(&self, path: &[&str], params: &[(String, String)]) -> TransportResult<Value> {
        self.dispatch(Method::GET, path, params, None).await
    }

    async fn post(
        &self,
        path: &[&str],
        params: &[(String, String)],
        body: Option<Value>,
    ) -> TransportResult<Value> {
        self.dispatch(Method::POST, path, params, body).await
    }

    async fn delete(&self, path: &[&str], params: &[(String, String)]) -> TransportResult<Value> {
        self.dispatch(Method::DELETE, path, params, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> RestClient {
        let mut config = ClientConfig::default();
        config.api_key = Some("key".to_string());
        config.api_secret = Some("secret".to_string());
        config.base_url = "https://chat.example.org".to_string();
        RestClient::new(&config).expect("client should build")
    }

    #[test]
    fn rejects_missing_credentials() {
        let config = ClientConfig::default();
        assert!(matches!(
            RestClient::new(&config),
            Err(TransportError::MissingCredentials)
        ));
    }

    #[test]
    fn rejects_invalid_base_url() {
        let mut config = ClientConfig::default();
        config.api_key = Some("key".to_string());
        config.api_secret = Some("secret".to_string());
        config.base_url = "not a url".to_string();
        assert!(matches!(
            RestClient::new(&config),
            Err(TransportError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn endpoint_escapes_path_segments() {
        let client = test_client();
        let url = client.endpoint(&["channels", "messaging", "general room"], &[]);

        assert_eq!(url.path(), "/channels/messaging/general%20room");
        assert_eq!(url.query(), Some("api_key=key"));
    }

    #[test]
    fn endpoint_appends_extra_query_params() {
        let client = test_client();
        let params = vec![("target_user_id".to_string(), "u1".to_string())];
        let url = client.endpoint(&["moderation", "ban"], &params);

        assert_eq!(url.path(), "/moderation/ban");
        assert_eq!(url.query(), Some("api_key=key&target_user_id=u1"));
    }

    #[test]
    fn classifies_structured_service_errors() {
        let body = br#"{"code": 17, "message": "channel not found", "StatusCode": 404}"#;
        let err = classify_failure(StatusCode::NOT_FOUND, body);
        match err {
            TransportError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 404);
                assert_eq!(code, 17);
                assert_eq!(message, "channel not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn classifies_opaque_failures_with_raw_body() {
        let err = classify_failure(StatusCode::BAD_GATEWAY, b"upstream unavailable");
        match err {
            TransportError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 502);
                assert_eq!(code, 0);
                assert_eq!(message, "upstream unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
