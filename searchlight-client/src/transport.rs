//! Transport seam between endpoint namespaces and the wire
//!
//! Endpoint functions hand a [`RequestDescriptor`] to a [`Transport`] and
//! get back the parsed JSON response. [`HttpTransport`] is the default
//! implementation; tests and embedders can substitute their own.

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::request::{Method, RequestDescriptor};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

/// Performs the network call for a compiled request descriptor.
///
/// Implementations must not reinterpret the descriptor: the path already
/// carries the query string, and the body is forwarded as-is.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request, returning the parsed response body
    async fn execute(&self, request: RequestDescriptor) -> Result<Value>;
}

/// Default transport over HTTP(S) composing scheme, host, port and
/// credentials from [`ClientConfig`].
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: url::Url,
    auth: Option<(String, String)>,
}

impl HttpTransport {
    /// Build a transport from client configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base = format!("{}/", config.base_url());
        let base_url = url::Url::parse(&base)
            .map_err(|e| ClientError::Config(format!("Invalid base URL '{}': {}", base, e)))?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()?;

        // Credentials are `user:password`; a value without a colon is
        // treated as a bare username.
        let auth = config.auth.as_deref().filter(|raw| !raw.is_empty()).map(|raw| {
            match raw.split_once(':') {
                Some((user, password)) => (user.to_string(), password.to_string()),
                None => (raw.to_string(), String::new()),
            }
        });

        Ok(Self {
            client,
            base_url,
            auth,
        })
    }

    fn url_for(&self, path: &str) -> Result<url::Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Config(format!("Invalid request path '{}': {}", path, e)))
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
        Method::Head => reqwest::Method::HEAD,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: RequestDescriptor) -> Result<Value> {
        let url = self.url_for(&request.path)?;
        debug!("{} {}", request.method, url);

        let mut builder = self.client.request(reqwest_method(request.method), url);
        if let Some((user, password)) = &self.auth {
            builder = builder.basic_auth(user, Some(password));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("{} {} returned {}", request.method, request.path, status);
            let reason = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                reason,
            });
        }

        let raw = response.bytes().await?;
        if raw.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&raw)?)
    }
}
