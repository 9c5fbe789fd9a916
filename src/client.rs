//! JiffyBox API client.
//!
//! Low-level HTTP client that owns the versioned base URL and performs raw
//! requests. Endpoint methods live in the `endpoints` module as inherent
//! methods on [`JiffyClient`].

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::{Map, Value};
use url::Url;

use crate::error::{JiffyError, Result};

const DEFAULT_PROTOCOL: &str = "https";
const DEFAULT_HOST: &str = "api.jiffybox.de";
const DEFAULT_API_VERSION: &str = "v1.0";
const USER_AGENT: &str = concat!("jiffybox/", env!("CARGO_PKG_VERSION"));

/// How request parameters are encoded on POST and PUT.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyEncoding {
    /// `application/x-www-form-urlencoded`, which the JiffyBox API expects.
    #[default]
    Form,
    /// A JSON object body.
    Json,
}

/// Settings a [`JiffyClient`] is built from.
///
/// # Example
///
/// ```
/// use jiffybox::{ClientConfig, JiffyClient};
///
/// # fn example() -> jiffybox::Result<()> {
/// let config = ClientConfig::new("your-api-token").with_debug(true);
/// let client = JiffyClient::with_config(config)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    pub protocol: String,
    pub host: String,
    pub token: String,
    pub version: String,
    /// Emit request/response traces at debug level.
    pub debug: bool,
    pub encoding: BodyEncoding,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("protocol", &self.protocol)
            .field("host", &self.host)
            .field("version", &self.version)
            .field("debug", &self.debug)
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}

impl ClientConfig {
    /// Default configuration for the public JiffyBox API.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            host: DEFAULT_HOST.to_string(),
            token: token.into(),
            version: DEFAULT_API_VERSION.to_string(),
            debug: false,
            encoding: BodyEncoding::default(),
        }
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    /// Host, optionally with a port (e.g. `127.0.0.1:8080`).
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_encoding(mut self, encoding: BodyEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Build `{protocol}://{host}/{token}/{version}/`.
    ///
    /// # Errors
    ///
    /// Returns [`JiffyError::ConfigMissing`] if the token is empty, or
    /// [`JiffyError::UrlError`] if the parts do not form a valid URL.
    pub fn base_url(&self) -> Result<Url> {
        if self.token.trim().is_empty() {
            return Err(JiffyError::ConfigMissing(
                "an API token is required to use the JiffyBox API".to_string(),
            ));
        }

        let base = format!(
            "{}://{}/{}/{}/",
            self.protocol,
            self.host,
            urlencoding::encode(&self.token),
            self.version.trim_matches('/'),
        );
        Ok(Url::parse(&base)?)
    }
}

/// Low-level JiffyBox API client.
///
/// Every endpoint method funnels into one of four request helpers (GET,
/// DELETE, POST, PUT). A request succeeds only on HTTP 200, in which case
/// the decoded JSON body is returned unmodified.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use jiffybox::JiffyClient;
///
/// # async fn example() -> jiffybox::Result<()> {
/// let client = JiffyClient::new("your-api-token")?;
/// let boxes = client.list_boxes().await?;
/// println!("{boxes}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct JiffyClient {
    http: Client,
    base_url: Arc<Url>,
    config: Arc<ClientConfig>,
}

impl std::fmt::Debug for JiffyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiffyClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl JiffyClient {
    /// Create a client for the public JiffyBox API.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_config(ClientConfig::new(token))
    }

    /// Create a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty or the base URL is invalid.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url()?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(JiffyError::HttpError)?;

        let client = Self {
            http,
            base_url: Arc::new(base_url),
            config: Arc::new(config),
        };
        client.trace(format_args!("started JiffyBox client in debug mode"));
        Ok(client)
    }

    /// Get the versioned base URL. It contains the API token.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the configuration this client was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self))]
    pub(crate) async fn get(&self, path: &str) -> Result<Value> {
        let url = self.base_url.join(path)?;
        self.trace(format_args!("GET {path}"));

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(JiffyError::HttpError)?;

        self.read_json(response, url, path).await
    }

    /// Make a DELETE request.
    #[tracing::instrument(skip(self))]
    pub(crate) async fn delete(&self, path: &str) -> Result<Value> {
        let url = self.base_url.join(path)?;
        self.trace(format_args!("DELETE {path}"));

        let response = self
            .http
            .delete(url.clone())
            .send()
            .await
            .map_err(JiffyError::HttpError)?;

        self.read_json(response, url, path).await
    }

    /// Make a POST request with the parameters as body.
    #[tracing::instrument(skip(self, body))]
    pub(crate) async fn post(&self, path: &str, body: &Map<String, Value>) -> Result<Value> {
        let url = self.base_url.join(path)?;
        self.trace(format_args!("POST {path}"));

        let request = self.with_body(self.http.post(url.clone()), body)?;
        let response = request.send().await.map_err(JiffyError::HttpError)?;

        self.read_json(response, url, path).await
    }

    /// Make a PUT request with the parameters as body.
    #[tracing::instrument(skip(self, body))]
    pub(crate) async fn put(&self, path: &str, body: &Map<String, Value>) -> Result<Value> {
        let url = self.base_url.join(path)?;
        self.trace(format_args!("PUT {path}"));

        let request = self.with_body(self.http.put(url.clone()), body)?;
        let response = request.send().await.map_err(JiffyError::HttpError)?;

        self.read_json(response, url, path).await
    }

    fn with_body(&self, request: RequestBuilder, body: &Map<String, Value>) -> Result<RequestBuilder> {
        Ok(match self.config.encoding {
            BodyEncoding::Form => request.form(&form_pairs(body)?),
            BodyEncoding::Json => request.json(body),
        })
    }

    /// Require HTTP 200 and decode the body.
    async fn read_json(&self, response: Response, url: Url, path: &str) -> Result<Value> {
        let status = response.status();

        if status != StatusCode::OK {
            let message = Self::extract_error_message(response).await;
            self.trace(format_args!("{path} returned {status}"));
            return Err(JiffyError::ApiError {
                status: status.as_u16(),
                url,
                path: path.to_string(),
                message,
            });
        }

        let body = response.bytes().await.map_err(JiffyError::HttpError)?;
        let json: Value = serde_json::from_slice(&body)?;
        self.trace(format_args!("response: {json}"));

        Ok(json)
    }

    /// Extract the provider's error text from a failed response.
    async fn extract_error_message(response: Response) -> Option<String> {
        let body = response.text().await.ok()?;
        let json = serde_json::from_str::<Value>(&body).ok()?;

        // JiffyBox reports problems as {"messages": [{"type": .., "message": ..}]}
        let from_messages = json
            .get("messages")
            .and_then(Value::as_array)
            .and_then(|messages| messages.iter().find_map(|m| m.get("message")))
            .and_then(Value::as_str);

        from_messages
            .or_else(|| json.get("message").and_then(Value::as_str))
            .or_else(|| json.get("error").and_then(Value::as_str))
            .map(str::to_string)
    }

    fn trace(&self, message: std::fmt::Arguments<'_>) {
        if self.config.debug {
            tracing::debug!("{message}");
        }
    }
}

/// Flatten a parameter map into form fields.
///
/// Arrays repeat their key once per element. Nested objects have no form
/// representation and are rejected.
fn form_pairs(body: &Map<String, Value>) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::with_capacity(body.len());

    for (key, value) in body {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    pairs.push((key.clone(), form_scalar(key, item)?));
                }
            }
            other => pairs.push((key.clone(), form_scalar(key, other)?)),
        }
    }

    Ok(pairs)
}

fn form_scalar(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(JiffyError::Validation(format!(
            "parameter '{key}' cannot be form-encoded: nested values are not supported"
        ))),
    }
}
