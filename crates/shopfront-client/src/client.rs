//! HTTP client for the storefront's frontend service.
//!
//! Every call is one request/response cycle: the body is parsed as JSON
//! whatever the status, a non-2xx status becomes
//! [`FrontendError::RequestFailed`] carrying the body's `message` (or the
//! operation's default), and nothing is retried.

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;
use reqwest::{Client, ClientBuilder, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shopfront_core::{AppConfig, DEFAULT_FRONTEND_URL};

use crate::error::FrontendError;
use crate::operation::Operation;
use crate::types::{quotes_from_mapping, EmptyResponse, Quote};

const DEFAULT_USER_AGENT: &str = "shopfront/0.1 (storefront-ui)";

/// Connection settings for [`FrontendClient`].
#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Whole-request deadline. `None` waits as long as the service takes.
    pub timeout: Option<Duration>,
    /// Cookie (`name=value`, optionally with attributes) seeded into the jar.
    pub session_cookie: Option<String>,
}

impl ClientConfig {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: None,
            session_cookie: None,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FRONTEND_URL)
    }
}

impl From<&AppConfig> for ClientConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_url: config.frontend_url.clone(),
            user_agent: config.user_agent.clone(),
            timeout: config.request_timeout_secs.map(Duration::from_secs),
            session_cookie: config.session_cookie.clone(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field(
                "session_cookie",
                &self.session_cookie.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}

/// Client for the frontend service.
///
/// Holds two `reqwest` clients: one sharing a cookie jar, used for every
/// session-bound call, and one without a cookie store for the public quotes
/// listing. Cookies set by any credentialed response are sent on later
/// credentialed calls made through the same `FrontendClient`.
pub struct FrontendClient {
    credentialed: Client,
    anonymous: Client,
    base_url: Url,
}

impl FrontendClient {
    /// Creates a client from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns [`FrontendError::InvalidUrl`] if `config.base_url` does not
    /// parse, or [`FrontendError::Http`] if a `reqwest::Client` cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, FrontendError> {
        let base_url = normalise_base_url(&config.base_url)?;

        let jar = Arc::new(Jar::default());
        if let Some(cookie) = &config.session_cookie {
            jar.add_cookie_str(cookie, &base_url);
        }

        let credentialed = client_builder(config).cookie_provider(jar).build()?;
        let anonymous = client_builder(config).build()?;

        Ok(Self {
            credentialed,
            anonymous,
            base_url,
        })
    }

    /// Creates a client with default settings against `base_url`.
    ///
    /// # Errors
    ///
    /// See [`FrontendClient::new`].
    pub fn with_base_url(base_url: &str) -> Result<Self, FrontendError> {
        Self::new(&ClientConfig::new(base_url))
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`FrontendClient::new`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, FrontendError> {
        Self::new(&ClientConfig::from(config))
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Lists all quotes in response order, with each mapping key carried into
    /// [`Quote::id`] unless the quote carries its own `id`.
    ///
    /// Sent without cookies.
    ///
    /// # Errors
    ///
    /// - [`FrontendError::RequestFailed`] on a non-2xx status.
    /// - [`FrontendError::Http`] on network failure.
    /// - [`FrontendError::Deserialize`] if the body is not a JSON object, or
    ///   one of its values is a string or an array.
    pub async fn list_quotes(&self) -> Result<Vec<Quote>, FrontendError> {
        let operation = Operation::ListQuotes;
        let request = self.request(operation, "quotes.json")?;
        let data = Self::execute(operation, request).await?;
        quotes_from_mapping(data).map_err(|e| deserialize_error(operation, e))
    }

    /// Fetches the home page payload.
    ///
    /// # Errors
    ///
    /// - [`FrontendError::RequestFailed`] on a non-2xx status.
    /// - [`FrontendError::Http`] on network failure.
    /// - [`FrontendError::Deserialize`] if the body does not decode into `T`.
    pub async fn home_page<T: DeserializeOwned>(&self) -> Result<T, FrontendError> {
        self.fetch(Operation::HomePage, "").await
    }

    /// Fetches one product by id. The id is sent as a single path segment.
    ///
    /// # Errors
    ///
    /// - [`FrontendError::RequestFailed`] on a non-2xx status.
    /// - [`FrontendError::Http`] on network failure.
    /// - [`FrontendError::Deserialize`] if the body does not decode into `T`.
    pub async fn single_product<T: DeserializeOwned>(
        &self,
        product_id: &str,
    ) -> Result<T, FrontendError> {
        let operation = Operation::SingleProduct;
        let url = self.product_url(product_id)?;
        let request = self.request_url(operation, url);
        let data = Self::execute(operation, request).await?;
        decode(operation, data)
    }

    /// Adds a product to the session's cart.
    ///
    /// The response body is checked for an error `message` and then dropped;
    /// success is always [`EmptyResponse`].
    ///
    /// # Errors
    ///
    /// - [`FrontendError::RequestFailed`] on a non-2xx status.
    /// - [`FrontendError::Http`] on network failure or if `request` fails to
    ///   serialize.
    /// - [`FrontendError::Deserialize`] if the body is not JSON.
    pub async fn add_product_to_cart<B>(
        &self,
        request: &B,
    ) -> Result<EmptyResponse, FrontendError>
    where
        B: Serialize + ?Sized,
    {
        let operation = Operation::AddToCart;
        let builder = self.request(operation, "cart/")?.json(request);
        Self::execute(operation, builder).await?;
        Ok(EmptyResponse {})
    }

    /// Fetches the session's cart page.
    ///
    /// # Errors
    ///
    /// - [`FrontendError::RequestFailed`] on a non-2xx status.
    /// - [`FrontendError::Http`] on network failure.
    /// - [`FrontendError::Deserialize`] if the body does not decode into `T`.
    pub async fn cart_page<T: DeserializeOwned>(&self) -> Result<T, FrontendError> {
        self.fetch(Operation::CartPage, "cart").await
    }

    /// Places the order for the session's cart.
    ///
    /// # Errors
    ///
    /// - [`FrontendError::RequestFailed`] on a non-2xx status.
    /// - [`FrontendError::Http`] on network failure or if `request` fails to
    ///   serialize.
    /// - [`FrontendError::Deserialize`] if the body does not decode into `T`.
    pub async fn checkout<B, T>(&self, request: &B) -> Result<T, FrontendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let operation = Operation::Checkout;
        let builder = self.request(operation, "cart/checkout")?.json(request);
        let data = Self::execute(operation, builder).await?;
        decode(operation, data)
    }

    /// Fetches storefront metadata.
    ///
    /// # Errors
    ///
    /// - [`FrontendError::RequestFailed`] on a non-2xx status.
    /// - [`FrontendError::Http`] on network failure.
    /// - [`FrontendError::Deserialize`] if the body does not decode into `T`.
    pub async fn metadata<T: DeserializeOwned>(&self) -> Result<T, FrontendError> {
        self.fetch(Operation::Metadata, "metadata").await
    }

    /// Empties the session's cart. Sent as a `POST` with no body.
    ///
    /// # Errors
    ///
    /// - [`FrontendError::RequestFailed`] on a non-2xx status.
    /// - [`FrontendError::Http`] on network failure.
    /// - [`FrontendError::Deserialize`] if the body does not decode into `T`.
    pub async fn empty_cart<T: DeserializeOwned>(&self) -> Result<T, FrontendError> {
        self.fetch(Operation::EmptyCart, "cart/empty").await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: Operation,
        path: &str,
    ) -> Result<T, FrontendError> {
        let request = self.request(operation, path)?;
        let data = Self::execute(operation, request).await?;
        decode(operation, data)
    }

    /// Resolves `path` against the base URL. `path` must be relative (no
    /// leading slash) so that a base URL with a path prefix is preserved.
    fn endpoint(&self, path: &str) -> Result<Url, FrontendError> {
        self.base_url
            .join(path)
            .map_err(|e| FrontendError::InvalidUrl {
                url: format!("{}{path}", self.base_url),
                reason: e.to_string(),
            })
    }

    fn product_url(&self, product_id: &str) -> Result<Url, FrontendError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FrontendError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_owned(),
            })?
            .pop_if_empty()
            .push("product")
            .push(product_id);
        Ok(url)
    }

    fn request(&self, operation: Operation, path: &str) -> Result<RequestBuilder, FrontendError> {
        let url = self.endpoint(path)?;
        Ok(self.request_url(operation, url))
    }

    fn request_url(&self, operation: Operation, url: Url) -> RequestBuilder {
        let client = if operation.sends_cookies() {
            &self.credentialed
        } else {
            &self.anonymous
        };
        tracing::debug!(
            operation = operation.name(),
            method = %operation.method(),
            %url,
            "sending frontend service request"
        );
        client.request(operation.method(), url)
    }

    /// Sends the request and parses the body as JSON before looking at the
    /// status, so an error body's `message` can be surfaced.
    async fn execute(
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<Value, FrontendError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        let data: Value = serde_json::from_str(&body).map_err(|e| FrontendError::Deserialize {
            context: format!("{operation} response (HTTP {})", status.as_u16()),
            source: e,
        })?;

        if !status.is_success() {
            let message = error_message(&data)
                .unwrap_or_else(|| operation.default_error_message().to_owned());
            tracing::warn!(
                operation = operation.name(),
                status = status.as_u16(),
                %message,
                "frontend service request failed"
            );
            return Err(FrontendError::RequestFailed {
                operation,
                status: status.as_u16(),
                message,
            });
        }

        Ok(data)
    }
}

fn client_builder(config: &ClientConfig) -> ClientBuilder {
    let builder = Client::builder().user_agent(config.user_agent.as_str());
    match config.timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    }
}

/// Ensures the base URL ends with exactly one slash so relative joins append
/// to its path instead of replacing the last segment.
fn normalise_base_url(raw: &str) -> Result<Url, FrontendError> {
    let normalised = format!("{}/", raw.trim().trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| FrontendError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })
}

/// The backend's own error text. A non-empty string is used as-is; a
/// non-zero number or `true` in its JSON form. Anything else (absent, `null`,
/// `""`, `0`, `false`, objects, arrays) yields `None`.
fn error_message(data: &Value) -> Option<String> {
    match data.get("message")? {
        Value::String(m) if !m.is_empty() => Some(m.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|v| v.abs() > 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_owned()),
        _ => None,
    }
}

fn decode<T: DeserializeOwned>(operation: Operation, data: Value) -> Result<T, FrontendError> {
    serde_json::from_value(data).map_err(|e| deserialize_error(operation, e))
}

fn deserialize_error(operation: Operation, source: serde_json::Error) -> FrontendError {
    FrontendError::Deserialize {
        context: format!("{operation} response"),
        source,
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
