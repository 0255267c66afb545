use crate::api::endpoints::{self, LOGIN_ROUTE};
use crate::api::tokens::TokenStorage;
use crate::domain::model::RefreshedToken;
use crate::domain::ports::Navigator;
use crate::utils::error::{FinboardError, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// One call against the REST backend. Kept as plain data so that it can be
/// re-issued after the access token has been refreshed.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    retried: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            retried: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Whether this request already went through a token refresh.
    pub fn is_retried(&self) -> bool {
        self.retried
    }
}

/// HTTP client for the finance API.
///
/// Every outgoing request gets `Authorization: Bearer <access token>` when an
/// access token is stored. A `401` answer is handled once per request: the
/// refresh token is exchanged for a new access token and the request is sent
/// again. If the exchange fails both tokens are dropped and the user is
/// redirected to the login route.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    tokens: TokenStorage,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        tokens: TokenStorage,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        Self::with_timeout(
            base_url,
            Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            tokens,
            navigator,
        )
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
        tokens: TokenStorage,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_http_client(http, base_url, tokens, navigator))
    }

    pub fn with_http_client(
        http: Client,
        base_url: impl Into<String>,
        tokens: TokenStorage,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            tokens,
            navigator,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &TokenStorage {
        &self.tokens
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Builds the outgoing request, attaching the stored access token.
    pub fn build_request(&self, request: &ApiRequest) -> Result<reqwest::Request> {
        let mut builder = self
            .http
            .request(request.method.clone(), self.url(&request.path))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if let Some(token) = self.tokens.access_token()? {
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        Ok(builder.build()?)
    }

    /// Sends `request`, refreshing the access token once on `401`.
    pub async fn send(&self, mut request: ApiRequest) -> Result<serde_json::Value> {
        loop {
            let err = match self.execute(&request).await {
                Err(err) if err.is_unauthorized() && !request.retried => err,
                other => return other,
            };

            request.retried = true;
            tracing::debug!(
                "🔑 {} {} answered 401, trying token refresh",
                request.method,
                request.path
            );

            let Some(refresh_token) = self.tokens.refresh_token()? else {
                tracing::debug!("🔑 No refresh token stored, giving up");
                return Err(err);
            };

            match self.refresh_access_token(&refresh_token).await {
                Ok(access) => {
                    self.tokens.set_access_token(&access)?;
                    tracing::info!("🔑 Access token refreshed, retrying {}", request.path);
                }
                Err(refresh_err) => {
                    tracing::warn!("🔒 Token refresh failed: {}", refresh_err);
                    if let Err(e) = self.tokens.clear() {
                        tracing::error!("❌ Could not clear stored tokens: {}", e);
                    }
                    self.navigator.redirect(LOGIN_ROUTE);
                    return Err(FinboardError::RefreshError {
                        source: Box::new(refresh_err),
                    });
                }
            }
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self.send(ApiRequest::get(path)).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = self.send(ApiRequest::post(path).with_json(body)?).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn execute(&self, request: &ApiRequest) -> Result<serde_json::Value> {
        let outgoing = self.build_request(request)?;
        tracing::debug!("📡 {} {}", outgoing.method(), outgoing.url());

        let response = self.http.execute(outgoing).await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body = parse_body(&bytes);

        tracing::debug!("📡 {} {} -> {}", request.method, request.path, status);

        if status.is_success() {
            Ok(body)
        } else {
            Err(FinboardError::StatusError {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Exchanges the refresh token for a new access token. Sent without the
    /// bearer header and never retried.
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<String> {
        let response = self
            .http
            .post(self.url(endpoints::REFRESH))
            .json(&serde_json::json!({ "refresh": refresh_token }))
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(FinboardError::StatusError {
                status: status.as_u16(),
                body: parse_body(&bytes),
            });
        }

        let refreshed: RefreshedToken = serde_json::from_slice(&bytes)?;
        if refreshed.access.is_empty() {
            return Err(FinboardError::AuthError {
                message: "refresh response did not contain an access token".to_string(),
            });
        }

        Ok(refreshed.access)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Empty bodies become `null`; non-JSON bodies are kept as a string.
fn parse_body(bytes: &[u8]) -> serde_json::Value {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return serde_json::Value::Null;
    }
    serde_json::from_slice(bytes).unwrap_or_else(|_| {
        serde_json::Value::String(String::from_utf8_lossy(bytes).into_owned())
    })
}
