use crate::api::endpoints::{DASHBOARD_ROUTE, LOGIN_ROUTE};
use crate::api::ApiClient;
use crate::domain::model::{Credentials, RegisterData, User};
use crate::utils::error::{FinboardError, Result};

pub const LOGIN_FALLBACK_MESSAGE: &str = "Unable to sign in";
pub const REGISTER_FALLBACK_MESSAGE: &str = "Unable to register";

/// Authentication context: who is signed in, backed by the stored tokens.
///
/// Created explicitly by the caller; [`Session::bootstrap`] initialises it
/// from storage and [`Session::logout`] tears it down.
///
/// A failed token refresh clears the stored tokens behind the session's back;
/// [`Session::sync_with_storage`] drops the cached user afterwards.
#[derive(Debug)]
pub struct Session {
    client: ApiClient,
    user: Option<User>,
    loading: bool,
}

impl Session {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            user: None,
            loading: true,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True until the first [`Session::bootstrap`] has finished.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Restores the session from storage at application start.
    pub async fn bootstrap(&mut self) -> Result<()> {
        let result = self.reload_user().await;
        self.loading = false;
        result
    }

    /// Fetches the profile for the stored access token.
    ///
    /// Without a token nothing is requested. A failed profile call drops both
    /// tokens and leaves the session unauthenticated; it is not an error.
    pub async fn reload_user(&mut self) -> Result<()> {
        if self.client.tokens().access_token()?.is_none() {
            tracing::debug!("👤 No access token stored, starting signed out");
            self.user = None;
            return Ok(());
        }

        match self.client.profile().await {
            Ok(user) => {
                tracing::info!("👤 Signed in as {}", user.username);
                self.user = Some(user);
            }
            Err(e) => {
                tracing::warn!("👤 Could not load profile: {}", e);
                self.client.tokens().clear()?;
                self.user = None;
            }
        }

        Ok(())
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        let result = async {
            let tokens = self.client.login(&credentials).await?;
            self.client.tokens().store_pair(&tokens)?;
            self.reload_user().await
        }
        .await;

        match result {
            Ok(()) => {
                self.client.navigator().push(DASHBOARD_ROUTE);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("🔒 Login failed: {}", e);
                Err(FinboardError::AuthError {
                    message: login_error_message(&e),
                })
            }
        }
    }

    /// Creates the account, then signs in with the same email and password.
    pub async fn register(&mut self, data: &RegisterData) -> Result<()> {
        if let Err(e) = self.client.register(data).await {
            tracing::warn!("📝 Registration failed: {}", e);
            let message = e
                .response_body()
                .and_then(first_validation_error)
                .unwrap_or_else(|| REGISTER_FALLBACK_MESSAGE.to_string());
            return Err(FinboardError::AuthError { message });
        }

        tracing::info!("📝 Registered {}, signing in", data.email);
        if let Err(e) = self.login(&data.email, &data.password).await {
            tracing::warn!("📝 Sign-in after registration failed: {}", e);
            return Err(FinboardError::AuthError {
                message: REGISTER_FALLBACK_MESSAGE.to_string(),
            });
        }

        Ok(())
    }

    /// Forgets the cached user when no access token is stored any more.
    pub fn sync_with_storage(&mut self) -> Result<()> {
        if self.user.is_some() && self.client.tokens().access_token()?.is_none() {
            tracing::info!("👤 Stored session is gone, signing out");
            self.user = None;
        }
        Ok(())
    }

    /// Local sign-out; the backend is not contacted.
    pub fn logout(&mut self) -> Result<()> {
        let cleared = self.client.tokens().clear();
        self.user = None;
        self.client.navigator().push(LOGIN_ROUTE);
        tracing::info!("👋 Signed out");
        cleared
    }
}

/// The server's `detail` message, or the generic fallback.
pub fn login_error_message(error: &FinboardError) -> String {
    error
        .response_body()
        .and_then(|body| body.get("detail"))
        .and_then(message_of)
        .unwrap_or_else(|| LOGIN_FALLBACK_MESSAGE.to_string())
}

/// First message of a field-keyed validation payload such as
/// `{"email": ["already taken"]}` or `{"email": "already taken"}`.
/// Fields are visited in payload order.
pub fn first_validation_error(body: &serde_json::Value) -> Option<String> {
    body.as_object()?.values().next().and_then(message_of)
}

fn message_of(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.first().and_then(message_of),
        Value::Object(_) => first_validation_error(value),
        other => Some(other.to_string()),
    }
}
