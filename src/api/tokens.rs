use crate::domain::model::TokenPair;
use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use std::sync::Arc;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// The two session tokens, kept under fixed keys of a [`KeyValueStore`].
#[derive(Clone)]
pub struct TokenStorage {
    store: Arc<dyn KeyValueStore>,
}

impl TokenStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn access_token(&self) -> Result<Option<String>> {
        Ok(self
            .store
            .get(ACCESS_TOKEN_KEY)?
            .filter(|token| !token.is_empty()))
    }

    pub fn refresh_token(&self) -> Result<Option<String>> {
        Ok(self
            .store
            .get(REFRESH_TOKEN_KEY)?
            .filter(|token| !token.is_empty()))
    }

    pub fn set_access_token(&self, token: &str) -> Result<()> {
        self.store.set(ACCESS_TOKEN_KEY, token)
    }

    pub fn store_pair(&self, pair: &TokenPair) -> Result<()> {
        self.store.set(ACCESS_TOKEN_KEY, &pair.access)?;
        self.store.set(REFRESH_TOKEN_KEY, &pair.refresh)
    }

    /// Removes both tokens. Both removals are attempted even if the first fails.
    pub fn clear(&self) -> Result<()> {
        let access = self.store.remove(ACCESS_TOKEN_KEY);
        let refresh = self.store.remove(REFRESH_TOKEN_KEY);
        access.and(refresh)
    }
}

impl std::fmt::Debug for TokenStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStorage").finish_non_exhaustive()
    }
}
