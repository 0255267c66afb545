use crate::utils::error::Result;

/// Local key-value persistence for the session tokens, the way a browser
/// keeps them in local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Where the user is sent after authentication events.
pub trait Navigator: Send + Sync {
    /// In-app navigation, keeping the current session state.
    fn push(&self, route: &str);
    /// Full reload at `route`, dropping every in-memory state.
    fn redirect(&self, route: &str);
}
