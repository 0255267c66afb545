//! View state of each dashboard screen.
//!
//! A page loads its data once when shown and again after each successful
//! create. Failures are kept in the state so the screen can show them.

pub mod accounts;
pub mod categories;
pub mod dashboard;
pub mod reports;
pub mod transactions;

pub use accounts::{AccountForm, AccountsPage};
pub use categories::{CategoriesPage, CategoryForm};
pub use dashboard::{DashboardPage, DashboardView};
pub use reports::{ReportsPage, ReportsView};
pub use transactions::{TransactionForm, TransactionsPage, TransactionsView};

use crate::api::ApiClient;
use crate::session::first_validation_error;
use crate::utils::error::{FinboardError, Result};
use async_trait::async_trait;

#[async_trait]
pub trait Page: Send {
    fn title(&self) -> &'static str;

    /// Fetches everything the screen shows. Never fails: errors end up in
    /// the page state.
    async fn load(&mut self, client: &ApiClient);
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn from_result(result: Result<T>, what: &str) -> Self {
        match result {
            Ok(data) => Loadable::Loaded(data),
            Err(e) => {
                tracing::warn!("⚠️ Could not load {}: {}", what, e);
                Loadable::Failed(e.user_friendly_message())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A create form shown in a modal.
///
/// Cancelling keeps what was typed; a successful submit resets the form.
#[derive(Debug, Clone, Default)]
pub struct FormModal<F> {
    open: bool,
    pub form: F,
    error: Option<String>,
}

impl<F: Default> FormModal<F> {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.error = None;
    }

    pub fn cancel(&mut self) {
        self.open = false;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn ensure_open(&self) -> Result<()> {
        if self.open {
            Ok(())
        } else {
            Err(FinboardError::ValidationError {
                message: "the form is not open".to_string(),
            })
        }
    }

    fn complete(&mut self) {
        self.open = false;
        self.form = F::default();
        self.error = None;
    }

    fn fail(&mut self, what: &str, error: &FinboardError) {
        tracing::warn!("⚠️ Could not create {}: {}", what, error);
        let message = error
            .response_body()
            .and_then(first_validation_error)
            .unwrap_or_else(|| error.user_friendly_message());
        self.error = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_loadable_from_result() {
        let loaded = Loadable::from_result(Ok(3), "numbers");
        assert_eq!(loaded.data(), Some(&3));

        let failed: Loadable<i32> = Loadable::from_result(
            Err(FinboardError::StatusError {
                status: 404,
                body: serde_json::Value::Null,
            }),
            "numbers",
        );
        assert_eq!(failed.error(), Some("The requested resource was not found"));
        assert!(Loadable::<i32>::default().is_loading());
    }

    #[test]
    fn test_cancel_keeps_typed_values() {
        let mut modal: FormModal<String> = FormModal::default();
        assert!(modal.ensure_open().is_err());

        modal.open();
        modal.form.push_str("Groceries");
        modal.cancel();

        assert!(!modal.is_open());
        assert_eq!(modal.form, "Groceries");
    }

    #[test]
    fn test_failure_message_then_success_resets() {
        let mut modal: FormModal<String> = FormModal::default();
        modal.open();
        modal.form.push_str("Itaú");

        modal.fail(
            "account",
            &FinboardError::StatusError {
                status: 400,
                body: json!({"name": ["This field is required."]}),
            },
        );
        assert!(modal.is_open());
        assert_eq!(modal.error(), Some("This field is required."));

        modal.cancel();
        modal.open();
        assert_eq!(modal.error(), None);

        modal.complete();
        assert!(!modal.is_open());
        assert!(modal.form.is_empty());
    }
}
