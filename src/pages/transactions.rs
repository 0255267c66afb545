use crate::api::ApiClient;
use crate::domain::model::{Account, Category, EntryType, NewTransaction, Transaction};
use crate::format::today;
use crate::pages::{FormModal, Loadable, Page};
use crate::utils::error::{FinboardError, Result};
use crate::utils::validation::{parse_decimal, validate_non_empty_string};
use async_trait::async_trait;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    pub description: String,
    pub amount: String,
    entry_type: EntryType,
    pub date: String,
    pub account: String,
    pub category: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            entry_type: EntryType::Expense,
            date: today(),
            account: String::new(),
            category: String::new(),
        }
    }
}

impl TransactionForm {
    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    /// Switching between income and expense invalidates the chosen category.
    pub fn set_entry_type(&mut self, entry_type: EntryType) {
        if self.entry_type != entry_type {
            self.entry_type = entry_type;
            self.category.clear();
        }
    }

    /// `categories` are the choices offered for the current type, when known.
    pub fn to_request(&self, categories: Option<&[&Category]>) -> Result<NewTransaction> {
        validate_non_empty_string("description", &self.description)?;
        let amount = parse_decimal("amount", &self.amount)?;
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| {
            FinboardError::ValidationError {
                message: format!("date must be YYYY-MM-DD, got '{}'", self.date),
            }
        })?;
        validate_non_empty_string("account", &self.account)?;
        validate_non_empty_string("category", &self.category)?;

        if let Some(choices) = categories {
            if !choices.iter().any(|c| c.id == self.category) {
                return Err(FinboardError::ValidationError {
                    message: format!(
                        "category '{}' is not a {} category",
                        self.category,
                        self.entry_type.label().to_lowercase()
                    ),
                });
            }
        }

        Ok(NewTransaction {
            description: self.description.trim().to_string(),
            amount,
            entry_type: self.entry_type,
            date: self.date.trim().to_string(),
            account: self.account.clone(),
            category: self.category.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionsView {
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
}

#[derive(Debug, Default)]
pub struct TransactionsPage {
    pub data: Loadable<TransactionsView>,
    pub modal: FormModal<TransactionForm>,
}

impl TransactionsPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Categories matching the type currently selected in the form.
    pub fn category_choices(&self) -> Vec<&Category> {
        let entry_type = self.modal.form.entry_type();
        self.data
            .data()
            .map(|view| {
                view.categories
                    .iter()
                    .filter(|c| c.entry_type == entry_type)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn accounts(&self) -> &[Account] {
        self.data
            .data()
            .map(|view| view.accounts.as_slice())
            .unwrap_or_default()
    }

    pub async fn submit(&mut self, client: &ApiClient) -> Result<Transaction> {
        self.modal.ensure_open()?;
        let request = {
            let choices = self.data.data().map(|_| self.category_choices());
            self.modal.form.to_request(choices.as_deref())
        };
        let result = match request {
            Ok(request) => client.create_transaction(&request).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(transaction) => {
                tracing::info!("✅ Transaction '{}' created", transaction.description);
                self.modal.complete();
                self.load(client).await;
                Ok(transaction)
            }
            Err(e) => {
                self.modal.fail("transaction", &e);
                Err(e)
            }
        }
    }
}

#[async_trait]
impl Page for TransactionsPage {
    fn title(&self) -> &'static str {
        "Transactions"
    }

    async fn load(&mut self, client: &ApiClient) {
        let result = tokio::try_join!(
            client.list_transactions(),
            client.list_accounts(),
            client.list_categories(),
        )
        .map(|(transactions, accounts, categories)| TransactionsView {
            transactions,
            accounts,
            categories,
        });
        self.data = Loadable::from_result(result, "transactions");
    }
}
