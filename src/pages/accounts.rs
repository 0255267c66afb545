use crate::api::ApiClient;
use crate::domain::model::{Account, AccountType, NewAccount};
use crate::pages::{FormModal, Loadable, Page};
use crate::utils::error::Result;
use crate::utils::validation::{parse_decimal, validate_non_empty_string};
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct AccountForm {
    pub name: String,
    pub account_type: AccountType,
    pub initial_balance: String,
}

impl Default for AccountForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            account_type: AccountType::Checking,
            initial_balance: String::new(),
        }
    }
}

impl AccountForm {
    pub fn to_request(&self) -> Result<NewAccount> {
        validate_non_empty_string("name", &self.name)?;
        let initial_balance = parse_decimal("initial balance", &self.initial_balance)?;
        Ok(NewAccount {
            name: self.name.trim().to_string(),
            account_type: self.account_type.clone(),
            initial_balance,
        })
    }
}

#[derive(Debug, Default)]
pub struct AccountsPage {
    pub accounts: Loadable<Vec<Account>>,
    pub modal: FormModal<AccountForm>,
}

impl AccountsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn submit(&mut self, client: &ApiClient) -> Result<Account> {
        self.modal.ensure_open()?;
        let result = match self.modal.form.to_request() {
            Ok(request) => client.create_account(&request).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(account) => {
                tracing::info!("✅ Account '{}' created", account.name);
                self.modal.complete();
                self.load(client).await;
                Ok(account)
            }
            Err(e) => {
                self.modal.fail("account", &e);
                Err(e)
            }
        }
    }

    pub fn total_balance(&self) -> f64 {
        self.accounts
            .data()
            .map(|accounts| accounts.iter().map(|a| a.current_balance).sum())
            .unwrap_or(0.0)
    }
}

#[async_trait]
impl Page for AccountsPage {
    fn title(&self) -> &'static str {
        "Accounts"
    }

    async fn load(&mut self, client: &ApiClient) {
        self.accounts = Loadable::from_result(client.list_accounts().await, "accounts");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form() {
        let form = AccountForm::default();
        assert_eq!(form.account_type, AccountType::Checking);
        assert!(form.name.is_empty());
        assert!(form.initial_balance.is_empty());
    }

    #[test]
    fn test_form_parses_initial_balance() {
        let form = AccountForm {
            name: " Poupança ".to_string(),
            account_type: AccountType::Savings,
            initial_balance: "150,25".to_string(),
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.name, "Poupança");
        assert_eq!(request.initial_balance, 150.25);
    }

    #[test]
    fn test_form_requires_name_and_balance() {
        let mut form = AccountForm {
            initial_balance: "10".to_string(),
            ..AccountForm::default()
        };
        assert!(form.to_request().is_err());

        form.name = "Cash".to_string();
        form.initial_balance = String::new();
        assert!(form.to_request().is_err());
    }
}
