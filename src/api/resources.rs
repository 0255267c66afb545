use crate::api::client::ApiClient;
use crate::api::endpoints;
use crate::domain::model::{
    Account, Category, Credentials, DashboardData, ListResponse, MonthlyEvolution,
    MonthlySummary, NewAccount, NewCategory, NewTransaction, RegisterData, TokenPair,
    Transaction, User,
};
use crate::utils::error::Result;

impl ApiClient {
    async fn list<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let response: ListResponse<T> = self.get(path).await?;
        let items = response.into_vec();
        tracing::debug!("📥 {} returned {} items", path, items.len());
        Ok(items)
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<TokenPair> {
        self.post(endpoints::LOGIN, credentials).await
    }

    /// The response body is not used; a successful status is enough.
    pub async fn register(&self, data: &RegisterData) -> Result<()> {
        let _: serde_json::Value = self.post(endpoints::REGISTER, data).await?;
        Ok(())
    }

    pub async fn profile(&self) -> Result<User> {
        self.get(endpoints::PROFILE).await
    }

    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.list(endpoints::ACCOUNTS).await
    }

    pub async fn create_account(&self, account: &NewAccount) -> Result<Account> {
        self.post(endpoints::ACCOUNTS, account).await
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.list(endpoints::CATEGORIES).await
    }

    pub async fn create_category(&self, category: &NewCategory) -> Result<Category> {
        self.post(endpoints::CATEGORIES, category).await
    }

    pub async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        self.list(endpoints::TRANSACTIONS).await
    }

    pub async fn create_transaction(&self, transaction: &NewTransaction) -> Result<Transaction> {
        self.post(endpoints::TRANSACTIONS, transaction).await
    }

    pub async fn dashboard(&self) -> Result<DashboardData> {
        self.get(endpoints::DASHBOARD).await
    }

    pub async fn monthly_summary(&self) -> Result<MonthlySummary> {
        self.get(endpoints::MONTHLY_SUMMARY).await
    }

    pub async fn monthly_evolution(&self) -> Result<Vec<MonthlyEvolution>> {
        self.get(endpoints::MONTHLY_EVOLUTION).await
    }
}
