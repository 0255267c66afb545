use crate::api::ApiClient;
use crate::domain::model::{Account, DashboardData};
use crate::pages::{Loadable, Page};
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub summary: DashboardData,
    pub accounts: Vec<Account>,
}

/// Overview: totals for the current month, balances and top expenses.
#[derive(Debug, Default)]
pub struct DashboardPage {
    pub data: Loadable<DashboardView>,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Page for DashboardPage {
    fn title(&self) -> &'static str {
        "Dashboard"
    }

    async fn load(&mut self, client: &ApiClient) {
        let result = tokio::try_join!(client.dashboard(), client.list_accounts())
            .map(|(summary, accounts)| DashboardView { summary, accounts });
        self.data = Loadable::from_result(result, "dashboard");
    }
}
