use crate::api::ApiClient;
use crate::domain::model::{MonthlyEvolution, MonthlySummary};
use crate::pages::{Loadable, Page};
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportsView {
    pub summary: MonthlySummary,
    pub evolution: Vec<MonthlyEvolution>,
}

#[derive(Debug, Default)]
pub struct ReportsPage {
    pub data: Loadable<ReportsView>,
}

impl ReportsPage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Page for ReportsPage {
    fn title(&self) -> &'static str {
        "Reports"
    }

    async fn load(&mut self, client: &ApiClient) {
        let result = tokio::try_join!(client.monthly_summary(), client.monthly_evolution())
            .map(|(summary, evolution)| ReportsView { summary, evolution });
        self.data = Loadable::from_result(result, "reports");
    }
}
