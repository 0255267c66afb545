use crate::api::ApiClient;
use crate::domain::model::{Category, EntryType, NewCategory};
use crate::pages::{FormModal, Loadable, Page};
use crate::utils::error::Result;
use crate::utils::validation::{validate_max_chars, validate_non_empty_string};
use async_trait::async_trait;

pub const DEFAULT_ICON: &str = "📌";
const MAX_ICON_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub entry_type: EntryType,
    pub icon: String,
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            entry_type: EntryType::Expense,
            icon: DEFAULT_ICON.to_string(),
        }
    }
}

impl CategoryForm {
    pub fn to_request(&self) -> Result<NewCategory> {
        validate_non_empty_string("name", &self.name)?;
        validate_max_chars("icon", &self.icon, MAX_ICON_CHARS)?;
        Ok(NewCategory {
            name: self.name.trim().to_string(),
            entry_type: self.entry_type,
            icon: self.icon.clone(),
        })
    }
}

#[derive(Debug, Default)]
pub struct CategoriesPage {
    pub categories: Loadable<Vec<Category>>,
    pub modal: FormModal<CategoryForm>,
}

impl CategoriesPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of_type(&self, entry_type: EntryType) -> Vec<&Category> {
        self.categories
            .data()
            .map(|all| all.iter().filter(|c| c.entry_type == entry_type).collect())
            .unwrap_or_default()
    }

    pub fn income(&self) -> Vec<&Category> {
        self.of_type(EntryType::Income)
    }

    pub fn expense(&self) -> Vec<&Category> {
        self.of_type(EntryType::Expense)
    }

    pub async fn submit(&mut self, client: &ApiClient) -> Result<Category> {
        self.modal.ensure_open()?;
        let result = match self.modal.form.to_request() {
            Ok(request) => client.create_category(&request).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(category) => {
                tracing::info!("✅ Category '{}' created", category.name);
                self.modal.complete();
                self.load(client).await;
                Ok(category)
            }
            Err(e) => {
                self.modal.fail("category", &e);
                Err(e)
            }
        }
    }
}

#[async_trait]
impl Page for CategoriesPage {
    fn title(&self) -> &'static str {
        "Categories"
    }

    async fn load(&mut self, client: &ApiClient) {
        self.categories = Loadable::from_result(client.list_categories().await, "categories");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, entry_type: EntryType) -> Category {
        Category {
            id: id.to_string(),
            name: id.to_string(),
            entry_type,
            type_display: String::new(),
            icon: "🏷".to_string(),
            is_system: false,
            transactions_count: 0,
        }
    }

    #[test]
    fn test_split_by_type() {
        let page = CategoriesPage {
            categories: Loadable::Loaded(vec![
                category("salary", EntryType::Income),
                category("food", EntryType::Expense),
                category("rent", EntryType::Expense),
            ]),
            ..CategoriesPage::default()
        };

        let income: Vec<_> = page.income().iter().map(|c| c.id.as_str()).collect();
        let expense: Vec<_> = page.expense().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(income, vec!["salary"]);
        assert_eq!(expense, vec!["food", "rent"]);
    }

    #[test]
    fn test_split_while_loading_is_empty() {
        let page = CategoriesPage::new();
        assert!(page.income().is_empty());
        assert!(page.categories.is_loading());
    }

    #[test]
    fn test_default_form_and_icon_limit() {
        let mut form = CategoryForm::default();
        assert_eq!(form.entry_type, EntryType::Expense);
        assert_eq!(form.icon, DEFAULT_ICON);

        form.name = "Pets".to_string();
        assert!(form.to_request().is_ok());

        form.icon = "dog".to_string();
        assert!(form.to_request().is_err());
    }
}
