use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Accepts money either as a JSON number or as a decimal string (`"12.50"`),
/// which is how decimal columns usually come back from the backend.
fn money<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Money {
        Number(f64),
        Text(String),
    }

    match Money::deserialize(deserializer)? {
        Money::Number(n) => Ok(n),
        Money::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid amount '{}': {}", s, e))),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Checking,
    Savings,
    CreditCard,
    Cash,
    Investment,
    #[serde(untagged)]
    Other(String),
}

impl AccountType {
    pub const ALL: [AccountType; 5] = [
        AccountType::Checking,
        AccountType::Savings,
        AccountType::CreditCard,
        AccountType::Cash,
        AccountType::Investment,
    ];

    pub fn code(&self) -> &str {
        match self {
            AccountType::Checking => "CHECKING",
            AccountType::Savings => "SAVINGS",
            AccountType::CreditCard => "CREDIT_CARD",
            AccountType::Cash => "CASH",
            AccountType::Investment => "INVESTMENT",
            AccountType::Other(code) => code,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            AccountType::Checking => "Checking account",
            AccountType::Savings => "Savings",
            AccountType::CreditCard => "Credit card",
            AccountType::Cash => "Cash",
            AccountType::Investment => "Investment",
            AccountType::Other(code) => code,
        }
    }

    /// Case-insensitive parse of the wire code; unknown codes are kept as-is.
    pub fn from_code(code: &str) -> Self {
        let upper = code.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .iter()
            .find(|t| t.code() == upper)
            .cloned()
            .unwrap_or(AccountType::Other(code.trim().to_string()))
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Direction of money for categories and transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    Income,
    Expense,
}

impl EntryType {
    pub fn code(&self) -> &'static str {
        match self {
            EntryType::Income => "INCOME",
            EntryType::Expense => "EXPENSE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntryType::Income => "Income",
            EntryType::Expense => "Expense",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "INCOME" => Some(EntryType::Income),
            "EXPENSE" => Some(EntryType::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[serde(default)]
    pub type_display: String,
    #[serde(deserialize_with = "money")]
    pub initial_balance: f64,
    #[serde(deserialize_with = "money")]
    pub current_balance: f64,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(default)]
    pub type_display: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub is_system: bool,
    #[serde(default)]
    pub transactions_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    #[serde(deserialize_with = "money")]
    pub amount: f64,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(default)]
    pub type_display: String,
    pub date: String,
    pub account: String,
    pub category: String,
    #[serde(default)]
    pub account_detail: Option<AccountRef>,
    #[serde(default)]
    pub category_detail: Option<CategoryRef>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopExpense {
    #[serde(rename = "category__name")]
    pub category_name: String,
    #[serde(rename = "category__icon", default)]
    pub category_icon: String,
    #[serde(deserialize_with = "money")]
    pub total: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(deserialize_with = "money")]
    pub total_balance: f64,
    #[serde(deserialize_with = "money")]
    pub month_income: f64,
    #[serde(deserialize_with = "money")]
    pub month_expense: f64,
    #[serde(deserialize_with = "money")]
    pub month_balance: f64,
    #[serde(default)]
    pub top_expenses: Vec<TopExpense>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub period: Period,
    #[serde(deserialize_with = "money")]
    pub income: f64,
    #[serde(deserialize_with = "money")]
    pub expense: f64,
    #[serde(deserialize_with = "money")]
    pub balance: f64,
    #[serde(default)]
    pub transactions_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyEvolution {
    pub month: String,
    pub year: i32,
    #[serde(deserialize_with = "money")]
    pub income: f64,
    #[serde(deserialize_with = "money")]
    pub expense: f64,
    #[serde(deserialize_with = "money")]
    pub balance: f64,
}

/// List endpoints answer either with a bare array or with a page object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paginated { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListResponse::Paginated { results } => results,
            ListResponse::Plain(items) => items,
        }
    }
}

#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize)]
pub struct RegisterData {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
}

impl fmt::Debug for RegisterData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterData")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Deserialize)]
pub struct RefreshedToken {
    pub access: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAccount {
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub initial_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub date: String,
    pub account: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_accepts_decimal_strings_and_unknown_types() {
        let account: Account = serde_json::from_value(json!({
            "id": "a1",
            "name": "Nubank",
            "type": "CREDIT_CARD",
            "type_display": "Cartão de Crédito",
            "initial_balance": "100.00",
            "current_balance": -25.5,
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(account.account_type, AccountType::CreditCard);
        assert_eq!(account.initial_balance, 100.0);
        assert_eq!(account.current_balance, -25.5);

        let crypto: Account = serde_json::from_value(json!({
            "id": "a2",
            "name": "Wallet",
            "type": "CRYPTO",
            "initial_balance": 0,
            "current_balance": 0
        }))
        .unwrap();
        assert_eq!(crypto.account_type, AccountType::Other("CRYPTO".to_string()));
        assert_eq!(crypto.account_type.label(), "CRYPTO");
    }

    #[test]
    fn test_new_account_serializes_wire_names() {
        let body = serde_json::to_value(NewAccount {
            name: "Savings".to_string(),
            account_type: AccountType::Savings,
            initial_balance: 10.5,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"name": "Savings", "type": "SAVINGS", "initial_balance": 10.5})
        );
    }

    #[test]
    fn test_list_response_shapes_decode_identically() {
        let plain: ListResponse<AccountRef> =
            serde_json::from_value(json!([{"id": "1", "name": "A"}])).unwrap();
        let paged: ListResponse<AccountRef> = serde_json::from_value(
            json!({"count": 1, "next": null, "results": [{"id": "1", "name": "A"}]}),
        )
        .unwrap();
        assert_eq!(plain.into_vec(), paged.into_vec());
    }

    #[test]
    fn test_account_type_from_code() {
        assert_eq!(AccountType::from_code("savings"), AccountType::Savings);
        assert_eq!(AccountType::from_code("credit-card"), AccountType::CreditCard);
        assert_eq!(
            AccountType::from_code("crypto"),
            AccountType::Other("crypto".to_string())
        );
        assert_eq!(EntryType::from_code("income"), Some(EntryType::Income));
        assert_eq!(EntryType::from_code("transfer"), None);
    }

    #[test]
    fn test_dashboard_top_expenses_use_backend_field_names() {
        let data: DashboardData = serde_json::from_value(json!({
            "total_balance": 1000,
            "month_income": "500.00",
            "month_expense": 200,
            "month_balance": 300,
            "top_expenses": [
                {"category__name": "Food", "category__icon": "🍔", "total": 150, "count": 3}
            ]
        }))
        .unwrap();
        assert_eq!(data.month_income, 500.0);
        assert_eq!(data.top_expenses[0].category_name, "Food");
        assert_eq!(data.top_expenses[0].count, 3);
    }

    #[test]
    fn test_user_display_name_falls_back_to_username() {
        let user = User {
            id: "1".to_string(),
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
        };
        assert_eq!(user.display_name(), "ana");
    }
}
