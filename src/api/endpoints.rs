// REST paths, relative to the configured base URL.

pub const LOGIN: &str = "/auth/login/";
pub const REGISTER: &str = "/auth/register/";
pub const REFRESH: &str = "/auth/refresh/";
pub const PROFILE: &str = "/auth/profile/";

pub const ACCOUNTS: &str = "/accounts/";
pub const CATEGORIES: &str = "/categories/";
pub const TRANSACTIONS: &str = "/transactions/";
pub const DASHBOARD: &str = "/transactions/dashboard/";
pub const MONTHLY_SUMMARY: &str = "/transactions/summary/";
pub const MONTHLY_EVOLUTION: &str = "/transactions/monthly_evolution/";

// In-app routes used for navigation.

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
