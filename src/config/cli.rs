use crate::config::AppConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "finboard")]
#[command(about = "Personal finance dashboard for the terminal")]
pub struct CliConfig {
    /// TOML config file (defaults to the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the finance API, e.g. http://localhost:8000/api
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// File holding the session tokens
    #[arg(long, global = true)]
    pub token_file: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Sign in and store the session tokens
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "FINBOARD_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and sign in with it
    Register(RegisterArgs),
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Balances, this month's totals and top expenses
    Dashboard,
    /// List or create accounts
    Accounts {
        #[command(subcommand)]
        action: Option<AccountsAction>,
    },
    /// List or create categories
    Categories {
        #[command(subcommand)]
        action: Option<CategoriesAction>,
    },
    /// List or create transactions
    Transactions {
        #[command(subcommand)]
        action: Option<TransactionsAction>,
    },
    /// Monthly summary and evolution
    Reports,
}

#[derive(Debug, Clone, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "FINBOARD_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Defaults to --password
    #[arg(long)]
    pub password_confirm: Option<String>,
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_name: String,
}

#[derive(Debug, Clone, Subcommand)]
pub enum AccountsAction {
    List,
    Create {
        #[arg(long)]
        name: String,
        /// CHECKING, SAVINGS, CREDIT_CARD, CASH or INVESTMENT
        #[arg(long = "type", default_value = "CHECKING")]
        account_type: String,
        #[arg(long, allow_hyphen_values = true)]
        initial_balance: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CategoriesAction {
    List,
    Create {
        #[arg(long)]
        name: String,
        /// INCOME or EXPENSE
        #[arg(long = "type", default_value = "EXPENSE")]
        entry_type: String,
        #[arg(long)]
        icon: Option<String>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum TransactionsAction {
    List,
    Create {
        #[arg(long)]
        description: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// INCOME or EXPENSE
        #[arg(long = "type", default_value = "EXPENSE")]
        entry_type: String,
        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Account id
        #[arg(long)]
        account: String,
        /// Category id
        #[arg(long)]
        category: String,
    },
}

impl CliConfig {
    /// Flags win over the config file and the environment.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(token_file) = &self.token_file {
            config.storage.token_file = Some(token_file.clone());
        }
        if self.json_logs {
            config.logging.json = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transaction_create() {
        let cli = CliConfig::try_parse_from([
            "finboard",
            "transactions",
            "create",
            "--description",
            "Rent",
            "--amount",
            "1500",
            "--type",
            "expense",
            "--account",
            "a1",
            "--category",
            "c1",
        ])
        .unwrap();

        match cli.command {
            Command::Transactions {
                action: Some(TransactionsAction::Create { amount, date, .. }),
            } => {
                assert_eq!(amount, "1500");
                assert!(date.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_overrides_take_precedence() {
        let cli = CliConfig::try_parse_from([
            "finboard",
            "--api-url",
            "http://10.0.0.2:8000/api",
            "dashboard",
            "--token-file",
            "/tmp/t.json",
        ])
        .unwrap();

        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.api.base_url, "http://10.0.0.2:8000/api");
        assert_eq!(config.storage.token_file.as_deref(), Some("/tmp/t.json"));
    }

    #[test]
    fn test_accounts_without_action_lists() {
        let cli = CliConfig::try_parse_from(["finboard", "accounts"]).unwrap();
        assert!(matches!(cli.command, Command::Accounts { action: None }));
    }
}
