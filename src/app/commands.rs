use crate::adapters::NavigationEvent;
use crate::api::endpoints::LOGIN_ROUTE;
use crate::app::render;
use crate::config::cli::{AccountsAction, CategoriesAction, Command, RegisterArgs, TransactionsAction};
use crate::domain::model::{AccountType, EntryType, RegisterData};
use crate::pages::{
    AccountsPage, CategoriesPage, DashboardPage, FormModal, Page, ReportsPage, TransactionsPage,
};
use crate::session::Session;
use crate::utils::error::{FinboardError, Result};

/// Runs one CLI command against an already bootstrapped session and returns
/// the text to print.
pub async fn execute(command: &Command, session: &mut Session) -> Result<String> {
    let result = run(command, session).await;
    session.sync_with_storage()?;
    result
}

/// Whether `events`, recorded while a command ran, include the forced
/// redirect to the login route.
pub fn session_expired_during(events: &[NavigationEvent]) -> bool {
    events.contains(&NavigationEvent::Redirect(LOGIN_ROUTE.to_string()))
}

async fn run(command: &Command, session: &mut Session) -> Result<String> {
    match command {
        Command::Login { email, password } => {
            session.login(email, password).await?;
            Ok(signed_in_message(session))
        }
        Command::Register(args) => {
            session.register(&register_data(args)).await?;
            Ok(signed_in_message(session))
        }
        Command::Logout => {
            session.logout()?;
            Ok("Signed out".to_string())
        }
        Command::Whoami => Ok(match session.user() {
            Some(user) => render::render_user(user),
            None => "Not signed in".to_string(),
        }),
        Command::Dashboard => {
            require_auth(session)?;
            let mut page = DashboardPage::new();
            page.load(session.client()).await;
            Ok(render::render_dashboard(&page))
        }
        Command::Accounts { action } => {
            require_auth(session)?;
            accounts(action.as_ref(), session).await
        }
        Command::Categories { action } => {
            require_auth(session)?;
            categories(action.as_ref(), session).await
        }
        Command::Transactions { action } => {
            require_auth(session)?;
            transactions(action.as_ref(), session).await
        }
        Command::Reports => {
            require_auth(session)?;
            let mut page = ReportsPage::new();
            page.load(session.client()).await;
            Ok(render::render_reports(&page))
        }
    }
}

fn require_auth(session: &Session) -> Result<()> {
    if session.is_authenticated() {
        Ok(())
    } else {
        Err(FinboardError::AuthError {
            message: "Not signed in. Run `finboard login` first.".to_string(),
        })
    }
}

fn signed_in_message(session: &Session) -> String {
    match session.user() {
        Some(user) => format!("Signed in as {}", render::render_user(user)),
        None => "Signed in".to_string(),
    }
}

fn register_data(args: &RegisterArgs) -> RegisterData {
    RegisterData {
        username: args.username.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
        password_confirm: args
            .password_confirm
            .clone()
            .unwrap_or_else(|| args.password.clone()),
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
    }
}

fn parse_entry_type(value: &str) -> Result<EntryType> {
    EntryType::from_code(value).ok_or_else(|| FinboardError::ValidationError {
        message: format!("type must be INCOME or EXPENSE, got '{}'", value),
    })
}

/// Replaces a failed submit with the message the form is showing.
fn form_error<F: Default>(modal: &FormModal<F>, error: FinboardError) -> FinboardError {
    match modal.error() {
        Some(message) => FinboardError::FormError {
            message: message.to_string(),
        },
        None => error,
    }
}

async fn accounts(action: Option<&AccountsAction>, session: &Session) -> Result<String> {
    let client = session.client();
    let mut page = AccountsPage::new();
    page.load(client).await;

    if let Some(AccountsAction::Create {
        name,
        account_type,
        initial_balance,
    }) = action
    {
        page.modal.open();
        page.modal.form.name = name.clone();
        page.modal.form.account_type = AccountType::from_code(account_type);
        page.modal.form.initial_balance = initial_balance.clone();

        let result = page.submit(client).await;
        let created = result.map_err(|e| form_error(&page.modal, e))?;
        return Ok(format!(
            "Created account '{}'\n\n{}",
            created.name,
            render::render_accounts(&page)
        ));
    }

    Ok(render::render_accounts(&page))
}

async fn categories(action: Option<&CategoriesAction>, session: &Session) -> Result<String> {
    let client = session.client();
    let mut page = CategoriesPage::new();
    page.load(client).await;

    if let Some(CategoriesAction::Create {
        name,
        entry_type,
        icon,
    }) = action
    {
        page.modal.open();
        page.modal.form.name = name.clone();
        page.modal.form.entry_type = parse_entry_type(entry_type)?;
        if let Some(icon) = icon {
            page.modal.form.icon = icon.clone();
        }

        let result = page.submit(client).await;
        let created = result.map_err(|e| form_error(&page.modal, e))?;
        return Ok(format!(
            "Created category '{}'\n\n{}",
            created.name,
            render::render_categories(&page)
        ));
    }

    Ok(render::render_categories(&page))
}

async fn transactions(action: Option<&TransactionsAction>, session: &Session) -> Result<String> {
    let client = session.client();
    let mut page = TransactionsPage::new();
    page.load(client).await;

    if let Some(TransactionsAction::Create {
        description,
        amount,
        entry_type,
        date,
        account,
        category,
    }) = action
    {
        page.modal.open();
        let form = &mut page.modal.form;
        form.set_entry_type(parse_entry_type(entry_type)?);
        form.description = description.clone();
        form.amount = amount.clone();
        if let Some(date) = date {
            form.date = date.clone();
        }
        form.account = account.clone();
        form.category = category.clone();

        let result = page.submit(client).await;
        let created = result.map_err(|e| form_error(&page.modal, e))?;
        return Ok(format!(
            "Created transaction '{}'\n\n{}",
            created.description,
            render::render_transactions(&page)
        ));
    }

    Ok(render::render_transactions(&page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MemoryStore, RecordingNavigator};
    use crate::api::{ApiClient, TokenStorage};
    use crate::domain::ports::KeyValueStore;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::sync::Arc;

    fn stale_session(server: &MockServer) -> (Session, Arc<MemoryStore>, Arc<RecordingNavigator>) {
        let store = Arc::new(MemoryStore::new());
        store.set("access_token", "stale").unwrap();
        store.set("refresh_token", "revoked").unwrap();
        let navigator = Arc::new(RecordingNavigator::new());
        let client = ApiClient::new(
            server.url("/api"),
            TokenStorage::new(store.clone()),
            navigator.clone(),
        )
        .unwrap();
        (Session::new(client), store, navigator)
    }

    fn user_json() -> serde_json::Value {
        json!({"id": "u1", "username": "ana", "email": "ana@example.com"})
    }

    fn signed_out_session() -> Session {
        let client = ApiClient::new(
            "http://127.0.0.1:9/api",
            TokenStorage::new(Arc::new(MemoryStore::new())),
            Arc::new(RecordingNavigator::new()),
        )
        .unwrap();
        Session::new(client)
    }

    #[tokio::test]
    async fn test_screens_require_sign_in() {
        let mut session = signed_out_session();
        let err = execute(&Command::Dashboard, &mut session).await.unwrap_err();
        assert!(err.to_string().contains("Not signed in"));
    }

    #[tokio::test]
    async fn test_whoami_signed_out() {
        let mut session = signed_out_session();
        let out = execute(&Command::Whoami, &mut session).await.unwrap();
        assert_eq!(out, "Not signed in");
    }

    #[test]
    fn test_register_confirm_defaults_to_password() {
        let data = register_data(&RegisterArgs {
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "s3cret!".to_string(),
            password_confirm: None,
            first_name: "Ana".to_string(),
            last_name: String::new(),
        });
        assert_eq!(data.password_confirm, "s3cret!");
    }

    #[test]
    fn test_parse_entry_type() {
        assert_eq!(parse_entry_type("income").unwrap(), EntryType::Income);
        assert!(parse_entry_type("transfer").is_err());
    }

    #[test]
    fn test_session_expired_only_on_login_redirect() {
        assert!(!session_expired_during(&[]));
        assert!(!session_expired_during(&[NavigationEvent::Push(
            LOGIN_ROUTE.to_string()
        )]));
        assert!(session_expired_during(&[
            NavigationEvent::Push("/dashboard".to_string()),
            NavigationEvent::Redirect(LOGIN_ROUTE.to_string()),
        ]));
    }

    #[tokio::test]
    async fn test_login_after_expired_bootstrap_is_not_reported_as_expired() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/auth/profile/")
                .header("authorization", "Bearer stale");
            then.status(401);
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/refresh/");
            then.status(401).json_body(json!({"detail": "Token is blacklisted"}));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/login/");
            then.status(200)
                .json_body(json!({"access": "access-2", "refresh": "refresh-2"}));
        });
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/auth/profile/")
                .header("authorization", "Bearer access-2");
            then.status(200).json_body(user_json());
        });

        let (mut session, _store, navigator) = stale_session(&server);
        session.bootstrap().await.unwrap();
        assert!(!session.is_authenticated());
        let seen = navigator.history().len();
        assert_eq!(seen, 1, "bootstrap redirected to the login route");

        let command = Command::Login {
            email: "ana@example.com".to_string(),
            password: "s3cret!".to_string(),
        };
        let out = execute(&command, &mut session).await.unwrap();

        assert!(out.starts_with("Signed in as"));
        assert!(session.is_authenticated());
        assert!(!session_expired_during(&navigator.history_since(seen)));
    }

    #[tokio::test]
    async fn test_refresh_failure_during_command_signs_session_out() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/auth/profile/");
            then.status(200).json_body(user_json());
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/transactions/summary/");
            then.status(401);
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/transactions/monthly_evolution/");
            then.status(401);
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/auth/refresh/");
            then.status(401);
        });

        let (mut session, store, navigator) = stale_session(&server);
        session.bootstrap().await.unwrap();
        assert!(session.is_authenticated());
        let seen = navigator.history().len();

        let out = execute(&Command::Reports, &mut session).await.unwrap();

        assert!(out.contains("Your session has expired"));
        assert!(session_expired_during(&navigator.history_since(seen)));
        assert_eq!(store.get("access_token").unwrap(), None);
        assert!(!session.is_authenticated());
    }
}
