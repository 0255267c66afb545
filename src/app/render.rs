use crate::domain::model::{Account, Category, Transaction, User};
use crate::format::{format_currency, format_date, format_signed_amount};
use crate::pages::{
    AccountsPage, CategoriesPage, DashboardPage, Loadable, Page, ReportsPage, TransactionsPage,
};
use std::fmt::Write;

const LOADING: &str = "Loading...";

fn heading(out: &mut String, title: &str, subtitle: &str) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", subtitle);
    let _ = writeln!(out);
}

fn failed<T>(out: &mut String, state: &Loadable<T>) -> bool {
    match state {
        Loadable::Loading => {
            let _ = writeln!(out, "{}", LOADING);
            true
        }
        Loadable::Failed(message) => {
            let _ = writeln!(out, "⚠️  {}", message);
            true
        }
        Loadable::Loaded(_) => false,
    }
}

fn account_line(out: &mut String, account: &Account) {
    let kind = if account.type_display.is_empty() {
        account.account_type.label()
    } else {
        account.type_display.as_str()
    };
    let _ = writeln!(
        out,
        "  {:<24} {:<20} {:>16}   [{}]",
        account.name,
        kind,
        format_currency(account.current_balance),
        account.id
    );
}

fn category_line(out: &mut String, category: &Category) {
    let system = if category.is_system { "  (system)" } else { "" };
    let _ = writeln!(
        out,
        "  {} {:<24} {:>4} transactions{}   [{}]",
        category.icon, category.name, category.transactions_count, system, category.id
    );
}

fn transaction_line(out: &mut String, transaction: &Transaction) {
    let (icon, category) = match &transaction.category_detail {
        Some(detail) => (detail.icon.as_str(), detail.name.as_str()),
        None => ("💰", ""),
    };
    let _ = writeln!(
        out,
        "  {} {:<28} {:<16} {:<10} {:>16}",
        icon,
        transaction.description,
        category,
        format_date(&transaction.date),
        format_signed_amount(transaction.entry_type, transaction.amount)
    );
}

pub fn render_user(user: &User) -> String {
    format!("{} <{}>", user.display_name(), user.email)
}

pub fn render_dashboard(page: &DashboardPage) -> String {
    let mut out = String::new();
    heading(&mut out, page.title(), "Overview of your finances");
    if failed(&mut out, &page.data) {
        return out;
    }
    let Some(view) = page.data.data() else {
        return out;
    };

    let summary = &view.summary;
    let _ = writeln!(out, "  Total balance     {:>16}", format_currency(summary.total_balance));
    let _ = writeln!(out, "  Income (month)    {:>16}", format_currency(summary.month_income));
    let _ = writeln!(out, "  Expenses (month)  {:>16}", format_currency(summary.month_expense));
    let _ = writeln!(out, "  Balance (month)   {:>16}", format_currency(summary.month_balance));
    let _ = writeln!(out);

    let _ = writeln!(out, "My accounts");
    if view.accounts.is_empty() {
        let _ = writeln!(out, "  No accounts yet");
    }
    for account in &view.accounts {
        account_line(&mut out, account);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Top expenses");
    if summary.top_expenses.is_empty() {
        let _ = writeln!(out, "  No expenses recorded");
    }
    for expense in &summary.top_expenses {
        let _ = writeln!(
            out,
            "  {} {:<24} {:>16}  ({} transactions)",
            expense.category_icon,
            expense.category_name,
            format_currency(expense.total),
            expense.count
        );
    }
    out
}

pub fn render_accounts(page: &AccountsPage) -> String {
    let mut out = String::new();
    heading(&mut out, page.title(), "Manage your financial accounts");
    if failed(&mut out, &page.accounts) {
        return out;
    }
    if let Some(accounts) = page.accounts.data() {
        if accounts.is_empty() {
            let _ = writeln!(out, "  No accounts yet");
        }
        for account in accounts {
            account_line(&mut out, account);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "  Total {:>54}", format_currency(page.total_balance()));
    }
    out
}

pub fn render_categories(page: &CategoriesPage) -> String {
    let mut out = String::new();
    heading(&mut out, page.title(), "Organize your income and expenses");
    if failed(&mut out, &page.categories) {
        return out;
    }

    let _ = writeln!(out, "Income");
    for category in page.income() {
        category_line(&mut out, category);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Expenses");
    for category in page.expense() {
        category_line(&mut out, category);
    }
    out
}

pub fn render_transactions(page: &TransactionsPage) -> String {
    let mut out = String::new();
    heading(&mut out, page.title(), "Your income and expenses");
    if failed(&mut out, &page.data) {
        return out;
    }
    if let Some(view) = page.data.data() {
        if view.transactions.is_empty() {
            let _ = writeln!(out, "  No transactions yet");
        }
        for transaction in &view.transactions {
            transaction_line(&mut out, transaction);
        }
    }
    out
}

pub fn render_reports(page: &ReportsPage) -> String {
    let mut out = String::new();
    heading(&mut out, page.title(), "How your money moved");
    if failed(&mut out, &page.data) {
        return out;
    }
    let Some(view) = page.data.data() else {
        return out;
    };

    let summary = &view.summary;
    let _ = writeln!(
        out,
        "Period {} - {}",
        format_date(&summary.period.start_date),
        format_date(&summary.period.end_date)
    );
    let _ = writeln!(out, "  Balance       {:>16}", format_currency(summary.balance));
    let _ = writeln!(out, "  Income        {:>16}", format_currency(summary.income));
    let _ = writeln!(out, "  Expenses      {:>16}", format_currency(summary.expense));
    let _ = writeln!(out, "  Transactions  {:>16}", summary.transactions_count);
    let _ = writeln!(out);

    let _ = writeln!(out, "Monthly evolution");
    if view.evolution.is_empty() {
        let _ = writeln!(out, "  No data available");
    }
    for month in &view.evolution {
        let _ = writeln!(
            out,
            "  {:<10} {:>5}  in {:>14}  out {:>14}  = {:>14}",
            month.month,
            month.year,
            format_currency(month.income),
            format_currency(month.expense),
            format_currency(month.balance)
        );
    }
    out
}
