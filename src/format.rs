//! Display helpers shared by every screen: pt-BR money and dates.

use crate::domain::model::EntryType;
use chrono::NaiveDate;

/// `1234.5` → `R$ 1.234,50`, `-3` → `-R$ 3,00`.
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let units = cents / 100;
    let fraction = cents % 100;

    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, fraction)
}

/// Amount with the direction of money in front: `+R$ 10,00` / `-R$ 10,00`.
pub fn format_signed_amount(entry_type: EntryType, amount: f64) -> String {
    let sign = match entry_type {
        EntryType::Income => '+',
        EntryType::Expense => '-',
    };
    format!("{}{}", sign, format_currency(amount.abs()))
}

/// `2024-03-05` → `05/03/2024`. Anything unparsable is shown as-is.
pub fn format_date(date: &str) -> String {
    let day = date.get(..10).unwrap_or(date);
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%d/%m/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
