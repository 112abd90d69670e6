//! Text formatting for summary cards and tables. Chart datasets never go
//! through here; they carry raw numbers.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// At most this many fraction digits are shown for amounts.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Abbreviated month and day of month, e.g. `Jan 5`.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Abbreviated month and year, e.g. `Jan 2024`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Groups an amount the Indian way: the last three integer digits, then
/// groups of two (`12,34,567.5`). Trailing fraction zeros are dropped.
pub fn inr(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + 8);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_indian(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// An amount in rupees, e.g. `₹1,50,000`.
pub fn currency(amount: Decimal) -> String {
    format!("₹{}", inr(amount))
}

/// A percentage exactly as received, e.g. `40%` or `33.33%`.
pub fn percent(rate: Decimal) -> String {
    format!("{}%", rate.normalize())
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::with_capacity(head.len() / 2 + 1);
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
