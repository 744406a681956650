use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::schemas::{ExpenseDraft, Parties};

const DATE_FORMAT: &str = "%Y-%m-%d";

// Upper bound on a validated price
pub const MAX_PRICE: i64 = i32::MAX as i64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricePolicy {
    #[default]
    Reject,
    Lenient,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseForm {
    #[serde(default)]
    pub payee_name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub set_date: Option<String>,
}

impl ExpenseForm {
    pub fn into_draft(self, parties: &Parties, policy: PricePolicy, today: &str) -> Result<ExpenseDraft> {
        let price = match policy {
            PricePolicy::Reject => parse_price_strict(&self.price)?,
            PricePolicy::Lenient => parse_price_lenient(&self.price),
        };
        let draft = ExpenseDraft {
            payee_name: self.payee_name,
            price,
            product: self.product,
            set_date: self.set_date.unwrap_or_default(),
        };
        check_draft(draft, parties, policy, today)
    }
}

pub fn check_draft(
    mut draft: ExpenseDraft,
    parties: &Parties,
    policy: PricePolicy,
    today: &str,
) -> Result<ExpenseDraft> {
    if draft.set_date.trim().is_empty() {
        draft.set_date = today.to_string();
    }
    if policy == PricePolicy::Lenient {
        return Ok(draft);
    }

    if !parties.contains(&draft.payee_name) {
        return Err(TrackerError::UnknownParty(draft.payee_name));
    }
    if !(0..=MAX_PRICE).contains(&draft.price) {
        return Err(TrackerError::InvalidPrice(draft.price.to_string()));
    }
    if draft.product.trim().is_empty() {
        return Err(TrackerError::EmptyProduct);
    }
    if NaiveDate::parse_from_str(&draft.set_date, DATE_FORMAT).is_err() {
        return Err(TrackerError::InvalidDate(draft.set_date));
    }
    Ok(draft)
}

pub fn parse_price_strict(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(price) if (0..=MAX_PRICE).contains(&price) && !trimmed.starts_with('+') => Ok(price),
        _ => Err(TrackerError::InvalidPrice(raw.to_string())),
    }
}

// Same reading as a browser's parseInt: leading whitespace, optional sign,
// then digits. No digits means 0.
pub fn parse_price_lenient(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });
    if negative {
        -value
    } else {
        value
    }
}

pub fn today() -> String {
    Utc::now().date_naive().format(DATE_FORMAT).to_string()
}
