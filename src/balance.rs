use std::collections::HashMap;

use crate::schemas::{ExpenseRecord, PartyName, Parties};

// Totals are summed in i128 so any number of i64 prices fits
pub type Amount = i128;

pub type Balance = HashMap<PartyName, Amount>;

pub fn compute_balance_from_records(records: &[ExpenseRecord]) -> Balance {
    let mut balance = Balance::new();
    for record in records {
        let price = Amount::from(record.price);
        balance
            .entry(record.payee_name.clone())
            .and_modify(|v| *v += price)
            .or_insert(price);
    }
    balance
}

// Exact match on the payee name, no trimming or case folding
pub fn personal_expense(records: &[ExpenseRecord], party: &str) -> Amount {
    records
        .iter()
        .filter(|record| record.payee_name == party)
        .map(|record| Amount::from(record.price))
        .sum()
}

pub fn grand_total(records: &[ExpenseRecord], parties: &Parties) -> Amount {
    (personal_expense(records, &parties.first) + personal_expense(records, &parties.second)).abs()
}
