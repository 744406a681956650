use serde::Serialize;

use crate::balance::personal_expense;
use crate::schemas::{ExpenseRecord, PartyName, Parties};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Exchange {
    pub payer: PartyName,
    pub receiver: PartyName,
    pub amount: f64,
    pub message: String,
}

pub fn get_payable(records: &[ExpenseRecord], parties: &Parties) -> Exchange {
    let first_paid = personal_expense(records, &parties.first);
    let second_paid = personal_expense(records, &parties.second);

    // Ties fall through to the second party owing nothing
    let (payer, receiver) = if first_paid < second_paid {
        (&parties.first, &parties.second)
    } else {
        (&parties.second, &parties.first)
    };

    Exchange {
        payer: payer.clone(),
        receiver: receiver.clone(),
        amount: (first_paid - second_paid).abs() as f64 / 2.0,
        message: format!("{} has to pay", payer),
    }
}
