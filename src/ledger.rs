use serde::Serialize;

use crate::balance::{compute_balance_from_records, grand_total, personal_expense, Amount, Balance};
use crate::exchange::{get_payable, Exchange};
use crate::schemas::{ExpenseRecord, PartyName, Parties};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PartyTotal {
    pub party: PartyName,
    pub total: Amount,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Total {
    pub amount: Amount,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub total: Total,
    pub totals: Vec<PartyTotal>,
    pub payable: Exchange,
}

#[derive(Clone, Debug)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
    parties: Parties,
}

impl Ledger {
    pub fn new(records: Vec<ExpenseRecord>, parties: Parties) -> Self {
        Ledger { records, parties }
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ExpenseRecord> {
        self.records
    }

    pub fn personal_expense(&self, party: &str) -> Amount {
        personal_expense(&self.records, party)
    }

    pub fn totals_by_party(&self) -> Balance {
        compute_balance_from_records(&self.records)
    }

    pub fn payable(&self) -> Exchange {
        get_payable(&self.records, &self.parties)
    }

    pub fn total(&self) -> Total {
        Total {
            amount: grand_total(&self.records, &self.parties),
        }
    }

    pub fn summary(&self) -> Summary {
        let totals = [&self.parties.first, &self.parties.second]
            .into_iter()
            .map(|party| PartyTotal {
                party: party.clone(),
                total: self.personal_expense(party),
            })
            .collect();
        Summary {
            total: self.total(),
            totals,
            payable: self.payable(),
        }
    }
}
