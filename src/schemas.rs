use serde::{Deserialize, Serialize};

pub type PartyName = String;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: String,
    pub payee_name: PartyName,
    pub price: i64,
    pub product: String,
    pub set_date: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    pub payee_name: PartyName,
    pub price: i64,
    pub product: String,
    #[serde(default)]
    pub set_date: String,
}

impl ExpenseDraft {
    pub fn into_record(self, id: String) -> ExpenseRecord {
        ExpenseRecord {
            id,
            payee_name: self.payee_name,
            price: self.price,
            product: self.product,
            set_date: self.set_date,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parties {
    pub first: PartyName,
    pub second: PartyName,
}

impl Parties {
    pub fn new(first: impl Into<PartyName>, second: impl Into<PartyName>) -> Self {
        Parties {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.first == name || self.second == name
    }
}

impl Default for Parties {
    fn default() -> Self {
        Parties::new("Rahul", "Ramesh")
    }
}
