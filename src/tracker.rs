use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::error::Result;
use crate::form::{check_draft, today, ExpenseForm, PricePolicy};
use crate::ledger::Ledger;
use crate::repository::ExpenseRepository;
use crate::schemas::{ExpenseDraft, ExpenseRecord, Parties};

#[derive(Clone)]
pub struct ExpenseTracker {
    repository: Arc<dyn ExpenseRepository>,
    parties: Parties,
    policy: PricePolicy,
}

impl ExpenseTracker {
    pub fn new(repository: Arc<dyn ExpenseRepository>, parties: Parties, policy: PricePolicy) -> Self {
        ExpenseTracker {
            repository,
            parties,
            policy,
        }
    }

    pub async fn load(&self) -> Result<Ledger> {
        let records = self.repository.get_items().await.map_err(|err| {
            error!("Couldn't fetch expenses: {}", err);
            err
        })?;
        let ledger = Ledger::new(records, self.parties.clone());
        debug!("Loaded {} expenses", ledger.records().len());
        Ok(ledger)
    }

    pub async fn add_item(&self, draft: ExpenseDraft) -> Result<ExpenseRecord> {
        let draft = check_draft(draft, &self.parties, self.policy, &today()).map_err(|err| {
            warn!("Rejected expense: {}", err);
            err
        })?;
        self.store(draft).await
    }

    pub async fn add_form(&self, form: ExpenseForm) -> Result<ExpenseRecord> {
        let draft = form
            .into_draft(&self.parties, self.policy, &today())
            .map_err(|err| {
                warn!("Rejected expense form: {}", err);
                err
            })?;
        self.store(draft).await
    }

    async fn store(&self, draft: ExpenseDraft) -> Result<ExpenseRecord> {
        match self.repository.post_item(draft).await {
            Ok(record) => {
                info!(
                    "Added expense {} paid by {} ({})",
                    record.id, record.payee_name, record.price
                );
                Ok(record)
            }
            Err(err) => {
                error!("Couldn't store expense: {}", err);
                Err(err)
            }
        }
    }
}
