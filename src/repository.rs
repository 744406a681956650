use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::schemas::{ExpenseDraft, ExpenseRecord};

// Implementations assign ids and return records in insertion order
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    async fn get_items(&self) -> Result<Vec<ExpenseRecord>>;

    async fn post_item(&self, draft: ExpenseDraft) -> Result<ExpenseRecord>;
}

#[derive(Default)]
pub struct InMemoryRepository {
    items: RwLock<Vec<ExpenseRecord>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryRepository {
    async fn get_items(&self) -> Result<Vec<ExpenseRecord>> {
        Ok(self.items.read().await.clone())
    }

    async fn post_item(&self, draft: ExpenseDraft) -> Result<ExpenseRecord> {
        let mut items = self.items.write().await;
        let record = draft.into_record((items.len() + 1).to_string());
        items.push(record.clone());
        Ok(record)
    }
}
