use async_trait::async_trait;
use bson::{doc, Bson, Document};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use log::{debug, info, warn};
use mongodb::{options::FindOptions, Client, Collection};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::repository::ExpenseRepository;
use crate::schemas::{ExpenseDraft, ExpenseRecord};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExpenseDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<Bson>,
    payee_name: String,
    price: i64,
    product: String,
    set_date: String,
    // Older documents have no timestamp and sort first
    #[serde(default, with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
}

impl ExpenseDocument {
    fn from_draft(draft: ExpenseDraft, created_at: DateTime<Utc>) -> Self {
        ExpenseDocument {
            id: None,
            payee_name: draft.payee_name,
            price: draft.price,
            product: draft.product,
            set_date: draft.set_date,
            created_at,
        }
    }

    fn into_record(self) -> Result<ExpenseRecord> {
        let id = match self.id.ok_or(TrackerError::MissingId)? {
            Bson::ObjectId(id) => id.to_hex(),
            Bson::String(id) => id,
            other => other.to_string(),
        };
        Ok(ExpenseRecord {
            id,
            payee_name: self.payee_name,
            price: self.price,
            product: self.product,
            set_date: self.set_date,
        })
    }
}

fn records_from_documents(documents: Vec<Document>) -> Result<Vec<ExpenseRecord>> {
    let mut records = Vec::with_capacity(documents.len());
    for document in documents {
        match bson::from_document::<ExpenseDocument>(document) {
            Ok(expense) => records.push(expense.into_record()?),
            Err(err) => warn!("Skipping unreadable expense document: {}", err),
        }
    }
    Ok(records)
}

pub struct MongoRepository {
    collection: Collection<ExpenseDocument>,
}

impl MongoRepository {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        let database = client.database(database);
        database.run_command(doc! { "ping": 1 }, None).await?;
        info!("Connected to MongoDB database {}", database.name());

        Ok(MongoRepository {
            collection: database.collection(collection),
        })
    }
}

#[async_trait]
impl ExpenseRepository for MongoRepository {
    async fn get_items(&self) -> Result<Vec<ExpenseRecord>> {
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": 1, "_id": 1 })
            .build();
        let documents: Vec<Document> = self
            .collection
            .clone_with_type::<Document>()
            .find(None, options)
            .await?
            .try_collect()
            .await?;
        debug!("Fetched {} expense documents", documents.len());
        records_from_documents(documents)
    }

    async fn post_item(&self, draft: ExpenseDraft) -> Result<ExpenseRecord> {
        let mut document = ExpenseDocument::from_draft(draft, Utc::now());
        let inserted = self.collection.insert_one(&document, None).await?;
        document.id = Some(inserted.inserted_id);
        document.into_record()
    }
}

#[cfg(test)]
mod tests {
    use bson::oid::ObjectId;
    use chrono::TimeZone;

    use super::*;

    fn draft() -> ExpenseDraft {
        ExpenseDraft {
            payee_name: "Rahul".to_string(),
            price: 120,
            product: "petrol".to_string(),
            set_date: "2024-05-05".to_string(),
        }
    }

    #[test]
    fn document_uses_object_id_and_camel_case() {
        let mut document = ExpenseDocument::from_draft(draft(), Utc::now());
        let stored = bson::to_document(&document).unwrap();
        assert!(!stored.contains_key("_id"));
        assert_eq!(stored.get_str("payeeName").unwrap(), "Rahul");
        assert_eq!(stored.get_i64("price").unwrap(), 120);
        assert!(stored.get_datetime("createdAt").is_ok());

        let id = ObjectId::new();
        document.id = Some(Bson::ObjectId(id));
        let stored = bson::to_document(&document).unwrap();
        assert_eq!(stored.get_object_id("_id").unwrap(), id);
    }

    #[test]
    fn record_takes_hex_id() {
        let id = ObjectId::new();
        let mut document = ExpenseDocument::from_draft(draft(), Utc::now());
        document.id = Some(Bson::ObjectId(id));
        let record = document.into_record().unwrap();
        assert_eq!(record.id, id.to_hex());
        assert_eq!(record.price, 120);
    }

    #[test]
    fn document_without_id_is_an_error() {
        let document = ExpenseDocument::from_draft(draft(), Utc::now());
        assert!(matches!(document.into_record(), Err(TrackerError::MissingId)));
    }

    #[test]
    fn older_document_without_timestamp_still_reads() {
        let id = ObjectId::new();
        let stored = doc! {
            "_id": id,
            "payeeName": "Ramesh",
            "price": 40,
            "product": "bread",
            "setDate": "2023-12-31",
        };
        let document = bson::from_document::<ExpenseDocument>(stored).unwrap();
        assert_eq!(document.created_at, Utc.timestamp_opt(0, 0).unwrap());

        let record = document.into_record().unwrap();
        assert_eq!(record.id, id.to_hex());
        assert_eq!(record.price, 40);
    }

    #[test]
    fn non_object_ids_are_kept_as_text() {
        let stored = vec![
            doc! { "_id": "a1", "payeeName": "Rahul", "price": 5_i64, "product": "tea", "setDate": "2024-01-01" },
            doc! { "_id": 7, "payeeName": "Ramesh", "price": 6, "product": "milk", "setDate": "2024-01-02" },
        ];
        let records = records_from_documents(stored).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a1", "7"]);
    }

    #[test]
    fn unreadable_documents_are_skipped() {
        let stored = vec![
            doc! { "_id": ObjectId::new(), "payeeName": "Rahul", "price": "lots", "product": "tea", "setDate": "2024-01-01" },
            doc! { "_id": ObjectId::new(), "payeeName": "Ramesh", "price": 6, "product": "milk", "setDate": "2024-01-02" },
        ];
        let records = records_from_documents(stored).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].payee_name, "Ramesh");
    }
}
