use crate::shared::infrastructure::document_store::{DocumentStore, DocumentStoreError};
use std::sync::atomic::{AtomicBool, Ordering};

pub struct InMemoryDocumentStore {
    database_name: String,
    is_offline: AtomicBool,
}

impl InMemoryDocumentStore {
    pub fn new(database_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            is_offline: AtomicBool::new(false),
        }
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryDocumentStore {
    fn database_name(&self) -> &str {
        &self.database_name
    }

    async fn ping(&self) -> Result<(), DocumentStoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(DocumentStoreError::Backend("Document store offline".into()));
        }
        Ok(())
    }
}
