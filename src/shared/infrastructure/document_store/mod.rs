// Port for the document database connection.
//
// The driver owns pooling, retries and reconnection. This port only exposes what the
// process needs at its edge: the database name and a liveness check.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentStoreError {
    #[error("invalid connection string: {0}")]
    InvalidUri(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    fn database_name(&self) -> &str;
    async fn ping(&self) -> Result<(), DocumentStoreError>;
}

pub mod in_memory;
pub mod mongo;
