// MongoDB implementation of the DocumentStore port.
//
// The connection string is parsed eagerly so a malformed MONGODB_URI fails at startup.
// Server selection is lazy in the driver; `ping` is what actually reaches the server.

use crate::shared::infrastructure::document_store::{DocumentStore, DocumentStoreError};
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

/// Database used by the driver ecosystem when the connection string names none.
pub const FALLBACK_DATABASE: &str = "test";

pub struct MongoDocumentStore {
    database: Database,
}

impl MongoDocumentStore {
    pub async fn connect(uri: &str) -> Result<Self, DocumentStoreError> {
        let options = ClientOptions::parse(uri)
            .await
            .map_err(|e| DocumentStoreError::InvalidUri(e.to_string()))?;
        let database_name = database_name_from(&options);
        let client =
            Client::with_options(options).map_err(|e| DocumentStoreError::Backend(e.to_string()))?;
        let database = client.database(&database_name);
        tracing::debug!(database = %database_name, "document store client created");
        Ok(Self { database })
    }
}

fn database_name_from(options: &ClientOptions) -> String {
    options
        .default_database
        .clone()
        .unwrap_or_else(|| FALLBACK_DATABASE.to_string())
}

#[async_trait::async_trait]
impl DocumentStore for MongoDocumentStore {
    fn database_name(&self) -> &str {
        self.database.name()
    }

    async fn ping(&self) -> Result<(), DocumentStoreError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| DocumentStoreError::Backend(e.to_string()))
    }
}
