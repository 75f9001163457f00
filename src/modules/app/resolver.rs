use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::Utc;

use crate::shell::state::AppState;

pub const GREETING: &str = "Hello World!";

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct DatabaseStatus {
    pub database: String,
    pub reachable: bool,
    pub checked_at: i64,
}

/// Query root of the API. Registered as the module's only provider.
pub struct AppResolver;

#[Object]
impl AppResolver {
    async fn hello(&self) -> String {
        GREETING.to_string()
    }

    /// Pings the document database. An unreachable database is reported, not raised.
    async fn database_status(&self, context: &Context<'_>) -> GqlResult<DatabaseStatus> {
        let state = context.data::<AppState>()?;
        let reachable = match state.document_store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "document store ping failed");
                false
            }
        };
        Ok(DatabaseStatus {
            database: state.document_store.database_name().to_string(),
            reachable,
            checked_at: Utc::now().timestamp_millis(),
        })
    }
}
