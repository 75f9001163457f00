use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use std::path::Path;

pub use crate::modules::app::resolver::AppResolver;
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<AppResolver, EmptyMutation, EmptySubscription>;

/// Writes the schema SDL, replacing whatever the previous run left behind.
pub async fn write_schema_file(schema: &AppSchema, path: &Path) -> std::io::Result<()> {
    tokio::fs::write(path, schema.sdl()).await?;
    tracing::info!(path = %path.display(), "GraphQL schema written");
    Ok(())
}

#[cfg(test)]
mod schema_file_tests {
    use super::*;
    use crate::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
    use rstest::{fixture, rstest};
    use std::sync::Arc;

    #[fixture]
    fn schema() -> AppSchema {
        Schema::build(AppResolver, EmptyMutation, EmptySubscription)
            .data(AppState {
                document_store: Arc::new(InMemoryDocumentStore::new("transcription")),
            })
            .finish()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_write_the_sdl_to_the_given_path(schema: AppSchema) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.gql");

        write_schema_file(&schema, &path).await.expect("write failed");

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, schema.sdl());
        assert!(written.contains("hello: String!"));
        assert!(written.contains("databaseStatus: DatabaseStatus!"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_overwrite_a_stale_schema_file(schema: AppSchema) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.gql");
        std::fs::write(&path, "type Stale { field: Int }").unwrap();

        write_schema_file(&schema, &path).await.expect("write failed");

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("Stale"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_the_directory_does_not_exist(schema: AppSchema) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("schema.gql");
        assert!(write_schema_file(&schema, &path).await.is_err());
    }
}
