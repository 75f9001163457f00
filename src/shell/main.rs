use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use transcription::shared::config::AppConfig;
use transcription::shared::infrastructure::document_store::DocumentStore;
use transcription::shared::infrastructure::document_store::mongo::MongoDocumentStore;
use transcription::shell::graphql::write_schema_file;
use transcription::shell::http::router;
use transcription::shell::module::AppModule;
use transcription::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let module = AppModule::from_config(&config);

    let document_store = MongoDocumentStore::connect(&module.database.uri).await?;
    document_store.ping().await?;
    tracing::info!(database = document_store.database_name(), "document store connected");

    let schema = module.build_schema(AppState {
        document_store: Arc::new(document_store),
    });
    write_schema_file(&schema, &module.graphql.schema_file).await?;

    if module.graphql.playground {
        tracing::warn!("GraphQL explorer is enabled; set GRAPHQL_PLAYGROUND=false in production");
    }

    let app = router(&module.graphql, schema, config.cors_origin.clone());

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(
        "GraphQL endpoint: http://{}{}",
        config.listen_addr,
        module.graphql.endpoint
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
