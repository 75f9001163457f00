// End-to-end wiring of the API process without a database server.

use std::sync::Arc;

use rstest::rstest;
use transcription::modules::client_build::adapters::outbound::vite_config::render_vite_config;
use transcription::modules::client_build::core::build_config::BuildConfig;
use transcription::shared::config::AppConfig;
use transcription::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use transcription::shell::graphql::write_schema_file;
use transcription::shell::module::{AppModule, Provider};
use transcription::shell::state::AppState;

#[rstest]
#[tokio::test]
async fn it_should_bootstrap_the_module_and_write_the_schema() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::from_lookup(
        |key| (key == "MONGODB_URI").then(|| "mongodb://db:27017/transcription".to_string()),
        dir.path(),
    )
    .unwrap();
    let module = AppModule::from_config(&config);

    assert_eq!(module.database.uri, "mongodb://db:27017/transcription");
    assert_eq!(module.providers, vec![Provider::AppResolver]);
    assert_eq!(module.graphql.schema_file, dir.path().join("schema.gql"));

    let schema = module.build_schema(AppState {
        document_store: Arc::new(InMemoryDocumentStore::new("transcription")),
    });
    write_schema_file(&schema, &module.graphql.schema_file)
        .await
        .expect("schema write failed");

    let sdl = std::fs::read_to_string(&module.graphql.schema_file).unwrap();
    assert!(sdl.contains("type DatabaseStatus"));

    let response = schema.execute("{ databaseStatus { database reachable } }").await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
}

#[rstest]
fn it_should_render_the_client_bundler_config() {
    let rendered = render_vite_config(&BuildConfig::client());
    assert_eq!(
        rendered,
        "\
import { defineConfig } from \"vite\";
import tailwindcss from \"@tailwindcss/vite\";
import solid from \"vite-plugin-solid\";
import { VitePWA } from \"vite-plugin-pwa\";

export default defineConfig({
  plugins: [tailwindcss(), solid(), VitePWA()],
  build: {
    target: \"esnext\",
  },
});
"
    );
}
