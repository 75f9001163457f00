// Declarative description of the API process.
//
// Imports: one document database connection and one GraphQL layer.
// Providers: the resolvers merged into the schema root.

use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use std::path::PathBuf;

use crate::modules::app::resolver::AppResolver;
use crate::shared::config::AppConfig;
use crate::shell::graphql::AppSchema;
use crate::shell::state::AppState;

pub const GRAPHQL_ENDPOINT: &str = "/graphql";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseOptions {
    pub uri: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLDriver {
    AsyncGraphql,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphQLOptions {
    pub driver: GraphQLDriver,
    pub schema_file: PathBuf,
    pub playground: bool,
    pub endpoint: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    AppResolver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppModule {
    pub database: DatabaseOptions,
    pub graphql: GraphQLOptions,
    pub providers: Vec<Provider>,
}

impl AppModule {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            database: DatabaseOptions {
                uri: config.mongodb_uri.clone(),
            },
            graphql: GraphQLOptions {
                driver: GraphQLDriver::AsyncGraphql,
                schema_file: config.schema_file.clone(),
                playground: config.playground,
                endpoint: GRAPHQL_ENDPOINT.to_string(),
            },
            providers: vec![Provider::AppResolver],
        }
    }

    pub fn build_schema(&self, state: AppState) -> AppSchema {
        tracing::debug!(providers = ?self.providers, "building GraphQL schema");
        Schema::build(AppResolver, EmptyMutation, EmptySubscription)
            .data(state)
            .finish()
    }
}
