// Composition root of the API process.
//
// Responsibilities
// - Describe the process as a module: database import, GraphQL import, providers.
// - Build the schema and write its SDL artifact.
// - Expose the HTTP router to the binary.

pub mod graphql;
pub mod http;
pub mod module;
pub mod state;
