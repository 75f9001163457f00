use crate::shared::infrastructure::document_store::DocumentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub document_store: Arc<dyn DocumentStore>,
}
