use postcare_auth::TokenKeys;
use postcare_storage::DocumentStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: DocumentStore,
    pub keys: TokenKeys,
}
