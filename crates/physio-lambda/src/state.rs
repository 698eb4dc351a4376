use physio_storage::Store;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub cognito_user_pool_id: String,
    pub cognito_region: String,
}
