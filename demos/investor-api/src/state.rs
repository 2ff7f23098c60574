/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The async SDK instance. Handles dispatching blocking storage
    /// operations to a thread pool internally.
    pub sdk: sair_reit_sdk::AsyncReitSdk,
}
