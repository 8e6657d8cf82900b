use crate::auth::{AuthService, TokenService};
use crate::store::Store;
use std::sync::Arc;

/// Shared handles passed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub auth: AuthService,
}

impl AppState {
    pub fn new<S>(store: Arc<S>, tokens: TokenService, hash_cost: u32) -> Self
    where
        S: Store + 'static,
    {
        let auth = AuthService::new(store.clone(), tokens, hash_cost);
        Self { store, auth }
    }
}
