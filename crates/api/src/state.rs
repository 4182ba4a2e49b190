use std::sync::Arc;

use prosperity_db::store::GameStore;

use crate::auth::IdentityResolver;
use crate::config::ServerConfig;
use crate::game::GameService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence port shared by every request.
    pub store: Arc<dyn GameStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Resolver for the acting user.
    pub identity: Arc<dyn IdentityResolver>,
}

impl AppState {
    /// The session, entry and reaction operations over this state's store.
    pub fn game(&self) -> GameService {
        GameService::new(Arc::clone(&self.store))
    }
}
