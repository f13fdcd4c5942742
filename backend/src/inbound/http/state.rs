//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    DirectoryQuery, FavoritesService, FixtureBusinessRepository, FixtureFavoritesRepository,
    FixtureUserRepository, LoginService, RegistrationService,
};
use crate::domain::{AccountService, DirectoryService, FavoritesManager};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn RegistrationService>,
    pub login: Arc<dyn LoginService>,
    pub directory: Arc<dyn DirectoryQuery>,
    pub favorites: Arc<dyn FavoritesService>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        registration: Arc<dyn RegistrationService>,
        login: Arc<dyn LoginService>,
        directory: Arc<dyn DirectoryQuery>,
        favorites: Arc<dyn FavoritesService>,
    ) -> Self {
        Self {
            registration,
            login,
            directory,
            favorites,
        }
    }

    /// Construct state backed entirely by in-memory fixtures.
    ///
    /// The business repository is shared between the directory and the
    /// favorites service so favorite listings resolve against the same
    /// catalogue the search sees.
    pub fn fixture() -> Self {
        let users = Arc::new(FixtureUserRepository::default());
        let businesses = Arc::new(FixtureBusinessRepository::seeded());
        let favorites = Arc::new(FixtureFavoritesRepository::default());

        let account = Arc::new(AccountService::new(users));
        Self {
            registration: account.clone(),
            login: account,
            directory: Arc::new(DirectoryService::new(businesses.clone())),
            favorites: Arc::new(FavoritesManager::new(favorites, businesses)),
        }
    }
}
