//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::path::PathBuf;
use std::sync::Arc;

use actix_files::Files;
use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use crate::Trace;
use crate::domain::{AccountService, DirectoryService, FavoritesManager};
use crate::inbound::http::auth::{login_submit, register_submit};
use crate::inbound::http::dashboard::dashboard;
use crate::inbound::http::favorites::{add_favorite, favorites_page, remove_favorite};
use crate::inbound::http::pages::{landing, login_page, logout, register_page};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    DieselBusinessRepository, DieselFavoritesRepository, DieselUserRepository,
};

/// Wire the HTTP state from the configuration.
///
/// With a database pool the Diesel adapters are used; without one every port
/// falls back to the in-memory fixtures.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            let users = Arc::new(DieselUserRepository::new(pool.clone()));
            let businesses = Arc::new(DieselBusinessRepository::new(pool.clone()));
            let favorites = Arc::new(DieselFavoritesRepository::new(pool.clone()));

            let account = Arc::new(AccountService::new(users));
            HttpState::new(
                account.clone(),
                account,
                Arc::new(DirectoryService::new(businesses.clone())),
                Arc::new(FavoritesManager::new(favorites, businesses)),
            )
        }
        None => HttpState::fixture(),
    }
}

#[derive(Clone)]
struct AppDependencies {
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
    static_dir: PathBuf,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        http_state,
        key,
        cookie_secure,
        same_site,
        static_dir,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    App::new()
        .app_data(http_state)
        .wrap(Trace)
        .service(Files::new("/static", static_dir))
        .service(
            web::scope("")
                .wrap(session)
                .route("/", web::get().to(landing))
                .route("/register", web::get().to(register_page))
                .route("/register", web::post().to(register_submit))
                .route("/login", web::get().to(login_page))
                .route("/login", web::post().to(login_submit))
                .route("/logout", web::get().to(logout))
                .route("/dashboard", web::get().to(dashboard))
                .route("/favoritos", web::post().to(favorites_page))
                .route("/favoritos/add", web::post().to(add_favorite))
                .route("/favoritos/remove", web::post().to(remove_favorite)),
        )
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
        db_pool: _,
        static_dir,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
            static_dir: static_dir.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    Ok(server)
}
