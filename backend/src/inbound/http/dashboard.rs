//! Dashboard handler: directory search plus the viewer's favorites context.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::error;

use crate::domain::{SearchFilter, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::pages::server_error_page;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{BusinessCard, DashboardPage, render};

/// Display name used when nobody is logged in.
const GUEST_NAME: &str = "Usuario";

/// User-facing message when the directory cannot be loaded.
const DIRECTORY_ERROR_MESSAGE: &str = "Error al cargar el directorio";

/// Query string of the dashboard search form.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub ciudad: Option<String>,
}

/// Render the dashboard for an optional viewer, echoing the filter back
/// into the search form.
pub(crate) async fn render_dashboard(
    state: &HttpState,
    viewer: Option<(UserId, String)>,
    filter: &SearchFilter,
) -> ApiResult<HttpResponse> {
    let negocios = state.directory.search(filter).await?;

    let favorite_ids = match &viewer {
        Some((user_id, _)) => state
            .favorites
            .list_businesses(user_id)
            .await?
            .into_iter()
            .map(|business| business.id)
            .collect(),
        None => Vec::new(),
    };

    let (user_id, user_name, logged_in) = match viewer {
        Some((id, name)) => (id.to_string(), name, true),
        None => (String::new(), GUEST_NAME.to_owned(), false),
    };

    render(&DashboardPage {
        user_name,
        user_id,
        logged_in,
        q: filter.text().unwrap_or_default().to_owned(),
        ciudad: filter.city().unwrap_or_default().to_owned(),
        negocios: negocios
            .iter()
            .map(|business| BusinessCard::new(business, &favorite_ids))
            .collect(),
    })
}

async fn session_dashboard(
    state: &HttpState,
    session: &SessionContext,
    filter: &SearchFilter,
) -> ApiResult<HttpResponse> {
    let viewer = match session.user_id()? {
        Some(user_id) => {
            let name = session.user_name()?.unwrap_or_else(|| GUEST_NAME.to_owned());
            Some((user_id, name))
        }
        None => None,
    };

    render_dashboard(state, viewer, filter).await
}

/// `GET /dashboard`
///
/// Store failures come back as a terse HTML 500 page rather than the JSON
/// error envelope.
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
    params: web::Query<SearchParams>,
) -> HttpResponse {
    let filter = SearchFilter::from_params(params.q.as_deref(), params.ciudad.as_deref());

    match session_dashboard(&state, &session, &filter).await {
        Ok(page) => page,
        Err(error) => {
            error!(%error, "failed to load the dashboard");
            server_error_page(DIRECTORY_ERROR_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test, web};
    use async_trait::async_trait;

    use super::*;
    use crate::domain::ports::{
        DirectoryQuery, FixtureBusinessRepository, FixtureFavoritesRepository,
        FixtureUserRepository,
    };
    use crate::domain::{AccountService, Business, Error, FavoritesManager};
    use crate::inbound::http::test_utils::test_session_middleware;

    struct UnavailableDirectory;

    #[async_trait]
    impl DirectoryQuery for UnavailableDirectory {
        async fn search(&self, _filter: &SearchFilter) -> Result<Vec<Business>, Error> {
            Err(Error::service_unavailable("database unavailable"))
        }
    }

    #[actix_web::test]
    async fn store_failure_renders_an_html_error_page() {
        let account = Arc::new(AccountService::new(Arc::new(FixtureUserRepository::default())));
        let state = web::Data::new(HttpState::new(
            account.clone(),
            account,
            Arc::new(UnavailableDirectory),
            Arc::new(FavoritesManager::new(
                Arc::new(FixtureFavoritesRepository::default()),
                Arc::new(FixtureBusinessRepository::seeded()),
            )),
        ));
        let app = test::init_service(
            App::new()
                .app_data(state)
                .wrap(test_session_middleware())
                .route("/dashboard", web::get().to(dashboard)),
        )
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/dashboard").to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .expect("content type header")
            .to_owned();
        assert!(content_type.starts_with("text/html"));
        let body = test::read_body(res).await;
        assert_eq!(body, "Error al cargar el directorio");
    }
}
