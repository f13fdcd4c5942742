//! Static page handlers: landing, registration and login forms, logout.

use actix_web::HttpResponse;
use actix_web::http::header;

use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::views::{LandingPage, LoginPage, RegisterPage, render};

/// Build a `302 Found` redirect to the given location.
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.to_owned()))
        .finish()
}

/// Terse HTML `500` page for infrastructure failures on rendered routes.
///
/// Details stay in the logs; browsers never see the JSON error envelope.
pub(crate) fn server_error_page(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type("text/html; charset=utf-8")
        .body(message.to_owned())
}

/// `GET /`
pub async fn landing() -> ApiResult<HttpResponse> {
    render(&LandingPage)
}

/// `GET /register`
pub async fn register_page() -> ApiResult<HttpResponse> {
    render(&RegisterPage)
}

/// `GET /login`
pub async fn login_page() -> ApiResult<HttpResponse> {
    render(&LoginPage)
}

/// `GET /logout`
///
/// Clears the session and sends the visitor back to the landing page.
pub async fn logout(session: SessionContext) -> ApiResult<HttpResponse> {
    session.purge();
    Ok(redirect("/"))
}
