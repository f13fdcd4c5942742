//! Registration and login form handlers.
//!
//! Failures the visitor can fix (duplicate email, wrong credentials) come
//! back as an inline message with a link back to the form. Infrastructure
//! failures collapse to a terse 500 page, with details kept to the logs;
//! these routes never surface the JSON error envelope.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::{error, warn};

use crate::domain::account_service::BAD_CREDENTIALS_MESSAGE;
use crate::domain::{ErrorCode, LoginCredentials, NewRegistration, SearchFilter};
use crate::inbound::http::dashboard::render_dashboard;
use crate::inbound::http::pages::{redirect, server_error_page};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// User-facing message for registration input that fails validation.
const INVALID_REGISTRATION_MESSAGE: &str = "Datos de registro no válidos.";

/// Body of the registration form.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of the login form.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Inline failure message with a link back to the originating form.
fn failure_page(message: &str, back: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(format!("{message} <a href='{back}'>Volver</a>"))
}

/// `POST /register`
pub async fn register_submit(
    state: web::Data<HttpState>,
    form: web::Form<RegisterForm>,
) -> HttpResponse {
    let registration =
        match NewRegistration::try_from_parts(&form.name, &form.email, &form.password) {
            Ok(registration) => registration,
            Err(validation) => {
                warn!(%validation, "registration input rejected");
                return failure_page(INVALID_REGISTRATION_MESSAGE, "/register");
            }
        };

    match state.registration.register(registration).await {
        Ok(_) => redirect("/login"),
        Err(error) if error.code() == ErrorCode::Conflict => {
            failure_page(error.message(), "/register")
        }
        Err(error) => {
            error!(%error, "registration failed");
            server_error_page("Error en el registro")
        }
    }
}

/// `POST /login`
///
/// On success the session is established and the dashboard is rendered
/// directly with the full catalogue and the user's favorites marked.
pub async fn login_submit(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> HttpResponse {
    let credentials = match LoginCredentials::try_from_parts(&form.email, &form.password) {
        Ok(credentials) => credentials,
        Err(_) => return failure_page(BAD_CREDENTIALS_MESSAGE, "/login"),
    };

    match state.login.authenticate(&credentials).await {
        Ok(user) => {
            if let Err(error) = session.persist_user(&user) {
                error!(%error, "login failed");
                return server_error_page("Error en el login");
            }
            let viewer = Some((*user.id(), user.name().to_string()));
            match render_dashboard(&state, viewer, &SearchFilter::default()).await {
                Ok(page) => page,
                Err(error) => {
                    error!(%error, "login failed");
                    server_error_page("Error en el login")
                }
            }
        }
        Err(error) if error.code() == ErrorCode::Unauthorized => {
            failure_page(error.message(), "/login")
        }
        Err(error) => {
            error!(%error, "login failed");
            server_error_page("Error en el login")
        }
    }
}
