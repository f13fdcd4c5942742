//! End-to-end flows against the fixture-backed application: registration,
//! login, directory search, and favorites.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{App, test, web};
use serde_json::json;

use directorio::Trace;
use directorio::inbound::http::auth::{login_submit, register_submit};
use directorio::inbound::http::dashboard::dashboard;
use directorio::inbound::http::favorites::{add_favorite, favorites_page, remove_favorite};
use directorio::inbound::http::pages::{landing, login_page, logout, register_page};
use directorio::inbound::http::state::HttpState;

fn app(
    state: web::Data<HttpState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build();

    App::new()
        .app_data(state)
        .wrap(Trace)
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

async fn body_string(res: actix_web::dev::ServiceResponse) -> String {
    let bytes = test::read_body(res).await;
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

/// Pull the value of the first `{attr}="..."` occurrence out of a page.
fn extract_attr(body: &str, attr: &str) -> String {
    let needle = format!("{attr}=\"");
    let start = body.find(&needle).expect("attribute present") + needle.len();
    let rest = &body[start..];
    let end = rest.find('"').expect("closing quote");
    rest[..end].to_owned()
}

async fn register_ana<S>(app: &S)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/register")
            .set_form(json!({
                "name": "Ana",
                "email": "ana@example.com",
                "password": "secreto",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(
        res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/login")
    );
}

async fn login_ana<S>(app: &S) -> actix_web::dev::ServiceResponse
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/login")
            .set_form(json!({
                "email": "ana@example.com",
                "password": "secreto",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    res
}

#[actix_web::test]
async fn registration_and_login_round_trip() {
    let state = web::Data::new(HttpState::fixture());
    let app = test::init_service(app(state)).await;

    register_ana(&app).await;

    // Duplicate registration comes back as an inline message.
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/register")
            .set_form(json!({
                "name": "Ana",
                "email": "ana@example.com",
                "password": "otra-clave",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_string(res).await;
    assert!(body.contains("El usuario ya existe."));
    assert!(body.contains("<a href='/register'>Volver</a>"));

    // Wrong password and unknown user read identically.
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login")
            .set_form(json!({
                "email": "ana@example.com",
                "password": "equivocada",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_string(res).await;
    assert!(body.contains("Credenciales incorrectas."));

    // Successful login renders the dashboard with the whole catalogue.
    let res = login_ana(&app).await;
    let body = body_string(res).await;
    assert!(body.contains("Hola, Ana"));
    assert!(body.contains("Cafetería del Centro"));
    assert!(body.contains("Estética Brisa"));
}

#[actix_web::test]
async fn dashboard_search_applies_text_and_city_filters() {
    let state = web::Data::new(HttpState::fixture());
    let app = test::init_service(app(state)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/dashboard?q=cafe&ciudad=guadalajara")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_string(res).await;

    assert!(body.contains("Café y Libros"));
    assert!(!body.contains("Cafetería del Centro"));
    assert!(!body.contains("Tacos Doña Lupe"));
    // The query is echoed back into the search form.
    assert!(body.contains("value=\"cafe\""));
    assert!(body.contains("value=\"guadalajara\""));
}

#[actix_web::test]
async fn guest_dashboard_lists_everything_without_favorite_controls() {
    let state = web::Data::new(HttpState::fixture());
    let app = test::init_service(app(state)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/dashboard").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_string(res).await;

    assert!(body.contains("Hola, Usuario"));
    assert!(body.contains("Cafetería del Centro"));
    assert!(!body.contains("Agregar a favoritos"));
}

#[actix_web::test]
async fn favorites_add_is_idempotent_and_remove_clears() {
    let state = web::Data::new(HttpState::fixture());
    let app = test::init_service(app(state)).await;

    register_ana(&app).await;
    let dashboard_body = body_string(login_ana(&app).await).await;
    let user_id = extract_attr(&dashboard_body, "data-user");
    let business_id = extract_attr(&dashboard_body, "data-negocio");

    // Add twice; both calls succeed.
    for _ in 0..2 {
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/favoritos/add")
                .set_json(json!({ "userId": user_id, "businessId": business_id }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let ack: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(ack, json!({ "success": true }));
    }

    // The favorites page shows exactly one entry.
    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/favoritos")
            .set_form(json!({ "userId": user_id }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_string(res).await;
    assert_eq!(body.matches("data-negocio").count(), 1);

    // Remove, then removing again still succeeds.
    for _ in 0..2 {
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/favoritos/remove")
                .set_json(json!({ "userId": user_id, "businessId": business_id }))
                .to_request(),
        )
        .await;
        let ack: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(ack, json!({ "success": true }));
    }

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/favoritos")
            .set_form(json!({ "userId": user_id }))
            .to_request(),
    )
    .await;
    let body = body_string(res).await;
    assert!(body.contains("Todavía no tienes favoritos."));
}

#[actix_web::test]
async fn invalid_user_id_on_favorites_list_redirects_to_dashboard() {
    let state = web::Data::new(HttpState::fixture());
    let app = test::init_service(app(state)).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/favoritos")
            .set_form(json!({ "userId": "not-a-uuid" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(
        res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/dashboard")
    );
}

#[actix_web::test]
async fn logout_returns_a_guest_session() {
    let state = web::Data::new(HttpState::fixture());
    let app = test::init_service(app(state)).await;

    register_ana(&app).await;
    let login_res = login_ana(&app).await;
    let session_cookie = login_res
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie set")
        .into_owned();

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/logout")
            .cookie(session_cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(
        res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/")
    );
    let cleared_cookie = res
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie cleared")
        .into_owned();

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/dashboard")
            .cookie(cleared_cookie)
            .to_request(),
    )
    .await;
    let body = body_string(res).await;
    assert!(body.contains("Hola, Usuario"));
}
