//! Server-rendered views.
//!
//! Templates live under `templates/` and are compiled in by askama. Handlers
//! build the view structs here and hand them to [`render`], which produces a
//! complete HTML response.

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use askama::Template;

use crate::domain::{Business, BusinessId, Error};
use crate::inbound::http::ApiResult;

/// Card-sized projection of a business for list views.
pub struct BusinessCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub contact: String,
    pub location: String,
    pub photo: String,
    pub rating: String,
    pub is_favorite: bool,
}

impl BusinessCard {
    /// Project a business for display, marking it against the viewer's
    /// favorites.
    pub fn new(business: &Business, favorite_ids: &[BusinessId]) -> Self {
        Self {
            id: business.id.to_string(),
            name: business.name.clone(),
            category: business.category.clone(),
            subcategory: business.subcategory.clone(),
            contact: business.contact.clone(),
            location: business.location.clone(),
            photo: business.photos.first().cloned().unwrap_or_default(),
            rating: format!("{:.1}", business.rating),
            is_favorite: favorite_ids.contains(&business.id),
        }
    }
}

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingPage;

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPage;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub user_name: String,
    pub user_id: String,
    pub logged_in: bool,
    pub q: String,
    pub ciudad: String,
    pub negocios: Vec<BusinessCard>,
}

#[derive(Template)]
#[template(path = "favorites.html")]
pub struct FavoritesPage {
    pub user_id: String,
    pub negocios: Vec<BusinessCard>,
}

/// Render a template into a `200 OK` HTML response.
pub fn render<T: Template>(template: &T) -> ApiResult<HttpResponse> {
    let body = template
        .render()
        .map_err(|error| Error::internal(format!("failed to render template: {error}")))?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}
