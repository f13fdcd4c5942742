//! Favorites handlers: the rendered list plus the JSON add/remove endpoints.
//!
//! All three trust the user id supplied by the client, matching the form and
//! fetch calls emitted by the dashboard.

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{BusinessId, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::pages::redirect;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{BusinessCard, FavoritesPage, render};

/// Body of the favorites list form.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesListForm {
    pub user_id: String,
}

/// JSON body of the add/remove endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    pub user_id: UserId,
    pub business_id: BusinessId,
}

/// JSON acknowledgement returned by the add/remove endpoints.
#[derive(Debug, Serialize)]
pub struct FavoriteAck {
    pub success: bool,
}

/// `POST /favoritos`
///
/// Renders the favorites list; any failure falls back to the dashboard.
pub async fn favorites_page(
    state: web::Data<HttpState>,
    form: web::Form<FavoritesListForm>,
) -> ApiResult<HttpResponse> {
    let Ok(user_id) = UserId::new(&form.user_id) else {
        warn!("favorites list requested with invalid user id");
        return Ok(redirect("/dashboard"));
    };

    match state.favorites.list_businesses(&user_id).await {
        Ok(negocios) => {
            let favorite_ids: Vec<BusinessId> =
                negocios.iter().map(|business| business.id).collect();
            render(&FavoritesPage {
                user_id: user_id.to_string(),
                negocios: negocios
                    .iter()
                    .map(|business| BusinessCard::new(business, &favorite_ids))
                    .collect(),
            })
        }
        Err(error) => {
            warn!(%error, "failed to load favorites, falling back to dashboard");
            Ok(redirect("/dashboard"))
        }
    }
}

/// `POST /favoritos/add`
pub async fn add_favorite(
    state: web::Data<HttpState>,
    request: web::Json<FavoriteRequest>,
) -> ApiResult<HttpResponse> {
    state
        .favorites
        .add(&request.user_id, &request.business_id)
        .await?;
    Ok(HttpResponse::Ok().json(FavoriteAck { success: true }))
}

/// `POST /favoritos/remove`
pub async fn remove_favorite(
    state: web::Data<HttpState>,
    request: web::Json<FavoriteRequest>,
) -> ApiResult<HttpResponse> {
    state
        .favorites
        .remove(&request.user_id, &request.business_id)
        .await?;
    Ok(HttpResponse::Ok().json(FavoriteAck { success: true }))
}
