use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{MessageDto, ValidationErrorDto},
        card::{CardDto, CardFormDto},
    },
    server::{
        controller::card::{self, create_card, delete_card, get_card, update_card},
        middleware::apply_chain,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Cards API", description = "Flashcard storage"),
    paths(
        card::create_card,
        card::get_card,
        card::update_card,
        card::delete_card,
    ),
    components(schemas(CardDto, CardFormDto, MessageDto, ValidationErrorDto)),
    tags(
        (name = "card", description = "Card management")
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Card routes are wrapped by the middleware chain; the OpenAPI document is
/// served outside of it. Every card route also answers with a trailing slash.
pub fn router() -> Router<AppState> {
    let cards = apply_chain(
        Router::new()
            .route("/api/v1/cards", post(create_card))
            .route("/api/v1/cards/", post(create_card))
            .route(
                "/api/v1/cards/{id}",
                get(get_card).put(update_card).delete(delete_card),
            )
            .route(
                "/api/v1/cards/{id}/",
                get(get_card).put(update_card).delete(delete_card),
            ),
    );

    cards.route("/api/v1/openapi.json", get(openapi))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
