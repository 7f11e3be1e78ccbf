use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{MessageDto, ValidationErrorDto},
        card::{CardDto, CardFormDto},
    },
    server::{
        controller::param::{CardId, JsonBody},
        error::AppError,
        model::card::CardForm,
        state::AppState,
    },
};

/// Tag for grouping card endpoints in OpenAPI documentation
pub static CARD_TAG: &str = "card";

/// Create a new card.
///
/// Decodes the submitted form, validates it and stores a new card.
///
/// # Arguments
/// - `state` - Application state containing the card service
/// - `payload` - Card form (user_id, word, transcription, translation)
///
/// # Returns
/// - `200 OK` - The created card with its assigned ID
/// - `400 Bad Request` - Body is not valid JSON
/// - `422 Unprocessable Entity` - One or more required fields are blank
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/cards",
    tag = CARD_TAG,
    request_body = CardFormDto,
    responses(
        (status = 200, description = "Successfully created card", body = CardDto),
        (status = 400, description = "Malformed request body", body = MessageDto),
        (status = 422, description = "Invalid card fields", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_card(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CardFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let card = state.card_service.create(CardForm::from(payload)).await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Get a card by ID.
///
/// # Returns
/// - `200 OK` - The requested card
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No card with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/cards/{id}",
    tag = CARD_TAG,
    params(
        ("id" = i32, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved card", body = CardDto),
        (status = 400, description = "Invalid card ID", body = MessageDto),
        (status = 404, description = "Card not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_card(
    State(state): State<AppState>,
    CardId(id): CardId,
) -> Result<impl IntoResponse, AppError> {
    let card = state.card_service.find(id).await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Replace the fields of an existing card.
///
/// Update takes the complete form; fields omitted from the body are treated as
/// blank and rejected by validation.
///
/// # Returns
/// - `200 OK` - The updated card
/// - `400 Bad Request` - ID is not an integer or body is not valid JSON
/// - `404 Not Found` - No card with that ID
/// - `422 Unprocessable Entity` - One or more required fields are blank
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/cards/{id}",
    tag = CARD_TAG,
    params(
        ("id" = i32, Path, description = "Card ID")
    ),
    request_body = CardFormDto,
    responses(
        (status = 200, description = "Successfully updated card", body = CardDto),
        (status = 400, description = "Invalid card ID or malformed body", body = MessageDto),
        (status = 404, description = "Card not found", body = MessageDto),
        (status = 422, description = "Invalid card fields", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_card(
    State(state): State<AppState>,
    CardId(id): CardId,
    JsonBody(payload): JsonBody<CardFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let card = state
        .card_service
        .update(id, CardForm::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Delete a card.
///
/// # Returns
/// - `200 OK` - Card deleted, empty body
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No card with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/cards/{id}",
    tag = CARD_TAG,
    params(
        ("id" = i32, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted card"),
        (status = 400, description = "Invalid card ID", body = MessageDto),
        (status = 404, description = "Card not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_card(
    State(state): State<AppState>,
    CardId(id): CardId,
) -> Result<impl IntoResponse, AppError> {
    state.card_service.delete(id).await?;

    Ok(StatusCode::OK)
}
