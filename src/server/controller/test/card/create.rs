use super::*;

/// Tests creating a card through the full router.
///
/// Expected: 200 with the submitted fields, an assigned ID and equal timestamps
#[tokio::test]
async fn creates_card() {
    let (_test, app) = setup().await;

    let response = send_json(
        &app,
        Method::POST,
        "/api/v1/cards",
        json!({"user_id": 1, "word": "do", "transcription": "do͞o", "translation": "делать"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_json_content_type(&response);
    let card = body_json(response).await;
    assert!(card["id"].as_i64().unwrap() > 0);
    assert_eq!(card["user_id"], 1);
    assert_eq!(card["word"], "do");
    assert_eq!(card["transcription"], "do͞o");
    assert_eq!(card["translation"], "делать");
    assert_eq!(card["created_at"], card["updated_at"]);
}

/// Tests that a created card can be read back by its ID.
///
/// Expected: GET returns the same card the POST returned
#[tokio::test]
async fn created_card_is_readable() {
    let (_test, app) = setup().await;

    let created = body_json(
        send_json(
            &app,
            Method::POST,
            "/api/v1/cards",
            json!({"user_id": 2, "word": "go", "transcription": "ɡō", "translation": "идти"}),
        )
        .await,
    )
    .await;

    let response = send(&app, Method::GET, &card_uri(&created["id"]), None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

/// Tests creating a card with whitespace-only fields.
///
/// Expected: 422 naming every blank field
#[tokio::test]
async fn rejects_blank_fields() {
    let (_test, app) = setup().await;

    let response = send_json(
        &app,
        Method::POST,
        "/api/v1/cards",
        json!({"user_id": 1, "word": "  ", "transcription": "", "translation": "\t"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_json_content_type(&response);
    assert_eq!(
        body_json(response).await,
        json!({
            "error": "you have validation errors",
            "details": {
                "word": "cannot be blank",
                "transcription": "cannot be blank",
                "translation": "cannot be blank"
            }
        })
    );
}

/// Tests that omitted fields are treated as blank.
///
/// Expected: 422 naming only the missing text fields
#[tokio::test]
async fn rejects_missing_fields() {
    let (_test, app) = setup().await;

    let response = send_json(&app, Method::POST, "/api/v1/cards", json!({})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    let details = body["details"].as_object().unwrap();
    assert_eq!(details.len(), 3);
    assert!(details.get("user_id").is_none());
}

/// Tests creating a card with a body that is not JSON.
///
/// Expected: 400 with the bad request message
#[tokio::test]
async fn rejects_malformed_json() {
    let (_test, app) = setup().await;

    let response = send(&app, Method::POST, "/api/v1/cards", Some("{\"word\": ")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_json_content_type(&response);
    assert_eq!(body_json(response).await, json!({"message": "bad request"}));
}

/// Tests creating a card with a field of the wrong type.
///
/// Expected: 400 with the bad request message
#[tokio::test]
async fn rejects_wrongly_typed_field() {
    let (_test, app) = setup().await;

    let response = send_json(
        &app,
        Method::POST,
        "/api/v1/cards",
        json!({"user_id": "one", "word": "do", "transcription": "do͞o", "translation": "делать"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Tests that the body is decoded regardless of the request content type.
///
/// Expected: 200 for a JSON body sent without a Content-Type header
#[tokio::test]
async fn accepts_body_without_content_type() {
    let (_test, app) = setup().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/cards")
        .body(Body::from(
            json!({"user_id": 1, "word": "do", "transcription": "do͞o", "translation": "делать"})
                .to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

/// Tests that a `null` field is treated like a missing one.
///
/// Expected: 422 naming only the null field
#[tokio::test]
async fn rejects_null_field_as_blank() {
    let (_test, app) = setup().await;

    let response = send_json(
        &app,
        Method::POST,
        "/api/v1/cards",
        json!({"word": "do", "transcription": null, "translation": "делать", "user_id": 1}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await["details"],
        json!({"transcription": "cannot be blank"})
    );
}

/// Tests creating a card on the collection path with a trailing slash.
///
/// Expected: 200 with the created card
#[tokio::test]
async fn creates_card_with_trailing_slash() {
    let (_test, app) = setup().await;

    let response = send_json(
        &app,
        Method::POST,
        "/api/v1/cards/",
        json!({"user_id": 1, "word": "do", "transcription": "do͞o", "translation": "делать"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_json_content_type(&response);
    assert_eq!(body_json(response).await["word"], "do");
}
