use super::*;

/// Walks a client through create, rejected create, lookups and updates.
///
/// Expected: each step returns the documented status and body
#[tokio::test]
async fn create_find_update_flow() {
    let (_test, app) = setup().await;

    let response = send_json(
        &app,
        Method::POST,
        "/api/v1/cards",
        json!({"word": "do", "transcription": "do͞o", "translation": "делать", "user_id": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["word"], "do");
    assert_eq!(created["transcription"], "do͞o");
    assert_eq!(created["translation"], "делать");
    assert_eq!(created["user_id"], 1);
    let id = created["id"].as_i64().unwrap();

    let response = send_json(
        &app,
        Method::POST,
        "/api/v1/cards",
        json!({"word": "do", "user_id": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await,
        json!({
            "error": "you have validation errors",
            "details": {
                "transcription": "cannot be blank",
                "translation": "cannot be blank"
            }
        })
    );

    let response = send(&app, Method::GET, &card_uri(id + 100), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let pitfall =
        json!({"word": "pitfall", "transcription": "ˈpitˌfôl", "translation": "западня", "user_id": 3});

    let response = send_json(&app, Method::PUT, &card_uri(id), pitfall.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["word"], "pitfall");
    assert_eq!(updated["transcription"], "ˈpitˌfôl");
    assert_eq!(updated["translation"], "западня");
    assert_eq!(updated["user_id"], 3);

    let response = send_json(&app, Method::PUT, &card_uri(id + 100), pitfall).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
