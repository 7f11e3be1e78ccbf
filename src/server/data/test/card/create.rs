use super::*;

/// Tests creating a new card.
///
/// Verifies that the repository inserts the submitted fields, assigns an ID and
/// sets both timestamps to the same value.
///
/// Expected: Ok with card created
#[tokio::test]
async fn creates_card() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmCardRepository::new(db.clone());
    let card = repo
        .create(CreateCardParam {
            user_id: 1,
            word: "do".to_string(),
            transcription: "do͞o".to_string(),
            translation: "делать".to_string(),
        })
        .await?;

    assert!(card.id > 0);
    assert_eq!(card.user_id, 1);
    assert_eq!(card.word, "do");
    assert_eq!(card.transcription, "do͞o");
    assert_eq!(card.translation, "делать");
    assert_eq!(card.created_at, card.updated_at);

    // Verify card exists in database
    let db_card = entity::prelude::Card::find_by_id(card.id).one(db).await?;
    assert!(db_card.is_some());
    assert_eq!(db_card.unwrap().word, "do");

    Ok(())
}

/// Tests that each created card receives its own ID.
///
/// Expected: Ok with distinct IDs
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmCardRepository::new(db.clone());
    let param = CreateCardParam {
        user_id: 2,
        word: "run".to_string(),
        transcription: "rən".to_string(),
        translation: "бежать".to_string(),
    };

    let first = repo.create(param.clone()).await?;
    let second = repo.create(param).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests that creation fails when the table is missing.
///
/// Expected: Err(DbErr) other than RecordNotFound
#[tokio::test]
async fn fails_without_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeaOrmCardRepository::new(db.clone());
    let result = repo
        .create(CreateCardParam {
            user_id: 1,
            word: "do".to_string(),
            transcription: "do͞o".to_string(),
            translation: "делать".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert!(!matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
