use super::*;

/// Tests creating a card from a valid form.
///
/// Verifies that a created card can be found again with the submitted fields.
///
/// Expected: Ok with the stored card
#[tokio::test]
async fn creates_card_from_valid_form() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = sqlite_service(db);

    let created = service.create(form(1, "do", "do͞o", "делать")).await?;
    let found = service.find(created.id).await?;

    assert_eq!(found, created);
    assert_eq!(found.user_id, 1);
    assert_eq!(found.word, "do");
    assert_eq!(found.transcription, "do͞o");
    assert_eq!(found.translation, "делать");

    Ok(())
}

/// Tests that an invalid form is rejected before the repository is called.
///
/// Expected: Err(AppError::Validation) naming the blank fields, no repository calls
#[tokio::test]
async fn rejects_invalid_form_without_touching_repository() {
    let (service, repository) = failing_service();

    let result = service.create(form(1, "do", "", " ")).await;

    let Err(AppError::Validation(errors)) = result else {
        panic!("expected validation error");
    };
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("transcription"), Some(BLANK_MESSAGE));
    assert_eq!(errors.get("translation"), Some(BLANK_MESSAGE));
    assert_eq!(repository.calls(), 0);
}

/// Tests that the injected validator decides what is valid.
///
/// Expected: Err(AppError::Validation) from the substituted validator
#[tokio::test]
async fn uses_injected_validator() {
    let service = CardService::new(
        Arc::new(FailingRepository::default()),
        Arc::new(RejectingValidator),
    );

    let result = service.create(form(1, "do", "do͞o", "делать")).await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ref errors)) if errors.get("word") == Some("is reserved")
    ));
}

/// Tests that a repository failure is wrapped with the operation name.
///
/// Expected: Err(AppError::Repository) with operation "create"
#[tokio::test]
async fn wraps_repository_failure() {
    let (service, repository) = failing_service();

    let result = service.create(form(1, "do", "do͞o", "делать")).await;

    assert!(matches!(
        result,
        Err(AppError::Repository {
            operation: "create",
            ..
        })
    ));
    assert_eq!(repository.calls(), 1);
}
