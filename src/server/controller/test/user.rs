use pretty_assertions::assert_eq;

use super::*;

/// Tests listing users.
///
/// Verifies that every fixture user is returned, including the error case.
///
/// Expected: 200 with four users
#[tokio::test]
async fn lists_all_users() -> Result<(), TestError> {
    let response = TestBuilder::get("/api/users").send(app()).await?;

    assert_eq!(response.status, StatusCode::OK);
    let users: Vec<UserDto> = response.json()?;
    let ids: Vec<&str> = users.iter().map(|user| user.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "error-case"]);

    Ok(())
}

/// Tests fetching a known user.
///
/// Verifies that the user is found by id and optional keys are present.
///
/// Expected: 200 with John Doe
#[tokio::test]
async fn gets_user_by_id() -> Result<(), TestError> {
    let response = TestBuilder::get("/api/users/1").send(app()).await?;

    assert_eq!(response.status, StatusCode::OK);
    let user: UserDto = response.json()?;
    assert_eq!(user.name, "John Doe");
    assert!(user.avatar.is_some());
    assert_eq!(
        response.value()?["lastLogin"],
        json!("2024-01-15T10:30:00Z")
    );

    Ok(())
}

/// Tests fetching an unknown user.
///
/// Verifies that a missing user answers with the plain error body.
///
/// Expected: 404 {"error":"User not found"}
#[tokio::test]
async fn unknown_user_is_not_found() -> Result<(), TestError> {
    let response = TestBuilder::get("/api/users/999").send(app()).await?;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<ErrorDto>()?,
        ErrorDto {
            error: "User not found".to_string()
        }
    );

    Ok(())
}

/// Tests deleting a regular user.
///
/// Expected: 200 with the deletion receipt
#[tokio::test]
async fn deletes_user() -> Result<(), TestError> {
    let response = TestBuilder::delete("/api/users/2").send(app()).await?;

    assert_eq!(response.status, StatusCode::OK);
    let receipt: DeleteUserResponseDto = response.json()?;
    assert_eq!(receipt.message, "User deleted successfully");

    Ok(())
}

/// Tests deleting the user with active projects.
///
/// Verifies that the refusal carries its code, message and details.
///
/// Expected: 400 USER_HAS_ACTIVE_PROJECTS
#[tokio::test]
async fn refuses_to_delete_error_case_user() -> Result<(), TestError> {
    let response = TestBuilder::delete("/api/users/error-case")
        .send(app())
        .await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let failure: ApiFailureDto = response.json()?;
    assert_eq!(failure.code, "USER_HAS_ACTIVE_PROJECTS");
    assert_eq!(failure.error, "Cannot delete user");
    assert!(failure.message.is_some());
    assert_eq!(
        failure.details,
        Some(json!({ "activeProjects": 3, "assignedTasks": 12 }))
    );

    Ok(())
}

/// Tests updating a user with name and email.
///
/// Verifies that the response merges the id with the submitted keys.
///
/// Expected: 200 with version 1.2.3 and the merged user
#[tokio::test]
async fn updates_user() -> Result<(), TestError> {
    let response = TestBuilder::patch("/api/users/2")
        .json(&json!({ "name": "Jane Doe", "email": "jane.doe@example.com", "role": "admin" }))?
        .send(app())
        .await?;

    assert_eq!(response.status, StatusCode::OK);
    let saved: SaveUserResponseDto = response.json()?;
    assert_eq!(saved.version, "1.2.3");
    assert_eq!(
        response.value()?["user"],
        json!({ "id": "2", "name": "Jane Doe", "email": "jane.doe@example.com", "role": "admin" })
    );

    Ok(())
}

/// Tests updating a user without an email.
///
/// Verifies that a missing key fails validation with every field listed.
///
/// Expected: 422 VALIDATION_ERROR
#[tokio::test]
async fn update_without_email_fails_validation() -> Result<(), TestError> {
    let response = TestBuilder::patch("/api/users/2")
        .json(&json!({ "name": "Jane Doe" }))?
        .send(app())
        .await?;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let failure: ApiFailureDto = response.json()?;
    assert_eq!(failure.code, "VALIDATION_ERROR");
    assert_eq!(failure.fields.map(|fields| fields.len()), Some(3));

    Ok(())
}

/// Tests updating a user with an empty name.
///
/// Verifies that an empty string counts as missing.
///
/// Expected: 422 VALIDATION_ERROR
#[tokio::test]
async fn update_with_empty_name_fails_validation() -> Result<(), TestError> {
    let response = TestBuilder::patch("/api/users/2")
        .json(&json!({ "name": "", "email": "jane@example.com" }))?
        .send(app())
        .await?;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}
