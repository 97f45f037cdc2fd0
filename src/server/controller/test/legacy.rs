use pretty_assertions::assert_eq;

use super::*;

/// Tests the legacy current user endpoint.
///
/// Expected: 200 with the first fixture user
#[tokio::test]
async fn returns_first_user() -> Result<(), TestError> {
    let response = TestBuilder::get("/api/user").send(app()).await?;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<UserDto>()?.id, "1");

    Ok(())
}

/// Tests the legacy submit endpoint.
///
/// Verifies that any body is accepted.
///
/// Expected: 201 with the submission receipt
#[tokio::test]
async fn submit_is_created() -> Result<(), TestError> {
    let response = TestBuilder::post("/api/submit")
        .raw_json("{\"anything\":true}")
        .send(app())
        .await?;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json::<SubmitFormResponseDto>()?.ticket_id, "TICK-12345");

    Ok(())
}

/// Tests the legacy item deletion endpoint.
///
/// Expected: 200 with the deletion receipt
#[tokio::test]
async fn deletes_item() -> Result<(), TestError> {
    let response = TestBuilder::delete("/api/items/42").send(app()).await?;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json::<DeleteUserResponseDto>()?.message,
        "User deleted successfully"
    );

    Ok(())
}
