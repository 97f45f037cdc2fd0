use pretty_assertions::assert_eq;

use super::*;

/// Tests listing projects.
///
/// Expected: 200 with three projects
#[tokio::test]
async fn lists_all_projects() -> Result<(), TestError> {
    let response = TestBuilder::get("/api/projects").send(app()).await?;

    assert_eq!(response.status, StatusCode::OK);
    let projects: Vec<ProjectDto> = response.json()?;
    assert_eq!(projects.len(), 3);
    assert_eq!(response.value()?[0]["createdAt"], json!("2024-01-01T00:00:00Z"));

    Ok(())
}

/// Tests archiving an active project with members.
///
/// Verifies that dependencies block archiving.
///
/// Expected: 400 PROJECT_HAS_DEPENDENCIES
#[tokio::test]
async fn active_project_with_members_is_refused() -> Result<(), TestError> {
    let response = TestBuilder::delete("/api/projects/1").send(app()).await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let failure: ApiFailureDto = response.json()?;
    assert_eq!(failure.code, "PROJECT_HAS_DEPENDENCIES");
    assert_eq!(
        failure.details,
        Some(json!({ "dependencies": ["Mobile App", "API Service"] }))
    );

    Ok(())
}

/// Tests archiving a draft project.
///
/// Verifies that members alone do not block archiving.
///
/// Expected: 200 with the archive receipt
#[tokio::test]
async fn draft_project_is_archived() -> Result<(), TestError> {
    let response = TestBuilder::delete("/api/projects/2").send(app()).await?;

    assert_eq!(response.status, StatusCode::OK);
    let receipt: ArchiveProjectResponseDto = response.json()?;
    assert_eq!(receipt.message, "Project archived successfully");

    Ok(())
}

/// Tests archiving an unknown project.
///
/// Expected: 200
#[tokio::test]
async fn unknown_project_is_archived() -> Result<(), TestError> {
    let response = TestBuilder::delete("/api/projects/missing")
        .send(app())
        .await?;

    assert_eq!(response.status, StatusCode::OK);

    Ok(())
}
