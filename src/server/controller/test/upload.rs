use pretty_assertions::assert_eq;

use super::*;

use crate::server::data;

fn small_limit_app() -> Router {
    app_with(Config {
        latency: false,
        upload_limit_bytes: 1024,
    })
}

/// Tests a file within the limit.
///
/// Verifies that the receipt carries the uploaded name and formatted size.
///
/// Expected: 200 with file name report.pdf
#[tokio::test]
async fn accepts_file_within_limit() -> Result<(), TestError> {
    let response = TestBuilder::post("/api/upload")
        .multipart_file("file", "report.pdf", &[7u8; 512])
        .send(small_limit_app())
        .await?;

    assert_eq!(response.status, StatusCode::OK);
    let receipt: UploadResponseDto = response.json()?;
    assert_eq!(receipt.file_name, "report.pdf");
    assert_eq!(receipt.size, "0.0 MB");
    assert_eq!(receipt.file_url, "https://example.com/files/document.pdf");

    Ok(())
}

/// Tests a file over the configured limit.
///
/// Expected: 413 FILE_TOO_LARGE with the actual size
#[tokio::test]
async fn rejects_file_over_limit() -> Result<(), TestError> {
    let response = TestBuilder::post("/api/upload")
        .multipart_file("file", "big.bin", &[0u8; 2048])
        .send(small_limit_app())
        .await?;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    let failure: ApiFailureDto = response.json()?;
    assert_eq!(failure.code, "FILE_TOO_LARGE");
    assert_eq!(failure.actual_size.as_deref(), Some("0.0 MB"));

    Ok(())
}

/// Tests a form without a file part.
///
/// Expected: 400 NO_FILE
#[tokio::test]
async fn rejects_form_without_file() -> Result<(), TestError> {
    let response = TestBuilder::post("/api/upload")
        .multipart_text("note", "no attachment")
        .send(app())
        .await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<ApiFailureDto>()?,
        ApiFailureDto::new("No file provided", "NO_FILE")
    );

    Ok(())
}

/// Tests the refusal body for the default 5 MB limit.
///
/// Expected: maxSize "5 MB", message mentions 5MB, actual size to one decimal
#[test]
fn file_too_large_body_for_default_limit() {
    let failure = data::response::file_too_large_error(5 * 1024 * 1024, 6 * 1024 * 1024 + 104_858);

    assert_eq!(failure.max_size.as_deref(), Some("5 MB"));
    assert_eq!(failure.actual_size.as_deref(), Some("6.1 MB"));
    assert_eq!(
        failure.message.as_deref(),
        Some("File size must be less than 5MB")
    );
}
