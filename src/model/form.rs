use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Contact form payload. Missing keys read as empty strings.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ContactRequestDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SubmitFormResponseDto {
    pub message: String,
    pub ticket_id: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UploadResponseDto {
    pub message: String,
    pub file_url: String,
    pub file_name: String,
    pub size: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Formats a byte count as megabytes with one decimal, e.g. `2.4 MB`.
pub fn format_megabytes(bytes: usize) -> String {
    format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
}
