use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Draft,
    Active,
    Archived,
    Deleted,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub members: u32,
    pub created_at: DateTime<Utc>,
}

impl ProjectDto {
    /// Active projects with members block archiving.
    pub fn has_dependencies(&self) -> bool {
        self.status == ProjectStatus::Active && self.members > 0
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ArchiveProjectResponseDto {
    pub message: String,
    pub archived_at: DateTime<Utc>,
    pub project_id: String,
}
