use crate::model::project::{ProjectDto, ProjectStatus};

use super::at;

fn project(
    id: &str,
    name: &str,
    description: &str,
    status: ProjectStatus,
    members: u32,
    created_at: i64,
) -> ProjectDto {
    ProjectDto {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        status,
        members,
        created_at: at(created_at),
    }
}

pub fn get_all() -> Vec<ProjectDto> {
    vec![
        project(
            "1",
            "Website Redesign",
            "Complete overhaul of the company website with modern design and improved UX",
            ProjectStatus::Active,
            8,
            1_704_067_200,
        ),
        project(
            "2",
            "Mobile App",
            "Native mobile application for iOS and Android platforms",
            ProjectStatus::Draft,
            5,
            1_704_844_800,
        ),
        project(
            "3",
            "Legacy System",
            "Old system that needs to be archived",
            ProjectStatus::Archived,
            0,
            1_685_577_600,
        ),
    ]
}

pub fn find_by_id(id: &str) -> Option<ProjectDto> {
    get_all().into_iter().find(|project| project.id == id)
}
