use crate::model::user::{UserDto, UserRole, UserStatus};

use super::{at, REFERENCE_TIMESTAMP};

/// Id whose deletion is refused with `USER_HAS_ACTIVE_PROJECTS`.
pub const ERROR_CASE_USER_ID: &str = "error-case";

fn user(
    id: &str,
    name: &str,
    email: &str,
    role: UserRole,
    status: UserStatus,
    avatar: Option<&str>,
    last_login: Option<i64>,
) -> UserDto {
    UserDto {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        avatar: avatar.map(str::to_string),
        role,
        status,
        last_login: last_login.map(at),
    }
}

pub fn get_all() -> Vec<UserDto> {
    vec![
        user(
            "1",
            "John Doe",
            "john@example.com",
            UserRole::Admin,
            UserStatus::Active,
            Some("https://mui.com/static/images/avatar/1.jpg"),
            Some(REFERENCE_TIMESTAMP),
        ),
        user(
            "2",
            "Jane Smith",
            "jane@example.com",
            UserRole::Editor,
            UserStatus::Active,
            Some("https://mui.com/static/images/avatar/2.jpg"),
            Some(1_705_249_200),
        ),
        user(
            "3",
            "Bob Johnson",
            "bob@example.com",
            UserRole::Viewer,
            UserStatus::Inactive,
            Some("https://mui.com/static/images/avatar/3.jpg"),
            Some(1_704_874_500),
        ),
        user(
            ERROR_CASE_USER_ID,
            "Error User",
            "error@example.com",
            UserRole::Viewer,
            UserStatus::Active,
            None,
            None,
        ),
    ]
}

pub fn find_by_id(id: &str) -> Option<UserDto> {
    get_all().into_iter().find(|user| user.id == id)
}
