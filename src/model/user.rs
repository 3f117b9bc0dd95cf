use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: String,
    pub username: String,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserDto {
    pub username: String,
}

#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserDto {
    pub username: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserResultDto {
    pub user: UserDto,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserResponseDto {
    pub success: bool,
    pub result: UserResultDto,
}

impl UserResponseDto {
    pub fn new(user: UserDto) -> Self {
        Self {
            success: true,
            result: UserResultDto { user },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UsersResultDto {
    pub users: Vec<UserDto>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UsersResponseDto {
    pub success: bool,
    pub result: UsersResultDto,
}

impl UsersResponseDto {
    pub fn new(users: Vec<UserDto>) -> Self {
        Self {
            success: true,
            result: UsersResultDto { users },
        }
    }
}
