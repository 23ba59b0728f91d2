use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::model::{NewUser, User, UserPatch};

/// REST DTO for user representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "biography")]
    pub bio: String,
}

/// REST DTO for creating a new user; missing keys decode as empty strings
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateUserReq {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub bio: String,
}

/// REST DTO for updating a user (partial); omitted or blank fields are kept
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserReq {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// `{"user": ...}` envelope
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelope {
    pub user: UserDto,
}

/// `{"users": [...]}` envelope
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserListEnvelope {
    pub users: Vec<UserDto>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            bio: user.bio,
        }
    }
}

impl From<User> for UserEnvelope {
    fn from(user: User) -> Self {
        Self { user: user.into() }
    }
}

impl From<Vec<User>> for UserListEnvelope {
    fn from(users: Vec<User>) -> Self {
        Self {
            users: users.into_iter().map(UserDto::from).collect(),
        }
    }
}

impl From<CreateUserReq> for NewUser {
    fn from(req: CreateUserReq) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            bio: req.bio,
        }
    }
}

impl From<UpdateUserReq> for UserPatch {
    fn from(req: UpdateUserReq) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            bio: req.bio,
        }
    }
}
