//! Staff and session DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_staff::StaffRole;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginBody {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub id: Uuid,
    pub username: String,
    pub role: StaffRole,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: LoginUser,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStaffBody {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    pub role: Option<StaffRole>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePasswordBody {
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}
