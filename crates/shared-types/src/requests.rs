use serde::{Deserialize, Serialize};

use crate::models::{User, UserRole};

/// Body of `POST /api/admin/classes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateClassRequest {
    pub title: String,
    pub date: String,
    pub time: String,
    pub link: String,
    #[serde(rename = "groupId", default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// Body of `POST /api/admin/resources`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateResourceRequest {
    pub title: String,
    pub link: String,
}

/// Body of `POST /api/admin/groups`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateGroupRequest {
    pub name: String,
}

/// Body of the bulk assignment endpoints
/// (`POST /api/admin/classes/:id/assign` and `POST /api/admin/groups/:id/assign`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignUsersRequest {
    #[serde(rename = "userIds")]
    pub user_ids: Vec<String>,
}

/// Body of `POST /api/admin/users/:id/meeting`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeetingLinkRequest {
    pub link: String,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/signup`.
///
/// `code` carries the admin verification code; it is sent empty for
/// student signups, matching what the backend expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    #[serde(default)]
    pub code: String,
}

/// Envelope returned by the auth endpoints.
///
/// `status` is `"success"` or `"error"`; `message` is shown to the user
/// either way. `user` is present only on a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl AuthResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
