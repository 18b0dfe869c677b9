//! Admin dashboard endpoints: CRUD over the four entity collections plus
//! the relationship-edit calls.

use shared_types::{
    AppError, AssignUsersRequest, Class, CreateClassRequest, CreateGroupRequest,
    CreateResourceRequest, Group, MeetingLinkRequest, Resource, User,
};

use crate::ApiClient;

impl ApiClient {
    // ── Users ──

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.get_json(paths::USERS).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        self.delete(&paths::user(id)).await
    }

    /// Attach a meeting link to a user.
    pub async fn set_meeting_link(&self, id: &str, link: &str) -> Result<(), AppError> {
        let body = MeetingLinkRequest { link: link.into() };
        self.post_ok(&paths::user_meeting(id), &body).await
    }

    // ── Classes ──

    /// List classes with their server-resolved membership (`users`, `group`).
    pub async fn list_classes(&self) -> Result<Vec<Class>, AppError> {
        self.get_json(paths::CLASSES).await
    }

    /// Create a class and return the record as the server stored it,
    /// including the assigned id.
    pub async fn create_class(&self, req: &CreateClassRequest) -> Result<Class, AppError> {
        self.post_json(paths::CLASSES, req).await
    }

    pub async fn delete_class(&self, id: &str) -> Result<(), AppError> {
        self.delete(&paths::class(id)).await
    }

    /// Assign one user to a class. Both ids travel in the path; there is
    /// no request body.
    pub async fn assign_user_to_class(
        &self,
        class_id: &str,
        user_id: &str,
    ) -> Result<(), AppError> {
        self.post_empty(&paths::class_assign_one(class_id, user_id))
            .await
    }

    /// Assign many users to a class in one call.
    pub async fn assign_users_to_class(
        &self,
        class_id: &str,
        user_ids: Vec<String>,
    ) -> Result<(), AppError> {
        let body = AssignUsersRequest { user_ids };
        self.post_ok(&paths::class_assign(class_id), &body).await
    }

    // ── Resources ──

    pub async fn list_resources(&self) -> Result<Vec<Resource>, AppError> {
        self.get_json(paths::RESOURCES).await
    }

    pub async fn create_resource(&self, req: &CreateResourceRequest) -> Result<Resource, AppError> {
        self.post_json(paths::RESOURCES, req).await
    }

    pub async fn delete_resource(&self, id: &str) -> Result<(), AppError> {
        self.delete(&paths::resource(id)).await
    }

    // ── Groups ──

    pub async fn list_groups(&self) -> Result<Vec<Group>, AppError> {
        self.get_json(paths::GROUPS).await
    }

    pub async fn create_group(&self, req: &CreateGroupRequest) -> Result<Group, AppError> {
        self.post_json(paths::GROUPS, req).await
    }

    pub async fn delete_group(&self, id: &str) -> Result<(), AppError> {
        self.delete(&paths::group(id)).await
    }

    pub async fn assign_users_to_group(
        &self,
        group_id: &str,
        user_ids: Vec<String>,
    ) -> Result<(), AppError> {
        let body = AssignUsersRequest { user_ids };
        self.post_ok(&paths::group_assign(group_id), &body).await
    }
}

/// Admin endpoint paths, kept together so the URL shapes are testable
/// without a network.
pub(crate) mod paths {
    pub const USERS: &str = "/api/admin/users";
    pub const CLASSES: &str = "/api/admin/classes";
    pub const RESOURCES: &str = "/api/admin/resources";
    pub const GROUPS: &str = "/api/admin/groups";

    pub fn user(id: &str) -> String {
        format!("{USERS}/{id}")
    }

    pub fn user_meeting(id: &str) -> String {
        format!("{USERS}/{id}/meeting")
    }

    pub fn class(id: &str) -> String {
        format!("{CLASSES}/{id}")
    }

    pub fn class_assign(class_id: &str) -> String {
        format!("{CLASSES}/{class_id}/assign")
    }

    pub fn class_assign_one(class_id: &str, user_id: &str) -> String {
        format!("{CLASSES}/{class_id}/assign/{user_id}")
    }

    pub fn resource(id: &str) -> String {
        format!("{RESOURCES}/{id}")
    }

    pub fn group(id: &str) -> String {
        format!("{GROUPS}/{id}")
    }

    pub fn group_assign(group_id: &str) -> String {
        format!("{GROUPS}/{group_id}/assign")
    }
}
