use dioxus::prelude::*;
use shared_types::{User, UserRole};

use crate::routes::Route;

/// Global authentication state: the user record the login endpoint
/// reported, or `None` when browsing anonymously.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<User>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: User) {
        self.current_user.set(Some(user));
    }

    pub fn clear(&mut self) {
        self.current_user.set(None);
    }

    /// Name shown in the dashboard header.
    pub fn display_name(&self) -> String {
        self.current_user
            .read()
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "Student".to_string())
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Post-login destination for a reported role. Unrecognized roles fall
/// back to the landing page.
pub fn destination_for(role: UserRole) -> Route {
    match role {
        UserRole::Admin => Route::AdminDashboard {},
        UserRole::Student => Route::StudentDashboard {},
        UserRole::Unknown => Route::Landing {},
    }
}
