//! Authentication endpoints.
//!
//! The backend reports business outcomes inside a 2xx envelope
//! (`{status, message, user?}`), so these calls return the envelope and let
//! the page branch on `status`. Transport and non-2xx failures still map
//! to `AppError` like everywhere else.

use shared_types::{AppError, AuthResponse, LoginRequest, SignupRequest};

use crate::ApiClient;

const LOGIN: &str = "/auth/login";
const SIGNUP: &str = "/api/auth/signup";
const REQUEST_CODE: &str = "/api/auth/request-code";

impl ApiClient {
    pub async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, AppError> {
        self.post_json(LOGIN, req).await
    }

    pub async fn signup(&self, req: &SignupRequest) -> Result<AuthResponse, AppError> {
        self.post_json(SIGNUP, req).await
    }

    /// Ask the backend to issue an admin-signup verification code.
    pub async fn request_admin_code(&self) -> Result<AuthResponse, AppError> {
        self.post_json(REQUEST_CODE, &serde_json::json!({})).await
    }
}
