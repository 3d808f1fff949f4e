use crate::constants::ADMIN_DISPLAY_NAME;
use crate::entities::session::{AdminUser, LoginRequest, LoginResponse};
use crate::errors::AuthError;
use crate::settings::AppConfig;

/// The Auth Check: one stateless comparison against two configured secrets.
/// Credentials are kept in plain text on purpose; a single low-stakes admin
/// account does not warrant a password-hashing stack.
pub struct AuthHandler {
    admin_username: String,
    admin_password: String,
    session_token: String,
}

impl AuthHandler {
    pub fn new(config: &AppConfig) -> Self {
        AuthHandler {
            admin_username: config.admin_username.clone(),
            admin_password: config.admin_password.clone(),
            session_token: config.session_token.clone(),
        }
    }

    /// Exact string equality on both fields. The failure is uniform: callers
    /// cannot tell an unknown username from a wrong password.
    pub fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthError> {
        if request.username == self.admin_username && request.password == self.admin_password {
            tracing::info!("admin login succeeded");
            return Ok(LoginResponse {
                success: true,
                token: self.session_token.clone(),
                user: AdminUser {
                    name: ADMIN_DISPLAY_NAME.to_string(),
                },
            });
        }

        tracing::warn!("admin login rejected");
        Err(AuthError::WrongCredentials)
    }

    /// Server-side check for mutating routes: the bearer token must equal the
    /// configured session token. The token is opaque and carries no claims.
    pub fn verify_session(&self, token: &str) -> bool {
        token == self.session_token
    }
}
