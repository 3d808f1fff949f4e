use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// The fixed session token issued by a successful admin login. Opaque,
/// non-expiring, carries no claims; possession of the literal string is the
/// whole auth model.
pub const DEFAULT_SESSION_TOKEN: &str = "simulated-jwt-token-2026";

/// Display name returned in the login response's `user` object.
pub const ADMIN_DISPLAY_NAME: &str = "Admin";

/// Storage keys used by the client-side session store.
pub const AUTH_TOKEN_KEY: &str = "tt_auth_token";
pub const TUTORIAL_COMPLETED_KEY: &str = "tt_tutorial_completed";
