use actix_web::{http::header::AUTHORIZATION, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::{errors::AuthError, AppState};

/// Extractor gating mutating collection routes. The session is an explicit
/// value handed to handlers that need it, not ambient state; the server
/// re-checks the bearer token on every protected request.
/// Usage: add `_session: AdminSession` as a handler parameter.
#[derive(Debug)]
pub struct AdminSession;

impl FromRequest for AdminSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState missing while extracting admin session");
            return ready(Err(AuthError::MissingSession.into()));
        };

        match bearer_token(req) {
            Some(token) if state.auth_handler.verify_session(token) => ready(Ok(AdminSession)),
            Some(_) => ready(Err(AuthError::InvalidSession.into())),
            None => ready(Err(AuthError::MissingSession.into())),
        }
    }
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
