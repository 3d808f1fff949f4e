use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::session::LoginRequest, errors::AuthError, AppState};

#[instrument(skip(state, request))]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<impl Responder, AuthError> {
    let response = state.auth_handler.login(&request.into_inner())?;
    Ok(HttpResponse::Ok().json(response))
}
