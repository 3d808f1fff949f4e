use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{
        blog::BlogDraft,
        project::ProjectDraft,
        responses::{DeleteResponse, UpsertResponse},
        service::ServiceDraft,
    },
    errors::AppError,
    use_cases::extractors::AdminSession,
    AppState,
};

// ───── Projects ──────────────────────────────────────────────────────

#[instrument(skip(state))]
pub async fn list_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let records = state.projects.list().await?;
    Ok(HttpResponse::Ok().json(records))
}

#[instrument(skip(_session, state, draft))]
pub async fn upsert_project(
    _session: AdminSession,
    state: web::Data<AppState>,
    draft: web::Json<ProjectDraft>,
) -> Result<impl Responder, AppError> {
    let stored = state.projects.upsert(draft.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UpsertResponse {
        success: true,
        data: stored,
    }))
}

#[instrument(skip(_session, state))]
pub async fn delete_project(
    _session: AdminSession,
    id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.projects.delete(&id).await?;
    Ok(HttpResponse::Ok().json(DeleteResponse { success: true }))
}

// ───── Blogs ─────────────────────────────────────────────────────────

#[instrument(skip(state))]
pub async fn list_blogs(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let records = state.blogs.list().await?;
    Ok(HttpResponse::Ok().json(records))
}

#[instrument(skip(_session, state, draft))]
pub async fn upsert_blog(
    _session: AdminSession,
    state: web::Data<AppState>,
    draft: web::Json<BlogDraft>,
) -> Result<impl Responder, AppError> {
    let stored = state.blogs.upsert(draft.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UpsertResponse {
        success: true,
        data: stored,
    }))
}

#[instrument(skip(_session, state))]
pub async fn delete_blog(
    _session: AdminSession,
    id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.blogs.delete(&id).await?;
    Ok(HttpResponse::Ok().json(DeleteResponse { success: true }))
}

// ───── Services ──────────────────────────────────────────────────────

#[instrument(skip(state))]
pub async fn list_services(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let records = state.services.list().await?;
    Ok(HttpResponse::Ok().json(records))
}

#[instrument(skip(_session, state, draft))]
pub async fn upsert_service(
    _session: AdminSession,
    state: web::Data<AppState>,
    draft: web::Json<ServiceDraft>,
) -> Result<impl Responder, AppError> {
    let stored = state.services.upsert(draft.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UpsertResponse {
        success: true,
        data: stored,
    }))
}

#[instrument(skip(_session, state))]
pub async fn delete_service(
    _session: AdminSession,
    id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.services.delete(&id).await?;
    Ok(HttpResponse::Ok().json(DeleteResponse { success: true }))
}
