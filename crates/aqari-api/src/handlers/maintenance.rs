//! Maintenance request handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use aqari_core::error::AppError;
use aqari_core::types::pagination::PageResponse;
use aqari_entity::maintenance::MaintenanceRequest;

use crate::dto::request::MaintenanceRequestBody;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// Filter parameters for maintenance listing.
#[derive(Debug, Deserialize)]
pub struct MaintenanceFilter {
    /// Restrict to one workflow status.
    pub status: Option<String>,
}

/// GET /api/maintenance
pub async fn list_requests(
    State(state): State<AppState>,
    Query(filter): Query<MaintenanceFilter>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<MaintenanceRequest>>>> {
    let page = state
        .maintenance_repo
        .find_all(&params.into_page_request(), filter.status.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/maintenance/{id}
pub async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MaintenanceRequest>>> {
    let request = state
        .maintenance_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Maintenance request not found"))?;
    Ok(Json(ApiResponse::ok(request)))
}

/// POST /api/maintenance
pub async fn create_request(
    State(state): State<AppState>,
    Json(req): Json<MaintenanceRequestBody>,
) -> ApiResult<Json<ApiResponse<MaintenanceRequest>>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let request = state.maintenance_repo.create(&req.into_input()?).await?;
    Ok(Json(ApiResponse::ok(request)))
}

/// PUT /api/maintenance/{id}
pub async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<MaintenanceRequestBody>,
) -> ApiResult<Json<ApiResponse<MaintenanceRequest>>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let request = state
        .maintenance_repo
        .update(id, &req.into_input()?)
        .await?
        .ok_or_else(|| AppError::not_found("Maintenance request not found"))?;
    Ok(Json(ApiResponse::ok(request)))
}

/// DELETE /api/maintenance/{id}
pub async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let deleted = state.maintenance_repo.delete(id).await?;
    if deleted == 0 {
        return Err(AppError::not_found("Maintenance request not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Maintenance request deleted",
    ))))
}
