//! Unit handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use aqari_core::error::AppError;
use aqari_core::types::pagination::PageResponse;
use aqari_entity::unit::Unit;

use crate::dto::request::UnitRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// Filter parameters for unit listing.
#[derive(Debug, Deserialize)]
pub struct UnitFilter {
    /// Restrict to one property.
    pub property_id: Option<Uuid>,
}

/// GET /api/units
pub async fn list_units(
    State(state): State<AppState>,
    Query(filter): Query<UnitFilter>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<Unit>>>> {
    let page = state
        .unit_repo
        .find_all(&params.into_page_request(), filter.property_id)
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/units/{id}
pub async fn get_unit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Unit>>> {
    let unit = state
        .unit_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Unit not found"))?;
    Ok(Json(ApiResponse::ok(unit)))
}

/// POST /api/units
pub async fn create_unit(
    State(state): State<AppState>,
    Json(req): Json<UnitRequest>,
) -> ApiResult<Json<ApiResponse<Unit>>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let unit = state.unit_repo.create(&req.into_input()?).await?;
    Ok(Json(ApiResponse::ok(unit)))
}

/// PUT /api/units/{id}
pub async fn update_unit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UnitRequest>,
) -> ApiResult<Json<ApiResponse<Unit>>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let unit = state
        .unit_repo
        .update(id, &req.into_input()?)
        .await?
        .ok_or_else(|| AppError::not_found("Unit not found"))?;
    Ok(Json(ApiResponse::ok(unit)))
}

/// DELETE /api/units/{id}
pub async fn delete_unit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let deleted = state.unit_repo.delete(id).await?;
    if deleted == 0 {
        return Err(AppError::not_found("Unit not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse::new("Unit deleted"))))
}
