//! Property handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use aqari_core::error::AppError;
use aqari_core::types::pagination::PageResponse;
use aqari_entity::property::Property;

use crate::dto::request::PropertyRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/properties
pub async fn list_properties(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<Property>>>> {
    let page = state
        .property_repo
        .find_all(&params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/properties/{id}
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Property>>> {
    let property = state
        .property_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Property not found"))?;
    Ok(Json(ApiResponse::ok(property)))
}

/// POST /api/properties
pub async fn create_property(
    State(state): State<AppState>,
    Json(req): Json<PropertyRequest>,
) -> ApiResult<Json<ApiResponse<Property>>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let property = state.property_repo.create(&req.into_input()).await?;
    Ok(Json(ApiResponse::ok(property)))
}

/// PUT /api/properties/{id}
pub async fn update_property(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<PropertyRequest>,
) -> ApiResult<Json<ApiResponse<Property>>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let property = state
        .property_repo
        .update(id, &req.into_input())
        .await?
        .ok_or_else(|| AppError::not_found("Property not found"))?;
    Ok(Json(ApiResponse::ok(property)))
}

/// DELETE /api/properties/{id}
pub async fn delete_property(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let deleted = state.property_repo.delete(id).await?;
    if deleted == 0 {
        return Err(AppError::not_found("Property not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Property deleted",
    ))))
}
