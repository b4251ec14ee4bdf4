//! Tenant handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use aqari_core::error::AppError;
use aqari_core::types::pagination::PageResponse;
use aqari_entity::tenant::Tenant;

use crate::dto::request::TenantRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/tenants
pub async fn list_tenants(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<Tenant>>>> {
    let page = state
        .tenant_repo
        .find_all(&params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/tenants/{id}
pub async fn get_tenant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Tenant>>> {
    let tenant = state
        .tenant_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Tenant not found"))?;
    Ok(Json(ApiResponse::ok(tenant)))
}

/// POST /api/tenants
pub async fn create_tenant(
    State(state): State<AppState>,
    Json(req): Json<TenantRequest>,
) -> ApiResult<Json<ApiResponse<Tenant>>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let tenant = state.tenant_repo.create(&req.into_input()).await?;
    Ok(Json(ApiResponse::ok(tenant)))
}

/// PUT /api/tenants/{id}
pub async fn update_tenant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TenantRequest>,
) -> ApiResult<Json<ApiResponse<Tenant>>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let tenant = state
        .tenant_repo
        .update(id, &req.into_input())
        .await?
        .ok_or_else(|| AppError::not_found("Tenant not found"))?;
    Ok(Json(ApiResponse::ok(tenant)))
}

/// DELETE /api/tenants/{id}
pub async fn delete_tenant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let deleted = state.tenant_repo.delete(id).await?;
    if deleted == 0 {
        return Err(AppError::not_found("Tenant not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse::new("Tenant deleted"))))
}
