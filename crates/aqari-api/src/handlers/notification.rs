//! Notification handlers, including the user-triggered alert scan.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use aqari_core::error::AppError;
use aqari_core::types::pagination::PageResponse;
use aqari_entity::notification::Notification;

use crate::dto::response::{ApiResponse, CountResponse, MessageResponse, ScanResponse};
use crate::error::ApiResult;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// Filter parameters for notification listing.
#[derive(Debug, Deserialize)]
pub struct NotificationFilter {
    /// Only unread notifications.
    #[serde(default)]
    pub unread_only: bool,
}

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(filter): Query<NotificationFilter>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<Notification>>>> {
    let page = state
        .notification_repo
        .find_all(&params.into_page_request(), filter.unread_only)
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/notifications/scan
///
/// Runs one alert scan pass and reports how many new alerts were
/// generated. Re-running immediately is a no-op thanks to dedup.
pub async fn run_scan(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<ScanResponse>>> {
    let inserted = state.scan_service.run_scan().await?;
    Ok(Json(ApiResponse::ok(ScanResponse { inserted })))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<CountResponse>>> {
    let count = state.notification_repo.count_unread().await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let updated = state.notification_repo.mark_read(id).await?;
    if updated == 0 {
        return Err(AppError::not_found("Notification not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse::new("Marked as read"))))
}

/// PUT /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<CountResponse>>> {
    let marked = state.notification_repo.mark_all_read().await?;
    Ok(Json(ApiResponse::ok(CountResponse::from_rows_affected(
        marked,
    ))))
}

/// DELETE /api/notifications/{id}
pub async fn dismiss(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let deleted = state.notification_repo.delete(id).await?;
    if deleted == 0 {
        return Err(AppError::not_found("Notification not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse::new("Dismissed"))))
}
