//! WhatsApp reminder handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use aqari_core::error::AppError;
use aqari_core::types::pagination::PageResponse;
use aqari_entity::reminder::{ReminderStatus, WhatsAppReminder};
use aqari_service::reminder::service::{ReminderPreview, UpcomingReminder};

use crate::dto::request::ReminderStatusRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// Query parameters for the upcoming-due listing.
#[derive(Debug, Deserialize)]
pub struct UpcomingParams {
    /// How many days ahead to look (default 5).
    pub days_ahead: Option<u64>,
}

/// GET /api/reminders/upcoming
pub async fn upcoming_due(
    State(state): State<AppState>,
    Query(params): Query<UpcomingParams>,
) -> ApiResult<Json<ApiResponse<Vec<UpcomingReminder>>>> {
    let eligible = state
        .reminder_service
        .find_upcoming_due(params.days_ahead)
        .await?;
    Ok(Json(ApiResponse::ok(eligible)))
}

/// GET /api/reminders/invoice/{invoice_id}/link
pub async fn reminder_link(
    State(state): State<AppState>,
    Path(invoice_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<ReminderPreview>>> {
    let preview = state.reminder_service.preview(invoice_id).await?;
    Ok(Json(ApiResponse::ok(preview)))
}

/// POST /api/reminders/invoice/{invoice_id}/sent
pub async fn log_sent(
    State(state): State<AppState>,
    Path(invoice_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<WhatsAppReminder>>> {
    let log = state.reminder_service.log_sent(invoice_id).await?;
    Ok(Json(ApiResponse::ok(log)))
}

/// GET /api/reminders
pub async fn list_logs(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<WhatsAppReminder>>>> {
    let page = state
        .reminder_repo
        .find_all(&params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// PUT /api/reminders/{id}/status
///
/// Marks a log row sent or failed after the fact. Moving to `sent`
/// stamps `sent_at`; any other status clears it.
pub async fn update_log_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReminderStatusRequest>,
) -> ApiResult<Json<ApiResponse<WhatsAppReminder>>> {
    let status = req.parse_status()?;
    let sent_at = match status {
        ReminderStatus::Sent => Some(Utc::now()),
        _ => None,
    };
    let log = state
        .reminder_repo
        .update_status(id, status.as_str(), sent_at)
        .await?
        .ok_or_else(|| AppError::not_found("Reminder log not found"))?;
    Ok(Json(ApiResponse::ok(log)))
}

/// DELETE /api/reminders/{id}
pub async fn delete_log(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.reminder_service.delete_log(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Reminder log deleted",
    ))))
}
