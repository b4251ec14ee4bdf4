//! Settings handlers.

use axum::Json;
use axum::extract::State;

use aqari_entity::settings::NotificationDisplaySettings;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/settings/notifications
pub async fn get_notification_settings(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<NotificationDisplaySettings>>> {
    let settings = state.settings_service.notification_display().await?;
    Ok(Json(ApiResponse::ok(settings)))
}

/// PUT /api/settings/notifications
pub async fn update_notification_settings(
    State(state): State<AppState>,
    Json(req): Json<NotificationDisplaySettings>,
) -> ApiResult<Json<ApiResponse<NotificationDisplaySettings>>> {
    let settings = state
        .settings_service
        .update_notification_display(&req)
        .await?;
    Ok(Json(ApiResponse::ok(settings)))
}
