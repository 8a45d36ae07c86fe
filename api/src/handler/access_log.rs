use crate::{
    extractor::AuthorizedUser,
    model::access_log::{AccessLogResponse, AccessLogsResponse, RecordScanRequest},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use kernel::model::{
    access_log::{event::RecordScan, AccessAction},
    id::RoomId,
};
use registry::AppRegistry;
use shared::error::AppResult;

const SCAN_HISTORY_LIMIT: i64 = 50;

// QR スキャンによる入退室の記録。進行中の予約の有無に関わらず記録する
pub async fn record_scan(
    user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<RecordScanRequest>,
) -> AppResult<impl IntoResponse> {
    let event = RecordScan::new(
        room_id,
        user.id(),
        req.action.unwrap_or(AccessAction::Entry),
        Utc::now(),
    );
    registry
        .access_log_repository()
        .record(event)
        .await
        .map(|log| (StatusCode::CREATED, Json(AccessLogResponse::from(log))))
}

pub async fn room_scan_history(
    _user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AccessLogsResponse>> {
    registry
        .access_log_repository()
        .find_recent_by_room_id(room_id, SCAN_HISTORY_LIMIT)
        .await
        .map(AccessLogsResponse::from)
        .map(Json)
}
