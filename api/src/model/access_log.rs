use chrono::{DateTime, Utc};
use kernel::model::{
    access_log::{AccessAction, AccessLog},
    id::{AccessLogId, ReservationId, RoomId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordScanRequest {
    pub action: Option<AccessAction>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLogResponse {
    pub access_log_id: AccessLogId,
    pub room_id: RoomId,
    pub user_id: UserId,
    pub reservation_id: Option<ReservationId>,
    pub action: AccessAction,
    pub scanned_at: DateTime<Utc>,
}

impl From<AccessLog> for AccessLogResponse {
    fn from(value: AccessLog) -> Self {
        let AccessLog {
            access_log_id,
            room_id,
            user_id,
            reservation_id,
            action,
            scanned_at,
        } = value;
        Self {
            access_log_id,
            room_id,
            user_id,
            reservation_id,
            action,
            scanned_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLogsResponse {
    pub items: Vec<AccessLogResponse>,
}

impl From<Vec<AccessLog>> for AccessLogsResponse {
    fn from(value: Vec<AccessLog>) -> Self {
        Self {
            items: value.into_iter().map(AccessLogResponse::from).collect(),
        }
    }
}
