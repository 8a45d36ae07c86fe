use kernel::model::{
    access_log::{AccessAction, AccessLog},
    id::{AccessLogId, ReservationId, RoomId, UserId},
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct AccessLogRow {
    pub access_log_id: AccessLogId,
    pub room_id: RoomId,
    pub user_id: UserId,
    pub reservation_id: Option<ReservationId>,
    pub action: AccessAction,
    pub scanned_at: DateTime<Utc>,
}

impl From<AccessLogRow> for AccessLog {
    fn from(value: AccessLogRow) -> Self {
        let AccessLogRow {
            access_log_id,
            room_id,
            user_id,
            reservation_id,
            action,
            scanned_at,
        } = value;
        AccessLog {
            access_log_id,
            room_id,
            user_id,
            reservation_id,
            action,
            scanned_at,
        }
    }
}
