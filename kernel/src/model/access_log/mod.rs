use crate::model::id::{AccessLogId, ReservationId, RoomId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "access_action", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessAction {
    Entry,
    Exit,
}

/// Append-only presence record created by a QR scan at the room door.
#[derive(Debug, Clone)]
pub struct AccessLog {
    pub access_log_id: AccessLogId,
    pub room_id: RoomId,
    pub user_id: UserId,
    /// The reservation in progress at scan time, when one existed. The link
    /// is informational; a scan without one is still recorded.
    pub reservation_id: Option<ReservationId>,
    pub action: AccessAction,
    pub scanned_at: DateTime<Utc>,
}
