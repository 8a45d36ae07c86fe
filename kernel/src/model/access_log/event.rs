use crate::model::access_log::AccessAction;
use crate::model::id::{RoomId, UserId};
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(Debug, new)]
pub struct RecordScan {
    pub room_id: RoomId,
    pub user_id: UserId,
    pub action: AccessAction,
    pub scanned_at: DateTime<Utc>,
}
