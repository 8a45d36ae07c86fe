use crate::model::id::{ReservationId, RoomId, UserId};
use crate::model::user::User;
use crate::schedule::window::TimeWindow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod event;

/// Lifecycle state of a reservation. `Confirmed` and `Blocked` participate in
/// the per-room no-overlap invariant; `Cancelled` rows are history only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "reservation_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
    Blocked,
}

impl ReservationStatus {
    pub fn is_active(self) -> bool {
        !matches!(self, ReservationStatus::Cancelled)
    }
}

#[derive(Debug, Clone)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub room_id: RoomId,
    /// None when the organizer's user record was removed after booking.
    pub organizer: Option<User>,
    pub title: Option<String>,
    pub headcount: Option<i32>,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub status: ReservationStatus,
    pub cancelled_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn window(&self) -> TimeWindow {
        TimeWindow {
            start: self.start_at,
            end: self.end_at,
        }
    }
}
