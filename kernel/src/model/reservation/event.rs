use crate::model::id::{ReservationId, RoomId, UserId};
use crate::schedule::window::TimeWindow;
use derive_new::new;

/// Write event for a new reservation. The window has already passed the
/// policy validator; the repository re-checks overlap inside its transaction.
#[derive(Debug, new)]
pub struct CreateReservation {
    pub room_id: RoomId,
    pub organizer_id: UserId,
    pub window: TimeWindow,
    pub title: Option<String>,
    pub headcount: Option<i32>,
    pub attendee_ids: Vec<UserId>,
}

#[derive(Debug, new)]
pub struct CancelReservation {
    pub reservation_id: ReservationId,
    pub cancelled_by: UserId,
}
