use crate::model::reservation::Reservation;
use crate::schedule::window::TimeWindow;

/// The first active reservation intersecting the window, if any. Cancelled
/// reservations never conflict. The authoritative check before a write runs
/// inside the store transaction; this predicate serves the read paths.
pub fn first_conflict<'a>(
    reservations: &'a [Reservation],
    window: &TimeWindow,
) -> Option<&'a Reservation> {
    reservations
        .iter()
        .find(|r| r.is_active() && r.window().overlaps(window))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::id::{ReservationId, RoomId};
    use crate::model::reservation::ReservationStatus;
    use chrono::{DateTime, Utc};

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn reservation(start: &str, end: &str, status: ReservationStatus) -> Reservation {
        Reservation {
            reservation_id: ReservationId::new(),
            room_id: RoomId::new(),
            organizer: None,
            title: None,
            headcount: None,
            start_at: ts(start),
            end_at: ts(end),
            status,
            cancelled_by: None,
            created_at: ts(start),
            updated_at: ts(start),
        }
    }

    fn window(start: &str, end: &str) -> TimeWindow {
        TimeWindow {
            start: ts(start),
            end: ts(end),
        }
    }

    #[test]
    fn overlapping_confirmed_reservation_conflicts() {
        let existing = vec![reservation(
            "2026-09-07T10:00:00Z",
            "2026-09-07T11:00:00Z",
            ReservationStatus::Confirmed,
        )];
        let proposed = window("2026-09-07T10:30:00Z", "2026-09-07T11:30:00Z");
        assert!(first_conflict(&existing, &proposed).is_some());
    }

    #[test]
    fn touching_reservation_does_not_conflict() {
        let existing = vec![reservation(
            "2026-09-07T10:00:00Z",
            "2026-09-07T11:00:00Z",
            ReservationStatus::Confirmed,
        )];
        let proposed = window("2026-09-07T11:00:00Z", "2026-09-07T12:00:00Z");
        assert!(first_conflict(&existing, &proposed).is_none());
    }

    #[test]
    fn blocked_reservations_conflict_like_confirmed() {
        let existing = vec![reservation(
            "2026-09-07T13:00:00Z",
            "2026-09-07T14:00:00Z",
            ReservationStatus::Blocked,
        )];
        let proposed = window("2026-09-07T13:30:00Z", "2026-09-07T14:00:00Z");
        assert!(first_conflict(&existing, &proposed).is_some());
    }

    #[test]
    fn cancelled_reservations_never_conflict() {
        let existing = vec![reservation(
            "2026-09-07T10:00:00Z",
            "2026-09-07T11:00:00Z",
            ReservationStatus::Cancelled,
        )];
        let proposed = window("2026-09-07T10:00:00Z", "2026-09-07T11:00:00Z");
        assert!(first_conflict(&existing, &proposed).is_none());
    }

}
