use crate::model::reservation::Reservation;
use crate::schedule::overlap::first_conflict;
use crate::schedule::window::{TimeWindow, WindowPolicy};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Search-result classification of a room for a requested window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoomAvailability {
    /// Free for the window and the whole day, with enough capacity.
    Available,
    /// Booked at some other time that day; the requested window is free.
    Partial,
    /// An active reservation overlaps the window, or the room is too small.
    Unavailable,
}

pub fn classify(
    capacity: i32,
    headcount: Option<i32>,
    reservations_that_day: &[Reservation],
    requested: &TimeWindow,
) -> RoomAvailability {
    if headcount.is_some_and(|h| capacity < h) {
        return RoomAvailability::Unavailable;
    }
    if first_conflict(reservations_that_day, requested).is_some() {
        return RoomAvailability::Unavailable;
    }
    if reservations_that_day.iter().any(Reservation::is_active) {
        RoomAvailability::Partial
    } else {
        RoomAvailability::Available
    }
}

/// One fixed-granularity cell of the day timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub busy: bool,
    /// Organizer label for busy cells; absent when the organizer record is
    /// gone or the cell is free.
    pub label: Option<String>,
}

/// Busy/free grid across the operating day. Cell boundaries come from the
/// same policy the validator uses, so the grid and admission cannot drift.
pub fn slot_grid(
    policy: &WindowPolicy,
    day: NaiveDate,
    reservations: &[Reservation],
) -> Vec<Slot> {
    policy
        .slot_starts()
        .into_iter()
        .map(|start| {
            let end = start + policy.slot();
            let cell = TimeWindow {
                start: policy.instant(day, start),
                end: policy.instant(day, end),
            };
            let hit = first_conflict(reservations, &cell);
            Slot {
                start,
                end,
                busy: hit.is_some(),
                label: hit
                    .and_then(|r| r.organizer.as_ref())
                    .map(|u| u.display_label()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::id::{ReservationId, RoomId, UserId};
    use crate::model::reservation::ReservationStatus;
    use crate::model::user::User;
    use chrono::{DateTime, Utc};
    use shared::config::SchedulingConfig;

    fn policy() -> WindowPolicy {
        WindowPolicy::from_config(&SchedulingConfig::default()).unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 7).unwrap()
    }

    fn at(hm: (u32, u32)) -> DateTime<Utc> {
        policy().instant(day(), NaiveTime::from_hms_opt(hm.0, hm.1, 0).unwrap())
    }

    fn reservation(start: (u32, u32), end: (u32, u32), status: ReservationStatus) -> Reservation {
        Reservation {
            reservation_id: ReservationId::new(),
            room_id: RoomId::new(),
            organizer: Some(User {
                user_id: UserId::new(),
                name: "Tanaka".into(),
                department: "Sales".into(),
            }),
            title: Some("standup".into()),
            headcount: Some(4),
            start_at: at(start),
            end_at: at(end),
            status,
            cancelled_by: None,
            created_at: at(start),
            updated_at: at(start),
        }
    }

    fn window(start: (u32, u32), end: (u32, u32)) -> TimeWindow {
        TimeWindow {
            start: at(start),
            end: at(end),
        }
    }

    #[test]
    fn empty_day_is_available() {
        let got = classify(8, Some(4), &[], &window((14, 0), (15, 0)));
        assert_eq!(got, RoomAvailability::Available);
    }

    #[test]
    fn booking_elsewhere_in_the_day_is_partial() {
        let existing = vec![reservation((9, 0), (10, 0), ReservationStatus::Confirmed)];
        let got = classify(8, None, &existing, &window((14, 0), (15, 0)));
        assert_eq!(got, RoomAvailability::Partial);
    }

    #[test]
    fn overlapping_booking_is_unavailable() {
        let existing = vec![reservation((9, 0), (10, 0), ReservationStatus::Confirmed)];
        let got = classify(8, None, &existing, &window((9, 30), (10, 0)));
        assert_eq!(got, RoomAvailability::Unavailable);
    }

    #[test]
    fn cancelled_bookings_do_not_count() {
        let existing = vec![reservation((9, 0), (10, 0), ReservationStatus::Cancelled)];
        let got = classify(8, None, &existing, &window((9, 0), (10, 0)));
        assert_eq!(got, RoomAvailability::Available);
    }

    #[test]
    fn undersized_room_is_unavailable_even_when_free() {
        let got = classify(4, Some(10), &[], &window((14, 0), (15, 0)));
        assert_eq!(got, RoomAvailability::Unavailable);
    }

    #[test]
    fn grid_has_one_cell_per_slot() {
        let grid = slot_grid(&policy(), day(), &[]);
        assert_eq!(grid.len(), 18);
        assert!(grid.iter().all(|s| !s.busy && s.label.is_none()));
        assert_eq!(grid[0].start, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(
            grid.last().unwrap().end,
            NaiveTime::from_hms_opt(17, 30, 0).unwrap()
        );
    }

    #[test]
    fn grid_marks_reserved_cells_busy_with_a_label() {
        let existing = vec![reservation((10, 0), (11, 0), ReservationStatus::Confirmed)];
        let grid = slot_grid(&policy(), day(), &existing);
        let busy: Vec<&Slot> = grid.iter().filter(|s| s.busy).collect();
        assert_eq!(busy.len(), 2);
        assert_eq!(busy[0].start, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(busy[1].start, NaiveTime::from_hms_opt(10, 30, 0).unwrap());
        assert_eq!(busy[0].label.as_deref(), Some("Tanaka / Sales"));
    }

    #[test]
    fn grid_cell_touching_a_reservation_stays_free() {
        let existing = vec![reservation((10, 0), (11, 0), ReservationStatus::Confirmed)];
        let grid = slot_grid(&policy(), day(), &existing);
        let before = grid
            .iter()
            .find(|s| s.start == NaiveTime::from_hms_opt(9, 30, 0).unwrap())
            .unwrap();
        let after = grid
            .iter()
            .find(|s| s.start == NaiveTime::from_hms_opt(11, 0, 0).unwrap())
            .unwrap();
        assert!(!before.busy);
        assert!(!after.busy);
    }

    #[test]
    fn grid_label_absent_when_organizer_was_removed() {
        let mut r = reservation((10, 0), (10, 30), ReservationStatus::Confirmed);
        r.organizer = None;
        let grid = slot_grid(&policy(), day(), &[r]);
        let cell = grid
            .iter()
            .find(|s| s.start == NaiveTime::from_hms_opt(10, 0, 0).unwrap())
            .unwrap();
        assert!(cell.busy);
        assert!(cell.label.is_none());
    }

    #[test]
    fn grid_agrees_with_the_validator_on_slot_boundaries() {
        let p = policy();
        let grid = slot_grid(&p, day(), &[]);
        for slot in &grid {
            let start = p.instant(day(), slot.start);
            let end = p.instant(day(), slot.end);
            assert!(p.validate(start, end, day()).is_ok());
        }
    }
}
