use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{ReservationId, RoomId, UserId},
    reservation::{Reservation, ReservationStatus},
    user::User,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[garde(skip)]
    pub start_at: DateTime<Utc>,
    #[garde(skip)]
    pub end_at: DateTime<Utc>,
    #[garde(inner(length(min = 1, max = 255)))]
    pub title: Option<String>,
    #[garde(inner(range(min = 1)))]
    pub headcount: Option<i32>,
    #[garde(skip)]
    #[serde(default)]
    pub attendee_ids: Vec<UserId>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationResponse {
    pub reservation_id: ReservationId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub items: Vec<ReservationResponse>,
}

impl From<Vec<Reservation>> for ReservationsResponse {
    fn from(value: Vec<Reservation>) -> Self {
        Self {
            items: value.into_iter().map(ReservationResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub reservation_id: ReservationId,
    pub room_id: RoomId,
    pub organizer: Option<OrganizerResponse>,
    pub title: Option<String>,
    pub headcount: Option<i32>,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub status: ReservationStatus,
    pub cancelled_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            reservation_id,
            room_id,
            organizer,
            title,
            headcount,
            start_at,
            end_at,
            status,
            cancelled_by,
            created_at,
            updated_at,
        } = value;
        Self {
            reservation_id,
            room_id,
            organizer: organizer.map(OrganizerResponse::from),
            title,
            headcount,
            start_at,
            end_at,
            status,
            cancelled_by,
            created_at,
            updated_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizerResponse {
    pub user_id: UserId,
    pub name: String,
    pub department: String,
}

impl From<User> for OrganizerResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            name,
            department,
        } = value;
        Self {
            user_id,
            name,
            department,
        }
    }
}
