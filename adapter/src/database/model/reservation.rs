use kernel::model::{
    id::{ReservationId, RoomId, UserId},
    reservation::{Reservation, ReservationStatus},
    user::User,
};
use sqlx::types::chrono::{DateTime, Utc};

// 予約一覧・履歴を取得する際に使う型。organizer_* は users との LEFT JOIN で
// 取得するため、主催者のアカウントが削除済みの場合はすべて None になる
#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub reservation_id: ReservationId,
    pub room_id: RoomId,
    pub organizer_id: Option<UserId>,
    pub organizer_name: Option<String>,
    pub organizer_department: Option<String>,
    pub title: Option<String>,
    pub headcount: Option<i32>,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub status: ReservationStatus,
    pub cancelled_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReservationRow> for Reservation {
    fn from(value: ReservationRow) -> Self {
        let ReservationRow {
            reservation_id,
            room_id,
            organizer_id,
            organizer_name,
            organizer_department,
            title,
            headcount,
            start_at,
            end_at,
            status,
            cancelled_by,
            created_at,
            updated_at,
        } = value;
        let organizer = match (organizer_id, organizer_name, organizer_department) {
            (Some(user_id), Some(name), Some(department)) => Some(User {
                user_id,
                name,
                department,
            }),
            _ => None,
        };
        Reservation {
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
        }
    }
}
