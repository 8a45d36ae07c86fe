use crate::{
    extractor::AuthorizedUser,
    model::room::{
        RoomAvailabilityResponse, RoomResponse, RoomSearchQuery, RoomSearchResponse,
        SlotResponse, TimelineQuery, TimelineResponse,
    },
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use garde::Validate;
use kernel::model::{id::RoomId, room::sort_rooms};
use kernel::schedule::availability::{classify, slot_grid};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

// 日付・時間帯・人数から各会議室を AVAILABLE / PARTIAL / UNAVAILABLE に
// 分類して返す。並び順はフロア→名前
pub async fn search_rooms(
    _user: AuthorizedUser,
    Query(query): Query<RoomSearchQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomSearchResponse>> {
    query.validate(&())?;

    let policy = registry.window_policy();
    let start = policy.instant(query.date, query.start);
    let end = policy.instant(query.date, query.end);
    let today = policy.local_date(Utc::now());
    let window = policy.validate(start, end, today)?;

    let mut rooms = registry.room_repository().find_active_all().await?;
    sort_rooms(&mut rooms);

    let room_ids: Vec<RoomId> = rooms.iter().map(|r| r.room_id).collect();
    let reservations = registry
        .reservation_repository()
        .find_active_in_range(&room_ids, policy.day_span(query.date))
        .await?;

    let items = rooms
        .into_iter()
        .map(|room| {
            let of_room: Vec<_> = reservations
                .iter()
                .filter(|r| r.room_id == room.room_id)
                .cloned()
                .collect();
            let availability = classify(room.capacity, query.headcount, &of_room, &window);
            RoomAvailabilityResponse {
                room: RoomResponse::from(room),
                availability,
            }
        })
        .collect();

    Ok(Json(RoomSearchResponse { items }))
}

pub async fn show_room(
    _user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomResponse>> {
    registry
        .room_repository()
        .find_by_id(room_id)
        .await
        .and_then(|room| match room {
            Some(room) => Ok(Json(room.into())),
            None => Err(AppError::EntityNotFound("room not found".into())),
        })
}

// 1 日分の埋まり具合をスロット単位で返す（タイムライン表示用）
pub async fn room_timeline(
    _user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    Query(query): Query<TimelineQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TimelineResponse>> {
    let room = registry
        .room_repository()
        .find_by_id(room_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("room not found".into()))?;

    let policy = registry.window_policy();
    let reservations = registry
        .reservation_repository()
        .find_active_in_range(&[room.room_id], policy.day_span(query.date))
        .await?;

    let slots = slot_grid(&policy, query.date, &reservations)
        .into_iter()
        .map(SlotResponse::from)
        .collect();

    Ok(Json(TimelineResponse {
        room_id: room.room_id,
        date: query.date,
        slots,
    }))
}
