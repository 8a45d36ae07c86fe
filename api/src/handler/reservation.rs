use crate::{
    extractor::AuthorizedUser,
    model::reservation::{
        CreateReservationRequest, CreateReservationResponse, ReservationResponse,
        ReservationsResponse,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use garde::Validate;
use kernel::model::{
    id::{ReservationId, RoomId},
    reservation::event::{CancelReservation, CreateReservation},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn create_reservation(
    user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    // ビジネスルールの検証はここで完結させる。重複チェックだけは
    // リポジトリ側のトランザクション内で改めて行われる
    let policy = registry.window_policy();
    let today = policy.local_date(Utc::now());
    let window = policy.validate(req.start_at, req.end_at, today)?;

    let event = CreateReservation::new(
        room_id,
        user.id(),
        window,
        req.title,
        req.headcount,
        req.attendee_ids,
    );
    let reservation_id = registry.reservation_repository().create(event).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateReservationResponse { reservation_id }),
    ))
}

// 所有者チェックは行わない設計：主催者でも管理者でもキャンセルできる
pub async fn cancel_reservation(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let event = CancelReservation::new(reservation_id, user.id());
    registry
        .reservation_repository()
        .cancel(event)
        .await
        .map(|_| StatusCode::OK)
}

pub async fn show_reservation(
    _user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .reservation_repository()
        .find_by_id(reservation_id)
        .await
        .and_then(|r| match r {
            Some(r) => Ok(Json(r.into())),
            None => Err(AppError::EntityNotFound("reservation not found".into())),
        })
}

// キャンセル済みを含む全履歴を返す
pub async fn reservation_history(
    _user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_repository()
        .find_history_by_room_id(room_id)
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}
