use crate::model::{
    id::{ReservationId, RoomId},
    reservation::{
        event::{CancelReservation, CreateReservation},
        Reservation,
    },
};
use crate::schedule::window::TimeWindow;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    // 予約操作を行う。重複チェックと INSERT は同一トランザクションで実行される
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId>;
    // 予約を CANCELLED に遷移させる。対象がない・すでに CANCELLED の場合はエラー
    async fn cancel(&self, event: CancelReservation) -> AppResult<()>;
    // reservation_id から Reservation 型のデータを渡す
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
    // 指定した会議室群・期間に重なるアクティブな予約を取得する
    async fn find_active_in_range(
        &self,
        room_ids: &[RoomId],
        range: TimeWindow,
    ) -> AppResult<Vec<Reservation>>;
    // 会議室の予約履歴（キャンセル済みを含む）を取得する
    async fn find_history_by_room_id(&self, room_id: RoomId) -> AppResult<Vec<Reservation>>;
}
