use crate::model::id::RoomId;
use crate::model::room::Room;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    // 有効な会議室の一覧を取得する
    async fn find_active_all(&self) -> AppResult<Vec<Room>>;
    // 会議室 ID から会議室を取得する
    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>>;
}
