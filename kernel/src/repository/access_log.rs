use crate::model::access_log::{event::RecordScan, AccessLog};
use crate::model::id::RoomId;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AccessLogRepository: Send + Sync {
    // 入退室スキャンを記録する。進行中の予約があれば紐付ける
    async fn record(&self, event: RecordScan) -> AppResult<AccessLog>;
    // 会議室の直近のスキャン履歴を取得する
    async fn find_recent_by_room_id(
        &self,
        room_id: RoomId,
        limit: i64,
    ) -> AppResult<Vec<AccessLog>>;
}
