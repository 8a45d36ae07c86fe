use async_trait::async_trait;
use derive_new::new;
use kernel::model::access_log::{event::RecordScan, AccessLog};
use kernel::model::id::{AccessLogId, ReservationId, RoomId};
use kernel::repository::access_log::AccessLogRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::access_log::AccessLogRow, ConnectionPool};

#[derive(new)]
pub struct AccessLogRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AccessLogRepository for AccessLogRepositoryImpl {
    async fn record(&self, event: RecordScan) -> AppResult<AccessLog> {
        // スキャン時刻を含む進行中の CONFIRMED 予約を探す。見つからなくても
        // 記録自体は行う（紐付けは情報としての付加であり前提条件ではない）
        let reservation_id: Option<ReservationId> = sqlx::query_scalar(
            r#"
                SELECT reservation_id
                FROM reservations
                WHERE room_id = $1
                  AND status = 'CONFIRMED'
                  AND start_at <= $2
                  AND $2 < end_at
                LIMIT 1
            "#,
        )
        .bind(event.room_id)
        .bind(event.scanned_at)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let access_log_id = AccessLogId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO access_logs
                (access_log_id, room_id, user_id, reservation_id, action, scanned_at)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(access_log_id)
        .bind(event.room_id)
        .bind(event.user_id)
        .bind(reservation_id)
        .bind(event.action)
        .bind(event.scanned_at)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No access log record has been created".into(),
            ));
        }

        Ok(AccessLog {
            access_log_id,
            room_id: event.room_id,
            user_id: event.user_id,
            reservation_id,
            action: event.action,
            scanned_at: event.scanned_at,
        })
    }

    async fn find_recent_by_room_id(
        &self,
        room_id: RoomId,
        limit: i64,
    ) -> AppResult<Vec<AccessLog>> {
        sqlx::query_as::<_, AccessLogRow>(
            r#"
                SELECT access_log_id, room_id, user_id, reservation_id, action, scanned_at
                FROM access_logs
                WHERE room_id = $1
                ORDER BY scanned_at DESC
                LIMIT $2
            "#,
        )
        .bind(room_id)
        .bind(limit)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(AccessLog::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}
