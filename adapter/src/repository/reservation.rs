use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::{ReservationId, RoomId};
use kernel::model::reservation::{
    event::{CancelReservation, CreateReservation},
    Reservation,
};
use kernel::repository::reservation::ReservationRepository;
use kernel::schedule::window::TimeWindow;
use shared::error::{AppError, AppResult};
use uuid::Uuid;

use crate::database::{model::reservation::ReservationRow, ConnectionPool};

// LEFT JOIN で主催者情報も一緒に取得する共通の SELECT 句
const SELECT_RESERVATION: &str = r#"
    SELECT
        r.reservation_id,
        r.room_id,
        r.organizer_id,
        u.name AS organizer_name,
        u.department AS organizer_department,
        r.title,
        r.headcount,
        r.start_at,
        r.end_at,
        r.status,
        r.cancelled_by,
        r.created_at,
        r.updated_at
    FROM reservations AS r
    LEFT JOIN users AS u ON u.user_id = r.organizer_id
"#;

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    // 予約操作を行う
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId> {
        let mut tx = self.db.begin().await?;

        // トランザクション分離レベルを SERIALIZABLE に設定する
        self.set_transaction_serializable(&mut tx).await?;

        // 事前のチェックとして、以下を調べる。
        // - 指定の会議室 ID をもつ会議室が存在し、利用可能か
        // - 存在した場合、その時間帯にアクティブな予約が重なっていないか
        //
        // 上記の両方が Yes だった場合、このブロック以降の処理に進む
        {
            //
            // ① 会議室の存在確認 ＋ is_active チェック
            //
            let room: Option<(bool,)> = sqlx::query_as(
                r#"
                    SELECT is_active
                    FROM rooms
                    WHERE room_id = $1
                "#,
            )
            .bind(event.room_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            let room = match room {
                None => {
                    return Err(AppError::EntityNotFound(format!(
                        "room ({}) was not found",
                        event.room_id
                    )))
                }
                Some(r) => r,
            };

            if !room.0 {
                return Err(AppError::UnprocessableEntity(format!(
                    "room ({}) is not available for booking",
                    event.room_id
                )));
            }

            //
            // ② 希望時間帯がアクティブな予約と重なっていないか確認
            //    重複条件（半開区間）：
            //        existing.start < new.end AND new.start < existing.end
            //
            let overlap: Option<(Uuid,)> = sqlx::query_as(
                r#"
                    SELECT reservation_id
                    FROM reservations
                    WHERE room_id = $1
                      AND status <> 'CANCELLED'
                      AND start_at < $3
                      AND $2 < end_at
                    LIMIT 1
                "#,
            )
            .bind(event.room_id)
            .bind(event.window.start)
            .bind(event.window.end)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if overlap.is_some() {
                return Err(AppError::ReservationConflict(format!(
                    "room ({}) already has a reservation overlapping the requested window",
                    event.room_id
                )));
            }
        }

        // ここまでのチェックを通過すれば予約を作成する。テーブル側の排他制約
        // （tstzrange の EXCLUDE）が最後の砦となり、同時リクエストで上の
        // チェックをすり抜けた場合もどちらか一方は必ず失敗する
        let reservation_id = ReservationId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO reservations
                (reservation_id, room_id, organizer_id, title, headcount,
                 start_at, end_at, status)
                VALUES ($1, $2, $3, $4, $5, $6, $7, 'CONFIRMED')
            "#,
        )
        .bind(reservation_id)
        .bind(event.room_id)
        .bind(event.organizer_id)
        .bind(&event.title)
        .bind(event.headcount)
        .bind(event.window.start)
        .bind(event.window.end)
        .execute(&mut *tx)
        .await
        .map_err(map_write_error)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No reservation record has been created".into(),
            ));
        }

        // 参加者の紐付けを追加する
        for attendee_id in &event.attendee_ids {
            sqlx::query(
                r#"
                    INSERT INTO reservation_attendees (reservation_id, user_id)
                    VALUES ($1, $2)
                    ON CONFLICT DO NOTHING
                "#,
            )
            .bind(reservation_id)
            .bind(*attendee_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        }

        tx.commit().await.map_err(map_write_error)?;

        Ok(reservation_id)
    }

    // 予約キャンセル操作を行う。CONFIRMED / BLOCKED の予約のみ対象で、
    // 遷移は一方通行。レコードは削除せず履歴として保持する
    async fn cancel(&self, event: CancelReservation) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE reservations
                SET
                    status = 'CANCELLED',
                    cancelled_by = $2,
                    updated_at = CURRENT_TIMESTAMP
                WHERE reservation_id = $1
                  AND status <> 'CANCELLED'
            "#,
        )
        .bind(event.reservation_id)
        .bind(event.cancelled_by)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            // 何もしなかったことを成功と区別できるようにする
            return Err(AppError::EntityNotFound(
                "reservation not found or already cancelled".into(),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let sql = format!("{SELECT_RESERVATION} WHERE r.reservation_id = $1");
        sqlx::query_as::<_, ReservationRow>(&sql)
            .bind(reservation_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map(|row| row.map(Reservation::from))
            .map_err(AppError::SpecificOperationError)
    }

    // 空き検索とタイムライン表示の両方がこのクエリを使う。読み取りなので
    // トランザクションは張らない
    async fn find_active_in_range(
        &self,
        room_ids: &[RoomId],
        range: TimeWindow,
    ) -> AppResult<Vec<Reservation>> {
        let ids: Vec<Uuid> = room_ids.iter().map(|id| id.raw()).collect();
        let sql = format!(
            r#"{SELECT_RESERVATION}
                WHERE r.room_id = ANY($1)
                  AND r.status <> 'CANCELLED'
                  AND r.start_at < $3
                  AND $2 < r.end_at
                ORDER BY r.start_at ASC
            "#
        );
        sqlx::query_as::<_, ReservationRow>(&sql)
            .bind(&ids)
            .bind(range.start)
            .bind(range.end)
            .fetch_all(self.db.inner_ref())
            .await
            .map(|rows| rows.into_iter().map(Reservation::from).collect())
            .map_err(AppError::SpecificOperationError)
    }

    // キャンセル済みを含む全履歴を新しい順に返す。直近のキャンセルだけに
    // 絞るのは表示側の都合であり、ここでは絞らない
    async fn find_history_by_room_id(&self, room_id: RoomId) -> AppResult<Vec<Reservation>> {
        let sql = format!(
            r#"{SELECT_RESERVATION}
                WHERE r.room_id = $1
                ORDER BY r.start_at DESC
            "#
        );
        sqlx::query_as::<_, ReservationRow>(&sql)
            .bind(room_id)
            .fetch_all(self.db.inner_ref())
            .await
            .map(|rows| rows.into_iter().map(Reservation::from).collect())
            .map_err(AppError::SpecificOperationError)
    }
}

impl ReservationRepositoryImpl {
    // create メソッドでのトランザクションを利用するにあたり
    // トランザクション分離レベルを SERIALIZABLE にするために
    // 内部的に使うメソッド
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}

// 排他制約違反（23P01）とシリアライズ失敗（40001）は、同時リクエストが
// 同じ空き枠を取り合ったことを意味するため予約競合として返す
fn map_write_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        if let Some(code) = db_err.code() {
            if code == "23P01" || code == "40001" {
                return AppError::ReservationConflict(
                    "the requested window was taken by another reservation".into(),
                );
            }
        }
    }
    AppError::SpecificOperationError(err)
}
