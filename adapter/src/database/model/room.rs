use kernel::model::{id::RoomId, room::Room};

#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub room_id: RoomId,
    pub name: String,
    pub floor: String,
    pub capacity: i32,
    pub is_active: bool,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            room_id,
            name,
            floor,
            capacity,
            is_active,
        } = value;
        Room {
            room_id,
            name,
            floor,
            capacity,
            is_active,
        }
    }
}
