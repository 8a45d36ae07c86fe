use chrono::{NaiveDate, NaiveTime};
use garde::Validate;
use kernel::model::{id::RoomId, room::Room};
use kernel::schedule::availability::{RoomAvailability, Slot};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub room_id: RoomId,
    pub name: String,
    pub floor: String,
    pub capacity: i32,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            room_id,
            name,
            floor,
            capacity,
            is_active: _,
        } = value;
        Self {
            room_id,
            name,
            floor,
            capacity,
        }
    }
}

// 空き検索クエリ。時刻は "HH:MM:SS" 表記で受け取る
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoomSearchQuery {
    #[garde(skip)]
    pub date: NaiveDate,
    #[garde(skip)]
    pub start: NaiveTime,
    #[garde(skip)]
    pub end: NaiveTime,
    #[garde(inner(range(min = 1)))]
    pub headcount: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSearchResponse {
    pub items: Vec<RoomAvailabilityResponse>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAvailabilityResponse {
    pub room: RoomResponse,
    pub availability: RoomAvailability,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineQuery {
    pub date: NaiveDate,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineResponse {
    pub room_id: RoomId,
    pub date: NaiveDate,
    pub slots: Vec<SlotResponse>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotResponse {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub busy: bool,
    pub label: Option<String>,
}

impl From<Slot> for SlotResponse {
    fn from(value: Slot) -> Self {
        let Slot {
            start,
            end,
            busy,
            label,
        } = value;
        Self {
            start,
            end,
            busy,
            label,
        }
    }
}
