use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::access_log::{record_scan, room_scan_history};
use crate::handler::reservation::{create_reservation, reservation_history};
use crate::handler::room::{room_timeline, search_rooms, show_room};

pub fn build_room_routers() -> Router<AppRegistry> {
    let room_routers = Router::new()
        .route("/", get(search_rooms))
        .route("/:room_id", get(show_room))
        .route("/:room_id/timeline", get(room_timeline))
        .route("/:room_id/reservations", post(create_reservation))
        .route("/:room_id/reservations", get(reservation_history))
        .route("/:room_id/scans", post(record_scan))
        .route("/:room_id/scans", get(room_scan_history));

    Router::new().nest("/rooms", room_routers)
}
