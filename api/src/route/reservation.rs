use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{cancel_reservation, show_reservation};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let reservation_routers = Router::new()
        .route("/:reservation_id", get(show_reservation))
        .route("/:reservation_id/cancel", post(cancel_reservation));

    Router::new().nest("/reservations", reservation_routers)
}
