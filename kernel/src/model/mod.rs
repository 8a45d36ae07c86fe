pub mod access_log;
pub mod id;
pub mod reservation;
pub mod room;
pub mod user;
