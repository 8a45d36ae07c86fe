pub mod access_log;
pub mod reservation;
pub mod room;
pub mod user;
