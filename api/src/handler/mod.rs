pub mod access_log;
pub mod health;
pub mod reservation;
pub mod room;
