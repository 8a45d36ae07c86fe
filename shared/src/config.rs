use anyhow::Result;
use std::env;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub scheduling: SchedulingConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DATABASE_HOST")?,
            port: env::var("DATABASE_PORT")?.parse()?,
            username: env::var("DATABASE_USERNAME")?,
            password: env::var("DATABASE_PASSWORD")?,
            database: env::var("DATABASE_NAME")?,
        };
        let scheduling = SchedulingConfig::from_env()?;
        Ok(Self {
            database,
            scheduling,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

/// Scheduling policy knobs. Raw values only; `kernel` turns them into a
/// validated `WindowPolicy`.
#[derive(Debug, Clone)]
pub struct SchedulingConfig {
    /// Opening time of the operating day, "%H:%M".
    pub open_at: String,
    /// Closing time of the operating day, "%H:%M". Valid only as a
    /// reservation end, never as a start.
    pub close_at: String,
    /// Slot granularity in minutes.
    pub slot_minutes: u32,
    /// How far into the future a reservation may start, in days.
    pub horizon_days: u32,
    /// Offset applied when deciding which local day an instant belongs to.
    pub utc_offset_minutes: i32,
}

impl SchedulingConfig {
    fn from_env() -> Result<Self> {
        Ok(Self {
            open_at: env_or("ROOM_OPEN_AT", "08:30"),
            close_at: env_or("ROOM_CLOSE_AT", "17:30"),
            slot_minutes: env_or("SLOT_MINUTES", "30").parse()?,
            horizon_days: env_or("BOOKING_HORIZON_DAYS", "60").parse()?,
            utc_offset_minutes: env_or("UTC_OFFSET_MINUTES", "0").parse()?,
        })
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            open_at: "08:30".into(),
            close_at: "17:30".into(),
            slot_minutes: 30,
            horizon_days: 60,
            utc_offset_minutes: 0,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.into())
}
