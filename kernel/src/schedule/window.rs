use anyhow::{bail, Context, Result};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};
use shared::config::SchedulingConfig;
use shared::error::WindowRejection;

/// A half-open interval [start, end) in which a room is requested or held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Half-open overlap rule. Touching windows do not overlap.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Business rules for admissible reservation windows. Built once from
/// configuration; every value is policy, not a constant.
#[derive(Debug, Clone, Copy)]
pub struct WindowPolicy {
    open_at: NaiveTime,
    close_at: NaiveTime,
    slot: Duration,
    horizon_days: i64,
    offset: FixedOffset,
}

impl WindowPolicy {
    pub fn from_config(cfg: &SchedulingConfig) -> Result<Self> {
        let open_at = NaiveTime::parse_from_str(&cfg.open_at, "%H:%M")
            .with_context(|| format!("invalid opening time: {}", cfg.open_at))?;
        let close_at = NaiveTime::parse_from_str(&cfg.close_at, "%H:%M")
            .with_context(|| format!("invalid closing time: {}", cfg.close_at))?;
        if cfg.slot_minutes == 0 {
            bail!("slot granularity must be positive");
        }
        let slot = Duration::minutes(i64::from(cfg.slot_minutes));
        if close_at <= open_at {
            bail!("closing time must be after opening time");
        }
        let span = close_at - open_at;
        if span.num_seconds() % slot.num_seconds() != 0 {
            bail!("operating hours must be a whole number of slots");
        }
        let offset = FixedOffset::east_opt(cfg.utc_offset_minutes * 60)
            .context("utc offset out of range")?;
        Ok(Self {
            open_at,
            close_at,
            slot,
            horizon_days: i64::from(cfg.horizon_days),
            offset,
        })
    }

    pub fn open_at(&self) -> NaiveTime {
        self.open_at
    }

    pub fn close_at(&self) -> NaiveTime {
        self.close_at
    }

    pub fn slot(&self) -> Duration {
        self.slot
    }

    /// The local date an instant falls on under the policy's offset.
    pub fn local_date(&self, at: DateTime<Utc>) -> NaiveDate {
        at.with_timezone(&self.offset).date_naive()
    }

    /// The UTC instant of a local wall-clock time on the given day.
    pub fn instant(&self, day: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
        let utc_naive =
            day.and_time(time) - Duration::seconds(i64::from(self.offset.local_minus_utc()));
        DateTime::from_naive_utc_and_offset(utc_naive, Utc)
    }

    /// The whole local day as a UTC window, for range queries.
    pub fn day_span(&self, day: NaiveDate) -> TimeWindow {
        TimeWindow {
            start: self.instant(day, NaiveTime::MIN),
            end: self.instant(day + Duration::days(1), NaiveTime::MIN),
        }
    }

    /// Slot boundaries across the operating day, open-to-close. The same
    /// boundaries drive alignment validation and the timeline grid.
    pub fn slot_starts(&self) -> Vec<NaiveTime> {
        let mut starts = Vec::new();
        let mut t = self.open_at;
        while t < self.close_at {
            starts.push(t);
            t += self.slot;
        }
        starts
    }

    /// Admit or reject a proposed window. Checks run in a fixed order so the
    /// reported reason is deterministic: order, day boundary, operating
    /// bounds, slot alignment, booking horizon. The closing time is admitted
    /// as an end but never as a start. Nothing is ever clamped.
    pub fn validate(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        today: NaiveDate,
    ) -> Result<TimeWindow, WindowRejection> {
        if end <= start {
            return Err(WindowRejection::InvalidOrder);
        }

        let local_start = start.with_timezone(&self.offset).naive_local();
        let local_end = end.with_timezone(&self.offset).naive_local();
        if local_start.date() != local_end.date() {
            return Err(WindowRejection::CrossesDay);
        }

        let start_time = local_start.time();
        let end_time = local_end.time();
        if start_time < self.open_at
            || start_time >= self.close_at
            || end_time <= self.open_at
            || end_time > self.close_at
        {
            return Err(WindowRejection::OutOfBounds);
        }

        let duration = end - start;
        let since_open = start_time - self.open_at;
        if !is_slot_multiple(duration, self.slot) || !is_slot_multiple(since_open, self.slot) {
            return Err(WindowRejection::MisalignedDuration);
        }

        let day = local_start.date();
        if day < today || day > today + Duration::days(self.horizon_days) {
            return Err(WindowRejection::OutOfHorizon);
        }

        Ok(TimeWindow { start, end })
    }
}

fn is_slot_multiple(duration: Duration, slot: Duration) -> bool {
    duration.num_seconds() % slot.num_seconds() == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> WindowPolicy {
        WindowPolicy::from_config(&SchedulingConfig::default()).unwrap()
    }

    fn at(day: NaiveDate, hm: (u32, u32)) -> DateTime<Utc> {
        policy().instant(day, NaiveTime::from_hms_opt(hm.0, hm.1, 0).unwrap())
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 7).unwrap()
    }

    #[test]
    fn accepts_an_aligned_window_within_hours() {
        let w = policy()
            .validate(at(day(), (10, 0)), at(day(), (11, 0)), day())
            .unwrap();
        assert_eq!(w.duration(), Duration::hours(1));
    }

    #[test]
    fn closing_time_is_valid_as_an_end() {
        assert!(policy()
            .validate(at(day(), (17, 0)), at(day(), (17, 30)), day())
            .is_ok());
    }

    #[test]
    fn closing_time_is_invalid_as_a_start() {
        assert_eq!(
            policy().validate(at(day(), (17, 30)), at(day(), (18, 0)), day()),
            Err(WindowRejection::OutOfBounds)
        );
    }

    #[test]
    fn rejects_reversed_and_empty_windows() {
        let p = policy();
        assert_eq!(
            p.validate(at(day(), (11, 0)), at(day(), (10, 0)), day()),
            Err(WindowRejection::InvalidOrder)
        );
        assert_eq!(
            p.validate(at(day(), (10, 0)), at(day(), (10, 0)), day()),
            Err(WindowRejection::InvalidOrder)
        );
    }

    #[test]
    fn rejects_window_before_opening() {
        // 08:00-09:00 with bounds 08:30-17:30
        assert_eq!(
            policy().validate(at(day(), (8, 0)), at(day(), (9, 0)), day()),
            Err(WindowRejection::OutOfBounds)
        );
    }

    #[test]
    fn rejects_misaligned_duration() {
        // 08:45-09:10 under 30-minute granularity
        let p = policy();
        let start = p.instant(day(), NaiveTime::from_hms_opt(8, 45, 0).unwrap());
        let end = p.instant(day(), NaiveTime::from_hms_opt(9, 10, 0).unwrap());
        assert_eq!(
            p.validate(start, end, day()),
            Err(WindowRejection::MisalignedDuration)
        );
    }

    #[test]
    fn rejects_unaligned_start_even_with_round_duration() {
        let p = policy();
        let start = p.instant(day(), NaiveTime::from_hms_opt(10, 15, 0).unwrap());
        let end = p.instant(day(), NaiveTime::from_hms_opt(11, 15, 0).unwrap());
        assert_eq!(
            p.validate(start, end, day()),
            Err(WindowRejection::MisalignedDuration)
        );
    }

    #[test]
    fn rejects_cross_day_windows() {
        let next = day() + Duration::days(1);
        assert_eq!(
            policy().validate(at(day(), (17, 0)), at(next, (9, 0)), day()),
            Err(WindowRejection::CrossesDay)
        );
    }

    #[test]
    fn rejects_start_beyond_the_horizon() {
        let far = day() + Duration::days(61);
        assert_eq!(
            policy().validate(at(far, (10, 0)), at(far, (11, 0)), day()),
            Err(WindowRejection::OutOfHorizon)
        );
    }

    #[test]
    fn accepts_start_exactly_at_the_horizon() {
        let edge = day() + Duration::days(60);
        assert!(policy()
            .validate(at(edge, (10, 0)), at(edge, (11, 0)), day())
            .is_ok());
    }

    #[test]
    fn rejects_start_in_the_past() {
        let yesterday = day() - Duration::days(1);
        assert_eq!(
            policy().validate(at(yesterday, (10, 0)), at(yesterday, (11, 0)), day()),
            Err(WindowRejection::OutOfHorizon)
        );
    }

    #[test]
    fn touching_windows_do_not_overlap() {
        let a = TimeWindow {
            start: at(day(), (10, 0)),
            end: at(day(), (11, 0)),
        };
        let b = TimeWindow {
            start: at(day(), (11, 0)),
            end: at(day(), (12, 0)),
        };
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn partial_and_nested_windows_overlap() {
        let a = TimeWindow {
            start: at(day(), (10, 0)),
            end: at(day(), (11, 0)),
        };
        let b = TimeWindow {
            start: at(day(), (10, 30)),
            end: at(day(), (11, 30)),
        };
        let inner = TimeWindow {
            start: at(day(), (10, 15)),
            end: at(day(), (10, 45)),
        };
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(a.overlaps(&inner));
    }

    #[test]
    fn contains_is_half_open() {
        let w = TimeWindow {
            start: at(day(), (10, 0)),
            end: at(day(), (11, 0)),
        };
        assert!(w.contains(at(day(), (10, 0))));
        assert!(w.contains(at(day(), (10, 59))));
        assert!(!w.contains(at(day(), (11, 0))));
    }

    #[test]
    fn slot_starts_cover_the_operating_day() {
        let starts = policy().slot_starts();
        assert_eq!(starts.len(), 18);
        assert_eq!(starts[0], NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(
            *starts.last().unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap()
        );
    }

    #[test]
    fn offset_shifts_the_local_day() {
        let cfg = SchedulingConfig {
            utc_offset_minutes: 540, // +09:00
            ..SchedulingConfig::default()
        };
        let p = WindowPolicy::from_config(&cfg).unwrap();
        // 23:00 UTC is 08:00 the next local day.
        let utc = DateTime::parse_from_rfc3339("2026-09-07T23:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            p.local_date(utc),
            NaiveDate::from_ymd_opt(2026, 9, 8).unwrap()
        );
    }

    #[test]
    fn rejects_degenerate_configs() {
        let zero_slot = SchedulingConfig {
            slot_minutes: 0,
            ..SchedulingConfig::default()
        };
        assert!(WindowPolicy::from_config(&zero_slot).is_err());

        let inverted = SchedulingConfig {
            open_at: "17:30".into(),
            close_at: "08:30".into(),
            ..SchedulingConfig::default()
        };
        assert!(WindowPolicy::from_config(&inverted).is_err());

        let ragged = SchedulingConfig {
            close_at: "17:45".into(),
            ..SchedulingConfig::default()
        };
        assert!(WindowPolicy::from_config(&ragged).is_err());
    }
}
