//! Daily fire-time computation, timezone pinned.
//!
//! Reminders go out once per calendar day at a fixed local hour. The
//! timezone is pinned rather than UTC-naive so the fire time tracks the
//! users' mornings. Fires missed while the process is down are not caught
//! up; still-due trades simply match again on the next run.

use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;

/// Local timezone the daily schedule is pinned to.
pub const REMINDER_TZ: Tz = chrono_tz::Asia::Kolkata;

/// Local hour of day (0-23) the sweep fires at.
pub const REMINDER_HOUR: u32 = 8;

/// Next instant strictly after `now` at which the daily sweep should fire.
pub fn next_fire_after(now: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
    let local_now = now.with_timezone(&tz);
    let mut day = local_now.date_naive();

    loop {
        if let Some(naive) = day.and_hms_opt(REMINDER_HOUR, 0, 0) {
            // `earliest` picks the pre-transition instant on ambiguous
            // local times and skips days where the hour does not exist.
            if let Some(candidate) = tz.from_local_datetime(&naive).earliest() {
                let candidate = candidate.with_timezone(&Utc);
                if candidate > now {
                    return candidate;
                }
            }
        }
        day += Duration::days(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn before_the_hour_fires_same_day() {
        // 06:00 IST == 00:30 UTC.
        let now = Utc.with_ymd_and_hms(2024, 6, 3, 0, 30, 0).unwrap();
        let next = next_fire_after(now, REMINDER_TZ);
        // 08:00 IST == 02:30 UTC.
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 6, 3, 2, 30, 0).unwrap());
    }

    #[test]
    fn after_the_hour_fires_next_day() {
        // 09:00 IST == 03:30 UTC.
        let now = Utc.with_ymd_and_hms(2024, 6, 3, 3, 30, 0).unwrap();
        let next = next_fire_after(now, REMINDER_TZ);
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 6, 4, 2, 30, 0).unwrap());
    }

    #[test]
    fn exactly_at_the_hour_fires_next_day() {
        let now = Utc.with_ymd_and_hms(2024, 6, 3, 2, 30, 0).unwrap();
        let next = next_fire_after(now, REMINDER_TZ);
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 6, 4, 2, 30, 0).unwrap());
    }

    #[test]
    fn fire_is_always_in_the_future() {
        let now = Utc::now();
        let next = next_fire_after(now, REMINDER_TZ);
        assert!(next > now);
        assert!(next - now <= chrono::Duration::days(1));
    }
}
