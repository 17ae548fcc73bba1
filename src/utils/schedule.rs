use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use thiserror::Error;

use crate::models::{service_config::DeliveryTier, shop::OpenHours};

/// Pickup slots offered by the schedule form.
pub const PICKUP_SLOTS: [&str; 14] = [
    "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00",
    "18:00", "19:00", "20:00", "21:00",
];

/// Slots the form marks as busy.
pub const PEAK_SLOTS: [&str; 4] = ["12:00", "13:00", "17:00", "18:00"];

/// How far ahead a pickup may be booked.
pub const MAX_DAYS_AHEAD: i64 = 30;

#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("Invalid pickup date: {0}")]
    InvalidDate(String),

    #[error("Invalid pickup time: {0}")]
    InvalidTime(String),

    #[error("No pickup slot at {0}")]
    UnavailableSlot(String),

    #[error("Pickup must be at least {hours} hour(s) from now")]
    TooEarly { hours: i64 },

    #[error("Pickup must be within {days} days")]
    TooFarAhead { days: i64 },

    #[error("Pickup at {time} is outside opening hours {open_hours}")]
    OutsideOpenHours { time: String, open_hours: String },
}

/// Hours the shop needs before a job of this tier can be collected.
pub fn lead_time_hours(tier: DeliveryTier) -> i64 {
    match tier {
        DeliveryTier::Express => 1,
        DeliveryTier::Standard => 2,
        DeliveryTier::Economy => 4,
    }
}

pub fn is_peak_slot(time: &str) -> bool {
    PEAK_SLOTS.contains(&time)
}

/// Checks a pickup date (`YYYY-MM-DD`) and time (`HH:MM`, one of
/// [`PICKUP_SLOTS`]) against the lead time of the delivery tier and the
/// shop's opening hours.
pub fn validate_pickup(
    now: NaiveDateTime,
    date: &str,
    time: &str,
    tier: DeliveryTier,
    open_hours: &str,
) -> Result<NaiveDateTime, ScheduleError> {
    let pickup_date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| ScheduleError::InvalidDate(date.to_string()))?;
    let pickup_time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map_err(|_| ScheduleError::InvalidTime(time.to_string()))?;

    if !PICKUP_SLOTS.contains(&pickup_time.format("%H:%M").to_string().as_str()) {
        return Err(ScheduleError::UnavailableSlot(time.to_string()));
    }
    let pickup = pickup_date.and_time(pickup_time);

    let hours = lead_time_hours(tier);
    if pickup < now + Duration::hours(hours) {
        return Err(ScheduleError::TooEarly { hours });
    }

    if pickup_date > now.date() + Duration::days(MAX_DAYS_AHEAD) {
        return Err(ScheduleError::TooFarAhead {
            days: MAX_DAYS_AHEAD,
        });
    }

    if !OpenHours::parse(open_hours).contains_hour(pickup_time.hour()) {
        return Err(ScheduleError::OutsideOpenHours {
            time: time.to_string(),
            open_hours: open_hours.to_string(),
        });
    }

    Ok(pickup)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap()
    }

    #[test]
    fn accepts_slot_after_lead_time() {
        let pickup = validate_pickup(
            now(),
            "2026-10-18",
            "12:00",
            DeliveryTier::Standard,
            "08:00 - 21:00",
        )
        .unwrap();
        assert_eq!(pickup.hour(), 12);
    }

    #[test]
    fn lead_time_depends_on_tier() {
        assert!(
            validate_pickup(now(), "2026-10-18", "11:00", DeliveryTier::Express, "08:00 - 21:00")
                .is_ok()
        );
        assert_eq!(
            validate_pickup(now(), "2026-10-18", "11:00", DeliveryTier::Standard, "08:00 - 21:00"),
            Err(ScheduleError::TooEarly { hours: 2 })
        );
        assert_eq!(
            validate_pickup(now(), "2026-10-18", "13:00", DeliveryTier::Economy, "08:00 - 21:00"),
            Err(ScheduleError::TooEarly { hours: 4 })
        );
    }

    #[test]
    fn rejects_dates_beyond_window() {
        assert!(
            validate_pickup(now(), "2026-11-17", "10:00", DeliveryTier::Standard, "").is_ok()
        );
        assert_eq!(
            validate_pickup(now(), "2026-11-18", "10:00", DeliveryTier::Standard, ""),
            Err(ScheduleError::TooFarAhead { days: 30 })
        );
    }

    #[test]
    fn rejects_hours_outside_shop_hours() {
        let err = validate_pickup(
            now(),
            "2026-10-19",
            "21:00",
            DeliveryTier::Standard,
            "08:00 - 21:00",
        )
        .unwrap_err();
        assert!(matches!(err, ScheduleError::OutsideOpenHours { .. }));
    }

    #[test]
    fn rejects_unparsable_input() {
        assert_eq!(
            validate_pickup(now(), "besok", "10:00", DeliveryTier::Standard, ""),
            Err(ScheduleError::InvalidDate("besok".to_string()))
        );
        assert_eq!(
            validate_pickup(now(), "2026-10-19", "pagi", DeliveryTier::Standard, ""),
            Err(ScheduleError::InvalidTime("pagi".to_string()))
        );
    }

    #[test]
    fn rejects_times_between_slots() {
        assert_eq!(
            validate_pickup(now(), "2026-10-19", "10:30", DeliveryTier::Standard, ""),
            Err(ScheduleError::UnavailableSlot("10:30".to_string()))
        );
        assert_eq!(
            validate_pickup(now(), "2026-10-19", "07:00", DeliveryTier::Standard, ""),
            Err(ScheduleError::UnavailableSlot("07:00".to_string()))
        );
    }

    #[test]
    fn peak_slots_are_offered_slots() {
        assert!(PEAK_SLOTS.iter().all(|slot| PICKUP_SLOTS.contains(slot)));
        assert!(is_peak_slot("12:00"));
        assert!(!is_peak_slot("10:00"));
    }
}
