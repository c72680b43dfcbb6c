//! Wall-clock reads. Pages pass these into the pure `portal` helpers, which
//! never read the clock themselves.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::{Date, PrimitiveDateTime};

/// Local date and time as components from the browser (`month0` is
/// zero-based, as JavaScript reports it).
#[cfg(any(test, feature = "hydrate"))]
fn from_parts(year: u32, month0: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<PrimitiveDateTime> {
    use time::{Month, Time};

    let month = Month::try_from(u8::try_from(month0 + 1).ok()?).ok()?;
    let date = Date::from_calendar_date(i32::try_from(year).ok()?, month, u8::try_from(day).ok()?).ok()?;
    let at = Time::from_hms(u8::try_from(hour).ok()?, u8::try_from(minute).ok()?, u8::try_from(second).ok()?).ok()?;
    Some(PrimitiveDateTime::new(date, at))
}

/// Current local date and time (UTC outside the browser).
pub fn now() -> PrimitiveDateTime {
    #[cfg(feature = "hydrate")]
    {
        let d = js_sys::Date::new_0();
        from_parts(d.get_full_year(), d.get_month(), d.get_date(), d.get_hours(), d.get_minutes(), d.get_seconds())
            .unwrap_or(PrimitiveDateTime::new(Date::MIN, time::Time::MIDNIGHT))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let now = time::OffsetDateTime::now_utc();
        PrimitiveDateTime::new(now.date(), now.time())
    }
}

pub fn today() -> Date {
    now().date()
}
