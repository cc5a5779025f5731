use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

pub(crate) const MIDNIGHT: NaiveTime = NaiveTime::from_hms_opt(0, 0, 0).unwrap();

pub(crate) const LAST_MILLISECOND: NaiveTime = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap();

/// Move the month field by `months`, keeping the day of month even if it
/// overflows the target month: in this case the extra days are carried over
/// the following month.
pub(crate) fn add_months_overflowing(datetime: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let total = i64::from(datetime.year())
        .checked_mul(12)?
        .checked_add(i64::from(datetime.month0()))?
        .checked_add(months)?;

    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month0 = u32::try_from(total.rem_euclid(12)).ok()?;
    let first_of_month = NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
    let date = first_of_month.checked_add_days(Days::new(u64::from(datetime.day0())))?;
    Some(date.and_time(datetime.time()))
}

/// Move the calendar date by `days`, keeping the time of day.
pub(crate) fn add_days(datetime: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    let date = datetime.date();

    let date = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))?
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))?
    };

    Some(date.and_time(datetime.time()))
}

/// Replace the time of day by the sum of given components, which may roll
/// over adjacent days if they are out of their usual range.
pub(crate) fn with_time_overflowing(
    date: NaiveDate,
    hour: i64,
    minute: i64,
    second: i64,
    milli: i64,
) -> Option<NaiveDateTime> {
    let millis = hour
        .checked_mul(3_600_000)?
        .checked_add(minute.checked_mul(60_000)?)?
        .checked_add(second.checked_mul(1_000)?)?
        .checked_add(milli)?;

    date.and_time(MIDNIGHT)
        .checked_add_signed(TimeDelta::try_milliseconds(millis)?)
}

/// Last day of the month, obtained by stepping back from the first day of
/// next month.
pub(crate) fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    let first_this_month = date.with_day(1)?;
    let first_next_month = add_months_overflowing(first_this_month.and_time(MIDNIGHT), 1)?;
    first_next_month.date().pred_opt()
}
