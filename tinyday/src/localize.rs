use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};

/// How far back to look for the offset that was in effect before a gap in
/// local time.
const MAX_GAP_HOURS: i64 = 48;

/// Anchor a wall-clock time in a timezone.
///
/// Ambiguous times (when clocks are turned backward) resolve to the earliest
/// candidate. Times that were skipped (when clocks are turned forward) are
/// read with the offset in effect just before the transition, which moves
/// them forward by the length of the gap.
pub(crate) fn localize_wall_clock<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(x) => Some(x),
        LocalResult::Ambiguous(x, _y) => {
            #[cfg(feature = "log")]
            log::debug!("Ambiguous date {naive}: could be {x:?} (default) or {_y:?}");

            Some(x)
        }
        LocalResult::None => {
            let offset_before = (1..=MAX_GAP_HOURS).find_map(|hours| {
                let before = naive.checked_sub_signed(TimeDelta::try_hours(hours)?)?;
                tz.from_local_datetime(&before).earliest()
            })?;

            let offset = offset_before.offset().fix();
            let utc = naive.checked_sub_signed(TimeDelta::seconds(offset.local_minus_utc().into()))?;
            let res = tz.from_utc_datetime(&utc);

            #[cfg(feature = "log")]
            log::debug!("Skipped invalid date {naive}, moved to {res:?}");

            Some(res)
        }
    }
}
