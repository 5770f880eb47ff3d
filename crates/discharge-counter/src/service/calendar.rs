//! Civil-calendar arithmetic for the fixed Korea Standard Time zone.
//!
//! Every calendar date handled by the service denotes 00:00 in UTC+9. The
//! conversions in this module are the only place that offset is applied;
//! callers work with [`NaiveDate`] for civil dates and [`DateTime<Utc>`] for
//! instants and never shift by the offset themselves.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Offset of Korea Standard Time from UTC, in seconds.
pub const KST_OFFSET_SECONDS: i64 = 9 * 60 * 60;

fn kst_offset() -> Duration {
    Duration::seconds(KST_OFFSET_SECONDS)
}

/// The instant at which `date` begins in UTC+9.
pub fn kst_midnight(date: NaiveDate) -> DateTime<Utc> {
    let local_midnight = date.and_time(NaiveTime::MIN);
    let utc = local_midnight
        .checked_sub_signed(kst_offset())
        .unwrap_or(NaiveDateTime::MIN);
    Utc.from_utc_datetime(&utc)
}

/// The UTC+9 civil date that contains `instant`.
pub fn kst_date(instant: DateTime<Utc>) -> NaiveDate {
    instant
        .naive_utc()
        .checked_add_signed(kst_offset())
        .unwrap_or(NaiveDateTime::MAX)
        .date()
}

/// First day of the month `month_index` months after January of `year`.
///
/// `month_index` is zero based and may run past 11 or below 0; the year is
/// carried accordingly. Returns `None` outside chrono's representable range.
pub fn month_start(year: i32, month_index: i32) -> Option<NaiveDate> {
    let year = year.checked_add(month_index.div_euclid(12))?;
    let month = month_index.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Whole civil months between `enlistment` and `today`.
///
/// The count only advances once the enlistment day-of-month recurs, so an
/// enlistment on the 15th reaches one month on the 15th of the next month.
pub fn elapsed_months(enlistment: NaiveDate, today: NaiveDate) -> i32 {
    let months = (today.year() - enlistment.year()) * 12 + today.month() as i32
        - enlistment.month() as i32;
    if today.day() < enlistment.day() {
        months - 1
    } else {
        months
    }
}

fn enlisted_on_first(enlistment: NaiveDate) -> bool {
    enlistment.day() == 1
}

/// Date on which a ladder step `threshold_months` after enlistment activates.
///
/// Promotions land on the 1st of the month `threshold_months` after the
/// enlistment month. Enlisting on the 1st counts the enlistment month in full,
/// which moves every later threshold one month earlier. Saturates at
/// [`NaiveDate::MAX`] past the end of the representable calendar.
pub fn promotion_date(enlistment: NaiveDate, threshold_months: u32) -> NaiveDate {
    let offset = if enlisted_on_first(enlistment) && threshold_months > 0 {
        threshold_months - 1
    } else {
        threshold_months
    };
    i32::try_from(offset)
        .ok()
        .and_then(|offset| (enlistment.month0() as i32).checked_add(offset))
        .and_then(|index| month_start(enlistment.year(), index))
        .unwrap_or(NaiveDate::MAX)
}

/// KST midnight of [`promotion_date`].
pub fn promotion_instant(enlistment: NaiveDate, threshold_months: u32) -> DateTime<Utc> {
    kst_midnight(promotion_date(enlistment, threshold_months))
}

/// Ladder months reached by `today` under the promotion-date rule.
///
/// A threshold `t` is active exactly when `t` does not exceed this count, so
/// ladder lookups agree with [`promotion_date`] on every day of the month.
pub fn promotion_months_elapsed(enlistment: NaiveDate, today: NaiveDate) -> i32 {
    let months = (today.year() - enlistment.year()) * 12 + today.month() as i32
        - enlistment.month() as i32;
    if enlisted_on_first(enlistment) {
        months + 1
    } else {
        months
    }
}

/// Last day of service for a term of `months` starting at `enlistment`.
///
/// The anniversary is the same day-of-month `months` later, rolling into the
/// following month when that day does not exist (January 31st plus one month
/// is March 2nd or 3rd). Service ends the day before the anniversary.
pub fn discharge_after_months(enlistment: NaiveDate, months: u32) -> Option<NaiveDate> {
    let index = (enlistment.month0() as i32).checked_add(i32::try_from(months).ok()?)?;
    let first = month_start(enlistment.year(), index)?;
    first.checked_add_signed(Duration::days(i64::from(enlistment.day()) - 2))
}

/// Whole days in `delta`, rounded up. Only meaningful for non-negative spans.
pub(crate) fn ceil_days(delta: Duration) -> i64 {
    let day_ms = Duration::days(1).num_milliseconds();
    let ms = delta.num_milliseconds();
    let days = ms / day_ms;
    if ms % day_ms > 0 {
        days + 1
    } else {
        days
    }
}

/// Whole days in `delta`, rounded down. Only meaningful for non-negative spans.
pub(crate) fn floor_days(delta: Duration) -> i64 {
    delta.num_milliseconds() / Duration::days(1).num_milliseconds()
}
