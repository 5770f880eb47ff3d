use super::calendar::{
    ceil_days, elapsed_months, floor_days, kst_date, kst_midnight, promotion_date,
    promotion_instant, promotion_months_elapsed,
};
use super::ladder::{
    active_index, next_index, PayGrade, RankTier, Tier, CIVILIAN_LABEL, PAY_GRADES, RANKS,
};
use super::progress::{progress, COMPLETE};
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use tracing::debug;

/// Enlistment and discharge dates with discharge strictly after enlistment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicePeriod {
    enlistment: NaiveDate,
    discharge: NaiveDate,
}

impl ServicePeriod {
    /// Returns `None` unless `discharge` is later than `enlistment`.
    pub fn new(enlistment: NaiveDate, discharge: NaiveDate) -> Option<Self> {
        (discharge > enlistment).then_some(Self {
            enlistment,
            discharge,
        })
    }

    pub fn enlistment(&self) -> NaiveDate {
        self.enlistment
    }

    pub fn discharge(&self) -> NaiveDate {
        self.discharge
    }

    pub fn service_info(&self, now: DateTime<Utc>) -> ServiceInfo {
        compute(self.enlistment, self.discharge, now)
    }
}

/// Signed day count relative to the discharge date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DDay {
    /// Days left before the discharge instant, rounded up. Always at least 1.
    Remaining(i64),
    /// Day number since discharge; the discharge day itself is day 1.
    Since(i64),
}

impl DDay {
    /// Negative while serving, positive afterwards.
    pub fn signed_days(self) -> i64 {
        match self {
            Self::Remaining(days) => -days,
            Self::Since(days) => days,
        }
    }
}

impl fmt::Display for DDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remaining(days) => write!(f, "-{days}"),
            Self::Since(days) => write!(f, "+{days}"),
        }
    }
}

/// Either a ladder entry or the civilian sentinel once service has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing<T> {
    Serving(T),
    Discharged,
}

impl<T> Standing<T> {
    pub fn serving(&self) -> Option<&T> {
        match self {
            Self::Serving(value) => Some(value),
            Self::Discharged => None,
        }
    }
}

impl Standing<RankTier> {
    pub fn label(&self) -> String {
        match self {
            Self::Serving(tier) => tier.name().to_string(),
            Self::Discharged => CIVILIAN_LABEL.to_string(),
        }
    }
}

impl Standing<PayGrade> {
    /// Grade only (`2호봉`), as shown beside the current rank.
    pub fn grade_label(&self) -> String {
        match self {
            Self::Serving(pay_grade) => pay_grade.grade_label(),
            Self::Discharged => CIVILIAN_LABEL.to_string(),
        }
    }

    /// Rank and grade (`상병 2호봉`), as shown for an upcoming promotion.
    pub fn full_label(&self) -> String {
        match self {
            Self::Serving(pay_grade) => pay_grade.full_label(),
            Self::Discharged => CIVILIAN_LABEL.to_string(),
        }
    }
}

/// The next step on a ladder, or discharge when no step is left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Milestone<T> {
    pub target: Standing<T>,
    pub date: NaiveDate,
    pub instant: DateTime<Utc>,
    pub progress: f64,
}

/// Everything a badge shows, derived from one evaluation instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceInfo {
    pub enlistment_date: NaiveDate,
    pub discharge_date: NaiveDate,
    pub discharge_instant: DateTime<Utc>,
    pub evaluated_at: DateTime<Utc>,
    pub d_day: DDay,
    pub elapsed_months: u32,
    pub current_rank: Standing<RankTier>,
    pub current_pay_grade: Standing<PayGrade>,
    pub total_progress: f64,
    pub next_pay_grade: Milestone<PayGrade>,
    pub next_rank: Milestone<RankTier>,
}

impl ServiceInfo {
    pub fn is_discharged(&self) -> bool {
        self.evaluated_at >= self.discharge_instant
    }
}

/// Derives the service progression for `now`.
///
/// Expects `discharge` after `enlistment`; other inputs still produce a
/// result, with every progress value pinned to 0 or 100.
pub fn compute(enlistment: NaiveDate, discharge: NaiveDate, now: DateTime<Utc>) -> ServiceInfo {
    let start = kst_midnight(enlistment);
    let end = kst_midnight(discharge);
    let discharged = now >= end;
    let today = kst_date(now);

    let d_day = if discharged {
        DDay::Since(floor_days(now - end) + 1)
    } else {
        DDay::Remaining(ceil_days(end - now))
    };

    let total_progress = progress(now, start, end);
    let elapsed = u32::try_from(elapsed_months(enlistment, today)).unwrap_or(0);

    let ladder_months = promotion_months_elapsed(enlistment, today);
    let reachable = |threshold: u32| promotion_date(enlistment, threshold) < discharge;

    let pay_index = active_index(&PAY_GRADES, ladder_months);
    let pay_grade = PAY_GRADES[pay_index];
    let next_pay_grade = next_index(&PAY_GRADES, pay_index, reachable).map(|i| PAY_GRADES[i]);

    let rank_index = active_index(&RANKS, ladder_months);
    let rank = RANKS[rank_index];
    let next_rank = next_index(&RANKS, rank_index, reachable).map(|i| RANKS[i]);

    debug!(
        %enlistment,
        %discharge,
        %now,
        discharged,
        ladder_months,
        pay_grade = %pay_grade.full_label(),
        "computed service standing"
    );

    if discharged {
        return ServiceInfo {
            enlistment_date: enlistment,
            discharge_date: discharge,
            discharge_instant: end,
            evaluated_at: now,
            d_day,
            elapsed_months: elapsed,
            current_rank: Standing::Discharged,
            current_pay_grade: Standing::Discharged,
            total_progress,
            next_pay_grade: discharge_milestone(discharge, end),
            next_rank: discharge_milestone(discharge, end),
        };
    }

    let pay_grade_start = promotion_instant(enlistment, pay_grade.threshold_months());
    let rank_start = if rank_index == 0 {
        start
    } else {
        promotion_instant(enlistment, rank.threshold_months())
    };

    ServiceInfo {
        enlistment_date: enlistment,
        discharge_date: discharge,
        discharge_instant: end,
        evaluated_at: now,
        d_day,
        elapsed_months: elapsed,
        current_rank: Standing::Serving(rank),
        current_pay_grade: Standing::Serving(pay_grade),
        total_progress,
        next_pay_grade: milestone(enlistment, discharge, next_pay_grade, pay_grade_start, now),
        next_rank: milestone(enlistment, discharge, next_rank, rank_start, now),
    }
}

fn milestone<T: Tier>(
    enlistment: NaiveDate,
    discharge: NaiveDate,
    next: Option<T>,
    window_start: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Milestone<T> {
    let (target, date) = match next {
        Some(tier) => {
            let date = promotion_date(enlistment, tier.threshold_months());
            (Standing::Serving(tier), date)
        }
        None => (Standing::Discharged, discharge),
    };
    let instant = kst_midnight(date);

    Milestone {
        target,
        date,
        instant,
        progress: progress(now, window_start, instant),
    }
}

fn discharge_milestone<T>(discharge: NaiveDate, end: DateTime<Utc>) -> Milestone<T> {
    Milestone {
        target: Standing::Discharged,
        date: discharge,
        instant: end,
        progress: COMPLETE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::ladder::Rank;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn service_period_requires_discharge_after_enlistment() {
        assert!(ServicePeriod::new(date(2024, 1, 2), date(2024, 1, 2)).is_none());
        assert!(ServicePeriod::new(date(2024, 1, 2), date(2023, 1, 2)).is_none());
        let period = ServicePeriod::new(date(2024, 1, 2), date(2025, 7, 1)).expect("valid period");
        assert_eq!(period.enlistment(), date(2024, 1, 2));
        assert_eq!(period.discharge(), date(2025, 7, 1));
    }

    #[test]
    fn d_day_formats_with_sign() {
        assert_eq!(DDay::Remaining(455).to_string(), "-455");
        assert_eq!(DDay::Since(1).to_string(), "+1");
        assert_eq!(DDay::Remaining(3).signed_days(), -3);
    }

    #[test]
    fn d_day_rounds_partial_days_up_before_discharge() {
        let discharge = date(2025, 7, 1);
        let now = kst_midnight(date(2025, 6, 30)) + chrono::Duration::hours(1);
        let info = compute(date(2024, 1, 2), discharge, now);
        assert_eq!(info.d_day, DDay::Remaining(1));
    }

    #[test]
    fn discharge_day_is_day_one() {
        let discharge = date(2025, 7, 1);
        let info = compute(date(2024, 1, 2), discharge, kst_midnight(discharge));
        assert_eq!(info.d_day.to_string(), "+1");
        let later = kst_midnight(discharge) + chrono::Duration::hours(23);
        assert_eq!(compute(date(2024, 1, 2), discharge, later).d_day.to_string(), "+1");
    }

    #[test]
    fn rank_window_starts_at_enlistment_for_first_rank() {
        let enlistment = date(2024, 1, 20);
        let now = kst_midnight(date(2024, 2, 20));
        let info = compute(enlistment, date(2025, 7, 19), now);
        assert_eq!(info.current_rank.serving().map(|tier| tier.rank), Some(Rank::PrivateRecruit));
        // rank window 2024-01-20 .. 2024-04-01 is 72 days, 31 of them elapsed
        assert_eq!(info.next_rank.progress, 43.05556);
        assert_eq!(info.next_rank.date, date(2024, 4, 1));
    }
}
