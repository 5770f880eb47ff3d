use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use discharge_counter::service::calendar::kst_midnight;
use discharge_counter::service::{compute, DDay, Rank, ServiceInfo, Standing, CIVILIAN_LABEL};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn army_period() -> (NaiveDate, NaiveDate) {
    (date(2024, 1, 2), date(2025, 7, 1))
}

fn at(day: NaiveDate) -> DateTime<Utc> {
    kst_midnight(day)
}

fn rank_of(info: &ServiceInfo) -> Option<Rank> {
    info.current_rank.serving().map(|tier| tier.rank)
}

fn grade_of(info: &ServiceInfo) -> Option<(Rank, u8)> {
    info.current_pay_grade
        .serving()
        .map(|pay_grade| (pay_grade.rank, pay_grade.grade))
}

#[test]
fn enlistment_day_starts_at_lowest_tier() {
    let (enlistment, discharge) = army_period();
    let info = compute(enlistment, discharge, at(enlistment));

    assert_eq!(info.total_progress, 0.0);
    assert_eq!(info.d_day, DDay::Remaining(546));
    assert_eq!(info.d_day.to_string(), "-546");
    assert_eq!(rank_of(&info), Some(Rank::PrivateRecruit));
    assert_eq!(grade_of(&info), Some((Rank::PrivateRecruit, 1)));
    assert_eq!(info.elapsed_months, 0);
    assert_eq!(info.next_rank.progress, 0.0);
    assert_eq!(info.next_pay_grade.date, date(2024, 2, 1));
    // the first pay grade runs from the 1st of the enlistment month
    assert_eq!(info.next_pay_grade.progress, 3.22581);
}

#[test]
fn three_months_in_reaches_second_rank() {
    let (enlistment, discharge) = army_period();
    let info = compute(enlistment, discharge, at(date(2024, 4, 2)));

    assert_eq!(rank_of(&info), Some(Rank::Private));
    assert_eq!(grade_of(&info), Some((Rank::Private, 1)));
    assert_eq!(info.elapsed_months, 3);
    assert_eq!(info.d_day.to_string(), "-455");
    // 91 of 546 days served
    assert_eq!(info.total_progress, 16.66667);

    assert_eq!(info.next_pay_grade.date, date(2024, 5, 1));
    assert_eq!(info.next_pay_grade.target.full_label(), "일병 2호봉");
    assert_eq!(info.next_pay_grade.progress, 3.33333);

    assert_eq!(info.next_rank.date, date(2024, 10, 1));
    assert_eq!(info.next_rank.target.label(), "상병");
    assert_eq!(info.next_rank.progress, 0.54645);
}

#[test]
fn promotions_follow_kst_midnight_not_utc() {
    let (enlistment, discharge) = army_period();
    let last_second = Utc.with_ymd_and_hms(2024, 3, 31, 14, 59, 59).unwrap();
    let first_second = Utc.with_ymd_and_hms(2024, 3, 31, 15, 0, 0).unwrap();

    let before = compute(enlistment, discharge, last_second);
    let after = compute(enlistment, discharge, first_second);

    assert_eq!(grade_of(&before), Some((Rank::PrivateRecruit, 3)));
    assert_eq!(grade_of(&after), Some((Rank::Private, 1)));
    assert_eq!(after.next_rank.progress, 0.0);
}

#[test]
fn discharge_instant_is_terminal_state() {
    let (enlistment, discharge) = army_period();
    let info = compute(enlistment, discharge, at(discharge));

    assert!(info.is_discharged());
    assert_eq!(info.total_progress, 100.0);
    assert_eq!(info.current_rank, Standing::Discharged);
    assert_eq!(info.current_pay_grade, Standing::Discharged);
    assert_eq!(info.current_rank.label(), CIVILIAN_LABEL);
    assert_eq!(info.next_pay_grade.progress, 100.0);
    assert_eq!(info.next_rank.progress, 100.0);
    assert_eq!(info.next_pay_grade.date, discharge);
    assert_eq!(info.next_rank.date, discharge);
    assert_eq!(info.next_rank.target.label(), CIVILIAN_LABEL);
    assert_eq!(info.next_pay_grade.target.full_label(), CIVILIAN_LABEL);
}

#[test]
fn d_day_counts_discharge_day_as_first_day() {
    let (enlistment, discharge) = army_period();

    let eve = compute(enlistment, discharge, at(discharge) - Duration::seconds(1));
    assert_eq!(eve.d_day.to_string(), "-1");

    let discharge_day = compute(enlistment, discharge, at(discharge));
    assert_eq!(discharge_day.d_day.to_string(), "+1");

    let next_day = compute(enlistment, discharge, at(discharge) + Duration::days(1));
    assert_eq!(next_day.d_day.to_string(), "+2");
    assert_eq!(next_day.d_day.signed_days(), 2);
}

#[test]
fn total_progress_never_decreases() {
    let (enlistment, discharge) = army_period();
    let mut now = at(enlistment) - Duration::days(10);
    let stop = at(discharge) + Duration::days(10);
    let mut previous = -1.0;

    while now <= stop {
        let info = compute(enlistment, discharge, now);
        assert!(info.total_progress >= previous, "regressed at {now}");
        for value in [
            info.total_progress,
            info.next_pay_grade.progress,
            info.next_rank.progress,
        ] {
            assert!((0.0..=100.0).contains(&value), "{value} out of range at {now}");
        }
        assert_ne!(info.d_day.to_string(), "+0");
        assert_ne!(info.d_day.to_string(), "-0");
        previous = info.total_progress;
        now += Duration::hours(7);
    }
}

#[test]
fn enlisting_on_first_promotes_a_month_earlier() {
    let now = at(date(2024, 3, 15));
    let on_first = compute(date(2024, 3, 1), date(2025, 8, 31), now);
    let on_second = compute(date(2024, 3, 2), date(2025, 9, 1), now);

    assert_eq!(grade_of(&on_first), Some((Rank::PrivateRecruit, 2)));
    assert_eq!(grade_of(&on_second), Some((Rank::PrivateRecruit, 1)));
    assert_eq!(on_first.next_pay_grade.date, date(2024, 4, 1));
    assert_eq!(on_second.next_pay_grade.date, date(2024, 4, 1));
    assert_eq!(on_first.next_pay_grade.target.full_label(), "이병 3호봉");
    assert_eq!(on_second.next_pay_grade.target.full_label(), "이병 2호봉");
    assert_eq!(on_first.next_rank.date, date(2024, 5, 1));
    assert_eq!(on_second.next_rank.date, date(2024, 6, 1));

    // threshold 1 lands on the enlistment date itself
    let enlistment_day = compute(date(2024, 3, 1), date(2025, 8, 31), at(date(2024, 3, 1)));
    assert_eq!(grade_of(&enlistment_day), Some((Rank::PrivateRecruit, 2)));
    assert_eq!(rank_of(&enlistment_day), Some(Rank::PrivateRecruit));
    assert_eq!(enlistment_day.total_progress, 0.0);
    assert_eq!(enlistment_day.next_pay_grade.date, date(2024, 4, 1));
}

#[test]
fn exhausted_ladder_points_at_discharge() {
    let (enlistment, discharge) = army_period();
    let info = compute(enlistment, discharge, at(date(2025, 6, 15)));

    assert_eq!(rank_of(&info), Some(Rank::Sergeant));
    assert_eq!(grade_of(&info), Some((Rank::Sergeant, 3)));
    assert_eq!(info.d_day.to_string(), "-16");

    assert_eq!(info.next_pay_grade.target, Standing::Discharged);
    assert_eq!(info.next_pay_grade.date, discharge);
    // 14 of the 30 days between 2025-06-01 and discharge
    assert_eq!(info.next_pay_grade.progress, 46.66667);

    assert_eq!(info.next_rank.target, Standing::Discharged);
    assert_eq!(info.next_rank.date, discharge);
    // 75 of the 91 days since the sergeant promotion on 2025-04-01
    assert_eq!(info.next_rank.progress, 82.41758);
}

#[test]
fn promotions_after_discharge_are_never_next() {
    let enlistment = date(2024, 1, 2);
    let discharge = date(2025, 4, 1);
    let info = compute(enlistment, discharge, at(date(2024, 12, 10)));

    assert_eq!(rank_of(&info), Some(Rank::Corporal));
    // sergeant would be promoted on 2025-04-01, the discharge date itself
    assert_eq!(info.next_rank.target, Standing::Discharged);
    assert_eq!(info.next_pay_grade.target.full_label(), "상병 4호봉");
}

#[test]
fn before_enlistment_reports_lowest_tier_and_zero_progress() {
    let (enlistment, discharge) = army_period();
    let info = compute(enlistment, discharge, at(enlistment) - Duration::days(5));

    assert_eq!(rank_of(&info), Some(Rank::PrivateRecruit));
    assert_eq!(grade_of(&info), Some((Rank::PrivateRecruit, 1)));
    assert_eq!(info.total_progress, 0.0);
    assert_eq!(info.next_rank.progress, 0.0);
    assert_eq!(info.next_pay_grade.progress, 0.0);
    assert_eq!(info.elapsed_months, 0);
    assert_eq!(info.d_day.to_string(), "-551");
}

#[test]
fn view_exposes_display_strings() {
    let (enlistment, discharge) = army_period();
    let view = compute(enlistment, discharge, at(date(2024, 4, 2))).to_view();

    assert_eq!(view.d_day, "-455");
    assert_eq!(view.d_day_days, -455);
    assert_eq!(view.current_rank, "일병");
    assert_eq!(view.current_pay_grade, "1호봉");
    assert_eq!(view.next_pay_grade_name, "일병 2호봉");
    assert_eq!(view.next_rank_name, "상병");
    assert!(!view.discharged);

    let json = serde_json::to_value(&view).expect("view serializes");
    assert_eq!(json["discharge_date"], "2025-07-01");
    assert_eq!(json["next_rank_date"], "2024-10-01");
    assert_eq!(json["total_progress"], 16.66667);
}
