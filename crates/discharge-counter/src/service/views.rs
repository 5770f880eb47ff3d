use super::calculator::ServiceInfo;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Display-ready projection of [`ServiceInfo`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfoView {
    pub enlistment_date: NaiveDate,
    pub discharge_date: NaiveDate,
    pub evaluated_at: DateTime<Utc>,
    pub d_day: String,
    pub d_day_days: i64,
    pub elapsed_months: u32,
    pub discharged: bool,
    pub current_rank: String,
    pub current_pay_grade: String,
    pub total_progress: f64,
    pub next_pay_grade_date: NaiveDate,
    pub next_pay_grade_name: String,
    pub progress_to_next_pay_grade: f64,
    pub next_rank_date: NaiveDate,
    pub next_rank_name: String,
    pub progress_to_next_rank: f64,
}

impl ServiceInfo {
    pub fn to_view(&self) -> ServiceInfoView {
        ServiceInfoView {
            enlistment_date: self.enlistment_date,
            discharge_date: self.discharge_date,
            evaluated_at: self.evaluated_at,
            d_day: self.d_day.to_string(),
            d_day_days: self.d_day.signed_days(),
            elapsed_months: self.elapsed_months,
            discharged: self.is_discharged(),
            current_rank: self.current_rank.label(),
            current_pay_grade: self.current_pay_grade.grade_label(),
            total_progress: self.total_progress,
            next_pay_grade_date: self.next_pay_grade.date,
            next_pay_grade_name: self.next_pay_grade.target.full_label(),
            progress_to_next_pay_grade: self.next_pay_grade.progress,
            next_rank_date: self.next_rank.date,
            next_rank_name: self.next_rank.target.label(),
            progress_to_next_rank: self.next_rank.progress,
        }
    }
}
