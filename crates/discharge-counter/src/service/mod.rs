//! Service-time progression: rank, pay grade, D-day and progress toward
//! discharge for a given enlistment period and instant.

pub mod calculator;
pub mod calendar;
pub mod ladder;
pub mod progress;
pub mod views;

pub use calculator::{compute, DDay, Milestone, ServiceInfo, ServicePeriod, Standing};
pub use ladder::{PayGrade, Rank, RankTier, CIVILIAN_LABEL, PAY_GRADES, RANKS};
pub use views::ServiceInfoView;
