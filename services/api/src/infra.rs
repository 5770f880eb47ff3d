use chrono::NaiveDate;
use discharge_counter::clock::Clock;
use discharge_counter::config::BadgeConfig;
use discharge_counter::resolver::parse_service_date;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) badge: BadgeConfig,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    parse_service_date(raw).map_err(|err| err.to_string())
}

#[cfg(test)]
pub(crate) mod testing {
    use super::AppState;
    use chrono::{DateTime, Utc};
    use discharge_counter::clock::FixedClock;
    use discharge_counter::config::BadgeConfig;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    pub(crate) fn state_at(now: DateTime<Utc>) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            clock: Arc::new(FixedClock(now)),
            badge: BadgeConfig::default(),
        }
    }
}
