use crate::infra::AppState;
use crate::page::index_page;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use discharge_counter::badge::render_badge;
use discharge_counter::error::AppError;
use discharge_counter::resolver::{parse_service_date, resolve};
use discharge_counter::service::calendar::kst_midnight;
use discharge_counter::service::ServiceInfoView;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};

/// Query parameters accepted by the badge endpoint.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct BadgeQuery {
    #[serde(default)]
    pub(crate) startdate: Option<String>,
    #[serde(default)]
    pub(crate) enddate: Option<String>,
    #[serde(default)]
    pub(crate) branch: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ServiceInfoRequest {
    pub(crate) enlistment_date: String,
    #[serde(default)]
    pub(crate) discharge_date: Option<String>,
    #[serde(default)]
    pub(crate) branch: Option<String>,
    /// Evaluation date, read as KST midnight. Malformed values are rejected
    /// like any other date in the request.
    #[serde(default)]
    pub(crate) today: Option<String>,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/view", get(badge_endpoint))
        .route("/api/v1/service-info", post(service_info_endpoint))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Renders the SVG badge. Errors are plain text since the response is
/// usually shown in place of an image.
pub(crate) async fn badge_endpoint(
    State(state): State<AppState>,
    Query(query): Query<BadgeQuery>,
) -> Response {
    let period = match resolve(
        query.startdate.as_deref(),
        query.enddate.as_deref(),
        query.branch.as_deref(),
    ) {
        Ok(period) => period,
        Err(err) => {
            warn!(error = %err, ?query, "rejected badge request");
            return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
    };

    let info = period.service_info(state.clock.now());
    match render_badge(&info) {
        Ok(svg) => {
            info!(
                enlistment = %period.enlistment(),
                discharge = %period.discharge(),
                d_day = %info.d_day,
                "rendered badge"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "image/svg+xml"),
                    (header::CACHE_CONTROL, state.badge.cache_control.as_str()),
                ],
                svg,
            )
                .into_response()
        }
        Err(err) => {
            error!(error = %err, "badge rendering failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to generate the image: {err}"),
            )
                .into_response()
        }
    }
}

pub(crate) async fn service_info_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<ServiceInfoRequest>,
) -> Result<Json<ServiceInfoView>, AppError> {
    let ServiceInfoRequest {
        enlistment_date,
        discharge_date,
        branch,
        today,
    } = payload;

    let period = resolve(
        Some(&enlistment_date),
        discharge_date.as_deref(),
        branch.as_deref(),
    )?;
    let now = match today.as_deref() {
        Some(raw) => kst_midnight(parse_service_date(raw)?),
        None => state.clock.now(),
    };

    Ok(Json(period.service_info(now).to_view()))
}
