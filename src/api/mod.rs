use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::ThemeConfig;
use crate::models::air_quality::gauge_bands;
use crate::models::{AqiLevel, AqiScaleBand, Coordinate, EnvironmentalReport};
use crate::provider::EnvironmentProvider;
use crate::report::{ReportBuilder, ReportError};
use crate::{AirwatchError, VERSION};

/// Shared state of the HTTP handlers
pub struct AppState<P> {
    pub builder: Arc<ReportBuilder<P>>,
    pub theme: Arc<ThemeConfig>,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            builder: Arc::clone(&self.builder),
            theme: Arc::clone(&self.theme),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Serialize)]
pub struct ApiAqiLevel {
    pub index: u8,
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Serialize)]
pub struct ApiAqiScale {
    pub levels: Vec<ApiAqiLevel>,
    pub gauge_bands: Vec<AqiScaleBand>,
}

/// Error body: `{"error": kind, "message": text}`
pub struct ApiError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl From<ReportError> for ApiError {
    fn from(error: ReportError) -> Self {
        let status = match error {
            ReportError::NoDataAvailable => StatusCode::NOT_FOUND,
            ReportError::MalformedResponse(_) | ReportError::InvalidAqi(_) => {
                StatusCode::BAD_GATEWAY
            }
            ReportError::ProviderUnreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        Self {
            status,
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl From<AirwatchError> for ApiError {
    fn from(error: AirwatchError) -> Self {
        if let AirwatchError::Report { source } = error {
            return source.into();
        }

        let (status, kind) = match &error {
            AirwatchError::Validation { .. } => (StatusCode::BAD_REQUEST, "invalid_coordinate"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        };
        Self {
            status,
            kind,
            message: error.user_message(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            kind: "invalid_coordinate",
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({"error": self.kind, "message": self.message}));
        (self.status, body).into_response()
    }
}

pub fn router<P: EnvironmentProvider + 'static>(state: AppState<P>) -> Router {
    Router::new()
        .route("/report", get(get_report::<P>))
        .route("/theme", get(get_theme::<P>))
        .route("/aqi-scale", get(get_aqi_scale))
        .route("/health", get(get_health))
        .with_state(state)
}

#[tracing::instrument(skip(state))]
async fn get_report<P: EnvironmentProvider + 'static>(
    State(state): State<AppState<P>>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<Json<EnvironmentalReport>, ApiError> {
    let Query(query) = query?;
    let coordinate = Coordinate::new(query.lat, query.lon)?;
    let report = state.builder.build_report(coordinate).await.map_err(|e| {
        tracing::warn!("Report for {} failed: {}", coordinate, e);
        ApiError::from(e)
    })?;
    Ok(Json(report))
}

async fn get_theme<P: EnvironmentProvider + 'static>(
    State(state): State<AppState<P>>,
) -> Json<ThemeConfig> {
    Json(state.theme.as_ref().clone())
}

async fn get_aqi_scale() -> Json<ApiAqiScale> {
    let levels = AqiLevel::ALL
        .iter()
        .map(|level| ApiAqiLevel {
            index: level.index().value(),
            label: level.label(),
            color: level.color(),
        })
        .collect();

    Json(ApiAqiScale {
        levels,
        gauge_bands: gauge_bands(),
    })
}

async fn get_health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok", "version": VERSION}))
}
