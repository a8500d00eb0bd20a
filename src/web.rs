use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::StatusCode;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::api::{self, AppState};
use crate::config::AirwatchConfig;
use crate::provider::EnvironmentProvider;
use crate::report::ReportBuilder;

/// Full application router: the JSON API nested under `/api`
pub fn app<P: EnvironmentProvider + 'static>(
    builder: ReportBuilder<P>,
    config: &AirwatchConfig,
) -> Router {
    // Both provider calls run concurrently, each bounded by the provider timeout
    let request_timeout = Duration::from_secs(u64::from(config.provider.timeout_seconds) + 5);

    let state = AppState {
        builder: Arc::new(builder),
        theme: Arc::new(config.theme.clone()),
    };
    build_app(state, request_timeout)
}

fn build_app<P: EnvironmentProvider + 'static>(
    state: AppState<P>,
    request_timeout: Duration,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router(state))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            request_timeout,
        ))
        .layer(cors)
}

pub async fn run<P: EnvironmentProvider + 'static>(
    builder: ReportBuilder<P>,
    config: &AirwatchConfig,
    port: u16,
) -> Result<()> {
    let app = app(builder, config);

    let addr = format!("{}:{}", config.server.host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server failed")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down web server");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;
    use crate::models::Coordinate;
    use crate::provider::fixtures::FakeProvider;
    use crate::provider::{AirPollutionResponse, CurrentWeatherResponse};
    use crate::report::ReportError;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, header};
    use tower::ServiceExt;

    struct StalledProvider;

    #[async_trait]
    impl EnvironmentProvider for StalledProvider {
        async fn air_pollution(
            &self,
            _coordinate: Coordinate,
        ) -> Result<AirPollutionResponse, ReportError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(AirPollutionResponse::default())
        }

        async fn current_weather(
            &self,
            _coordinate: Coordinate,
        ) -> Result<CurrentWeatherResponse, ReportError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(CurrentWeatherResponse::default())
        }
    }

    fn state<P: EnvironmentProvider>(provider: P) -> AppState<P> {
        AppState {
            builder: Arc::new(ReportBuilder::new(provider)),
            theme: Arc::new(ThemeConfig::default()),
        }
    }

    #[tokio::test]
    async fn test_slow_report_is_gateway_timeout() {
        let app = build_app(state(StalledProvider), Duration::from_millis(50));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/report?lat=1&lon=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[tokio::test]
    async fn test_app_nests_api_and_allows_cross_origin() {
        let app = app(
            ReportBuilder::new(FakeProvider::healthy(2)),
            &AirwatchConfig::default(),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
