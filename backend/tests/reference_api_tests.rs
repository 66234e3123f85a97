//! Forecast, crop listing and health endpoint tests

mod common;

use axum::http::StatusCode;
use common::*;
use irrigation_advisor_backend::config::ForecastFailurePolicy;

async fn app_with_forecast(mode: Upstream) -> axum::Router {
    let (weather_url, _) = weather_stub(&[Some(0.0), Some(5.5), None], mode).await;
    let (notify_url, _) = notification_stub(Upstream::Ok).await;
    test_app(&weather_url, &notify_url, ForecastFailurePolicy::AssumeDry)
}

// ============================================================================
// Forecast
// ============================================================================

#[tokio::test]
async fn test_daily_forecast() {
    let app = app_with_forecast(Upstream::Ok).await;

    let response = get_request(app, "/api/forecast?lat=18.52&lon=73.85").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["latitude"].as_f64(), Some(18.5));
    assert_eq!(body["longitude"].as_f64(), Some(73.875));

    let days = body["forecast"].as_array().unwrap();
    assert_eq!(days.len(), 3);
    assert_eq!(days[0]["date"], "2025-02-10");
    assert_eq!(days[1]["precipitation"].as_f64(), Some(5.5));
    assert!(days[2]["precipitation"].is_null());
    assert_eq!(days[0]["temperature_max"].as_f64(), Some(31.5));
    assert_eq!(days[0]["humidity"].as_f64(), Some(55.0));
    assert_eq!(days[0]["weather_code"], 61);
}

#[tokio::test]
async fn test_forecast_requires_coordinates() {
    let app = app_with_forecast(Upstream::Ok).await;
    let response = get_request(app, "/api/forecast?lat=18.52").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_response(response).await;
    assert_eq!(body["error"], "Latitude and longitude are required");
}

#[tokio::test]
async fn test_forecast_rejects_out_of_range_coordinates() {
    let app = app_with_forecast(Upstream::Ok).await;
    let response = get_request(app, "/api/forecast?lat=95&lon=73.85").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_forecast_rejects_non_numeric_coordinates() {
    let app = app_with_forecast(Upstream::Ok).await;
    let response = get_request(app, "/api/forecast?lat=abc&lon=73.85").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_response(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["error"].is_string());
    assert!(body["error_mr"].is_string());
}

#[tokio::test]
async fn test_forecast_upstream_failure() {
    let app = app_with_forecast(Upstream::Status(StatusCode::INTERNAL_SERVER_ERROR)).await;
    let response = get_request(app, "/api/forecast?lat=18.52&lon=73.85").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = json_response(response).await;
    assert_eq!(body["code"], "WEATHER_SERVICE_UNAVAILABLE");
    assert!(body["error_mr"].is_string());
}

// ============================================================================
// Reference Data
// ============================================================================

#[tokio::test]
async fn test_list_crops() {
    let app = app_with_forecast(Upstream::Ok).await;
    let response = get_request(app, "/api/crops").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    let crops = body.as_array().unwrap();
    assert_eq!(crops.len(), 2);
    assert_eq!(crops[0]["crop_name"], "Wheat");
    assert_eq!(crops[0]["soil_type"], "Black");
    assert_eq!(
        crops[0]["phases"],
        serde_json::json!(["Germination", "Tillering"])
    );
    assert_eq!(crops[1]["soil_type"], "Sandy");
}

#[tokio::test]
async fn test_health() {
    for uri in ["/", "/health", "/api/health"] {
        let app = app_with_forecast(Upstream::Ok).await;
        let response = get_request(app, uri).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["profiles_loaded"], 2);
        assert!(body["version"].is_string());
    }
}
