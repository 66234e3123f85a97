//! Test harness: the real router wired to in-process stand-ins for the
//! forecast API and the notification gateway.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Path, Query},
    http::{HeaderMap, Request, StatusCode},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use irrigation_advisor_backend::{
    config::{DiseaseConfig, ForecastFailurePolicy, NotificationConfig, WeatherConfig},
    create_app, AppState, Config,
};
use serde_json::{json, Value};
use shared::CropCatalog;
use tower::ServiceExt;

/// Upstream timeout used by every test app
pub const TIMEOUT_MS: u64 = 200;

/// Wheat/Black matches the worked examples: capacity averages 0.5, optimal
/// minimum 0.40 and 50 mm/week. Tillering starts after day 15.
pub const DATASET: &str = r#"{
  "crops": [
    {
      "crop_name": "Wheat",
      "soil_types": [
        {
          "soil_type": "Black",
          "moisture_holding_capacity_m3_per_m3": {"min": 0.4, "max": 0.6},
          "growth_phases": [
            {
              "phase": "Germination",
              "duration_days": {"min": 10, "max": 20},
              "irrigation_depth_m": {"min": 0.04, "max": 0.06},
              "irrigation_interval_days": {"min": 6, "max": 8},
              "optimal_moisture_m3_per_m3": {"min": 0.40, "max": 0.50}
            },
            {
              "phase": "Tillering",
              "duration_days": {"min": 25, "max": 35},
              "irrigation_depth_m": {"min": 0.04, "max": 0.06},
              "irrigation_interval_days": {"min": 6, "max": 8},
              "optimal_moisture_m3_per_m3": {"min": 0.40, "max": 0.55}
            }
          ]
        },
        {
          "soil_type": "Sandy",
          "moisture_holding_capacity_m3_per_m3": {"min": 0.1, "max": 0.2},
          "growth_phases": [
            {
              "phase": "Germination",
              "duration_days": {"min": 10, "max": 20},
              "irrigation_depth_m": {"min": 0.03, "max": 0.05},
              "irrigation_interval_days": {"min": 3, "max": 5},
              "optimal_moisture_m3_per_m3": {"min": 0.20, "max": 0.30}
            }
          ]
        }
      ]
    }
  ]
}"#;

/// Requests seen by a stub server
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<Value>>>,
}

impl Recorder {
    pub fn record(&self, value: Value) {
        self.calls.lock().unwrap().push(value);
    }

    pub fn calls(&self) -> Vec<Value> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

/// How a stub server answers
#[derive(Clone, Copy)]
pub enum Upstream {
    Ok,
    Status(StatusCode),
    /// Answers only after the client has given up
    Slow,
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Open-Meteo style daily payload, one day per precipitation value
pub fn forecast_body(daily_precipitation: &[Option<f64>]) -> Value {
    let days = daily_precipitation.len();
    let time: Vec<String> = (0..days).map(|i| format!("2025-02-{:02}", 10 + i)).collect();

    json!({
        "latitude": 18.5,
        "longitude": 73.875,
        "daily": {
            "time": time,
            "weather_code": vec![61; days],
            "temperature_2m_max": vec![31.5; days],
            "temperature_2m_min": vec![17.0; days],
            "precipitation_sum": daily_precipitation,
            "relative_humidity_2m_mean": vec![55; days]
        }
    })
}

/// Forecast API stand-in serving `GET /forecast`
pub async fn weather_stub(daily_precipitation: &[Option<f64>], mode: Upstream) -> (String, Recorder) {
    let recorder = Recorder::default();
    let body = forecast_body(daily_precipitation);
    let seen = recorder.clone();

    let app = Router::new().route(
        "/forecast",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let body = body.clone();
            let seen = seen.clone();
            async move {
                seen.record(json!(params));
                respond(mode, body).await
            }
        }),
    );

    (serve(app).await, recorder)
}

/// Notification gateway stand-in serving `POST /notifications/send`
pub async fn notification_stub(mode: Upstream) -> (String, Recorder) {
    let recorder = Recorder::default();
    let seen = recorder.clone();

    let app = Router::new().route(
        "/notifications/send",
        post(move |Json(body): Json<Value>| {
            let seen = seen.clone();
            async move {
                seen.record(body);
                respond(mode, json!({"success": true})).await
            }
        }),
    );

    (
        format!("{}/notifications/send", serve(app).await),
        recorder,
    )
}

/// Gemini stand-in serving `POST /models/{model}:generateContent` with `text`
pub async fn gemini_stub(text: &str, mode: Upstream) -> (String, Recorder) {
    let recorder = Recorder::default();
    let seen = recorder.clone();
    let body = json!({
        "candidates": [{"content": {"parts": [{"text": text}], "role": "model"}}]
    });

    let app = Router::new().route(
        "/models/:action",
        post(
            move |Path(action): Path<String>, headers: HeaderMap, Json(request): Json<Value>| {
                let body = body.clone();
                let seen = seen.clone();
                async move {
                    let api_key = headers
                        .get("x-goog-api-key")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    seen.record(json!({"action": action, "api_key": api_key, "request": request}));
                    respond(mode, body).await
                }
            },
        ),
    );

    (serve(app).await, recorder)
}

/// Gemini config pointing at `url` with a test key
pub fn disease_config(url: &str) -> DiseaseConfig {
    DiseaseConfig {
        api_endpoint: url.to_string(),
        model: "gemini-1.5-flash".to_string(),
        api_key: Some("test-key".to_string()),
        timeout_ms: TIMEOUT_MS,
    }
}

async fn respond(mode: Upstream, body: Value) -> (StatusCode, Json<Value>) {
    match mode {
        Upstream::Ok => (StatusCode::OK, Json(body)),
        Upstream::Status(status) => (status, Json(json!({"message": "stub failure"}))),
        Upstream::Slow => {
            tokio::time::sleep(Duration::from_millis(TIMEOUT_MS * 10)).await;
            (StatusCode::OK, Json(body))
        }
    }
}

pub fn test_config(weather_url: &str, notification_url: &str, on_failure: ForecastFailurePolicy) -> Config {
    Config {
        weather: WeatherConfig {
            api_endpoint: weather_url.to_string(),
            forecast_days: 7,
            timeout_ms: TIMEOUT_MS,
            on_failure,
        },
        notification: NotificationConfig {
            endpoint: notification_url.to_string(),
            country_code: "+91".to_string(),
            timeout_ms: TIMEOUT_MS,
        },
        ..Config::default()
    }
}

pub fn test_app(weather_url: &str, notification_url: &str, on_failure: ForecastFailurePolicy) -> Router {
    test_app_with_config(test_config(weather_url, notification_url, on_failure))
}

pub fn test_app_with_config(config: Config) -> Router {
    let catalog = CropCatalog::from_json_str(DATASET).unwrap();
    create_app(AppState::new(config, catalog).unwrap())
}

/// Wheat/Black at 30 days (Tillering) with the given moisture percentage
pub fn check_body(current_soil_moisture: f64) -> Value {
    json!({
        "crop_name": "Wheat",
        "soil_type": "Black",
        "age": 30,
        "current_soil_moisture": current_soil_moisture,
        "latitude": 18.52,
        "longitude": 73.85,
        "mobile_number": "9876543210",
        "email_address": "grower@example.com"
    })
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn get_request(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn json_response(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
