//! Yield workflow tests
//!
//! The weather provider and prediction service are served by one mock server.

use std::sync::Arc;
use std::time::Duration;

use crop_advisor_backend::config::{PredictionConfig, WeatherConfig};
use crop_advisor_backend::external::{WeatherClient, YieldPredictionClient};
use crop_advisor_backend::services::{YieldWorkflow, YIELD_ERROR_MESSAGE};
use shared::{
    Crop, Fertilizer, Irrigation, Region, SoilType, WorkflowPhase, YieldFormInput,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn workflow(server: &MockServer) -> YieldWorkflow {
    let weather = WeatherClient::new(&WeatherConfig {
        api_endpoint: server.uri(),
        api_key: "test-key".to_string(),
        units: "metric".to_string(),
    })
    .unwrap();
    let prediction = YieldPredictionClient::new(&PredictionConfig {
        endpoint: format!("{}/predict", server.uri()),
    })
    .unwrap();
    YieldWorkflow::new(weather, prediction)
}

fn input() -> YieldFormInput {
    YieldFormInput {
        region: Region::North,
        soil_type: SoilType::Loam,
        crop: Crop::Wheat,
        fertilizer: Fertilizer::Medium,
        irrigation: Irrigation::Yes,
        days_to_harvest: 120,
    }
}

fn weather_ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "main": { "temp": 24.0, "humidity": 55 },
        "rain": { "1h": 0.5 }
    }))
}

#[tokio::test]
async fn test_success_merges_weather_into_prediction() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "north"))
        .respond_with(weather_ok())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(serde_json::json!({
            "region": "north",
            "soilType": "loam",
            "crop": "wheat",
            "fertilizer": "medium",
            "irrigation": "Yes",
            "daysToHarvest": 120,
            "temperatureCelsius": 24.0,
            "precipitationMm": 0.5,
            "humidityPercent": 55.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "yield": 4.25 })))
        .expect(1)
        .mount(&server)
        .await;

    let workflow = workflow(&server);
    let state = workflow.submit(input()).await;

    assert_eq!(state.phase(), WorkflowPhase::Success);
    assert!(state.result.as_deref().unwrap().contains("4.25"));
    assert!(state.error.is_none());
    assert_eq!(workflow.state().await, state);
}

#[tokio::test]
async fn test_weather_failure_skips_prediction() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "yield": 1.0 })))
        .expect(0)
        .mount(&server)
        .await;

    let state = workflow(&server).submit(input()).await;

    assert_eq!(state.phase(), WorkflowPhase::Failed);
    assert_eq!(state.error.as_deref(), Some(YIELD_ERROR_MESSAGE));
    assert!(state.result.is_none());
}

#[tokio::test]
async fn test_malformed_weather_skips_prediction() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let state = workflow(&server).submit(input()).await;
    assert_eq!(state.error.as_deref(), Some(YIELD_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_prediction_failures_use_generic_message() {
    let responses = [
        ResponseTemplate::new(503).set_body_string("maintenance"),
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "prediction": 3.2 })),
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "yield": "high" })),
    ];

    for response in responses {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(weather_ok())
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(response)
            .expect(1)
            .mount(&server)
            .await;

        let state = workflow(&server).submit(input()).await;
        assert_eq!(state.phase(), WorkflowPhase::Failed);
        assert_eq!(state.error.as_deref(), Some(YIELD_ERROR_MESSAGE));
    }
}

#[tokio::test]
async fn test_resubmission_clears_previous_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(weather_ok())
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "yield": 2.8 })))
        .mount(&server)
        .await;

    let workflow = workflow(&server);

    let first = workflow.submit(input()).await;
    assert_eq!(first.phase(), WorkflowPhase::Failed);

    let second = workflow.submit(input()).await;
    assert_eq!(second.phase(), WorkflowPhase::Success);
    assert!(second.error.is_none());
    assert!(second.result.as_deref().unwrap().contains("2.8"));
}

#[tokio::test]
async fn test_overlapping_submission_does_not_disturb_in_flight() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(weather_ok().set_delay(Duration::from_millis(300)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "yield": 5.5 })))
        .expect(1)
        .mount(&server)
        .await;

    let workflow = Arc::new(workflow(&server));

    let in_flight = {
        let workflow = Arc::clone(&workflow);
        tokio::spawn(async move { workflow.submit(input()).await })
    };

    // Wait for the first submission to enter Loading
    for _ in 0..50 {
        if workflow.state().await.is_loading {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert!(workflow.state().await.is_loading);

    let overlapping = workflow.submit(input()).await;
    assert_eq!(overlapping.phase(), WorkflowPhase::Loading);

    let resolved = in_flight.await.unwrap();
    assert_eq!(resolved.phase(), WorkflowPhase::Success);
    assert!(resolved.result.as_deref().unwrap().contains("5.5"));
    assert_eq!(workflow.state().await, resolved);
}

#[tokio::test]
async fn test_abandoned_submission_still_resolves() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(weather_ok())
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "yield": 3.2 }))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(2)
        .mount(&server)
        .await;

    let workflow = workflow(&server);

    // The caller gives up while the prediction is still pending
    let abandoned =
        tokio::time::timeout(Duration::from_millis(50), workflow.submit(input())).await;
    assert!(abandoned.is_err());

    tokio::time::sleep(Duration::from_millis(500)).await;
    let settled = workflow.state().await;
    assert_eq!(settled.phase(), WorkflowPhase::Success);

    let resubmitted = workflow.submit(input()).await;
    assert_eq!(resubmitted.phase(), WorkflowPhase::Success);
    assert!(resubmitted.result.as_deref().unwrap().contains("3.2"));
}
