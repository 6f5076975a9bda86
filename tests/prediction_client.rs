//! Prediction client tests
//!
//! Uses WireMock to stand in for the prediction service.

use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use core_clarity::client::{PredictionClient, PredictionError};
use core_clarity::generator::ScenarioGenerator;
use core_clarity::models::{RiskTier, ScenarioInput, SCENARIO_FIELD_COUNT};
use core_clarity::session::{DashboardSession, SubmitError};

fn assessment_body() -> Value {
    json!({
        "incident_occurred": true,
        "incident_probability": 0.91,
        "confidence": 0.91,
        "true_risk_level": 3,
        "avalon_evac_recommendation": true,
        "avalon_shutdown_recommendation": true,
        "human_override": false,
        "top_contributors": [
            { "feature": "core_temp_c", "impact": 0.95, "value": 378 },
            { "feature": "coolant_pressure_bar", "impact": 0.9, "value": 181 }
        ],
        "incident_type": "Core Overheat",
        "model_metadata": {
            "model_type": "LogisticRegression",
            "model_source": "Local",
            "n_features": 79,
            "using_scaler": true,
            "using_feature_names": true,
            "is_real_model": true
        }
    })
}

#[tokio::test]
async fn test_predict_sends_every_field() {
    let mock_server = MockServer::start().await;
    let scenario = ScenarioGenerator::seeded(17).generate(RiskTier::Critical);

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .and(header("content-type", "application/json"))
        .and(body_json(&scenario))
        .respond_with(ResponseTemplate::new(200).set_body_json(assessment_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PredictionClient::with_base_url(mock_server.uri());
    let assessment = client.predict(&scenario).await.unwrap();

    assert_eq!(assessment.true_risk_level, 3);
    assert_eq!(assessment.incident_type.as_deref(), Some("Core Overheat"));

    let requests = mock_server.received_requests().await.unwrap();
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let fields = sent.as_object().unwrap();
    assert_eq!(fields.len(), SCENARIO_FIELD_COUNT);
    assert_eq!(fields["radiation_inside_uSv"], json!(scenario.radiation_inside_usv));
    assert_eq!(fields["country"], json!(scenario.country));
    assert_eq!(serde_json::from_value::<ScenarioInput>(sent).unwrap(), scenario);
}

#[tokio::test]
async fn test_predict_error_carries_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "Model not loaded" })))
        .mount(&mock_server)
        .await;

    let client = PredictionClient::with_base_url(mock_server.uri());
    let err = client.predict(&ScenarioInput::default()).await.unwrap_err();

    assert_eq!(err.to_string(), "Model not loaded");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_predict_error_falls_back_to_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&mock_server)
        .await;

    let client = PredictionClient::with_base_url(mock_server.uri());
    let err = client.predict(&ScenarioInput::default()).await.unwrap_err();

    assert_eq!(err.to_string(), "HTTP error! status: 503");
}

#[tokio::test]
async fn test_predict_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .mount(&mock_server)
        .await;

    let client = PredictionClient::with_base_url(mock_server.uri());
    let err = client.predict(&ScenarioInput::default()).await.unwrap_err();

    assert!(matches!(err, PredictionError::Parse(_)));
}

#[tokio::test]
async fn test_network_failure() {
    // Nothing listens on the discard port
    let client = PredictionClient::with_base_url("http://127.0.0.1:9");
    let err = client.predict(&ScenarioInput::default()).await.unwrap_err();

    assert!(matches!(err, PredictionError::Network(_)));
    assert!(!client.check_health().await);
}

#[tokio::test]
async fn test_health_check() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = PredictionClient::with_base_url(mock_server.uri());
    assert!(client.check_health().await);

    let unhealthy_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&unhealthy_server)
        .await;

    let client = PredictionClient::with_base_url(unhealthy_server.uri());
    assert!(!client.check_health().await);
}

#[tokio::test]
async fn test_model_info_passthrough() {
    let mock_server = MockServer::start().await;
    let info = json!({
        "model_type": "LogisticRegression",
        "model_loaded": true,
        "n_features": 79,
        "feature_names": ["reactor_age_years", "reactor_nominal_power_mw"],
        "scaler_loaded": true
    });

    Mock::given(method("GET"))
        .and(path("/api/model-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(info.clone()))
        .mount(&mock_server)
        .await;

    let client = PredictionClient::with_base_url(mock_server.uri());
    assert_eq!(client.model_info().await.unwrap(), info);
}

#[tokio::test]
async fn test_failed_submission_clears_previous_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(assessment_body()))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({ "error": "No data provided" })))
        .mount(&mock_server)
        .await;

    let client = PredictionClient::with_base_url(mock_server.uri());
    let session = DashboardSession::new();

    session.submit(&client, ScenarioInput::default()).await.unwrap();
    assert!(session.snapshot().assessment.is_some());

    let mut second = ScenarioInput::default();
    second.core_temp_c = 301.0;
    let err = session.submit(&client, second.clone()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Prediction(_)));

    let snapshot = session.snapshot();
    assert!(snapshot.assessment.is_none());
    assert!(!snapshot.busy);
    assert_eq!(snapshot.scenario, Some(second));

    let notice = snapshot.notice.unwrap();
    assert_eq!(notice.title, "Backend Connection Failed");
    assert!(notice.description.contains("No data provided"));
}
