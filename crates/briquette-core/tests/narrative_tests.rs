mod common;

use axum::http::StatusCode;
use briquette_core::{
    EstimatorError, GeminiClient, NarrativeGenerator, ReportController, ReportState,
    GENERIC_FAILURE_MESSAGE,
};
use common::{candidate_reply, spawn_mock_service};
use tokio::net::TcpListener;

#[tokio::test]
async fn test_generate_returns_joined_text() {
    let service = spawn_mock_service(
        StatusCode::OK,
        candidate_reply("## 📋 Project Overview\n", "Small residential task."),
    )
    .await;

    let text = service
        .client()
        .generate(0.5, 218)
        .await
        .expect("Failed to generate narrative");

    assert_eq!(text, "## 📋 Project Overview\nSmall residential task.");
}

#[tokio::test]
async fn test_request_carries_prompt_model_and_credential() {
    let service = spawn_mock_service(StatusCode::OK, candidate_reply("ok", "")).await;

    service
        .client()
        .generate(0.5, 218)
        .await
        .expect("Failed to generate narrative");

    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(
        request.path,
        "/v1beta/models/gemini-2.5-flash:generateContent"
    );
    assert_eq!(request.api_key.as_deref(), Some("test-key"));

    let prompt = request.body["contents"][0]["parts"][0]["text"]
        .as_str()
        .expect("prompt text");
    assert!(prompt.contains("- Area: 0.5 acres"));
    assert!(prompt.contains("- Product: 218 briquettes"));

    let temperature = request.body["generationConfig"]["temperature"]
        .as_f64()
        .expect("temperature");
    assert!((temperature - 0.7).abs() < 1e-6);
}

#[tokio::test]
async fn test_custom_model_in_path() {
    let service = spawn_mock_service(StatusCode::OK, candidate_reply("ok", "")).await;
    let client = GeminiClient::builder()
        .with_endpoint(format!("{}/", service.url))
        .with_model(Some("gemini-2.5-pro"))
        .with_api_key(Some("test-key"))
        .build()
        .expect("Failed to build client");

    client.generate(1.0, 436).await.expect("Failed to generate");

    assert_eq!(
        service.requests()[0].path,
        "/v1beta/models/gemini-2.5-pro:generateContent"
    );
}

#[tokio::test]
async fn test_error_status() {
    let service = spawn_mock_service(
        StatusCode::FORBIDDEN,
        r#"{"error": {"message": "API key not valid"}}"#,
    )
    .await;

    let err = service.client().generate(1.0, 436).await.unwrap_err();
    assert!(matches!(err, EstimatorError::Status { status: 403 }));
}

#[tokio::test]
async fn test_empty_candidates() {
    let service = spawn_mock_service(StatusCode::OK, r#"{"candidates": []}"#).await;

    let err = service.client().generate(1.0, 436).await.unwrap_err();
    assert!(matches!(err, EstimatorError::EmptyResponse));
}

#[tokio::test]
async fn test_malformed_body() {
    let service = spawn_mock_service(StatusCode::OK, "<html>gateway</html>").await;

    let err = service.client().generate(1.0, 436).await.unwrap_err();
    assert!(matches!(err, EstimatorError::Serialization { .. }));
}

#[tokio::test]
async fn test_missing_credential_never_reaches_service() {
    let service = spawn_mock_service(StatusCode::OK, candidate_reply("ok", "")).await;
    let client = GeminiClient::builder()
        .with_endpoint(service.url.clone())
        .build()
        .expect("Failed to build client");

    let err = client.generate(1.0, 436).await.unwrap_err();
    assert!(matches!(err, EstimatorError::Configuration { .. }));
    assert!(service.requests().is_empty());
}

#[tokio::test]
async fn test_transport_failure() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("local address");
    drop(listener);

    let client = GeminiClient::builder()
        .with_endpoint(format!("http://{addr}"))
        .with_api_key(Some("test-key"))
        .build()
        .expect("Failed to build client");

    let err = client.generate(1.0, 436).await.unwrap_err();
    assert!(matches!(err, EstimatorError::Remote { .. }));
}

#[tokio::test]
async fn test_report_flow_hides_service_error() {
    let service = spawn_mock_service(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error": {"message": "backend exploded"}}"#,
    )
    .await;
    let client = service.client();
    let mut controller = ReportController::new();

    let ticket = controller.trigger().expect("trigger from idle");
    let outcome = client.generate(2.0, 872).await;
    assert!(controller.resolve(ticket, outcome));

    match controller.state() {
        ReportState::Error(message) => {
            assert_eq!(message, GENERIC_FAILURE_MESSAGE);
            assert!(!message.contains("500"));
            assert!(!message.contains("exploded"));
        }
        other => panic!("expected error state, got {other:?}"),
    }
}

#[tokio::test]
async fn test_report_flow_success() {
    let service = spawn_mock_service(
        StatusCode::OK,
        candidate_reply("## 🚚 Logistics Estimates\n", "- **Estimated Total Weight:** 7 lbs"),
    )
    .await;
    let client = service.client();
    let mut controller = ReportController::new();

    let ticket = controller.trigger().expect("trigger from idle");
    let outcome = client.generate(0.5, 218).await;
    controller.resolve(ticket, outcome);

    assert_eq!(
        controller.state().content(),
        Some("## 🚚 Logistics Estimates\n- **Estimated Total Weight:** 7 lbs")
    );
}
