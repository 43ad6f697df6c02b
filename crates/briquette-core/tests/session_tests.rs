mod common;

use std::{sync::Arc, time::Duration};

use axum::http::StatusCode;
use briquette_core::{
    ReportState, SessionBuilder, SessionEvent, SessionUpdate, GENERIC_FAILURE_MESSAGE,
};
use common::{candidate_reply, spawn_mock_service, MockService};
use tokio::sync::mpsc;

/// Helper that drives a session against a mock service: one edit, then one
/// report request once the estimate is in.
async fn estimate_with_report(
    service: &MockService,
    acres: &str,
) -> (briquette_core::SessionSnapshot, Vec<SessionUpdate>) {
    let (session, mut updates) = SessionBuilder::new(Arc::new(service.client()))
        .with_quiet_period(Duration::from_millis(20))
        .build();
    let (events, rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(session.run(rx));

    events
        .send(SessionEvent::Edit(acres.to_string()))
        .expect("Failed to send edit");

    let mut seen = Vec::new();
    while let Some(update) = updates.recv().await {
        let calculated = matches!(update, SessionUpdate::Calculated(_));
        seen.push(update);
        if calculated {
            break;
        }
    }

    events
        .send(SessionEvent::GenerateReport)
        .expect("Failed to send report request");
    events
        .send(SessionEvent::EndOfInput)
        .expect("Failed to send end of input");

    let snapshot = handle.await.expect("Session task panicked");
    while let Ok(update) = updates.try_recv() {
        seen.push(update);
    }
    (snapshot, seen)
}

#[tokio::test]
async fn test_session_end_to_end_success() {
    let service = spawn_mock_service(
        StatusCode::OK,
        candidate_reply("## 📋 Project Overview\n", "Small residential task."),
    )
    .await;

    let (snapshot, updates) = estimate_with_report(&service, "0.5").await;

    let calculation = snapshot.calculation.expect("calculation");
    assert_eq!(calculation.units_needed, 218);
    assert_eq!(
        snapshot.report,
        ReportState::Success("## 📋 Project Overview\nSmall residential task.".to_string())
    );

    let states: Vec<&ReportState> = updates
        .iter()
        .filter_map(|update| match update {
            SessionUpdate::Report { state, .. } => Some(state),
            _ => None,
        })
        .collect();
    assert_eq!(states.len(), 2);
    assert_eq!(states[0], &ReportState::Loading);

    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    let prompt = requests[0].body["contents"][0]["parts"][0]["text"]
        .as_str()
        .expect("prompt text");
    assert!(prompt.contains("- Product: 218 briquettes"));
}

#[tokio::test]
async fn test_session_end_to_end_failure() {
    let service = spawn_mock_service(
        StatusCode::SERVICE_UNAVAILABLE,
        r#"{"error": {"message": "model overloaded"}}"#,
    )
    .await;

    let (snapshot, _) = estimate_with_report(&service, "3").await;

    assert_eq!(
        snapshot.report,
        ReportState::Error(GENERIC_FAILURE_MESSAGE.to_string())
    );
    assert_eq!(snapshot.calculation.map(|c| c.units_needed), Some(1307));
}
