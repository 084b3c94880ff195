use axum::{extract::State, http::StatusCode, response::IntoResponse};
use haven::{
    model::alert::{CreateRiskAlertDto, RiskAlertDto, RiskLevel},
    server::controller::alert::{create_alert, get_alerts},
};

use super::*;

fn new_alert(is_resolved: bool) -> CreateRiskAlertDto {
    CreateRiskAlertDto {
        title: "Gas leak".to_string(),
        description: "Smell of gas near the kitchen".to_string(),
        risk_level: RiskLevel::Critical,
        shelter_id: 1,
        is_resolved,
        created_by_id: 1,
    }
}

/// Expect resolved alert to carry a resolution time and an open one not to
#[tokio::test]
async fn sets_resolved_at_only_for_resolved_alert() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user(TEST_USERNAME)
        .with_shelter("Riverside", 50)
        .build()
        .await?;
    let state = test.to_app_state();

    let resp = create_alert(
        State(state.clone()),
        authenticated(TEST_USERNAME),
        ApiJson(new_alert(true)),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let resolved: RiskAlertDto = json_body(resp).await;
    assert!(resolved.resolved_at.is_some());

    let resp = create_alert(
        State(state.clone()),
        authenticated(TEST_USERNAME),
        ApiJson(new_alert(false)),
    )
    .await
    .into_response();
    let open: RiskAlertDto = json_body(resp).await;
    assert!(open.resolved_at.is_none());

    let resp = get_alerts(State(state), authenticated(TEST_USERNAME))
        .await
        .into_response();
    let alerts: Vec<RiskAlertDto> = json_body(resp).await;
    assert_eq!(alerts.len(), 2);

    Ok(())
}

/// Expect 400 when the creator does not exist
#[tokio::test]
async fn rejects_nonexistent_creator() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_shelter("Riverside", 50)
        .build()
        .await?;

    let result = create_alert(
        State(test.to_app_state()),
        authenticated(TEST_USERNAME),
        ApiJson(new_alert(false)),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}
