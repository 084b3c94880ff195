use axum::{extract::State, http::StatusCode, response::IntoResponse};
use haven::{
    model::{api::ErrorDto, event::CreateEventDto},
    server::controller::{
        event::{create_event, get_events},
        shelter::get_shelter_events,
    },
};
use serde_json::{json, Value};

use super::*;

fn new_event(shelter_id: i32) -> CreateEventDto {
    serde_json::from_value(json!({
        "title": "First aid training",
        "description": "Basic first aid for volunteers",
        "event_date": "2026-11-01T10:00:00",
        "location": "Hall B",
        "shelter_id": shelter_id,
        "type": "training",
    }))
    .unwrap()
}

/// Expect the category to be read from and written to the `type` field
#[tokio::test]
async fn creates_event_with_type_field() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_shelter("Riverside", 50)
        .build()
        .await?;

    let resp = create_event(
        State(test.to_app_state()),
        authenticated(TEST_USERNAME),
        ApiJson(new_event(1)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = json_body(resp).await;
    assert_eq!(body["type"], "training");
    assert!(body.get("event_type").is_none());
    assert_eq!(body["shelter_id"], 1);

    Ok(())
}

/// Expect created events in the full list and in the shelter's list
#[tokio::test]
async fn lists_created_events() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_shelter("Riverside", 50)
        .with_shelter("Hillside", 20)
        .build()
        .await?;
    let state = test.to_app_state();

    for shelter_id in [1, 2] {
        let resp = create_event(
            State(state.clone()),
            authenticated(TEST_USERNAME),
            ApiJson(new_event(shelter_id)),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = get_events(State(state.clone()), authenticated(TEST_USERNAME))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let events: Vec<Value> = json_body(resp).await;
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|event| event["type"] == "training"));

    let resp = get_shelter_events(
        State(state),
        authenticated(TEST_USERNAME),
        ApiPath(2),
    )
    .await
    .into_response();
    let events: Vec<Value> = json_body(resp).await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["shelter_id"], 2);

    Ok(())
}

/// Expect 400 invalid reference for a shelter that does not exist
#[tokio::test]
async fn rejects_nonexistent_shelter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = create_event(
        State(test.to_app_state()),
        authenticated(TEST_USERNAME),
        ApiJson(new_event(404)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert!(body.error.contains("Shelter"));

    Ok(())
}
