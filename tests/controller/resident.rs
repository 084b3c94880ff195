use axum::{extract::State, http::StatusCode, response::IntoResponse};
use haven::{
    model::{
        api::ErrorDto,
        resident::{CreateResidentDto, ResidentDto, ResidentStatus},
    },
    server::controller::resident::{create_resident, get_residents},
};

use super::*;

fn new_resident(shelter_id: i32) -> CreateResidentDto {
    CreateResidentDto {
        name: "Omar".to_string(),
        age: 41,
        gender: "male".to_string(),
        phone: None,
        shelter_id,
        status: ResidentStatus::Active,
    }
}

/// Expect 400 invalid reference for a shelter that does not exist
#[tokio::test]
async fn rejects_nonexistent_shelter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = create_resident(
        State(test.to_app_state()),
        authenticated(TEST_USERNAME),
        ApiJson(new_resident(404)),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert!(body.error.contains("Shelter"));

    Ok(())
}

/// Expect 200 with a checked in resident and the resident listed afterwards
#[tokio::test]
async fn creates_resident() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_shelter("Riverside", 50)
        .build()
        .await?;
    let state = test.to_app_state();

    let resp = create_resident(
        State(state.clone()),
        authenticated(TEST_USERNAME),
        ApiJson(new_resident(1)),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let resident: ResidentDto = json_body(resp).await;
    assert!(resident.check_out_date.is_none());

    let resp = get_residents(State(state), authenticated(TEST_USERNAME))
        .await
        .into_response();
    let residents: Vec<ResidentDto> = json_body(resp).await;
    assert_eq!(residents.len(), 1);

    Ok(())
}
