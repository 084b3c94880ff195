use axum::{extract::State, http::StatusCode, response::IntoResponse};
use haven::{
    model::{
        api::ErrorDto,
        research::{CreateResearchDataDto, ResearchDataDto},
    },
    server::controller::{
        research::{create_research, get_research},
        shelter::get_shelter_research,
    },
};

use super::*;

fn new_research(shelter_id: i32) -> CreateResearchDataDto {
    CreateResearchDataDto {
        title: "Sleeping conditions".to_string(),
        description: "Survey of residents on dormitory noise".to_string(),
        data_type: "survey".to_string(),
        shelter_id,
    }
}

/// Expect 200 with the created record, listed afterwards
#[tokio::test]
async fn creates_and_lists_research() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_shelter("Riverside", 50)
        .build()
        .await?;
    let state = test.to_app_state();

    let resp = create_research(
        State(state.clone()),
        authenticated(TEST_USERNAME),
        ApiJson(new_research(1)),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let created: ResearchDataDto = json_body(resp).await;
    assert_eq!(created.data_type, "survey");

    let resp = get_research(State(state.clone()), authenticated(TEST_USERNAME))
        .await
        .into_response();
    let records: Vec<ResearchDataDto> = json_body(resp).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, created.id);

    let resp = get_shelter_research(State(state), authenticated(TEST_USERNAME), ApiPath(1))
        .await
        .into_response();
    let records: Vec<ResearchDataDto> = json_body(resp).await;
    assert_eq!(records.len(), 1);

    Ok(())
}

/// Expect 400 invalid reference for a shelter that does not exist
#[tokio::test]
async fn rejects_nonexistent_shelter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = create_research(
        State(test.to_app_state()),
        authenticated(TEST_USERNAME),
        ApiJson(new_research(404)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert!(body.error.contains("Shelter"));

    Ok(())
}

/// Expect 404 for the records of a shelter that does not exist
#[tokio::test]
async fn shelter_research_of_unknown_shelter_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = get_shelter_research(
        State(test.to_app_state()),
        authenticated(TEST_USERNAME),
        ApiPath(404),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
