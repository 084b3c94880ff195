use axum::{extract::State, http::StatusCode, response::IntoResponse};
use haven::{
    model::{
        resident::{CreateResidentDto, ResidentDto, ResidentStatus},
        shelter::{CreateShelterDto, ShelterDto},
    },
    server::controller::{
        resident::create_resident,
        shelter::{create_shelter, get_shelter, get_shelter_residents, get_shelters},
    },
};

use super::*;

fn new_shelter(capacity: i32, current_occupancy: i32) -> CreateShelterDto {
    CreateShelterDto {
        name: "Riverside".to_string(),
        location: "North District".to_string(),
        capacity,
        current_occupancy,
        phone: "+1 555 0100".to_string(),
        email: "riverside@example.org".to_string(),
        address: "12 River Road".to_string(),
        manager_id: None,
    }
}

/// Expect 200 with the body ID equal to the requested ID
#[tokio::test]
async fn returns_shelter() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_shelter("Riverside", 50)
        .with_shelter("Hillcrest", 20)
        .build()
        .await?;

    let result = get_shelter(
        State(test.to_app_state()),
        authenticated(TEST_USERNAME),
        ApiPath(2),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let shelter: ShelterDto = json_body(resp).await;
    assert_eq!(shelter.id, 2);
    assert_eq!(shelter.name, "Hillcrest");

    Ok(())
}

/// Expect 404 not found for shelter that does not exist
#[tokio::test]
async fn returns_not_found_for_nonexistent_shelter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = get_shelter(
        State(test.to_app_state()),
        authenticated(TEST_USERNAME),
        ApiPath(1),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 for occupancy above capacity
#[tokio::test]
async fn rejects_overfull_shelter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = create_shelter(
        State(test.to_app_state()),
        authenticated(TEST_USERNAME),
        ApiJson(new_shelter(10, 11)),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect created shelter's resident list to contain exactly the resident checked into it
#[tokio::test]
async fn lists_residents_of_created_shelter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let state = test.to_app_state();

    let resp = create_shelter(
        State(state.clone()),
        authenticated(TEST_USERNAME),
        ApiJson(new_shelter(50, 0)),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let shelter: ShelterDto = json_body(resp).await;

    let resp = create_resident(
        State(state.clone()),
        authenticated(TEST_USERNAME),
        ApiJson(CreateResidentDto {
            name: "Amina".to_string(),
            age: 29,
            gender: "female".to_string(),
            phone: None,
            shelter_id: shelter.id,
            status: ResidentStatus::Active,
        }),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let resident: ResidentDto = json_body(resp).await;

    let resp = get_shelter_residents(
        State(state.clone()),
        authenticated(TEST_USERNAME),
        ApiPath(shelter.id),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let residents: Vec<ResidentDto> = json_body(resp).await;
    assert_eq!(residents.len(), 1);
    assert_eq!(residents[0].id, resident.id);

    let resp = get_shelters(State(state), authenticated(TEST_USERNAME))
        .await
        .into_response();
    let shelters: Vec<ShelterDto> = json_body(resp).await;
    assert_eq!(shelters.len(), 1);

    Ok(())
}

/// Expect 404 rather than an empty list for residents of an unknown shelter
#[tokio::test]
async fn residents_not_found_for_nonexistent_shelter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let result = get_shelter_residents(
        State(test.to_app_state()),
        authenticated(TEST_USERNAME),
        ApiPath(1),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 internal server error when required database tables don't exist
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_shelters(State(test.to_app_state()), authenticated(TEST_USERNAME)).await;

    assert_eq!(
        result.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );

    Ok(())
}
