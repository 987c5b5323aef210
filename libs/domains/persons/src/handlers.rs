use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{CreationErrorResponse, PersonResult};
use crate::models::{AgeRangeFilter, CreatePerson, PersonResponse};
use crate::repository::PersonRepository;
use crate::service::PersonService;

/// OpenAPI documentation for the persons API
#[derive(OpenApi)]
#[openapi(
    paths(create_person, persons_by_email_domain, persons_by_age_range),
    components(schemas(PersonResponse, CreationErrorResponse)),
    tags((name = "persons", description = "Person registry endpoints"))
)]
pub struct ApiDoc;

/// Create the persons router with all HTTP endpoints
pub fn router<R: PersonRepository + 'static>(service: PersonService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/create", post(create_person))
        .route("/email-domain/{domain}", get(persons_by_email_domain))
        .route("/age-range", get(persons_by_age_range))
        .with_state(shared_service)
}

/// Create a new person
#[utoipa::path(
    post,
    path = "/create",
    tag = "persons",
    params(CreatePerson),
    responses(
        (status = 201, description = "Person created successfully"),
        (status = 400, description = "Creation rejected by a business rule", body = CreationErrorResponse)
    )
)]
async fn create_person<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
    Query(input): Query<CreatePerson>,
) -> PersonResult<StatusCode> {
    let person = service.create_person(input).await?;

    tracing::info!(person_id = %person.id, email = %person.email_address, "Person created");
    Ok(StatusCode::CREATED)
}

/// List persons whose email address ends with the given domain
#[utoipa::path(
    get,
    path = "/email-domain/{domain}",
    tag = "persons",
    params(
        ("domain" = String, Path, description = "Literal email suffix, e.g. gmail.com")
    ),
    responses(
        (status = 200, description = "Matching persons in storage order", body = Vec<PersonResponse>)
    )
)]
async fn persons_by_email_domain<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
    Path(domain): Path<String>,
) -> PersonResult<Json<Vec<PersonResponse>>> {
    let persons = service.persons_by_email_domain(&domain).await?;
    Ok(Json(persons.into_iter().map(PersonResponse::from).collect()))
}

/// List persons whose age lies within the inclusive range
#[utoipa::path(
    get,
    path = "/age-range",
    tag = "persons",
    params(AgeRangeFilter),
    responses(
        (status = 200, description = "Matching persons in storage order", body = Vec<PersonResponse>)
    )
)]
async fn persons_by_age_range<R: PersonRepository>(
    State(service): State<Arc<PersonService<R>>>,
    Query(range): Query<AgeRangeFilter>,
) -> PersonResult<Json<Vec<PersonResponse>>> {
    let persons = service
        .persons_by_age_range(range.from_age, range.to_age)
        .await?;
    Ok(Json(persons.into_iter().map(PersonResponse::from).collect()))
}
