//! Handler tests for the persons domain
//!
//! These exercise the HTTP surface against the in-memory repository:
//! request parameter binding, status codes, response and error bodies.
//! No external services involved.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_persons::*;
use http_body_util::BodyExt;
use tower::ServiceExt; // For oneshot()

fn app() -> (PersonService<InMemoryPersonRepository>, axum::Router) {
    let service = PersonService::new(InMemoryPersonRepository::new());
    let router = handlers::router(service.clone());
    (service, router)
}

async fn json_body(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn seed_person(
    service: &PersonService<InMemoryPersonRepository>,
    first_name: &str,
    last_name: &str,
    email: &str,
    age: i32,
) {
    let today = chrono::Utc::now().date_naive();
    let date_of_birth =
        chrono::NaiveDate::from_ymd_opt(chrono::Datelike::year(&today) - age, 1, 1).unwrap();

    service
        .create_person(CreatePerson {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            date_of_birth,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_person_returns_201_with_empty_body() {
    let (_, router) = app();

    let response = router
        .oneshot(post(
            "/create?firstName=Emma&lastName=Eidhoven&email=emma.eidhoven@hotmail.com&dateOfBirth=1990-01-01",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_create_underage_person_returns_400_with_error_body() {
    let (_, router) = app();
    let today = chrono::Utc::now().date_naive();
    let dob = format!("{}-01-01", chrono::Datelike::year(&today) - 10);

    let response = router
        .oneshot(post(&format!(
            "/create?firstName=Too&lastName=Young&email=too.young@example.com&dateOfBirth={dob}"
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["errorMessage"], "Person could not be created!");
    assert_eq!(body["exceptionReason"], "The minimum required age is 18.");
}

#[tokio::test]
async fn test_create_twice_with_same_email_fails_second_time() {
    let (_, router) = app();
    let uri = "/create?firstName=Emma&lastName=Eidhoven&email=emma.eidhoven@hotmail.com&dateOfBirth=1990-01-01";

    let first = router.clone().oneshot(post(uri)).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = router.oneshot(post(uri)).await.unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let body = json_body(second.into_body()).await;
    assert_eq!(body["errorMessage"], "Person could not be created!");
    assert_eq!(
        body["exceptionReason"],
        "The email address: emma.eidhoven@hotmail.com is already in use."
    );
}

#[tokio::test]
async fn test_create_with_missing_parameter_returns_400() {
    let (_, router) = app();

    // dateOfBirth absent entirely
    let response = router
        .oneshot(post(
            "/create?firstName=Emma&lastName=Eidhoven&email=emma@hotmail.com",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_email_domain_query_returns_exactly_the_matching_subset() {
    let (service, router) = app();

    seed_person(&service, "Gmail", "One", "one@gmail.com", 25).await;
    seed_person(&service, "Yahoo", "Only", "two@yahoo.com", 35).await;
    seed_person(&service, "Icloud", "Only", "three@icloud.com", 45).await;
    seed_person(&service, "Gmail", "Two", "four@gmail.com", 55).await;

    let response = router.oneshot(get("/email-domain/gmail.com")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    let persons = body.as_array().unwrap();
    assert_eq!(persons.len(), 2);
    assert_eq!(persons[0]["emailAddress"], "one@gmail.com");
    assert_eq!(persons[0]["fullName"], "Gmail One");
    assert_eq!(persons[1]["emailAddress"], "four@gmail.com");
}

#[tokio::test]
async fn test_email_domain_query_with_no_matches_returns_empty_array() {
    let (service, router) = app();
    seed_person(&service, "Yahoo", "Only", "someone@yahoo.com", 30).await;

    let response = router.oneshot(get("/email-domain/gmail.com")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_age_range_query_has_inclusive_bounds() {
    let (service, router) = app();

    seed_person(&service, "Age", "FortyOne", "a41@example.com", 41).await;
    seed_person(&service, "Age", "FiftyFive", "a55@example.com", 55).await;
    seed_person(&service, "Age", "TwentyNine", "a29@example.com", 29).await;
    seed_person(&service, "Age", "TwentyTwo", "a22@example.com", 22).await;

    let response = router
        .oneshot(get("/age-range?fromAge=20&toAge=30"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    let ages: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["age"].as_i64().unwrap())
        .collect();
    assert_eq!(ages, vec![29, 22]);
}

#[tokio::test]
async fn test_inverted_age_range_returns_empty_array() {
    let (service, router) = app();
    seed_person(&service, "Some", "One", "someone@example.com", 30).await;

    let response = router
        .oneshot(get("/age-range?fromAge=40&toAge=20"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_query_response_shape_is_name_email_age_only() {
    let (service, router) = app();
    seed_person(&service, "Emma", "Eidhoven", "emma.eidhoven@hotmail.com", 34).await;

    let response = router
        .oneshot(get("/email-domain/hotmail.com"))
        .await
        .unwrap();
    let body = json_body(response.into_body()).await;
    let person = &body.as_array().unwrap()[0];

    let object = person.as_object().unwrap();
    assert_eq!(object.len(), 3);
    assert!(object.contains_key("fullName"));
    assert!(object.contains_key("emailAddress"));
    assert!(object.contains_key("age"));
}
