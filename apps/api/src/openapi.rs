use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(axum_helpers::ErrorResponse)),
    info(
        title = "Person Registry API",
        description = "Create persons and query them by email domain or age range"
    ),
    nest(
        (path = "/persons", api = domain_persons::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
