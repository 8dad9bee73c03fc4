use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros. This documentation serves as the source of truth for both API
/// consumers and automated documentation generators.
///
/// # Endpoints
/// - Current Time: `GET /`
/// - Health Check: `GET /health`
///
/// # Schemas
/// - `HealthResponse`: Service liveness payload
///
/// # Tags
/// 1. **Current Time**: Server clock endpoints
/// 2. **Health Check**: Service monitoring endpoints
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any
/// changes to the API surface should be reflected here first to maintain
/// documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::time::current_time,
        crate::routes::health::health,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse
        )
    ),
    tags(
        (name = "Current Time", description = "Current server time endpoints"),
        (name = "Health Check", description = "Service health monitoring endpoints")
    ),
    info(
        description = "DevOps pipeline test service exposing the current server time and a health probe",
        title = "DevOps Project API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
