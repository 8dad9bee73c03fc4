use crate::models::HealthResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Health Check Endpoint
///
/// Returns a fixed liveness payload identifying the service. Intended for
/// orchestration and monitoring probes; the body is invariant across calls.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Content-Type: `application/json`
///   - Body: [`HealthResponse`] containing:
///     - `status`: String indicating service liveness ("healthy")
///     - `service`: String naming the service ("devops-project")
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "devops-project"
/// }
/// ```
///
/// [`HealthResponse`]: crate::models::health::HealthResponse
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::healthy())
}

/// # Route Configuration
///
/// Registers the health check endpoint with the Actix-web service
/// configuration.
///
/// ## Currently Configured Routes
///
/// - `GET /health`: Health check endpoint
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use serde_json::{Value, from_str};

    #[actix_web::test]
    async fn test_health_endpoint() {
        // Set up test app
        let app = test::init_service(App::new().configure(configure_routes)).await;

        // Create test request
        let req = test::TestRequest::get().uri("/health").to_request();

        // Execute request
        let resp = test::call_service(&app, req).await;

        // Verify status code
        assert_eq!(resp.status(), 200, "Status code should be 200 OK");

        // Verify content type is application/json
        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(
            content_type, "application/json",
            "Content-Type should be application/json"
        );

        // Verify response body
        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        let health_response: HealthResponse = from_str(body_str).unwrap();

        assert_eq!(health_response.status, "healthy");
        assert_eq!(health_response.service, "devops-project");
    }

    #[actix_web::test]
    async fn test_health_endpoint_json_shape() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        let body = test::read_body(resp).await;
        let body_json: Value = serde_json::from_slice(&body).expect("Body should be valid JSON");

        // Exactly the two contract fields, with exact values
        assert_eq!(body_json["status"], "healthy");
        assert_eq!(body_json["service"], "devops-project");
        assert_eq!(
            body_json.as_object().map(|obj| obj.len()),
            Some(2),
            "Payload should contain exactly the status and service fields"
        );
    }

    #[actix_web::test]
    async fn test_health_endpoint_is_idempotent() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        // Repeated calls must return byte-identical bodies
        let mut bodies = Vec::new();
        for _ in 0..3 {
            let req = test::TestRequest::get().uri("/health").to_request();
            let resp = test::call_service(&app, req).await;
            assert!(resp.status().is_success());
            bodies.push(test::read_body(resp).await);
        }

        assert_eq!(bodies[0], bodies[1]);
        assert_eq!(bodies[1], bodies[2]);
    }
}
