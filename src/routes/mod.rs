use actix_web::web;

/// # Current Time Endpoint
///
/// Returns the current local server time as a formatted string.
///
/// ## Response
///
/// - **200 OK**: Plain-text body containing the pipeline banner and the
///   wall-clock time formatted as `YYYY-MM-DD HH:MM:SS`
///
/// ## Example Response
///
/// ```text
/// 🚀 DevOps Pipeline Test - Current time: 2024-03-01 14:05:09
/// ```
pub mod time;

/// # Health Check Endpoint
///
/// Returns a fixed liveness payload identifying the service.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("healthy") and `service`
///     ("devops-project")
///
/// ## Example Response
/// ```json
/// { "status": "healthy", "service": "devops-project" }
/// ```
pub mod health;

/// # Route Configuration
///
/// Mounts all endpoints at the root scope. Paths are fixed by the service
/// contract, so no version prefix is applied.
///
/// ## Mounted Services
///
/// ```text
/// GET /       - Current server time
/// GET /health - Service health status
/// ```
///
/// Unmatched paths fall through to Actix-web's default 404 handling.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(time::configure_routes)
        .configure(health::configure_routes);
}
