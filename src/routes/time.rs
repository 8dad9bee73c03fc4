use actix_web::{HttpResponse, Responder, get};
use chrono::Local;

/// Format pattern for the timestamp embedded in the root response body.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fixed text preceding the timestamp in the root response body.
const TIME_BANNER: &str = "🚀 DevOps Pipeline Test - Current time:";

/// # Current Time Endpoint
///
/// Returns the current local server time as a formatted string. The
/// timestamp is read from the host clock on every request; nothing is
/// cached or stored.
///
/// ## Response
///
/// - **200 OK**: Plain-text body
///   - Format: `🚀 DevOps Pipeline Test - Current time: YYYY-MM-DD HH:MM:SS`
///
/// ## Example Response
///
/// ```text
/// 🚀 DevOps Pipeline Test - Current time: 2024-03-01 14:05:09
/// ```
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Current server time", body = String, content_type = "text/plain")
    ),
    tag = "Current Time"
)]
#[get("/")]
pub async fn current_time() -> impl Responder {
    let now = Local::now().format(TIME_FORMAT);
    HttpResponse::Ok().body(format!("{} {}", TIME_BANNER, now))
}

/// # Route Configuration
///
/// Registers the current-time endpoint with the Actix-web service
/// configuration.
///
/// ## Currently Configured Routes
///
/// - `GET /`: Current server time
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(current_time);
}
