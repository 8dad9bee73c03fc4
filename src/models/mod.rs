/// # Health Status Response
///
/// Represents the liveness status of the service, identified by name.
/// Used as the response format for health check endpoints.
///
/// ## Fields
/// - `status`: String indicating service liveness ("healthy")
/// - `service`: String naming the service ("devops-project")
///
/// ## Serialization
/// Automatically implements `Serialize` and `Deserialize` for JSON format.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "service": "devops-project"
/// }
/// ```
pub mod health;

pub use health::HealthResponse;
