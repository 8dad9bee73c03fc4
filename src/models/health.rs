use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Represents the liveness status of the service, identified by name.
/// Used as the response format for health check endpoints, conventionally
/// polled by orchestration or monitoring tooling.
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
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: "devops-project".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_health_response_healthy() {
        let response = HealthResponse::healthy();

        // Verify fields
        assert_eq!(response.status, "healthy");
        assert_eq!(response.service, "devops-project");
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse::healthy();

        let value = serde_json::to_value(&response).expect("Should serialize to JSON");
        assert_eq!(
            value,
            json!({"status": "healthy", "service": "devops-project"})
        );
    }

    #[test]
    fn test_health_response_constant_across_calls() {
        // The payload is fixed for the process lifetime
        assert_eq!(HealthResponse::healthy(), HealthResponse::healthy());
    }
}
