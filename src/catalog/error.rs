//! Product service error types.

/// Errors that can occur while talking to the product service.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Server returned code: {status}, error message is: {message}")]
    Api { status: u16, message: String },

    /// Failed to deserialize the response body
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Service answered successfully but without the expected body
    #[error("Empty response from {endpoint}")]
    EmptyResponse { endpoint: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_api_error() {
        let error = CatalogError::Api {
            status: 404,
            message: "Not found".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Server returned code: 404, error message is: Not found"
        );
    }

    #[test]
    fn test_catalog_error_display() {
        let error = CatalogError::EmptyResponse {
            endpoint: "products".to_string(),
        };
        assert!(error.to_string().contains("Empty response"));
        assert!(error.to_string().contains("products"));

        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: CatalogError = json_error.into();
        assert!(error.to_string().contains("Failed to deserialize"));
    }
}
