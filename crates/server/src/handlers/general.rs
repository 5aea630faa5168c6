/// The handler for the root (`/`) endpoint.
pub async fn root() -> &'static str {
    "Social Media Analyzer Backend is Running"
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}
