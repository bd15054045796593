//! Centralized configuration (environment variables + defaults).

/// Base URL of the upstream REST Countries API.
pub fn rest_countries_api() -> String {
    std::env::var("REST_COUNTRIES_API")
        .unwrap_or_else(|_| "https://restcountries.com/v3.1".to_string())
}

/// Port the API server listens on.
pub fn http_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.trim().parse::<u16>().ok())
        .unwrap_or(5000)
}
