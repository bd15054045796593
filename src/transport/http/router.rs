use crate::domain::country::{Country, CountryName, Currency, FlagImages, NativeName};
use crate::domain::pagination::PaginationInfo;
use crate::transport::http::handlers::{countries, health};
use crate::transport::http::types::{AppState, CountriesResponse, CountryDetail, ErrorResponse};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        countries::list_countries_handler,
        countries::search_countries_handler,
        countries::list_all_countries_handler,
        countries::countries_by_region_handler,
        countries::country_by_code_handler
    ),
    components(schemas(
        CountriesResponse,
        CountryDetail,
        ErrorResponse,
        Country,
        CountryName,
        NativeName,
        Currency,
        FlagImages,
        PaginationInfo
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    // Static segments ("search", "list/all", "region") must not be shadowed
    // by the "{code}" capture; axum matches them first.
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/countries", get(countries::list_countries_handler))
        .route(
            "/api/countries/search",
            get(countries::search_countries_handler),
        )
        .route(
            "/api/countries/list/all",
            get(countries::list_all_countries_handler),
        )
        .route(
            "/api/countries/region/:region",
            get(countries::countries_by_region_handler),
        )
        .route(
            "/api/countries/:code",
            get(countries::country_by_code_handler),
        )
        .with_state(app_state)
}
