use crate::domain::country::Country;
use crate::domain::filter::filter_countries;
use crate::domain::localtime::resolve_local_time;
use crate::domain::pagination::paginate;
use crate::transport::http::types::{
    AppState, CountriesResponse, CountryDetail, ErrorResponse, ListQuery, SearchQuery,
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

#[utoipa::path(
    get,
    path = "/api/countries",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated country list", body = CountriesResponse),
        (status = 500, description = "Upstream fetch failed", body = ErrorResponse)
    )
)]
pub async fn list_countries_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let all = match state.countries.fetch_all().await {
        Ok(countries) => countries,
        Err(e) => {
            tracing::error!("Failed to fetch countries from upstream: {:#}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Error fetching countries")),
            )
                .into_response();
        }
    };

    let page = paginate(all, query.page(), query.limit());
    (
        StatusCode::OK,
        Json(CountriesResponse {
            countries: page.items,
            pagination: page.info,
        }),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/api/countries/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Filtered, paginated country list", body = CountriesResponse),
        (status = 500, description = "Upstream fetch failed", body = ErrorResponse)
    )
)]
pub async fn search_countries_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    let all = match state.countries.fetch_all().await {
        Ok(countries) => countries,
        Err(e) => {
            tracing::error!("Failed to fetch countries from upstream: {:#}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Error searching countries")),
            )
                .into_response();
        }
    };

    let filtered = filter_countries(all, &query.filter());
    let page = paginate(filtered, query.page(), query.limit());
    (
        StatusCode::OK,
        Json(CountriesResponse {
            countries: page.items,
            pagination: page.info,
        }),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/api/countries/list/all",
    responses(
        (status = 200, description = "Full unpaginated country list", body = [Country]),
        (status = 500, description = "Upstream fetch failed", body = ErrorResponse)
    )
)]
pub async fn list_all_countries_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.countries.fetch_all().await {
        Ok(countries) => (StatusCode::OK, Json(countries)).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch countries from upstream: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Error fetching countries")),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/countries/region/{region}",
    params(
        ("region" = String, Path, description = "Region name, e.g. asia")
    ),
    responses(
        (status = 200, description = "Countries in the region", body = [Country]),
        (status = 500, description = "Upstream fetch failed", body = ErrorResponse)
    )
)]
pub async fn countries_by_region_handler(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> impl IntoResponse {
    match state.countries.fetch_by_region(&region).await {
        Ok(countries) => (StatusCode::OK, Json(countries)).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch region '{}' from upstream: {:#}", region, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Error fetching region data")),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/countries/{code}",
    params(
        ("code" = String, Path, description = "ISO 3166-1 alpha-3 code, e.g. ARE")
    ),
    responses(
        (status = 200, description = "Country details", body = CountryDetail),
        (status = 404, description = "Unknown code", body = ErrorResponse),
        (status = 500, description = "Upstream fetch failed", body = ErrorResponse)
    )
)]
pub async fn country_by_code_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> impl IntoResponse {
    let country = match state.countries.fetch_by_code(&code).await {
        Ok(Some(country)) => country,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Country not found")),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!("Failed to fetch country '{}' from upstream: {:#}", code, e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Error fetching countries")),
            )
                .into_response();
        }
    };

    let local_time = country
        .timezones
        .first()
        .map(|tz| resolve_local_time(tz, Utc::now()));

    (
        StatusCode::OK,
        Json(CountryDetail {
            country,
            local_time,
        }),
    )
        .into_response()
}
