use crate::domain::country::Country;
use crate::domain::filter::CountryFilter;
use crate::domain::pagination::{PaginationInfo, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::infra::restcountries::RestCountriesClient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub countries: Arc<RestCountriesClient>,
}

/// `page`/`limit` are accepted as raw strings so that absent, non-numeric,
/// or zero values silently fall back to the defaults instead of producing a
/// 400 from the extractor.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page number (default 1).
    pub page: Option<String>,
    /// Page size (default 12).
    pub limit: Option<String>,
}

impl ListQuery {
    pub fn page(&self) -> u32 {
        parse_positive_or(self.page.as_deref(), DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u32 {
        parse_positive_or(self.limit.as_deref(), DEFAULT_LIMIT)
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring match on the common name.
    pub name: Option<String>,
    /// Case-insensitive exact match on the region.
    pub region: Option<String>,
    /// Exact UTC offset string, e.g. "UTC+05:30".
    pub timezone: Option<String>,
    /// 1-based page number (default 1).
    pub page: Option<String>,
    /// Page size (default 12).
    pub limit: Option<String>,
}

impl SearchQuery {
    pub fn page(&self) -> u32 {
        parse_positive_or(self.page.as_deref(), DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u32 {
        parse_positive_or(self.limit.as_deref(), DEFAULT_LIMIT)
    }

    /// Builds the filter, dropping empty strings (an empty query parameter
    /// means "no constraint", matching how the UI omits cleared inputs).
    pub fn filter(&self) -> CountryFilter {
        CountryFilter {
            name: non_empty(self.name.as_deref()),
            region: non_empty(self.region.as_deref()),
            timezone: non_empty(self.timezone.as_deref()),
        }
    }
}

fn parse_positive_or(value: Option<&str>, default: u32) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// One page of countries plus its pagination descriptor.
#[derive(Debug, Serialize, ToSchema)]
pub struct CountriesResponse {
    pub countries: Vec<Country>,
    pub pagination: PaginationInfo,
}

/// Single-country payload: the upstream record verbatim, enriched with the
/// current wall-clock time in the country's first timezone.
#[derive(Debug, Serialize, ToSchema)]
pub struct CountryDetail {
    #[serde(flatten)]
    pub country: Country,
    #[serde(rename = "localTime", skip_serializing_if = "Option::is_none")]
    pub local_time: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
