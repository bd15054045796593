//! Typed country record matching the REST Countries API (v3) shape.
//!
//! The upstream payload is read-only reference data: we deserialize it once
//! per request, filter/paginate over it, and serialize it back out with the
//! upstream field names intact. Fields the upstream sometimes omits (e.g.
//! `capital` for territories without one) are defaulted rather than rejected.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Country {
    pub name: CountryName,
    /// Unique ISO 3166-1 alpha-3 code, e.g. "ARE".
    pub cca3: String,
    #[serde(default)]
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,
    #[serde(default)]
    pub capital: Vec<String>,
    /// UTC offset strings, e.g. "UTC+04:00" or "UTC".
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub area: f64,
    /// Currency code -> name/symbol, e.g. {"AED": {"name": "...", "symbol": "..."}}.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currencies: Option<HashMap<String, Currency>>,
    /// Language code -> display name, e.g. {"ara": "Arabic"}.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<HashMap<String, String>>,
    /// Flag emoji.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<FlagImages>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
    #[serde(
        default,
        rename = "nativeName",
        skip_serializing_if = "Option::is_none"
    )]
    pub native_name: Option<HashMap<String, NativeName>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NativeName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Currency {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FlagImages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}
