//! Country filtering: optional per-field predicates combined with logical AND.

use crate::domain::country::Country;

/// Filter predicate set. Each field is independently optional; `None` means
/// "no constraint on that field", not "match empty".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryFilter {
    /// Case-insensitive substring match against the common name.
    pub name: Option<String>,
    /// Case-insensitive exact match against the region.
    pub region: Option<String>,
    /// Exact membership test against the timezone list.
    pub timezone: Option<String>,
}

impl CountryFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.region.is_none() && self.timezone.is_none()
    }

    /// True when the country satisfies every present predicate.
    pub fn matches(&self, country: &Country) -> bool {
        if let Some(name) = &self.name {
            if !country
                .name
                .common
                .to_lowercase()
                .contains(&name.to_lowercase())
            {
                return false;
            }
        }
        if let Some(region) = &self.region {
            if !country.region.eq_ignore_ascii_case(region) {
                return false;
            }
        }
        if let Some(timezone) = &self.timezone {
            if !country.timezones.iter().any(|tz| tz == timezone) {
                return false;
            }
        }
        true
    }
}

/// Narrows `countries` to those matching `filter`, preserving input order.
///
/// With no predicates this is the identity. There is no validation layer:
/// an empty region string matches nothing, an empty name matches everything.
pub fn filter_countries(countries: Vec<Country>, filter: &CountryFilter) -> Vec<Country> {
    if filter.is_empty() {
        return countries;
    }
    countries
        .into_iter()
        .filter(|country| filter.matches(country))
        .collect()
}
