pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::country::Country;
pub use domain::filter::{filter_countries, CountryFilter};
pub use domain::localtime::resolve_local_time;
pub use domain::pagination::{paginate, Page, PaginationInfo};
pub use infra::restcountries::RestCountriesClient;
