//! Domain core: the country record and the pure filter/paginate/local-time
//! operations. Everything here is stateless and side-effect free.

pub mod country;
pub mod filter;
pub mod localtime;
pub mod pagination;

pub use country::Country;
pub use filter::{filter_countries, CountryFilter};
pub use localtime::resolve_local_time;
pub use pagination::{paginate, Page, PaginationInfo, DEFAULT_LIMIT, DEFAULT_PAGE};
