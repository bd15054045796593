pub mod config;
pub mod restcountries;
