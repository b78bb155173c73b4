//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod attraction;
mod common;
mod country;
mod entry;
mod safety;

pub use country::{CountryDetail, CountryList};
