//! Display models for CLI output
//!
//! Converts API resources into table rows and single-record views.

pub mod display;

pub use display::{CountryDetail, CountryList};
