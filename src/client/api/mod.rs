//! API trait definitions split by responsibility
//!
//! This module organizes the travel API surface into focused sub-traits:
//! - [`CountryApi`] - Country catalogue lookups
//! - [`TravelInfoApi`] - Per-country travel details
//!
//! The [`KantaApi`](super::KantaApi) super-trait combines both.

mod countries;
mod travel;

pub use countries::CountryApi;
pub use travel::TravelInfoApi;
