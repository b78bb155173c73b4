//! Kanta travel API data models
//!
//! Domain types returned by the travel API, organized by resource type.

mod attraction;
mod cacheable;
mod country;
mod entry;
mod safety;

// Re-export all models for convenient access
pub use attraction::{Attraction, AttractionsInfo};
pub use country::{Country, Currency};
pub use entry::EntryRequirement;
pub use safety::{SafetyDetail, SafetyInfo, SafetyLevel};
