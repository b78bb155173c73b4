//! Kanta travel API client

pub mod api;
#[cfg(test)]
pub mod fixtures;
pub mod kanta;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{CountryApi, TravelInfoApi};
pub use kanta::KantaClient;
#[cfg(test)]
pub use mock::MockKantaClient;

use crate::cache::ListQuery;

/// Full travel API surface.
///
/// Blanket-implemented for anything that implements every sub-trait.
pub trait KantaApi: CountryApi + TravelInfoApi {}

impl<T: CountryApi + TravelInfoApi> KantaApi for T {}

/// Filter for country listings.
///
/// Blank strings are normalised to `None`. An empty query means "all
/// countries" and is the only listing that gets cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryQuery {
    /// Substring of the English or Japanese country name
    pub text: Option<String>,
    /// Exact region name (e.g. "Asia")
    pub region: Option<String>,
}

impl CountryQuery {
    pub fn new(text: Option<&str>, region: Option<&str>) -> Self {
        let normalised = ListQuery::new(text, region);
        Self {
            text: normalised.text,
            region: normalised.category,
        }
    }

    /// Query matching every country
    pub fn all() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.region.is_none()
    }
}

impl From<&CountryQuery> for ListQuery {
    fn from(query: &CountryQuery) -> Self {
        ListQuery {
            text: query.text.clone(),
            category: query.region.clone(),
        }
    }
}
