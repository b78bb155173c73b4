//! Filter argument types for CLI commands

use clap::Args;

use crate::client::CountryQuery;

/// Filter arguments for `countries list`.
#[derive(Args, Debug, Default, Clone)]
pub struct CountryFilterArgs {
    /// Search English or Japanese name (substring, case-insensitive)
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    /// Filter by region (exact match, e.g. Asia, Europe)
    #[arg(long, short = 'r')]
    pub region: Option<String>,

    /// Maximum results to show
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

impl CountryFilterArgs {
    /// Build the repository query. When both are given, the name search wins
    /// for cached reads while the API receives both.
    pub fn to_query(&self) -> CountryQuery {
        CountryQuery::new(self.query.as_deref(), self.region.as_deref())
    }
}
