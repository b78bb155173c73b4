//! Cache bindings for the cached resource types

use super::{Country, SafetyInfo};
use crate::cache::Cacheable;

impl Cacheable for Country {
    fn cache_key(&self) -> String {
        self.code.clone()
    }

    fn entity_type() -> &'static str {
        "country"
    }

    fn sort_key(&self) -> String {
        self.name.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(name_ja) = &self.name_ja {
            fields.push(name_ja);
        }
        fields
    }

    fn category(&self) -> Option<&str> {
        Some(&self.region)
    }
}

impl Cacheable for SafetyInfo {
    fn cache_key(&self) -> String {
        self.country_code.clone()
    }

    fn entity_type() -> &'static str {
        "safety_info"
    }
}
