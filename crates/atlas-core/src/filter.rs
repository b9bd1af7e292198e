// crates/atlas-core/src/filter.rs

use crate::model::Country;
use crate::text::fold_key;

/// The three listing filters, AND-combined. An empty string means
/// "no constraint" for that dimension.
///
/// - `search`: folded substring match against the common name
/// - `region`: exact equality against the region field
/// - `language`: exact membership among the language display names
///
/// Pure and synchronous; the listing re-runs [`ListingFilter::apply`]
/// wholesale whenever an input changes. At ~250 countries that is cheap
/// enough that no incremental diffing is warranted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub search: String,
    pub region: String,
    pub language: String,
}

impl ListingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// True when no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.region.is_empty() && self.language.is_empty()
    }

    /// Does `country` pass all active constraints?
    pub fn matches(&self, country: &Country) -> bool {
        let search = self.search.trim();
        if !search.is_empty() && !fold_key(country.name()).contains(&fold_key(search)) {
            return false;
        }
        if !self.region.is_empty() && country.region() != self.region {
            return false;
        }
        if !self.language.is_empty() && !country.speaks(&self.language) {
            return false;
        }
        true
    }

    /// Filter a collection, preserving its order.
    pub fn apply<'a>(&self, countries: &'a [Country]) -> Vec<&'a Country> {
        countries.iter().filter(|c| self.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::sample_directory;

    fn names(hits: &[&Country]) -> Vec<String> {
        hits.iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn empty_filter_passes_everything() {
        let dir = sample_directory();
        let filter = ListingFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(dir.countries()).len(), dir.len());
    }

    #[test]
    fn region_filter_selects_exactly_the_region() {
        let dir = sample_directory();
        let hits = ListingFilter::new()
            .with_region("Europe")
            .apply(dir.countries());
        assert_eq!(names(&hits), ["France", "Germany"]);
    }

    #[test]
    fn language_filter_selects_speakers() {
        let dir = sample_directory();
        let hits = ListingFilter::new()
            .with_language("French")
            .apply(dir.countries());
        assert_eq!(names(&hits), ["France"]);
    }

    #[test]
    fn region_and_language_intersect() {
        let dir = sample_directory();
        let hits = ListingFilter::new()
            .with_region("Europe")
            .with_language("French")
            .apply(dir.countries());
        assert_eq!(names(&hits), ["France"]);

        // Disjoint constraints yield nothing.
        let hits = ListingFilter::new()
            .with_region("Asia")
            .with_language("French")
            .apply(dir.countries());
        assert!(hits.is_empty());
    }

    #[test]
    fn search_is_substring_and_case_insensitive() {
        let dir = sample_directory();
        let hits = ListingFilter::new().with_search("ERMA").apply(dir.countries());
        assert_eq!(names(&hits), ["Germany"]);

        // Whitespace-only search is no constraint.
        let hits = ListingFilter::new().with_search("   ").apply(dir.countries());
        assert_eq!(hits.len(), dir.len());
    }

    #[test]
    fn search_combines_with_region() {
        let dir = sample_directory();
        let hits = ListingFilter::new()
            .with_search("an")
            .with_region("Europe")
            .apply(dir.countries());
        // "France" and "Germany" both contain "an"; both are in Europe.
        assert_eq!(names(&hits), ["France", "Germany"]);

        let hits = ListingFilter::new()
            .with_search("jap")
            .with_region("Europe")
            .apply(dir.countries());
        assert!(hits.is_empty());
    }
}
