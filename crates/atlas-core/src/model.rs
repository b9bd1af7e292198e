// crates/atlas-core/src/model.rs

use crate::error::{AtlasError, Result};
use crate::text::{equals_folded, fold_key};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw country name object as it comes from the REST Countries JSON:
/// { "common": "Germany", "official": "Federal Republic of Germany", ... }
#[derive(Debug, Deserialize)]
pub struct CountryNameRaw {
    pub common: String,
    #[serde(default)]
    pub official: Option<String>,
}

/// Raw currency entry, keyed by currency code in the parent map.
#[derive(Debug, Deserialize)]
pub struct CurrencyRaw {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Raw flag image references.
#[derive(Debug, Deserialize)]
pub struct FlagsRaw {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Raw country structure from the REST Countries v3.1 JSON.
/// NOTE: This type mirrors the external dataset. We do *not* expose it
/// from the public API; everything downstream works on [`Country`].
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub name: CountryNameRaw,
    #[serde(default)]
    pub cca3: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    /// The API reports capitals as an array; in practice zero or one.
    #[serde(default)]
    pub capital: Vec<String>,
    /// languages: { "fra": "French", ... }
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub currencies: BTreeMap<String, CurrencyRaw>,
    #[serde(default)]
    pub flags: Option<FlagsRaw>,
    /// UTC offset strings, e.g. "UTC+01:00".
    #[serde(default)]
    pub timezones: Vec<String>,
    /// cca3 codes of neighboring countries.
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub tld: Vec<String>,
}

pub type CountriesRaw = Vec<CountryRaw>;

/// A currency in the normalized model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: Option<String>,
}

/// Flag image references in the normalized model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flags {
    pub png: String,
    pub svg: String,
    pub alt: Option<String>,
}

/// A country entry in the normalized directory.
///
/// `code` is the cca3 identity and is the primary key everywhere in-app;
/// the rest of the fields are a read-only view of the upstream record.
/// The whole struct serializes, because favorites persist it as a
/// denormalized snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub official_name: Option<String>,
    pub population: u64,
    pub region: String,
    pub subregion: Option<String>,
    pub capital: Option<String>,
    /// language code -> display name
    pub languages: BTreeMap<String, String>,
    /// currency code -> {name, symbol}
    pub currencies: BTreeMap<String, Currency>,
    pub flags: Option<Flags>,
    pub timezones: Vec<String>,
    pub borders: Vec<String>,
    pub tld: Vec<String>,
}

impl Country {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn capital(&self) -> Option<&str> {
        self.capital.as_deref()
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    /// Language display names, in map order.
    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages.values().map(String::as_str)
    }

    /// True if `language` appears among this country's language display
    /// names (exact match, e.g. "French").
    pub fn speaks(&self, language: &str) -> bool {
        self.languages.values().any(|v| v == language)
    }
}

/// The fixed region options offered by the listing filter.
pub const REGIONS: [&str; 5] = ["Africa", "Americas", "Asia", "Europe", "Oceania"];

/// The in-memory country collection, sorted by common name.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Directory {
    countries: Vec<Country>,
}

impl Directory {
    /// Build a directory from raw API records, sorting by folded common
    /// name (case- and accent-insensitive lexicographic order).
    pub fn from_raw(raw: CountriesRaw) -> Self {
        let countries: Vec<Country> = raw.into_iter().map(convert_country).collect();
        Self::from_countries(countries)
    }

    /// Build from already-normalized countries; still enforces the sort.
    pub fn from_countries(mut countries: Vec<Country>) -> Self {
        countries.sort_by_key(|c| fold_key(&c.name));
        Directory { countries }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Find a country by cca3 code, case-insensitive (e.g. "FRA", "fra").
    pub fn find_by_code(&self, code: &str) -> Option<&Country> {
        let code = code.trim();
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Find a country by exact common name. Folded comparison, so case
    /// and diacritics do not matter, but this is not a substring search.
    pub fn find_by_name(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|c| equals_folded(&c.name, name))
    }

    /// Resolve a route segment that may be either a display name or a
    /// cca3 code: exact name first, code as fallback.
    pub fn lookup(&self, query: &str) -> Result<&Country> {
        self.find_by_name(query)
            .or_else(|| self.find_by_code(query))
            .ok_or_else(|| AtlasError::NotFound(query.to_string()))
    }

    /// All distinct language display names across the directory, sorted.
    /// Feeds the language filter dropdown.
    pub fn all_languages(&self) -> Vec<String> {
        let mut seen: Vec<String> = self
            .countries
            .iter()
            .flat_map(|c| c.languages.values().cloned())
            .collect();
        seen.sort_by_key(|l| fold_key(l));
        seen.dedup();
        seen
    }
}

pub(crate) fn convert_country(raw: CountryRaw) -> Country {
    Country {
        code: raw.cca3,
        name: raw.name.common,
        official_name: raw.name.official,
        population: raw.population,
        region: raw.region.unwrap_or_default(),
        subregion: raw.subregion,
        capital: raw.capital.into_iter().next(),
        languages: raw.languages,
        currencies: raw
            .currencies
            .into_iter()
            .map(|(code, c)| {
                (
                    code,
                    Currency {
                        name: c.name,
                        symbol: c.symbol,
                    },
                )
            })
            .collect(),
        flags: raw.flags.map(|f| Flags {
            png: f.png,
            svg: f.svg,
            alt: f.alt,
        }),
        timezones: raw.timezones,
        borders: raw.borders,
        tld: raw.tld,
    }
}
