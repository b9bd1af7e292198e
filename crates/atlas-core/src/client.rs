// crates/atlas-core/src/client.rs
#![cfg(feature = "client")]

//! # Country Directory Client
//!
//! Blocking HTTP access to the REST Countries v3.1 API. Everything here
//! returns normalized [`Country`] values; the raw wire shapes stay in
//! `model.rs`.
//!
//! No retry or backoff: a failed fetch surfaces to the caller, which owns
//! the retry affordance.

use crate::error::{AtlasError, Result};
use crate::model::{CountriesRaw, Country, CountryRaw, Directory};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Public dataset endpoint.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// The field projection the listing view needs; requesting only these
/// keeps the `/all` payload small.
pub const LISTING_FIELDS: &[&str] = &[
    "name",
    "flags",
    "cca3",
    "population",
    "region",
    "subregion",
    "capital",
    "languages",
    "currencies",
    "timezones",
];

/// Lookup endpoints return a one-element array for a single match, but
/// some mirrors answer with a bare object.
#[derive(Deserialize)]
#[serde(untagged)]
enum LookupPayload {
    Many(Vec<CountryRaw>),
    One(CountryRaw),
}

impl LookupPayload {
    fn into_first(self, query: &str) -> Result<CountryRaw> {
        match self {
            LookupPayload::One(c) => Ok(c),
            LookupPayload::Many(v) => v
                .into_iter()
                .next()
                .ok_or_else(|| AtlasError::NotFound(query.to_string())),
        }
    }
}

/// Client for the external country data provider.
pub struct DirectoryClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl Default for DirectoryClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl DirectoryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());
        DirectoryClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full country collection, projected to `fields`, as a
    /// name-sorted [`Directory`].
    pub fn fetch_all(&self, fields: &[&str]) -> Result<Directory> {
        let url = format!("{}/all?fields={}", self.base_url, fields.join(","));
        let raw: CountriesRaw = self.get_json(&url)?;
        Ok(Directory::from_raw(raw))
    }

    /// Exact full-text name lookup, falling back to a code lookup. The
    /// fallback exists because a route segment may carry either the
    /// display name or the cca3 code (border links only have a code).
    pub fn fetch_by_name(&self, name: &str) -> Result<Country> {
        let url = format!("{}/name/{}?fullText=true", self.base_url, name);
        match self.get_json::<LookupPayload>(&url) {
            Ok(payload) => Ok(crate::model::convert_country(payload.into_first(name)?)),
            Err(AtlasError::NotFound(_)) => self.fetch_by_code(name),
            Err(e) => Err(e),
        }
    }

    /// Lookup a single country by cca3 code.
    pub fn fetch_by_code(&self, code: &str) -> Result<Country> {
        let url = format!("{}/alpha/{}", self.base_url, code);
        match self.get_json::<LookupPayload>(&url) {
            Ok(payload) => Ok(crate::model::convert_country(payload.into_first(code)?)),
            // Surface the query, not the request URL.
            Err(AtlasError::NotFound(_)) => Err(AtlasError::NotFound(code.to_string())),
            Err(e) => Err(e),
        }
    }

    /// Batch-resolve border codes to common names for display. Codes the
    /// provider does not know are simply absent from the map; the caller
    /// falls back to showing the raw code.
    pub fn fetch_borders(&self, codes: &[String]) -> Result<BTreeMap<String, String>> {
        if codes.is_empty() {
            return Ok(BTreeMap::new());
        }
        let url = format!(
            "{}/alpha?codes={}&fields=cca3,name",
            self.base_url,
            codes.join(",")
        );
        let raw: CountriesRaw = self.get_json(&url)?;
        Ok(raw.into_iter().map(|c| (c.cca3, c.name.common)).collect())
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AtlasError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(AtlasError::Upstream {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_fields_join_into_the_projection_param() {
        assert_eq!(
            LISTING_FIELDS.join(","),
            "name,flags,cca3,population,region,subregion,capital,languages,currencies,timezones"
        );
    }

    #[test]
    fn base_url_is_normalized() {
        let client = DirectoryClient::new("https://example.test/v3.1/");
        assert_eq!(client.base_url, "https://example.test/v3.1");
    }

    #[test]
    fn lookup_payload_accepts_array_and_object() {
        let body = r#"[{ "name": { "common": "France" }, "cca3": "FRA" }]"#;
        let payload: LookupPayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.into_first("France").unwrap().cca3, "FRA");

        let body = r#"{ "name": { "common": "France" }, "cca3": "FRA" }"#;
        let payload: LookupPayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.into_first("France").unwrap().cca3, "FRA");
    }

    #[test]
    fn empty_lookup_payload_is_not_found() {
        let payload: LookupPayload = serde_json::from_str("[]").unwrap();
        match payload.into_first("Atlantis") {
            Err(AtlasError::NotFound(q)) => assert_eq!(q, "Atlantis"),
            other => panic!("expected NotFound, got {:?}", other.map(|c| c.cca3)),
        }
    }

    #[test]
    fn empty_border_list_short_circuits() {
        // Must not issue a request; an unroutable base URL proves it.
        let client = DirectoryClient::new("http://127.0.0.1:1");
        let map = client.fetch_borders(&[]).unwrap();
        assert!(map.is_empty());
    }
}
