//! Basic usage example for atlas-core
//!
//! This example demonstrates how to:
//! - Build a directory from country data
//! - Filter by search, region, and language
//! - Sign a user in and toggle favorites
//!
//! It runs entirely offline on a small inline dataset; swap in
//! `DirectoryClient::default().fetch_all(LISTING_FIELDS)` for live data.

use atlas_core::{Country, Directory, FavoritesStore, ListingFilter, MemoryStore, Result, Session};
use std::collections::BTreeMap;

fn sample(code: &str, name: &str, region: &str, language: (&str, &str)) -> Country {
    Country {
        code: code.to_string(),
        name: name.to_string(),
        official_name: None,
        population: 0,
        region: region.to_string(),
        subregion: None,
        capital: None,
        languages: BTreeMap::from([(language.0.to_string(), language.1.to_string())]),
        currencies: BTreeMap::new(),
        flags: None,
        timezones: Vec::new(),
        borders: Vec::new(),
        tld: Vec::new(),
    }
}

fn main() -> Result<()> {
    println!("=== atlas-core Basic Usage Example ===\n");

    let directory = Directory::from_countries(vec![
        sample("FRA", "France", "Europe", ("fra", "French")),
        sample("DEU", "Germany", "Europe", ("deu", "German")),
        sample("SEN", "Senegal", "Africa", ("fra", "French")),
        sample("JPN", "Japan", "Asia", ("jpn", "Japanese")),
        sample("BRA", "Brazil", "Americas", ("por", "Portuguese")),
    ]);

    // Example 1: List the directory (always name-sorted)
    println!("--- Example 1: List all countries ---");
    for country in directory.countries() {
        println!("- {} ({})", country.name(), country.code());
    }
    println!();

    // Example 2: Look up by name, with code fallback
    println!("--- Example 2: Lookup by name or code ---");
    let by_name = directory.lookup("France")?;
    let by_code = directory.lookup("JPN")?;
    println!("By name: {} -> {}", by_name.name(), by_name.code());
    println!("By code: {} -> {}", by_code.code(), by_code.name());
    println!();

    // Example 3: The three listing filters, AND-combined
    println!("--- Example 3: Filtered listing ---");
    let filter = ListingFilter::new()
        .with_region("Europe")
        .with_language("French");
    for country in filter.apply(directory.countries()) {
        println!("- {} (Europe, French)", country.name());
    }
    println!();

    // Example 4: Favorites, gated on the session
    println!("--- Example 4: Favorites ---");
    let session = Session::signed_in("demo-user");
    let favorites = FavoritesStore::new(MemoryStore::new());

    let uid = session.require_user()?;
    let france = directory.lookup("France")?;
    favorites.add(&uid, france.code(), france)?;
    println!("Favorited: {}", france.name());

    for entry in favorites.list(Some(&uid))? {
        println!("Saved: {} ({})", entry.data.name(), entry.code);
    }

    favorites.remove(&uid, "FRA")?;
    println!(
        "After removal: {} favorites",
        favorites.list(Some(&uid))?.len()
    );

    println!("\n=== Example completed successfully ===");
    Ok(())
}
