//! End-to-end flows across the directory, session, and favorites store,
//! the way the views wire them together: browse a filtered listing,
//! toggle a bookmark while signed in, and read the favorites page back.

use atlas_core::favorites::UserDocument;
use atlas_core::{
    AtlasError, Country, Directory, FavoritesStore, JsonFileStore, ListingFilter, MemoryStore,
    Session,
};
use std::collections::BTreeMap;

fn country(code: &str, name: &str, region: &str, language: (&str, &str)) -> Country {
    Country {
        code: code.to_string(),
        name: name.to_string(),
        official_name: None,
        population: 1_000_000,
        region: region.to_string(),
        subregion: None,
        capital: Some(format!("{name} City")),
        languages: BTreeMap::from([(language.0.to_string(), language.1.to_string())]),
        currencies: BTreeMap::new(),
        flags: None,
        timezones: vec!["UTC+00:00".to_string()],
        borders: Vec::new(),
        tld: Vec::new(),
    }
}

fn directory() -> Directory {
    Directory::from_countries(vec![
        country("FRA", "France", "Europe", ("fra", "French")),
        country("DEU", "Germany", "Europe", ("deu", "German")),
        country("SEN", "Senegal", "Africa", ("fra", "French")),
        country("JPN", "Japan", "Asia", ("jpn", "Japanese")),
    ])
}

#[test]
fn browse_then_toggle_favorite_while_signed_in() {
    let dir = directory();
    let session = Session::signed_in("uid-1");
    let favorites = FavoritesStore::new(MemoryStore::new());

    // The listing narrowed to French-speaking countries.
    let hits = ListingFilter::new()
        .with_language("French")
        .apply(dir.countries());
    let codes: Vec<&str> = hits.iter().map(|c| c.code()).collect();
    assert_eq!(codes, ["FRA", "SEN"]);

    // Toggle on: the card's snapshot lands in the user document.
    let uid = session.require_user().unwrap();
    favorites.add(&uid, hits[0].code(), hits[0]).unwrap();
    assert!(favorites.contains(&uid, "FRA").unwrap());

    // Toggle off: idempotent delete-by-key.
    favorites.remove(&uid, "FRA").unwrap();
    favorites.remove(&uid, "FRA").unwrap();
    assert!(favorites.list(Some(&uid)).unwrap().is_empty());
}

#[test]
fn signed_out_reads_are_empty_and_writes_are_guarded() {
    let session = Session::new();
    let favorites = FavoritesStore::new(MemoryStore::new());

    // The favorites page renders its signed-out empty state from this.
    assert!(favorites
        .list(session.current_user().as_deref())
        .unwrap()
        .is_empty());

    // The write path never reaches the store without a user.
    match session.require_user() {
        Err(AtlasError::Unauthenticated) => {}
        other => panic!("expected Unauthenticated, got {other:?}"),
    }
}

#[test]
fn favorites_page_reads_back_snapshots_not_live_data() {
    let dir = directory();
    let favorites = FavoritesStore::new(MemoryStore::new());

    let france = dir.find_by_code("FRA").unwrap().clone();
    favorites.add("uid-1", "FRA", &france).unwrap();

    // The stored snapshot stays intact regardless of later upstream data.
    let listed = favorites.list(Some("uid-1")).unwrap();
    assert_eq!(listed[0].data.capital.as_deref(), Some("France City"));
}

#[test]
fn json_file_store_round_trips_a_session_worth_of_edits() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = directory();

    {
        let favorites = FavoritesStore::new(JsonFileStore::open(tmp.path()).unwrap());
        favorites
            .add("uid-1", "JPN", dir.find_by_code("JPN").unwrap())
            .unwrap();
        favorites
            .add("uid-1", "SEN", dir.find_by_code("SEN").unwrap())
            .unwrap();
        favorites.remove("uid-1", "JPN").unwrap();
    }

    // A later session sees exactly what was left behind.
    let favorites = FavoritesStore::new(JsonFileStore::open(tmp.path()).unwrap());
    let listed = favorites.list(Some("uid-1")).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].code, "SEN");
}

#[test]
fn documents_with_no_favorites_field_list_as_empty() {
    // A legacy or hand-edited document may omit the favorites key; the
    // serde default turns that into an empty map rather than an error.
    let doc: UserDocument = serde_json::from_str("{}").unwrap();
    assert!(doc.favorites.is_empty());
}
