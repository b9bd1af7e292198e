//! atlas-cli — Command-line interface for atlas-core
//!
//! Browse the public country directory and manage a per-user list of
//! favorite countries from your terminal.
//!
//! Usage examples
//! --------------
//!
//! - List countries, with the three listing filters
//!   $ atlas countries
//!   $ atlas countries --region Europe --language French
//!   $ atlas countries --search "stan"
//!
//! - Show one country, by display name or cca3 code
//!   $ atlas country France
//!   $ atlas country FRA
//!
//! - Sign in and manage favorites (stored as JSON documents in the
//!   data directory, one per user)
//!   $ atlas login uid-1234
//!   $ atlas favorites add FRA
//!   $ atlas favorites list
//!   $ atlas favorites remove FRA
//!   $ atlas logout
//!
//! Data source
//! -----------
//!
//! Country data comes live from the REST Countries API; nothing is
//! cached between runs. Use `--base-url` to point at a mirror and
//! `--data-dir` (or `$ATLAS_DATA_DIR`) to relocate session and
//! favorites state.
mod args;

use crate::args::{CliArgs, Commands, FavoritesAction};
use anyhow::Context;
use atlas_core::{FavoritesStore, JsonFileStore, Session};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let data_dir = args
        .data_dir
        .clone()
        .or_else(|| std::env::var("ATLAS_DATA_DIR").ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".atlas"));

    let session = load_session(&data_dir);

    match args.command {
        #[cfg(feature = "client")]
        Commands::Countries {
            search,
            region,
            language,
        } => {
            use atlas_core::{DirectoryClient, ListingFilter, LISTING_FIELDS};

            let client = DirectoryClient::new(args.base_url.as_str());
            let directory = client
                .fetch_all(LISTING_FIELDS)
                .context("failed to load the country directory")?;

            let filter = ListingFilter {
                search: search.unwrap_or_default(),
                region: region.unwrap_or_default(),
                language: language.unwrap_or_default(),
            };
            let hits = filter.apply(directory.countries());

            for c in &hits {
                println!("{} ({}) — {}", c.name(), c.code(), c.region());
            }
            println!("Showing {} of {} countries", hits.len(), directory.len());
        }

        #[cfg(feature = "client")]
        Commands::Country { query } => {
            use atlas_core::DirectoryClient;

            let client = DirectoryClient::new(args.base_url.as_str());
            let country = client.fetch_by_name(&query)?;

            println!("Country: {}", country.name());
            if let Some(official) = &country.official_name {
                println!("Official name: {official}");
            }
            println!("Code: {}", country.code());
            println!("Region: {}", country.region());
            if let Some(sub) = &country.subregion {
                println!("Subregion: {sub}");
            }
            println!("Capital: {}", country.capital().unwrap_or("—"));
            println!("Population: {}", country.population());
            if !country.languages.is_empty() {
                let langs: Vec<&str> = country.language_names().collect();
                println!("Languages: {}", langs.join(", "));
            }
            for (code, currency) in &country.currencies {
                match &currency.symbol {
                    Some(sym) => println!("Currency: {} ({code}, {sym})", currency.name),
                    None => println!("Currency: {} ({code})", currency.name),
                }
            }
            if !country.timezones.is_empty() {
                println!("Timezones: {}", country.timezones.join(", "));
            }
            if !country.borders.is_empty() {
                let names = client.fetch_borders(&country.borders)?;
                let borders: Vec<&str> = country
                    .borders
                    .iter()
                    // Unknown codes fall back to the raw code.
                    .map(|code| names.get(code).map(String::as_str).unwrap_or(code))
                    .collect();
                println!("Borders: {}", borders.join(", "));
            }
        }

        Commands::Login { user_id } => {
            session.sign_in(&user_id);
            store_session(&data_dir, &session)?;
            println!("Signed in as {user_id}");
        }

        Commands::Logout => {
            session.sign_out();
            store_session(&data_dir, &session)?;
            println!("Signed out");
        }

        Commands::Whoami => match session.current_user() {
            Some(uid) => println!("{uid}"),
            None => println!("Not signed in"),
        },

        Commands::Favorites { action } => {
            let store = FavoritesStore::new(JsonFileStore::open(data_dir.join("favorites"))?);
            match action {
                FavoritesAction::List => {
                    let listed = store.list(session.current_user().as_deref())?;
                    if listed.is_empty() {
                        match session.current_user() {
                            Some(_) => println!("No favorites saved yet"),
                            None => println!("Not signed in — run `atlas login <user-id>` first"),
                        }
                    } else {
                        for entry in listed {
                            println!(
                                "{} ({}) — {}",
                                entry.data.name(),
                                entry.code,
                                entry.data.region()
                            );
                        }
                    }
                }

                #[cfg(feature = "client")]
                FavoritesAction::Add { code } => {
                    use atlas_core::DirectoryClient;

                    let uid = session.require_user()?;
                    let client = DirectoryClient::new(args.base_url.as_str());
                    let snapshot = client.fetch_by_code(&code)?;
                    store.add(&uid, snapshot.code(), &snapshot)?;
                    println!("Added {} ({}) to favorites", snapshot.name(), snapshot.code());
                }

                FavoritesAction::Remove { code } => {
                    let uid = session.require_user()?;
                    store.remove(&uid, &code)?;
                    println!("Removed {code} from favorites");
                }
            }
        }
    }

    Ok(())
}

fn session_path(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join("session")
}

/// Rehydrate the session from the data dir; a missing or empty file is
/// the signed-out state.
fn load_session(data_dir: &std::path::Path) -> Session {
    match fs::read_to_string(session_path(data_dir)) {
        Ok(uid) => Session::signed_in(uid.trim()),
        Err(_) => Session::new(),
    }
}

fn store_session(data_dir: &std::path::Path, session: &Session) -> anyhow::Result<()> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("failed to create data dir {}", data_dir.display()))?;
    let path = session_path(data_dir);
    match session.current_user() {
        Some(uid) => fs::write(&path, uid)?,
        None => {
            if path.exists() {
                fs::remove_file(&path)?;
            }
        }
    }
    Ok(())
}
