use clap::{Parser, Subcommand};

/// CLI arguments for atlas-cli
#[derive(Debug, Parser)]
#[command(
    name = "atlas",
    version,
    about = "Browse the world country directory and manage per-user favorites"
)]
pub struct CliArgs {
    /// Base URL of the country data provider
    #[cfg(feature = "client")]
    #[arg(long = "base-url", global = true, default_value = atlas_core::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory for the session file and favorite documents
    /// (default: $ATLAS_DATA_DIR, else .atlas)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List countries, optionally narrowed by search, region and language
    #[cfg(feature = "client")]
    Countries {
        /// Substring of the country name (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Exact region (Africa, Americas, Asia, Europe, Oceania)
        #[arg(short, long)]
        region: Option<String>,

        /// Language display name (e.g. "French")
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Show details for one country, by name or cca3 code
    #[cfg(feature = "client")]
    Country {
        /// Display name (e.g. "France") or code (e.g. FRA)
        query: String,
    },

    /// Sign in as a user id for subsequent favorites commands
    Login {
        /// Identity-provider user id
        user_id: String,
    },

    /// Clear the current session
    Logout,

    /// Print the signed-in user, if any
    Whoami,

    /// Manage the signed-in user's favorite countries
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum FavoritesAction {
    /// List saved favorites
    List,

    /// Favorite a country by cca3 code (snapshots its current data)
    #[cfg(feature = "client")]
    Add {
        /// cca3 code, e.g. FRA
        code: String,
    },

    /// Remove a favorite by cca3 code
    Remove {
        /// cca3 code, e.g. FRA
        code: String,
    },
}
