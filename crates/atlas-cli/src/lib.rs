//! atlas-cli
//! ==========
//!
//! Command-line interface for the `atlas-core` country directory.
//!
//! This crate primarily provides a binary (`atlas-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install atlas-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! atlas-cli --help
//! atlas-cli countries --region Europe
//! atlas-cli country France
//! atlas-cli login uid-1234
//! atlas-cli favorites add FRA
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! [`atlas-core`] crate directly.
//!

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
