//! # tldwatch
//!
//! A one-shot batch tool that tracks newly registered top-level domains.
//!
//! ## Architecture
//!
//! A single linear pipeline:
//!
//! ```text
//! Fetcher → Normalizer → Store → Reporter
//! ```
//!
//! - [`fetcher`]: HTTP client for the IANA TLD list
//! - [`normalizer`]: line parsing and punycode-to-Unicode decoding
//! - [`store`]: SQLite persistence of previously seen entries
//! - [`reporter`]: JSON output of the entries added this run
//!
//! ## Quick Start
//!
//! ```bash
//! # First run creates ./db.sqlite and prints every entry
//! tldwatch
//!
//! # Subsequent runs print only what IANA added since
//! tldwatch
//!
//! # Keep the database elsewhere, with debug logging
//! SQLITE_FILE=/var/lib/tldwatch/db.sqlite tldwatch --debug
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires together store, fetcher and
/// normalizer; [`TldwatchError`](app::TldwatchError) is the crate-wide
/// error type.
pub mod app;

/// Command-line interface using clap, plus the pipeline driver.
pub mod cli;

/// Configuration resolved from the CLI flag and environment variables
/// (`SQLITE_FILE`, `DEBUG`).
pub mod config;

/// Core domain model: the [`Tld`](domain::Tld) entry newtype.
pub mod domain;

/// HTTP fetching of the IANA TLD list.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait for list fetching
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based
///   implementation with a 10-second request deadline
pub mod fetcher;

/// Line parsing and IDNA normalization of raw list entries.
pub mod normalizer;

/// JSON reporting of newly inserted entries.
pub mod reporter;

/// SQLite persistence layer.
///
/// - [`Store`](store::Store): trait defining storage operations
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
pub mod store;
