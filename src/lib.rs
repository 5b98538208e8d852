//! blocklint - a linter for block-listed words
//!
//! This library provides the core of the `blocklint` CLI: collecting term
//! lists into three strictness tiers, compiling them into an ordered set of
//! search patterns, and scanning input sources line by line for matches.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod files;
pub mod paths;
pub mod patterns;
pub mod runner;
pub mod scanner;
pub mod wordlists;
