//! country-flag-cli
//! ================
//!
//! Command-line interface for the `country-flag-core` reference table.
//!
//! This crate primarily provides a binary (`country-flag`). We include a
//! small library target so that docs.rs renders a documentation page and
//! shows this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install country-flag-cli
//! country-flag --help
//! country-flag country us
//! country-flag lookup --by tld uk
//! country-flag --json phone +44
//! country-flag flag deu
//! ```
//!
//! For programmatic access use the `country-flag-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// No API here; everything lives in the binary.
