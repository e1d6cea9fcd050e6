// crates/country-flag-core/src/lib.rs

//! country-flag-core
//! =================
//!
//! An embedded ISO 3166-1 reference table (240 countries and territories)
//! with lazily built lookup indices, plus a [`Selector`] that keeps a flag
//! element's classification string in sync with the chosen country.
//!
//! ```rust
//! use country_flag_core::prelude::*;
//!
//! let registry = CountryRegistry::global();
//! let info = registry.country_by_top_level_domain("uk").unwrap();
//! assert_eq!(info.alpha2, "gb");
//! assert_eq!(info.phone_code, 44);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod model;
pub mod prelude;
pub mod registry;
pub mod selector;
pub mod text;

// Re-exports
pub use crate::common::TableStats;
pub use crate::error::{FlagError, Result};
pub use crate::model::{CountryInfo, CountryRecord, IndexField, LookupKey, FLAG_CLASS_PREFIX};
pub use crate::registry::{CountryRegistry, FieldIndex};
pub use crate::selector::{ElementHost, FlagElement, MemoryElement, MemoryHost, Selection, Selector};
