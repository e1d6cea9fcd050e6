//! country-flag prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::common::TableStats;
pub use crate::error::{FlagError, Result};
pub use crate::model::{CountryInfo, CountryRecord, IndexField, LookupKey};
pub use crate::registry::CountryRegistry;
pub use crate::selector::{ElementHost, FlagElement, MemoryElement, MemoryHost, Selection, Selector};
pub use crate::text::{equals_folded, fold_key};
