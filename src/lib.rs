//! country-flag
//! ============
//!
//! Workspace facade over [`country_flag_core`]; it exists so the demos in
//! `demos/` can `use country_flag::prelude::*`.
pub use country_flag_core::*;
