use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the reference table.
///
/// Returned by [`CountryRegistry::stats`](crate::CountryRegistry::stats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    pub countries: usize,
    /// Number of distinct calling codes.
    pub phone_codes: usize,
    /// Entries carrying numeric code `0`.
    pub non_standard: usize,
}
