// crates/country-flag-core/src/registry.rs

//! # Country Registry
//!
//! Owns the reference table and the four lookup indices built over it.
//! Nothing is parsed or indexed until first use, and nothing is ever
//! rebuilt afterwards.

use crate::common::TableStats;
use crate::error::{FlagError, Result};
use crate::model::{CountryInfo, CountryRecord, IndexField, LookupKey};
use crate::text::fold_key;
use once_cell::sync::{Lazy, OnceCell};
use rand::Rng;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, error};

/// The bundled table: a JSON array of 7-element country tuples.
static EMBEDDED_TABLE: &str = include_str!("../data/countries.json");

static GLOBAL_REGISTRY: Lazy<CountryRegistry> = Lazy::new(CountryRegistry::new);

/// Maps a normalized key to the position of its record in the table.
pub type FieldIndex = HashMap<LookupKey, usize>;

/// Reference table plus lazily built per-field indices.
///
/// Every instance is independent: a fresh registry starts with nothing
/// parsed, which keeps tests free of cache leakage. Application code that
/// just wants "the" registry can use [`CountryRegistry::global`].
///
/// # Example
///
/// ```rust
/// use country_flag_core::{CountryRegistry, IndexField};
///
/// let registry = CountryRegistry::new();
/// let us = registry.lookup(IndexField::Alpha3, "USA").unwrap();
/// assert_eq!(us.iso_numeric, 840);
/// assert!(registry.is_index_built(IndexField::Alpha3));
/// assert!(!registry.is_index_built(IndexField::Alpha2));
/// ```
pub struct CountryRegistry {
    source: Cow<'static, str>,
    table: OnceCell<Vec<CountryRecord>>,
    indices: [OnceCell<FieldIndex>; 4],
}

impl CountryRegistry {
    /// A fresh registry over the embedded table.
    pub fn new() -> Self {
        Self::from_json(EMBEDDED_TABLE)
    }

    /// A fresh registry over a caller-supplied JSON document in the same
    /// tuple layout as the embedded one. The document is not parsed until
    /// first use.
    pub fn from_json(source: impl Into<Cow<'static, str>>) -> Self {
        Self {
            source: source.into(),
            table: OnceCell::new(),
            indices: Default::default(),
        }
    }

    /// The process-wide registry over the embedded table.
    pub fn global() -> &'static CountryRegistry {
        &GLOBAL_REGISTRY
    }

    /// Parse the table if that has not happened yet.
    ///
    /// Only a malformed document makes this fail, which cannot happen for
    /// the embedded table. A failed parse is not cached.
    pub fn load_table(&self) -> Result<&[CountryRecord]> {
        self.table
            .get_or_try_init(|| {
                let records: Vec<CountryRecord> = serde_json::from_str(&self.source)?;
                debug!(countries = records.len(), "parsed country table");
                Ok::<_, FlagError>(records)
            })
            .map(Vec::as_slice)
    }

    /// All records in table order. A table that fails to parse is logged
    /// and treated as empty, so every lookup simply finds nothing.
    pub fn records(&self) -> &[CountryRecord] {
        match self.load_table() {
            Ok(records) => records,
            Err(e) => {
                error!(error = %e, "country table unavailable, treating it as empty");
                &[]
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    pub fn is_index_built(&self, field: IndexField) -> bool {
        self.indices[field.slot()].get().is_some()
    }

    /// The index for `field`, built by a single pass over the table on
    /// first request.
    ///
    /// On key collisions the later record in table order wins.
    pub fn index(&self, field: IndexField) -> &FieldIndex {
        self.indices[field.slot()].get_or_init(|| {
            let records = self.records();
            let mut map = HashMap::with_capacity(records.len());
            let mut collisions = 0usize;
            for (pos, record) in records.iter().enumerate() {
                if map.insert(field.key_of(record), pos).is_some() {
                    collisions += 1;
                }
            }
            debug!(%field, entries = map.len(), collisions, "built lookup index");
            map
        })
    }

    /// Point lookup. String keys are case-insensitive.
    pub fn lookup(&self, field: IndexField, key: impl Into<LookupKey>) -> Option<&CountryRecord> {
        let key = key.into().normalize(field)?;
        let pos = *self.index(field).get(&key)?;
        self.records().get(pos)
    }

    pub fn find_by_alpha2(&self, alpha2: &str) -> Option<&CountryRecord> {
        self.lookup(IndexField::Alpha2, alpha2)
    }

    pub fn find_by_alpha3(&self, alpha3: &str) -> Option<&CountryRecord> {
        self.lookup(IndexField::Alpha3, alpha3)
    }

    pub fn find_by_top_level_domain(&self, tld: &str) -> Option<&CountryRecord> {
        self.lookup(IndexField::TopLevelDomain, tld)
    }

    pub fn find_by_iso_numeric(&self, code: u16) -> Option<&CountryRecord> {
        self.lookup(IndexField::Numeric, code)
    }

    /// Find a country by any code, trying alpha-2, alpha-3, top-level
    /// domain and finally the numeric code.
    ///
    /// Examples:
    /// - `"de"` → Germany (alpha-2)
    /// - `"DEU"` → Germany (alpha-3)
    /// - `"uk"` → United Kingdom (top-level domain)
    /// - `"276"` → Germany (numeric)
    pub fn find_by_code(&self, code: &str) -> Option<&CountryRecord> {
        let code = code.trim();
        self.find_by_alpha2(code)
            .or_else(|| self.find_by_alpha3(code))
            .or_else(|| self.find_by_top_level_domain(code))
            .or_else(|| self.lookup(IndexField::Numeric, code))
    }

    /// All countries sharing a calling code, in table order.
    pub fn find_by_phone_code(&self, code: u16) -> Vec<&CountryRecord> {
        self.records()
            .iter()
            .filter(|r| r.phone_code == code)
            .collect()
    }

    /// Like [`find_by_phone_code`](Self::find_by_phone_code) but accepts the
    /// textual form (`"+44"`, `"44"`). Anything that is not a code matches
    /// nothing.
    pub fn find_by_phone_code_str(&self, code: &str) -> Vec<&CountryRecord> {
        match code.trim().trim_start_matches('+').parse::<u16>() {
            Ok(code) => self.find_by_phone_code(code),
            Err(_) => Vec::new(),
        }
    }

    /// Accent- and case-insensitive substring search over the English and
    /// localized names.
    pub fn search_by_name(&self, query: &str) -> Vec<&CountryRecord> {
        let q = fold_key(query.trim());
        if q.is_empty() {
            return Vec::new();
        }
        self.records()
            .iter()
            .filter(|r| fold_key(&r.name).contains(&q) || fold_key(&r.name_localized).contains(&q))
            .collect()
    }

    /// A uniformly chosen record, `None` only for an empty table.
    pub fn random_record_with<R: Rng>(&self, rng: &mut R) -> Option<&CountryRecord> {
        let records = self.records();
        if records.is_empty() {
            return None;
        }
        records.get(rng.random_range(0..records.len()))
    }

    /// [`random_record_with`](Self::random_record_with) using the thread-local RNG.
    #[cfg(feature = "thread-rng")]
    pub fn random_record(&self) -> Option<&CountryRecord> {
        self.random_record_with(&mut rand::rng())
    }

    /// Project a lookup result into the public info structure.
    pub fn to_info(record: Option<&CountryRecord>) -> Option<CountryInfo> {
        record.map(CountryInfo::from)
    }

    pub fn country_by_alpha2(&self, alpha2: &str) -> Option<CountryInfo> {
        Self::to_info(self.find_by_alpha2(alpha2))
    }

    pub fn country_by_alpha3(&self, alpha3: &str) -> Option<CountryInfo> {
        Self::to_info(self.find_by_alpha3(alpha3))
    }

    pub fn country_by_top_level_domain(&self, tld: &str) -> Option<CountryInfo> {
        Self::to_info(self.find_by_top_level_domain(tld))
    }

    pub fn country_by_iso_numeric(&self, code: u16) -> Option<CountryInfo> {
        Self::to_info(self.find_by_iso_numeric(code))
    }

    pub fn stats(&self) -> TableStats {
        let records = self.records();
        TableStats {
            countries: records.len(),
            phone_codes: records
                .iter()
                .map(|r| r.phone_code)
                .collect::<HashSet<_>>()
                .len(),
            non_standard: records.iter().filter(|r| r.is_non_standard()).count(),
        }
    }
}

impl Default for CountryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CountryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let built: Vec<IndexField> = IndexField::ALL
            .into_iter()
            .filter(|field| self.is_index_built(*field))
            .collect();
        f.debug_struct("CountryRegistry")
            .field("loaded", &self.table.get().map(Vec::len))
            .field("indices", &built)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const CLASHING: &str = r#"[
        [1,"First","Primero","aa","aaa","zz",10],
        [1,"Second","Segundo","bb","bbb","zz",10],
        [0,"Third","Tercero","cc","ccc","cc",20]
    ]"#;

    #[test]
    fn nothing_is_built_up_front() {
        let registry = CountryRegistry::new();
        assert!(!registry.is_loaded());
        for field in IndexField::ALL {
            assert!(!registry.is_index_built(field));
        }
    }

    #[test]
    fn only_the_queried_index_is_built() {
        let registry = CountryRegistry::new();
        assert!(registry.find_by_top_level_domain("de").is_some());
        assert!(registry.is_loaded());
        assert!(registry.is_index_built(IndexField::TopLevelDomain));
        assert!(!registry.is_index_built(IndexField::Alpha2));
        assert!(!registry.is_index_built(IndexField::Alpha3));
        assert!(!registry.is_index_built(IndexField::Numeric));
    }

    #[test]
    fn index_is_built_once() {
        let registry = CountryRegistry::new();
        let first = registry.index(IndexField::Alpha2) as *const FieldIndex;
        let second = registry.index(IndexField::Alpha2) as *const FieldIndex;
        assert_eq!(first, second);

        let a = registry.find_by_alpha2("fr").unwrap() as *const CountryRecord;
        let b = registry.find_by_alpha2("FR").unwrap() as *const CountryRecord;
        assert_eq!(a, b);
    }

    #[test]
    fn collisions_resolve_to_the_later_record() {
        let registry = CountryRegistry::from_json(CLASHING);
        assert_eq!(registry.find_by_iso_numeric(1).unwrap().name(), "Second");
        assert_eq!(registry.find_by_top_level_domain("ZZ").unwrap().name(), "Second");
        assert_eq!(registry.index(IndexField::Numeric).len(), 2);
        assert_eq!(registry.find_by_alpha2("aa").unwrap().name(), "First");
    }

    #[test]
    fn malformed_table_behaves_as_empty() {
        let registry = CountryRegistry::from_json("[[1, \"broken\"]]");
        assert!(matches!(registry.load_table(), Err(FlagError::Json(_))));
        assert!(registry.is_empty());
        assert!(registry.find_by_alpha2("us").is_none());
        let mut rng = SmallRng::seed_from_u64(7);
        assert!(registry.random_record_with(&mut rng).is_none());
    }

    #[test]
    fn random_record_is_seed_deterministic() {
        let registry = CountryRegistry::from_json(CLASHING);
        let mut a = SmallRng::seed_from_u64(42);
        let mut b = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(
                registry.random_record_with(&mut a),
                registry.random_record_with(&mut b)
            );
        }
    }

    #[test]
    fn stats_count_shared_codes_once() {
        let stats = CountryRegistry::from_json(CLASHING).stats();
        assert_eq!(
            stats,
            TableStats {
                countries: 3,
                phone_codes: 2,
                non_standard: 1,
            }
        );
    }

    #[test]
    fn to_info_passes_absence_through() {
        assert!(CountryRegistry::to_info(None).is_none());
        let registry = CountryRegistry::from_json(CLASHING);
        let info = CountryRegistry::to_info(registry.find_by_alpha3("ccc")).unwrap();
        assert_eq!(info.name, "Third");
        assert_eq!(info.iso_numeric, 0);
    }

    #[test]
    fn debug_reports_build_state() {
        let registry = CountryRegistry::from_json(CLASHING);
        registry.find_by_alpha3("aaa");
        let dbg = format!("{registry:?}");
        assert!(dbg.contains("Some(3)"));
        assert!(dbg.contains("Alpha3"));
        assert!(!dbg.contains("Alpha2"));
    }
}
