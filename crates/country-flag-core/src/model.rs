// crates/country-flag-core/src/model.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification prefix placed in front of the alpha-2 code on a flag
/// element, e.g. `"flag flag-us"`.
pub const FLAG_CLASS_PREFIX: &str = "flag flag-";

/// One row of the reference table.
///
/// The embedded document stores every country as a fixed 7-element array,
/// in exactly this field order:
///
/// ```json
/// [840, "United States", "Estados Unidos", "us", "usa", "us", 1]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// ISO 3166-1 numeric code. `0` marks the non-standard Kosovo entry.
    pub iso_numeric: u16,
    pub name: String,
    /// Spanish name.
    pub name_localized: String,
    pub alpha2: String,
    pub alpha3: String,
    /// Not always the alpha-2 code (`gb` uses `uk`).
    pub top_level_domain: String,
    /// International calling code, shared by several territories.
    pub phone_code: u16,
}

impl CountryRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_localized(&self) -> &str {
        &self.name_localized
    }

    pub fn alpha2(&self) -> &str {
        &self.alpha2
    }

    pub fn alpha3(&self) -> &str {
        &self.alpha3
    }

    pub fn top_level_domain(&self) -> &str {
        &self.top_level_domain
    }

    /// True for entries without an ISO 3166-1 numeric code.
    pub fn is_non_standard(&self) -> bool {
        self.iso_numeric == 0
    }

    /// Classification string a flag element carries while this country is
    /// selected.
    pub fn flag_class(&self) -> String {
        format!("{FLAG_CLASS_PREFIX}{}", self.alpha2)
    }

    /// Regional-indicator emoji for the alpha-2 code (e.g. `us` -> 🇺🇸).
    ///
    /// Non-letter characters are skipped, so a malformed code yields a
    /// shorter (possibly empty) string rather than garbage.
    pub fn flag_emoji(&self) -> String {
        self.alpha2
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .filter_map(|c| {
                let offset = c.to_ascii_lowercase() as u32 - 'a' as u32;
                char::from_u32(0x1F1E6 + offset)
            })
            .collect()
    }
}

impl fmt::Display for CountryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}/{}, .{}, +{}, #{:03})",
            self.name,
            self.alpha2,
            self.alpha3,
            self.top_level_domain,
            self.phone_code,
            self.iso_numeric
        )
    }
}

/// Public-facing projection of a [`CountryRecord`].
///
/// Serialized in camelCase so that JavaScript callers get the same field
/// names the flag widget has always handed out (`isoNumeric`,
/// `topLevelDomain`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfo {
    pub iso_numeric: u16,
    pub name: String,
    pub name_localized: String,
    pub alpha2: String,
    pub alpha3: String,
    pub top_level_domain: String,
    pub phone_code: u16,
}

impl From<&CountryRecord> for CountryInfo {
    fn from(r: &CountryRecord) -> Self {
        Self {
            iso_numeric: r.iso_numeric,
            name: r.name.clone(),
            name_localized: r.name_localized.clone(),
            alpha2: r.alpha2.clone(),
            alpha3: r.alpha3.clone(),
            top_level_domain: r.top_level_domain.clone(),
            phone_code: r.phone_code,
        }
    }
}

/// The four fields the registry can index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndexField {
    Numeric,
    Alpha2,
    Alpha3,
    TopLevelDomain,
}

impl IndexField {
    pub const ALL: [IndexField; 4] = [
        IndexField::Numeric,
        IndexField::Alpha2,
        IndexField::Alpha3,
        IndexField::TopLevelDomain,
    ];

    /// The index key a record is stored under for this field.
    pub(crate) fn key_of(self, record: &CountryRecord) -> LookupKey {
        match self {
            IndexField::Numeric => LookupKey::Numeric(record.iso_numeric),
            IndexField::Alpha2 => LookupKey::Code(record.alpha2.to_lowercase()),
            IndexField::Alpha3 => LookupKey::Code(record.alpha3.to_lowercase()),
            IndexField::TopLevelDomain => {
                LookupKey::Code(record.top_level_domain.to_lowercase())
            }
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            IndexField::Numeric => 0,
            IndexField::Alpha2 => 1,
            IndexField::Alpha3 => 2,
            IndexField::TopLevelDomain => 3,
        }
    }
}

impl fmt::Display for IndexField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IndexField::Numeric => "numeric",
            IndexField::Alpha2 => "alpha2",
            IndexField::Alpha3 => "alpha3",
            IndexField::TopLevelDomain => "tld",
        })
    }
}

/// A value to probe an index with.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LookupKey {
    Numeric(u16),
    Code(String),
}

impl LookupKey {
    /// Bring a caller-supplied key into the shape `field`'s index stores.
    ///
    /// String keys are lowercased. A string aimed at the numeric index is
    /// parsed as a decimal code; a number aimed at a string index can never
    /// match and yields `None`.
    pub fn normalize(self, field: IndexField) -> Option<LookupKey> {
        match (field, self) {
            (IndexField::Numeric, LookupKey::Numeric(n)) => Some(LookupKey::Numeric(n)),
            (IndexField::Numeric, LookupKey::Code(s)) => {
                s.trim().parse::<u16>().ok().map(LookupKey::Numeric)
            }
            (_, LookupKey::Code(s)) => Some(LookupKey::Code(s.to_lowercase())),
            (_, LookupKey::Numeric(_)) => None,
        }
    }
}

impl From<u16> for LookupKey {
    fn from(n: u16) -> Self {
        LookupKey::Numeric(n)
    }
}

impl From<&str> for LookupKey {
    fn from(s: &str) -> Self {
        LookupKey::Code(s.to_owned())
    }
}

impl From<String> for LookupKey {
    fn from(s: String) -> Self {
        LookupKey::Code(s)
    }
}

impl From<&String> for LookupKey {
    fn from(s: &String) -> Self {
        LookupKey::Code(s.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kosovo() -> CountryRecord {
        CountryRecord {
            iso_numeric: 0,
            name: "Kosovo".into(),
            name_localized: "Kosovo".into(),
            alpha2: "xk".into(),
            alpha3: "xkx".into(),
            top_level_domain: "ko".into(),
            phone_code: 383,
        }
    }

    #[test]
    fn record_parses_from_tuple() {
        let r: CountryRecord =
            serde_json::from_str(r#"[840,"United States","Estados Unidos","us","usa","us",1]"#)
                .unwrap();
        assert_eq!(r.iso_numeric, 840);
        assert_eq!(r.name_localized(), "Estados Unidos");
        assert_eq!(r.top_level_domain(), "us");
        assert_eq!(r.phone_code, 1);
    }

    #[test]
    fn flag_class_and_emoji() {
        let r = kosovo();
        assert_eq!(r.flag_class(), "flag flag-xk");
        assert_eq!(r.flag_emoji(), "\u{1F1FD}\u{1F1F0}");
        assert!(r.is_non_standard());
    }

    #[test]
    fn info_serializes_camel_case() {
        let info = CountryInfo::from(&kosovo());
        let v = serde_json::to_value(&info).unwrap();
        assert_eq!(v["isoNumeric"], 0);
        assert_eq!(v["nameLocalized"], "Kosovo");
        assert_eq!(v["topLevelDomain"], "ko");
        assert_eq!(v["phoneCode"], 383);
    }

    #[test]
    fn normalize_keys_per_field() {
        assert_eq!(
            LookupKey::from("US").normalize(IndexField::Alpha2),
            Some(LookupKey::Code("us".into()))
        );
        assert_eq!(
            LookupKey::from(" 840 ").normalize(IndexField::Numeric),
            Some(LookupKey::Numeric(840))
        );
        assert_eq!(LookupKey::from("usa").normalize(IndexField::Numeric), None);
        assert_eq!(LookupKey::from(840u16).normalize(IndexField::Alpha3), None);
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(kosovo().to_string(), "Kosovo (xk/xkx, .ko, +383, #000)");
    }
}
