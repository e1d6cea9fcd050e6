// crates/country-flag-core/src/selector.rs

//! # Flag Selector
//!
//! Binds one visual element and keeps its classification string in step
//! with the currently selected country. The element itself belongs to the
//! host (a DOM node, a terminal widget, a test double); the selector only
//! ever writes its class.

use crate::error::Result;
use crate::model::{CountryRecord, IndexField, LookupKey};
use crate::registry::CountryRegistry;
use rand::Rng;
use tracing::trace;

/// Anything that carries a classification string.
pub trait FlagElement {
    /// Replace the element's classification. An empty string clears it.
    fn set_class(&mut self, class: &str);
}

/// A UI environment able to create a flag element and attach it under
/// its parent container.
pub trait ElementHost {
    type Element: FlagElement;

    fn create_element(&self) -> Result<Self::Element>;
}

/// What a selector currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection<'r> {
    Unselected,
    Selected(&'r CountryRecord),
}

impl<'r> Selection<'r> {
    pub fn record(&self) -> Option<&'r CountryRecord> {
        match *self {
            Selection::Unselected => None,
            Selection::Selected(record) => Some(record),
        }
    }
}

/// Drives one [`FlagElement`] from registry lookups.
///
/// Every select call ends in exactly one of two states: a matching
/// country sets the class to `"flag flag-<alpha2>"` and returns its numeric
/// code; no match clears the class and returns `0`. Note that Kosovo is a
/// real match whose numeric code is also `0`; use [`Selector::selection`]
/// to tell the two apart.
///
/// ```rust
/// use country_flag_core::{CountryRegistry, MemoryElement, Selector};
///
/// let registry = CountryRegistry::new();
/// let mut flag = Selector::new(&registry, MemoryElement::default());
///
/// assert_eq!(flag.select_by_alpha2("US"), 840);
/// assert_eq!(flag.element().class(), "flag flag-us");
///
/// assert_eq!(flag.select_by_alpha2("zz"), 0);
/// assert_eq!(flag.element().class(), "");
/// ```
#[derive(Debug)]
pub struct Selector<'r, E> {
    registry: &'r CountryRegistry,
    element: E,
    selection: Selection<'r>,
}

impl<'r, E: FlagElement> Selector<'r, E> {
    /// Bind an already existing element. The element is left untouched
    /// until the first selection.
    pub fn new(registry: &'r CountryRegistry, element: E) -> Self {
        Self {
            registry,
            element,
            selection: Selection::Unselected,
        }
    }

    /// Ask `host` for a fresh element and bind it.
    pub fn attach<H>(registry: &'r CountryRegistry, host: &H) -> Result<Self>
    where
        H: ElementHost<Element = E>,
    {
        Ok(Self::new(registry, host.create_element()?))
    }

    pub fn select_random_with<R: Rng>(&mut self, rng: &mut R) -> u16 {
        let record = self.registry.random_record_with(rng);
        self.apply(record)
    }

    #[cfg(feature = "thread-rng")]
    pub fn select_random(&mut self) -> u16 {
        self.select_random_with(&mut rand::rng())
    }

    pub fn select_by(&mut self, field: IndexField, key: impl Into<LookupKey>) -> u16 {
        let record = self.registry.lookup(field, key);
        self.apply(record)
    }

    pub fn select_by_alpha2(&mut self, alpha2: &str) -> u16 {
        self.select_by(IndexField::Alpha2, alpha2)
    }

    pub fn select_by_alpha3(&mut self, alpha3: &str) -> u16 {
        self.select_by(IndexField::Alpha3, alpha3)
    }

    pub fn select_by_top_level_domain(&mut self, tld: &str) -> u16 {
        self.select_by(IndexField::TopLevelDomain, tld)
    }

    pub fn select_by_iso_numeric(&mut self, code: u16) -> u16 {
        self.select_by(IndexField::Numeric, code)
    }

    pub fn selection(&self) -> Selection<'r> {
        self.selection
    }

    pub fn selected(&self) -> Option<&'r CountryRecord> {
        self.selection.record()
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn into_element(self) -> E {
        self.element
    }

    fn apply(&mut self, record: Option<&'r CountryRecord>) -> u16 {
        match record {
            Some(record) => {
                trace!(alpha2 = %record.alpha2, "flag selected");
                self.element.set_class(&record.flag_class());
                self.selection = Selection::Selected(record);
                record.iso_numeric
            }
            None => {
                trace!("flag cleared");
                self.element.set_class("");
                self.selection = Selection::Unselected;
                0
            }
        }
    }
}

/// An element that just remembers its class. Used by the CLI and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryElement {
    class: String,
    writes: usize,
}

impl MemoryElement {
    pub fn class(&self) -> &str {
        &self.class
    }

    /// How many times the class was written.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl FlagElement for MemoryElement {
    fn set_class(&mut self, class: &str) {
        self.class.clear();
        self.class.push_str(class);
        self.writes += 1;
    }
}

/// Host handing out [`MemoryElement`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryHost;

impl ElementHost for MemoryHost {
    type Element = MemoryElement;

    fn create_element(&self) -> Result<MemoryElement> {
        Ok(MemoryElement::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlagError;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    struct FailingHost;

    impl ElementHost for FailingHost {
        type Element = MemoryElement;

        fn create_element(&self) -> Result<MemoryElement> {
            Err(FlagError::Host("no parent".into()))
        }
    }

    #[test]
    fn starts_unselected_and_untouched() {
        let registry = CountryRegistry::new();
        let flag = Selector::attach(&registry, &MemoryHost).unwrap();
        assert_eq!(flag.selection(), Selection::Unselected);
        assert_eq!(flag.element().writes(), 0);
        assert!(!registry.is_loaded());
    }

    #[test]
    fn attach_propagates_host_errors() {
        let registry = CountryRegistry::new();
        let err = Selector::attach(&registry, &FailingHost).unwrap_err();
        assert!(matches!(err, FlagError::Host(_)));
    }

    #[test]
    fn select_by_alpha2_sets_class() {
        let registry = CountryRegistry::new();
        let mut flag = Selector::new(&registry, MemoryElement::default());
        assert_eq!(flag.select_by_alpha2("US"), 840);
        assert_eq!(flag.element().class(), "flag flag-us");
        assert_eq!(flag.selected().unwrap().name(), "United States");
    }

    #[test]
    fn unknown_code_clears_class() {
        let registry = CountryRegistry::new();
        let mut flag = Selector::new(&registry, MemoryElement::default());
        flag.select_by_alpha2("de");
        assert_eq!(flag.select_by_alpha2("zz"), 0);
        assert_eq!(flag.element().class(), "");
        assert_eq!(flag.selection(), Selection::Unselected);
    }

    #[test]
    fn every_selector_kind_lands_on_the_same_country() {
        let registry = CountryRegistry::new();
        let mut flag = Selector::new(&registry, MemoryElement::default());
        assert_eq!(flag.select_by_alpha3("GBR"), 826);
        assert_eq!(flag.element().class(), "flag flag-gb");
        assert_eq!(flag.select_by_top_level_domain("UK"), 826);
        assert_eq!(flag.element().class(), "flag flag-gb");
        assert_eq!(flag.select_by_iso_numeric(826), 826);
        assert_eq!(flag.element().class(), "flag flag-gb");
    }

    #[test]
    fn kosovo_is_selected_even_though_its_code_is_zero() {
        let registry = CountryRegistry::new();
        let mut flag = Selector::new(&registry, MemoryElement::default());
        assert_eq!(flag.select_by_alpha2("XK"), 0);
        assert_eq!(flag.element().class(), "flag flag-xk");
        assert!(matches!(flag.selection(), Selection::Selected(r) if r.alpha3 == "xkx"));
    }

    #[test]
    fn repeated_selection_is_idempotent() {
        let registry = CountryRegistry::new();
        let mut flag = Selector::new(&registry, MemoryElement::default());
        let first = flag.select_by(IndexField::Alpha3, "jpn");
        let state = flag.selection();
        let class = flag.element().class().to_owned();
        assert_eq!(flag.select_by(IndexField::Alpha3, "JPN"), first);
        assert_eq!(flag.selection(), state);
        assert_eq!(flag.element().class(), class);
    }

    #[test]
    fn random_selection_uses_table_codes() {
        let registry = CountryRegistry::new();
        let mut flag = Selector::new(&registry, MemoryElement::default());
        let mut rng = SmallRng::seed_from_u64(2024);
        for _ in 0..200 {
            let code = flag.select_random_with(&mut rng);
            let selected = flag.selected().unwrap();
            assert_eq!(selected.iso_numeric, code);
            assert_eq!(flag.element().class(), selected.flag_class());
        }
        assert_eq!(flag.element().writes(), 200);
    }

    #[test]
    fn into_element_hands_back_the_element() {
        let registry = CountryRegistry::new();
        let mut flag = Selector::new(&registry, MemoryElement::default());
        flag.select_by_alpha2("br");
        assert_eq!(flag.into_element().class(), "flag flag-br");
    }
}
