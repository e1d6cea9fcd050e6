//! country-flag-wasm — WebAssembly bindings for country-flag-core
//!
//! This crate exposes the flag widget and the country lookups to
//! JavaScript. The country table is embedded in the WASM binary through
//! `country-flag-core`; nothing is fetched at runtime.
//!
//! What it provides
//! ----------------
//! - `CountryFlag`: creates a `div` under a parent element and keeps its
//!   `class` attribute at `"flag flag-<alpha2>"` for the selected country
//!   (or empty when nothing matched). Every `select*` call returns the ISO
//!   numeric code, `0` when nothing matched.
//! - Static lookups returning plain info objects
//!   (`isoNumeric`, `name`, `nameLocalized`, `alpha2`, `alpha3`,
//!   `topLevelDomain`, `phoneCode`) or `undefined`.
//! - Basic queries: `get_country_count()`, `get_country_name(alpha2)`,
//!   `get_stats()`.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { CountryFlag } from 'country-flag-wasm';
//!
//! async function main() {
//!   await init();
//!   const flag = new CountryFlag(document.getElementById('flag-slot'));
//!   flag.selectByAlpha2('US');            // 840, class="flag flag-us"
//!   flag.randomize();
//!   console.log(CountryFlag.getCountryByTopLevelDomain('uk'));
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The CSS that turns `flag flag-xx` into an image is not part of this
//!   crate.
use country_flag_core::{CountryInfo, CountryRegistry, ElementHost, FlagElement, FlagError, Selector};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing country-flag WASM module...".into());
}

/* --------------------------------------------------------------------------
   DOM seam
-------------------------------------------------------------------------- */

/// The `div` a [`CountryFlag`] owns.
#[derive(Debug)]
pub struct DomElement(web_sys::Element);

impl FlagElement for DomElement {
    fn set_class(&mut self, class: &str) {
        self.0.set_class_name(class);
    }
}

/// Creates flag elements as children of `parent`.
struct DomHost<'a> {
    parent: &'a web_sys::Element,
}

impl ElementHost for DomHost<'_> {
    type Element = DomElement;

    fn create_element(&self) -> country_flag_core::Result<DomElement> {
        let document = self
            .parent
            .owner_document()
            .or_else(|| web_sys::window().and_then(|w| w.document()))
            .ok_or_else(|| FlagError::Host("no document available".into()))?;
        let element = document.create_element("div").map_err(host_error)?;
        self.parent.append_child(&element).map_err(host_error)?;
        Ok(DomElement(element))
    }
}

fn host_error(e: JsValue) -> FlagError {
    FlagError::Host(format!("{e:?}"))
}

fn to_js_error(e: FlagError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn info_to_js(info: Option<CountryInfo>) -> JsValue {
    match info {
        Some(info) => to_value(&info).unwrap_or(JsValue::UNDEFINED),
        None => JsValue::UNDEFINED,
    }
}

fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) ^ lo ^ js_sys::Date::now() as u64
}

/* --------------------------------------------------------------------------
   Flag widget
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub struct CountryFlag {
    selector: Selector<'static, DomElement>,
    rng: StdRng,
}

#[wasm_bindgen]
impl CountryFlag {
    /// Create the flag element under `parent`. It starts with no class.
    #[wasm_bindgen(constructor)]
    pub fn new(parent: &web_sys::Element) -> Result<CountryFlag, JsValue> {
        let selector = Selector::attach(CountryRegistry::global(), &DomHost { parent })
            .map_err(to_js_error)?;
        Ok(Self {
            selector,
            rng: StdRng::seed_from_u64(random_seed()),
        })
    }

    pub fn randomize(&mut self) -> u16 {
        self.selector.select_random_with(&mut self.rng)
    }

    #[wasm_bindgen(js_name = selectByAlpha2)]
    pub fn select_by_alpha2(&mut self, alpha2: &str) -> u16 {
        self.selector.select_by_alpha2(alpha2)
    }

    #[wasm_bindgen(js_name = selectByAlpha3)]
    pub fn select_by_alpha3(&mut self, alpha3: &str) -> u16 {
        self.selector.select_by_alpha3(alpha3)
    }

    #[wasm_bindgen(js_name = selectByTopLevelDomain)]
    pub fn select_by_top_level_domain(&mut self, tld: &str) -> u16 {
        self.selector.select_by_top_level_domain(tld)
    }

    #[wasm_bindgen(js_name = selectByIsoNumeric)]
    pub fn select_by_iso_numeric(&mut self, code: u16) -> u16 {
        self.selector.select_by_iso_numeric(code)
    }

    /// Info object of the current selection, `undefined` when nothing is
    /// selected.
    #[wasm_bindgen(getter)]
    pub fn selected(&self) -> JsValue {
        info_to_js(CountryRegistry::to_info(self.selector.selected()))
    }

    #[wasm_bindgen(js_name = getCountryByAlpha2)]
    pub fn get_country_by_alpha2(alpha2: &str) -> JsValue {
        info_to_js(CountryRegistry::global().country_by_alpha2(alpha2))
    }

    #[wasm_bindgen(js_name = getCountryByAlpha3)]
    pub fn get_country_by_alpha3(alpha3: &str) -> JsValue {
        info_to_js(CountryRegistry::global().country_by_alpha3(alpha3))
    }

    #[wasm_bindgen(js_name = getCountryByTopLevelDomain)]
    pub fn get_country_by_top_level_domain(tld: &str) -> JsValue {
        info_to_js(CountryRegistry::global().country_by_top_level_domain(tld))
    }

    #[wasm_bindgen(js_name = getCountryByIsoNumeric)]
    pub fn get_country_by_iso_numeric(code: u16) -> JsValue {
        info_to_js(CountryRegistry::global().country_by_iso_numeric(code))
    }
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_country_count() -> usize {
    CountryRegistry::global().len()
}

#[wasm_bindgen]
pub fn get_country_name(alpha2: &str) -> Option<String> {
    CountryRegistry::global()
        .find_by_alpha2(alpha2)
        .map(|c| c.name().to_string())
}

#[wasm_bindgen]
pub fn get_stats() -> JsValue {
    to_value(&CountryRegistry::global().stats()).unwrap_or(JsValue::UNDEFINED)
}
