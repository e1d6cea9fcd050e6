//! Flag selection example for country-flag
//!
//! Drives an in-memory flag element the same way the browser widget drives
//! its `div`.

use country_flag::prelude::*;

fn main() -> Result<()> {
    println!("=== country-flag Selection Example ===\n");

    let registry = CountryRegistry::global();
    let mut flag = Selector::attach(registry, &MemoryHost)?;

    for code in ["US", "deu", "zz", "XK"] {
        let mut numeric = 0;
        for field in [IndexField::Alpha2, IndexField::Alpha3] {
            numeric = flag.select_by(field, code);
            if flag.selected().is_some() {
                break;
            }
        }
        match flag.selection() {
            Selection::Selected(country) => println!(
                "  {code:<4} -> {numeric:03} class={:?} ({})",
                flag.element().class(),
                country.name()
            ),
            Selection::Unselected => {
                println!("  {code:<4} -> {numeric} class={:?}", flag.element().class())
            }
        }
    }
    println!();

    println!("--- Random picks ---");
    for _ in 0..3 {
        let numeric = flag.select_random();
        println!("  {numeric:03} class={:?}", flag.element().class());
    }

    Ok(())
}
