//! Error handling example for country-flag
//!
//! This example demonstrates absent lookups and table errors

use country_flag::prelude::*;

fn main() -> Result<()> {
    println!("=== country-flag Error Handling Example ===\n");

    // Example 1: A malformed table surfaces through load_table
    println!("--- Example 1: Loading a malformed table ---");
    let broken = CountryRegistry::from_json(r#"[[1, "too short"]]"#);
    match broken.load_table() {
        Ok(records) => println!("✓ Loaded {} countries", records.len()),
        Err(e) => eprintln!("✗ Failed to load table: {e}"),
    }
    // Lookups keep working and simply find nothing.
    println!("  lookup on broken table: {:?}", broken.find_by_alpha2("us"));
    println!();

    let registry = CountryRegistry::new();
    registry.load_table()?;

    // Example 2: Non-existent codes
    println!("--- Example 2: Searching for non-existent countries ---");
    for code in ["XX", "YY", "ZZ"] {
        match registry.find_by_alpha2(code) {
            Some(country) => println!("  Found: {} ({})", country.name(), country.alpha2()),
            None => println!("  Not found: {code}"),
        }
    }
    println!();

    // Example 3: Keys of the wrong shape
    println!("--- Example 3: Handling invalid keys ---");
    for code in ["", "A", "ABCD", "123"] {
        match registry.find_by_alpha3(code) {
            Some(country) => println!("  Found: {} ({})", country.name(), country.alpha3()),
            None => println!("  Not found: {code:?}"),
        }
    }
    println!(
        "  numeric index with text key \"abc\": {:?}",
        registry.lookup(IndexField::Numeric, "abc")
    );
    println!();

    // Example 4: Turning absence into an error
    println!("--- Example 4: Requiring a country ---");
    let required = registry
        .country_by_alpha2("zz")
        .ok_or_else(|| FlagError::NotFound("zz".into()));
    match required {
        Ok(info) => println!("  Found: {}", info.name),
        Err(e) => println!("  {e}"),
    }

    Ok(())
}
