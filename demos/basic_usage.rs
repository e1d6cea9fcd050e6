//! Basic usage example for country-flag
//!
//! This example demonstrates how to:
//! - Look countries up by alpha-2, alpha-3, top-level domain and numeric code
//! - Project records into info objects
//! - Search by phone code and by name

use country_flag::prelude::*;

fn main() -> Result<()> {
    println!("=== country-flag Basic Usage Example ===\n");

    let registry = CountryRegistry::new();
    let countries = registry.load_table()?;
    println!("✓ Table loaded: {} countries\n", countries.len());

    // Example 1: List the first few countries
    println!("--- Example 1: List countries ---");
    for (i, country) in countries.iter().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, country.name(), country.alpha2());
    }
    println!("... and {} more\n", countries.len() - 5);

    // Example 2: One country, four keys
    println!("--- Example 2: Same country through every index ---");
    let by_alpha2 = registry.find_by_alpha2("GB");
    let by_alpha3 = registry.find_by_alpha3("gbr");
    let by_tld = registry.find_by_top_level_domain("uk");
    let by_numeric = registry.find_by_iso_numeric(826);
    for (label, hit) in [
        ("alpha2 GB", by_alpha2),
        ("alpha3 gbr", by_alpha3),
        ("tld uk", by_tld),
        ("numeric 826", by_numeric),
    ] {
        match hit {
            Some(c) => println!("  {label:<12} -> {c}"),
            None => println!("  {label:<12} -> not found"),
        }
    }
    println!();

    // Example 3: Info objects
    println!("--- Example 3: Info object ---");
    if let Some(info) = registry.country_by_alpha2("es") {
        println!("  {info:?}");
    }
    println!();

    // Example 4: Shared calling codes
    println!("--- Example 4: Countries with calling code +44 ---");
    for country in registry.find_by_phone_code(44) {
        println!("  {} {}", country.flag_emoji(), country.name());
    }
    println!();

    // Example 5: Accent-insensitive name search
    println!("--- Example 5: Search 'japon' ---");
    for country in registry.search_by_name("japon") {
        println!("  {} / {}", country.name(), country.name_localized());
    }
    println!();

    let stats = registry.stats();
    println!(
        "Stats: {} countries, {} calling codes, {} non-standard",
        stats.countries, stats.phone_codes, stats.non_standard
    );

    Ok(())
}
