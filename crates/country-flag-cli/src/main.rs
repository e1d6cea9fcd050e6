//! country-flag — Command-line interface for country-flag-core
//!
//! This binary answers lookups against the embedded country table from
//! your terminal. It supports printing basic statistics, listing
//! countries, looking up a country by any of its codes, listing countries
//! by calling code, searching names, picking random countries and showing
//! the flag class a selector would apply.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ country-flag stats
//!
//! - Show details for a country by code (case-insensitive)
//!   $ country-flag country us
//!   $ country-flag country deu
//!   $ country-flag country uk        # top-level domain
//!
//! - Lookup through a specific index
//!   $ country-flag lookup --by numeric 840
//!
//! - Countries sharing a calling code
//!   $ country-flag phone +44
//!
//! - Accent-insensitive name search, as JSON
//!   $ country-flag --json search japon
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=country_flag_core=debug`).
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use country_flag_core::{
    CountryInfo, CountryRecord, CountryRegistry, FlagError, IndexField, MemoryHost, Selection,
    Selector,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = CliArgs::parse();
    debug!(?args, "parsed arguments");

    let registry = CountryRegistry::global();

    match args.command {
        Commands::Stats => {
            let stats = registry.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Table statistics:");
                println!("  Countries: {}", stats.countries);
                println!("  Calling codes: {}", stats.phone_codes);
                println!("  Non-standard entries: {}", stats.non_standard);
            }
        }

        Commands::Countries => print_list(registry.records().iter(), args.json)?,

        Commands::Country { code } => {
            let country = registry
                .find_by_code(&code)
                .ok_or_else(|| FlagError::NotFound(code.clone()))?;
            print_one(country, args.json)?;
        }

        Commands::Lookup { by, key } => {
            let field = IndexField::from(by);
            let country = registry
                .lookup(field, key.as_str())
                .ok_or_else(|| FlagError::NotFound(format!("{field} = {key}")))?;
            print_one(country, args.json)?;
        }

        Commands::Phone { code } => {
            let matches = registry.find_by_phone_code_str(&code);
            if matches.is_empty() && !args.json {
                println!("No countries use calling code: {code}");
            } else {
                print_list(matches.into_iter(), args.json)?;
            }
        }

        Commands::Search { query } => {
            let matches = registry.search_by_name(&query);
            if matches.is_empty() && !args.json {
                println!("No countries found matching: {query}");
            } else {
                print_list(matches.into_iter(), args.json)?;
            }
        }

        Commands::Random { count } => {
            let picks = (0..count).filter_map(|_| registry.random_record());
            print_list(picks, args.json)?;
        }

        Commands::Flag { code } => {
            let mut flag = Selector::attach(registry, &MemoryHost)
                .context("creating the in-memory flag element")?;
            let mut numeric = 0;
            for field in [
                IndexField::Alpha2,
                IndexField::Alpha3,
                IndexField::TopLevelDomain,
                IndexField::Numeric,
            ] {
                numeric = flag.select_by(field, code.trim());
                if flag.selected().is_some() {
                    break;
                }
            }
            match flag.selection() {
                Selection::Selected(country) => {
                    println!("{} {}", country.flag_emoji(), country.name());
                    println!("class=\"{}\"", flag.element().class());
                    println!("numeric={numeric:03}");
                }
                Selection::Unselected => {
                    println!("class=\"{}\"", flag.element().class());
                    println!("numeric={numeric}");
                }
            }
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_one(country: &CountryRecord, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&CountryInfo::from(country))?);
        return Ok(());
    }
    println!("Country: {} {}", country.flag_emoji(), country.name());
    println!("Localized: {}", country.name_localized());
    println!("Alpha-2: {}", country.alpha2());
    println!("Alpha-3: {}", country.alpha3());
    println!("Top-level domain: .{}", country.top_level_domain());
    println!("ISO numeric: {:03}", country.iso_numeric);
    println!("Phone code: +{}", country.phone_code);
    Ok(())
}

fn print_list<'a>(
    countries: impl Iterator<Item = &'a CountryRecord>,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let infos: Vec<CountryInfo> = countries.map(CountryInfo::from).collect();
        println!("{}", serde_json::to_string_pretty(&infos)?);
    } else {
        for c in countries {
            println!("{c}");
        }
    }
    Ok(())
}
