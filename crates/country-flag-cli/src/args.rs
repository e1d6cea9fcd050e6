use clap::{Parser, Subcommand, ValueEnum};
use country_flag_core::IndexField;

/// CLI arguments for country-flag
#[derive(Debug, Parser)]
#[command(
    name = "country-flag",
    version,
    about = "CLI for querying the embedded country table and flag classes"
)]
pub struct CliArgs {
    /// Print results as JSON info objects instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the table
    Stats,

    /// List all countries in table order
    Countries,

    /// Lookup a country by alpha-2, alpha-3, top-level domain or numeric code
    Country {
        /// Any code (e.g. DE, USA, uk, 276)
        code: String,
    },

    /// Lookup a country through one specific index
    Lookup {
        /// Which field to look up by
        #[arg(long = "by", value_enum)]
        by: Field,
        /// Key to look up (case-insensitive)
        key: String,
    },

    /// List countries sharing a calling code
    Phone {
        /// Calling code, with or without a leading '+'
        code: String,
    },

    /// Search English and Spanish names (accent-insensitive)
    Search {
        /// Substring to search
        query: String,
    },

    /// Pick random countries
    Random {
        /// How many to pick
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: usize,
    },

    /// Show the flag class a selector would set for a code
    Flag {
        /// Any code (e.g. DE, USA, uk, 276)
        code: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Field {
    Numeric,
    Alpha2,
    Alpha3,
    Tld,
}

impl From<Field> for IndexField {
    fn from(f: Field) -> Self {
        match f {
            Field::Numeric => IndexField::Numeric,
            Field::Alpha2 => IndexField::Alpha2,
            Field::Alpha3 => IndexField::Alpha3,
            Field::Tld => IndexField::TopLevelDomain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lookup_with_field() {
        let args = CliArgs::try_parse_from(["country-flag", "lookup", "--by", "tld", "UK"]).unwrap();
        match args.command {
            Commands::Lookup { by, key } => {
                assert_eq!(IndexField::from(by), IndexField::TopLevelDomain);
                assert_eq!(key, "UK");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn json_flag_is_global() {
        let args = CliArgs::try_parse_from(["country-flag", "random", "-n", "3", "--json"]).unwrap();
        assert!(args.json);
        assert!(matches!(args.command, Commands::Random { count: 3 }));
    }

    #[test]
    fn rejects_unknown_field() {
        assert!(CliArgs::try_parse_from(["country-flag", "lookup", "--by", "name", "x"]).is_err());
    }
}
