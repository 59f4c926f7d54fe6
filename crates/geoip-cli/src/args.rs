use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI arguments for geoip-cli
#[derive(Debug, Parser)]
#[command(
    name = "geoip-cli",
    version,
    about = "Inspect, query and build MaxMind DB geolocation databases"
)]
pub struct CliArgs {
    /// Path to the .mmdb (or .mmdb.gz) database
    #[arg(long = "db", env = "GEOIP_DB", default_value = "data/city.mmdb", global = true)]
    pub db: PathBuf,

    /// Preferred language for display names; repeat for fallbacks (e.g. --locale de --locale en)
    #[arg(short = 'l', long = "locale", global = true)]
    pub locales: Vec<String>,

    /// Validate the file layout before accepting the database
    #[arg(long, global = true)]
    pub strict: bool,

    /// Log at debug level (RUST_LOG still applies otherwise)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the database type, its capabilities and layout
    Info,

    /// Run one typed query and print the record as JSON
    Lookup {
        /// IPv4 or IPv6 address
        ip: String,

        /// Record category to query
        #[arg(short, long, value_enum, default_value_t = Kind::City)]
        kind: Kind,
    },

    /// Print the country/city/ISO/timezone summary for an address
    Summary {
        /// IPv4 or IPv6 address
        ip: String,
    },

    /// Build a database from a JSON list of {"network": ..., "data": {...}}
    Build {
        /// JSON input file
        #[arg(short, long)]
        input: PathBuf,

        /// Output path
        #[arg(short, long)]
        out: PathBuf,

        /// Declared database type, e.g. GeoIP2-City or GeoLite2-ASN
        #[arg(short = 't', long)]
        database_type: String,

        /// Search tree address family (4 or 6)
        #[arg(long, value_enum, default_value_t = Family::V6)]
        ip_version: Family,

        /// Record size in bits (24, 28 or 32)
        #[arg(long, default_value_t = 28)]
        record_size: u16,

        /// Gzip-compress the output
        #[arg(long)]
        gzip: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    City,
    Country,
    Enterprise,
    Asn,
    Isp,
    Domain,
    ConnectionType,
    AnonymousIp,
}

/// Address family of a built search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Family {
    #[value(name = "4")]
    V4,
    #[value(name = "6")]
    V6,
}
