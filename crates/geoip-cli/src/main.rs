//! geoip-cli — Command-line interface for geoip-core
//!
//! Usage examples
//! --------------
//!
//! - Show what a database is and what it can answer
//!   $ geoip-cli --db GeoIP2-City.mmdb info
//!
//! - Run a typed query (prints the record and its has_data flag)
//!   $ geoip-cli --db GeoLite2-ASN.mmdb lookup 1.128.0.1 --kind asn
//!
//! - Print the flattened summary, names in German with English fallback
//!   $ geoip-cli --locale de --locale en summary 81.2.69.142
//!
//! - Build a database from JSON
//!   $ geoip-cli build --input nets.json --out test.mmdb --database-type GeoIP2-Domain
//!
//! The database path defaults to `data/city.mmdb` and can be set with
//! `--db` or the `GEOIP_DB` environment variable.
mod args;

use std::net::IpAddr;

use anyhow::Context;
use clap::Parser;
use geoip_core::{GeoIpService, HasData, Reader, ReaderOptions, Record};
use log::LevelFilter;
use serde::Serialize;
use serde_json::json;

use crate::args::{CliArgs, Commands, Kind};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logger(args.verbose);

    let options = ReaderOptions::new()
        .strict_verification(args.strict)
        .locales(args.locales.iter().cloned());

    match args.command {
        Commands::Info => {
            let reader = open(&args, options)?;
            print_json(&reader.info())?;
            reader.close()?;
        }

        Commands::Lookup { ref ip, kind } => {
            let reader = open(&args, options)?;
            let addr = parse_ip(ip)?;
            print_json(&lookup(&reader, addr, kind)?)?;
            reader.close()?;
        }

        Commands::Summary { ref ip } => {
            let service = GeoIpService::open(&args.db, options)
                .with_context(|| format!("opening {}", args.db.display()))?;
            let mut data = service.acquire();
            print_json(&*data.lookup(ip)?)?;
            drop(data);
            service.close()?;
        }

        Commands::Build {
            ref input,
            ref out,
            ref database_type,
            ip_version,
            record_size,
            gzip,
        } => {
            build::run(input, out, database_type, ip_version, record_size, gzip)?;
            println!("wrote {}", out.display());
        }
    }

    Ok(())
}

fn init_logger(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    // A second initialization (tests) is harmless.
    let _ = builder.try_init();
}

fn open(args: &CliArgs, options: ReaderOptions) -> anyhow::Result<Reader> {
    Reader::open_with(&args.db, options).with_context(|| format!("opening {}", args.db.display()))
}

fn parse_ip(ip: &str) -> anyhow::Result<IpAddr> {
    ip.trim()
        .parse()
        .map_err(|_| geoip_core::GeoIpError::InvalidIp(ip.to_string()))
        .with_context(|| format!("parsing {ip:?}"))
}

fn lookup(reader: &Reader, ip: IpAddr, kind: Kind) -> anyhow::Result<serde_json::Value> {
    fn typed<T: Record + Serialize>(reader: &Reader, ip: IpAddr) -> anyhow::Result<serde_json::Value> {
        let record: T = reader.lookup(ip)?;
        Ok(json!({
            "ip": ip.to_string(),
            "kind": T::CAPABILITY.method_name(),
            "has_data": record.has_data(),
            "record": record,
        }))
    }

    use geoip_core::model;
    match kind {
        Kind::City => typed::<model::City>(reader, ip),
        Kind::Country => typed::<model::Country>(reader, ip),
        Kind::Enterprise => typed::<model::Enterprise>(reader, ip),
        Kind::Asn => typed::<model::Asn>(reader, ip),
        Kind::Isp => typed::<model::Isp>(reader, ip),
        Kind::Domain => typed::<model::Domain>(reader, ip),
        Kind::ConnectionType => typed::<model::ConnectionType>(reader, ip),
        Kind::AnonymousIp => typed::<model::AnonymousIp>(reader, ip),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(all(feature = "builder", feature = "json"))]
mod build {
    use std::path::Path;

    use anyhow::Context;
    use geoip_core::builder::{CompressionMode, IpVersion, MmdbBuilder, Value};
    use serde::Deserialize;

    use crate::args::Family;

    /// One entry of the JSON input: `{"network": "1.2.3.0/24", "data": {...}}`.
    #[derive(Debug, Deserialize)]
    pub(crate) struct Entry {
        pub network: String,
        pub data: serde_json::Value,
    }

    pub(crate) fn builder_from_entries(
        entries: Vec<Entry>,
        database_type: &str,
        family: Family,
        record_size: u16,
    ) -> anyhow::Result<MmdbBuilder> {
        let ip_version = match family {
            Family::V4 => IpVersion::V4,
            Family::V6 => IpVersion::V6,
        };
        let mut builder = MmdbBuilder::new(database_type, ip_version).record_size(record_size);
        for entry in entries {
            let value = Value::try_from(entry.data)
                .with_context(|| format!("data for {}", entry.network))?;
            builder.insert_cidr(&entry.network, &value)?;
        }
        Ok(builder)
    }

    pub(crate) fn run(
        input: &Path,
        out: &Path,
        database_type: &str,
        family: Family,
        record_size: u16,
        gzip: bool,
    ) -> anyhow::Result<()> {
        let text = std::fs::read_to_string(input)
            .with_context(|| format!("reading {}", input.display()))?;
        let entries: Vec<Entry> = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", input.display()))?;
        log::debug!("{} networks from {}", entries.len(), input.display());

        let builder = builder_from_entries(entries, database_type, family, record_size)?;
        let mode = if gzip {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        };
        builder.write_to_path(out, mode)?;
        Ok(())
    }
}

#[cfg(not(all(feature = "builder", feature = "json")))]
mod build {
    use std::path::Path;

    use crate::args::Family;

    pub(crate) fn run(
        _input: &Path,
        _out: &Path,
        _database_type: &str,
        _family: Family,
        _record_size: u16,
        _gzip: bool,
    ) -> anyhow::Result<()> {
        anyhow::bail!("the build command requires the `builder` and `json` features")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Family;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let args = CliArgs::try_parse_from([
            "geoip-cli", "lookup", "1.2.3.4", "--kind", "anonymous-ip", "--db", "x.mmdb",
            "--locale", "de", "--locale", "en", "--strict",
        ])
        .unwrap();
        assert_eq!(args.db.to_str(), Some("x.mmdb"));
        assert_eq!(args.locales, ["de", "en"]);
        assert!(args.strict);
        match args.command {
            Commands::Lookup { ip, kind } => {
                assert_eq!(ip, "1.2.3.4");
                assert_eq!(kind, Kind::AnonymousIp);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn lookup_kind_defaults_to_city() {
        let args = CliArgs::try_parse_from(["geoip-cli", "lookup", "::1"]).unwrap();
        assert!(matches!(args.command, Commands::Lookup { kind: Kind::City, .. }));
    }

    #[test]
    fn rejects_bad_ip() {
        let err = parse_ip("nope").unwrap_err();
        assert!(format!("{err:#}").contains("invalid IP address"), "{err:#}");
    }

    #[cfg(all(feature = "builder", feature = "json"))]
    #[test]
    fn json_entries_build_a_readable_database() {
        let entries: Vec<build::Entry> = serde_json::from_str(
            r#"[
                {"network": "1.128.0.0/11", "data": {"autonomous_system_number": 1221,
                    "autonomous_system_organization": "Telstra Pty Ltd"}},
                {"network": "2001:db8::/32", "data": {"autonomous_system_number": 64496}}
            ]"#,
        )
        .unwrap();
        let builder = build::builder_from_entries(entries, "GeoLite2-ASN", Family::V6, 24).unwrap();
        let reader = Reader::from_bytes(builder.build().unwrap()).unwrap();

        let value = lookup(&reader, "1.128.0.1".parse().unwrap(), Kind::Asn).unwrap();
        assert_eq!(value["has_data"], true);
        assert_eq!(value["kind"], "ASN");
        assert_eq!(value["record"]["autonomous_system_number"], 1221);

        let value = lookup(&reader, "2001:db8::1".parse().unwrap(), Kind::Asn).unwrap();
        assert_eq!(value["record"]["autonomous_system_number"], 64496);

        let err = lookup(&reader, "1.128.0.1".parse().unwrap(), Kind::City).unwrap_err();
        assert!(err.to_string().contains("does not support"), "{err}");
    }

    #[test]
    fn ip_version_accepts_only_four_or_six() {
        let parse = |version: &str| {
            CliArgs::try_parse_from([
                "geoip-cli", "build", "--input", "in.json", "--out", "out.mmdb",
                "-t", "GeoLite2-ASN", "--ip-version", version,
            ])
        };
        for rejected in ["5", "0", "v4"] {
            assert!(parse(rejected).is_err(), "{rejected}");
        }
        match parse("4").unwrap().command {
            Commands::Build { ip_version, .. } => assert_eq!(ip_version, Family::V4),
            other => panic!("unexpected command {other:?}"),
        }

        let args = CliArgs::try_parse_from([
            "geoip-cli", "build", "--input", "in.json", "--out", "out.mmdb", "-t", "GeoLite2-ASN",
        ])
        .unwrap();
        assert!(matches!(args.command, Commands::Build { ip_version: Family::V6, .. }));
    }
}
