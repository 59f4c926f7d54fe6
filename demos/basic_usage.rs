//! Basic usage example for geoip-rs
//!
//! This example demonstrates how to:
//! - Build a small City database and open it from disk
//! - Inspect what the database can answer
//! - Run typed queries and tell empty records from populated ones
//! - Use the pooled lookup service

use geoip_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== GeoIP-RS Basic Usage Example ===\n");

    // Write a sample database next to the system temp files
    let path = std::env::temp_dir().join("geoip-rs-basic-usage.mmdb");
    samples::database(DatabaseVariant::City)?.write_to_path(&path, CompressionMode::None)?;
    println!("Sample database written to {}\n", path.display());

    // Example 1: Open and inspect
    println!("--- Example 1: Open and inspect ---");
    let reader = Reader::open(&path)?;
    let info = reader.info();
    println!("Type: {}", info.database_type);
    println!("Variant: {:?}", info.variant);
    println!("Capabilities: {:?}", info.capabilities);
    println!("Nodes: {} ({}-bit records, IPv{})", info.node_count, info.record_size, info.ip_version);
    println!();

    // Example 2: City lookup
    println!("--- Example 2: City lookup for {} ---", samples::LONDON);
    let city = reader.city(samples::LONDON.parse().expect("valid address"))?;
    println!("City: {}", city.city.names.english().unwrap_or("-"));
    println!("Country: {} ({})", city.country.names.english().unwrap_or("-"), city.country.iso_code);
    if let Some((lat, lon)) = city.location.coordinates() {
        println!("Coordinates: {lat}, {lon}");
    }
    println!("Timezone: {}", city.location.time_zone);
    for sub in &city.subdivisions {
        println!("Subdivision: {} ({})", sub.names.english().unwrap_or("-"), sub.iso_code);
    }
    println!();

    // Example 3: Absent and partially populated addresses
    println!("--- Example 3: has_data and coordinates ---");
    for ip in [samples::ABSENT, samples::EMPTY_RECORD, samples::PARTIAL_LOCATION] {
        let city = reader.city(ip.parse().expect("valid address"))?;
        println!(
            "{ip:>15}: has_data={} coordinates={:?}",
            city.has_data(),
            city.location.coordinates()
        );
    }
    println!();
    reader.close()?;

    // Example 4: The service with German names and English fallback
    println!("--- Example 4: Lookup service ---");
    let options = ReaderOptions::new().locales(["de", "en"]);
    let service = GeoIpService::open(&path, options)?;
    for ip in [samples::LONDON, samples::BOXFORD] {
        let mut data = service.acquire();
        let summary = data.lookup(ip)?;
        println!(
            "{ip:>15}: {} / {} / {} / {}",
            summary.country, summary.city, summary.iso_code, summary.timezone
        );
    }
    service.close()?;

    std::fs::remove_file(&path)?;
    Ok(())
}
