//! Error handling example for geoip-rs
//!
//! This example demonstrates the failure kinds a reader reports and which of
//! them leave the reader usable.

use geoip_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== GeoIP-RS Error Handling Example ===\n");

    // Example 1: Missing file
    println!("--- Example 1: Opening a missing file ---");
    match Reader::open("does/not/exist.mmdb") {
        Ok(_) => println!("  unexpectedly opened"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 2: Unknown database type
    println!("--- Example 2: Unknown database type ---");
    let mut builder = MmdbBuilder::new("Acme-Weather", IpVersion::V4);
    builder.insert_cidr("10.0.0.0/8", &Value::map([("forecast", "rain")]))?;
    match Reader::from_bytes(builder.build()?) {
        Ok(_) => println!("  unexpectedly opened"),
        Err(GeoIpError::UnknownDatabaseType(name)) => println!("  ✗ no reader for {name:?}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 3: Wrong method for the database
    println!("--- Example 3: Method not supported by the database ---");
    let reader = Reader::from_bytes(samples::database(DatabaseVariant::Asn)?.build()?)?;
    let ip = samples::NETWORK.parse().expect("valid address");
    match reader.city(ip) {
        Ok(_) => println!("  unexpectedly answered"),
        Err(e) if e.is_invalid_method() => println!("  ✗ {e}"),
        Err(e) => return Err(e),
    }
    // The reader is still fine for what it supports
    let asn = reader.asn(ip)?;
    println!(
        "  ✓ ASN still works: AS{} {}",
        asn.autonomous_system_number, asn.autonomous_system_organization
    );
    println!();

    // Example 4: Invalid textual address at the service boundary
    println!("--- Example 4: Invalid address strings ---");
    let service = GeoIpService::from_reader(Reader::from_bytes(
        samples::database(DatabaseVariant::City)?.build()?,
    )?);
    let mut data = LookupData::default();
    for input in ["", "not-an-ip", "300.1.1.1", " 81.2.69.142 "] {
        match service.lookup_ip(input, &mut data) {
            Ok(()) => println!("  ✓ {input:?} -> {}", data.city),
            Err(e) => println!("  ✗ {input:?}: {e}"),
        }
    }
    println!();

    // Example 5: Strict verification of a damaged file
    println!("--- Example 5: Strict verification ---");
    let mut bytes = samples::database(DatabaseVariant::Domain)?.build()?;
    let tree_size = {
        let probe = Reader::from_bytes(bytes.as_slice())?;
        probe.metadata().node_count as usize * probe.metadata().record_size as usize / 4
    };
    bytes[tree_size] = 0xFF;
    match Reader::from_bytes_with(bytes, ReaderOptions::new().strict_verification(true)) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(e) => println!("  ✗ {e}"),
    }

    Ok(())
}
