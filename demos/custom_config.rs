use chrono::{TimeZone, Utc};
use snowid::{layout, SnowIDConfig, SnowIDError, SnowIDGenerator};

fn main() -> Result<(), SnowIDError> {
    // Custom epoch and coordinates
    let epoch = Utc
        .with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default();
    let config = SnowIDConfig::builder()
        .datacenter_id(7)?
        .machine_id(21)?
        .epoch(epoch)
        .build();

    let generator = SnowIDGenerator::with_config(config);

    println!("Generator configuration:");
    println!("  Datacenter ID: {} (of {})", generator.datacenter_id(), layout::MAX_DATACENTER_ID);
    println!("  Machine ID: {} (of {})", generator.machine_id(), layout::MAX_MACHINE_ID);
    println!("  Epoch: {}", generator.epoch());
    println!("  Max sequence per ms: {}", layout::MAX_SEQUENCE);

    // Out of range coordinates are rejected
    if let Err(e) = SnowIDConfig::builder().machine_id(32) {
        println!("\nRejected machine 32: {e}");
    }

    // Generate and analyze an ID
    let id = generator.generate()?;
    println!("\nGenerated ID: {id}");
    println!("Components:");
    println!("  Timestamp: {} ms since epoch", id.timestamp());
    println!("  Datacenter ID: {}", id.datacenter_id());
    println!("  Machine ID: {}", id.machine_id());
    println!("  Sequence: {}", id.sequence());
    println!("  Created at: {}", id.datetime());

    Ok(())
}
