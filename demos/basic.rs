use snowid::{SnowID, SnowIDError, SnowIDExtractor, SnowIDGenerator, DEFAULT_EPOCH};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SnowIDError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Create a generator for datacenter 1, machine 2
    let generator = SnowIDGenerator::new(1, 2, *DEFAULT_EPOCH)?;

    // Generate some IDs
    let id1 = generator.generate()?;
    let id2 = generator.generate()?;
    let id3 = generator.generate()?;

    println!("Generated IDs (sorted by time):");
    print_id(&id1, &generator);
    print_id(&id2, &generator);
    print_id(&id3, &generator);

    // Or extract components from the raw value
    let raw = id3.to_u64();
    println!("\nComponents of ID3 (extracted individually):");
    println!("  Timestamp: {} ms since epoch", SnowIDExtractor::timestamp(raw));
    println!("  Datacenter ID: {}", SnowIDExtractor::datacenter(raw));
    println!("  Machine ID: {}", SnowIDExtractor::machine(raw));
    println!("  Sequence: {}", SnowIDExtractor::sequence(raw));
    println!("  Binary: {}", id3.to_binary_string());

    Ok(())
}

fn print_id(id: &SnowID, generator: &SnowIDGenerator) {
    println!(
        "  ID: {id}, Timestamp: {}, Human date: {}, Datacenter: {}, Machine: {}, Sequence: {}",
        id.timestamp(),
        generator.datetime(id),
        id.datacenter_id(),
        id.machine_id(),
        id.sequence()
    );
}
