use chrono::{DateTime, Utc};
use snowid::{codec, DecodeError, ErrorKind, SnowIDError};

const BINARY_ID: &str = "0110010001000010101011010010000010000001000110111110000000000110";

fn main() -> Result<(), SnowIDError> {
    let epoch = DateTime::<Utc>::UNIX_EPOCH;

    let id = codec::decode_binary(BINARY_ID, epoch)?;
    println!("Binary:  {}", codec::encode_binary(&id));
    println!("Decimal: {}", codec::encode_decimal(&id));
    println!("Datacenter ID: {}", id.datacenter_id());
    println!("Machine ID: {}", id.machine_id());
    println!("Sequence: {}", id.sequence());
    println!("Created at: {}", id.datetime().format("%Y-%m-%dT%H:%M:%SZ"));

    // Parsing back from decimal gives the same ID
    let again = codec::decode_decimal(&id.to_decimal_string(), epoch)?;
    assert_eq!(again, id);

    println!("\nRejected inputs:");
    for input in ["12345abc", "-1", "99999999999999999999999", "0102"] {
        let result = if input.len() == 4 {
            codec::decode_binary(input, epoch)
        } else {
            codec::decode_decimal(input, epoch)
        };
        if let Err(e) = result {
            println!("  {input:>24}: {e} ({:?})", describe(&e));
        }
    }

    Ok(())
}

fn describe(err: &DecodeError) -> ErrorKind {
    SnowIDError::from(*err).kind()
}
