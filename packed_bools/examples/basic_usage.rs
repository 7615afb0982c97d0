use packed_bools::{BitArrayError, PackedBitArray};

fn main() {
    println!("=== Packed Bools Examples ===\n");

    // Example 1: Checked and unchecked access
    if let Err(e) = example_access() {
        println!("  error: {}", e);
    }

    // Example 2: Resizing
    let _ = example_resize();

    // Example 3: Memory comparison
    let _ = example_memory_savings();
}

fn example_access() -> Result<(), BitArrayError> {
    println!("Example 1: Seat reservations");

    let mut seats = PackedBitArray::new(12)?;
    seats.set(0, true);
    seats.set(5, true);
    seats.set_safe(11, true)?;

    println!("  Seats: {}", seats);
    println!("  Seat 5 taken: {}", seats.get(5));
    println!("  Seat 12: {:?}", seats.get_safe(12));
    println!(
        "  Free seats: {:?}",
        seats
            .map(|taken, i, _| (!taken).then_some(i))
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
    );
    println!();

    Ok(())
}

fn example_resize() -> Result<(), BitArrayError> {
    println!("Example 2: Growing and shrinking");

    let mut flags = PackedBitArray::from_string("10000001")?;
    flags.resize(12)?;
    println!("  Grown:  {}", flags);
    flags.resize(4)?;
    println!("  Shrunk: {}", flags);
    println!();

    Ok(())
}

fn example_memory_savings() -> Result<(), BitArrayError> {
    println!("Example 3: Memory savings comparison");

    let count = 1_000_000;

    let standard_bytes = count * core::mem::size_of::<bool>();

    let mut packed = PackedBitArray::new(count)?;
    for i in 0..count {
        packed.set(i, true);
    }
    let packed_bytes = packed.as_raw_bytes().len();

    let savings = 100.0 * (1.0 - (packed_bytes as f64 / standard_bytes as f64));

    println!("  Storing {} booleans:", count);
    println!("  Vec<bool>: {} bytes", standard_bytes);
    println!("  Packed:    {} bytes", packed_bytes);
    println!("  Savings:   {:.1}%", savings);

    Ok(())
}
