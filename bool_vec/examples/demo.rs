use bool_vec::{BoolVec, BoolVecError};

fn main() {
    env_logger::init();

    println!("=== Bool Vec Examples ===\n");

    // Example 1: The walkthrough
    if let Err(e) = example_walkthrough() {
        eprintln!("walkthrough failed: {}", e);
    }

    // Example 2: Handles
    if let Err(e) = example_handles() {
        eprintln!("handles failed: {}", e);
    }

    // Example 3: Memory comparison
    example_memory_savings();
}

fn example_walkthrough() -> Result<(), BoolVecError> {
    println!("Example 1: Push, erase, insert and set");

    let mut bits = BoolVec::new();
    bits.push(true);
    for _ in 0..7 {
        bits.push(false);
    }
    println!("  {}", bits.render());

    println!("  Erase the bit at index 1");
    bits.erase(1)?;
    println!("  {}", bits.render());

    println!("  Insert 1 at the front");
    bits.insert(0, true)?;
    println!("  {}", bits.render());

    println!("  Clear the front bit");
    bits.set_zero(0)?;
    println!("  {}", bits.render());

    bits.push(true);
    println!("  {}", bits.render());

    for _ in 0..8 {
        bits.push(true);
    }
    println!("  {}", bits.render());
    println!();

    Ok(())
}

fn example_handles() -> Result<(), BoolVecError> {
    println!("Example 2: Writing through a handle");

    let mut bits: BoolVec = [false, true, false].into_iter().collect();

    let source = bits.get(1)?;
    let mut target = bits.get_mut(2)?;
    target.assign(source);
    println!("  bit 2 after assign: {}", target.get());

    println!("  {}", bits.render());

    match bits.get(3) {
        Ok(_) => println!("  unexpected bit at index 3"),
        Err(e) => println!("  get(3): {}", e),
    }
    println!();

    Ok(())
}

fn example_memory_savings() {
    println!("Example 3: Memory savings comparison");

    let count = 10_000;

    let standard: Vec<bool> = (0..count).map(|i| i % 3 == 0).collect();
    let standard_bytes = standard.len() * size_of::<bool>();

    let packed: BoolVec = standard.iter().copied().collect();
    let packed_bytes = packed.byte_len();

    let savings = 100.0 * (1.0 - (packed_bytes as f64 / standard_bytes as f64));

    println!("  Storing {} booleans:", count);
    println!("  Vec<bool>: {} bytes", standard_bytes);
    println!("  BoolVec:   {} bytes", packed_bytes);
    println!("  Savings:   {:.1}%", savings);
}
