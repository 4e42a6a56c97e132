//! colcast Construction Examples
//!
//! This example demonstrates the core construction flows:
//! - Inference over heterogeneous values
//! - Explicit dtype requests with checked casts
//! - Scalar broadcast
//! - Lazy ranges
//! - The dense vs masked inference flavors

use colcast::prelude::*;

fn main() -> Result<(), ConstructError> {
    println!("{}", "=".repeat(72));
    println!("colcast Construction Examples");
    println!("{}", "=".repeat(72));
    println!();

    example_1_inference()?;
    example_2_explicit_dtype()?;
    example_3_scalar_broadcast()?;
    example_4_ranges()?;
    example_5_flavors()?;

    Ok(())
}

/// Example 1: Inference
/// The smallest dtype that can hold every value, including the missing ones
fn example_1_inference() -> Result<(), ConstructError> {
    println!("Example 1: Inference");
    println!("{}", "-".repeat(72));

    let ints = Array::new().build(vec![1_i64, 2, 3])?;
    println!("integers           -> {}", ints.dtype());

    let holes = Array::new().build(vec![Some(1_i64), None, Some(3)])?;
    println!(
        "integers + missing -> {} ({} missing)",
        holes.dtype(),
        holes.null_count()
    );

    let mixed = Array::new().build(vec![Scalar::Int(1), Scalar::Float(2.5)])?;
    println!("int + float        -> {}", mixed.dtype());

    let strings = Array::new().build(vec!["a", "b", "c"])?;
    println!("strings            -> {}", strings.dtype());

    println!();
    Ok(())
}

/// Example 2: Explicit dtypes
/// Requests bypass inference; every cast is checked
fn example_2_explicit_dtype() -> Result<(), ConstructError> {
    println!("Example 2: Explicit dtypes");
    println!("{}", "-".repeat(72));

    let floats_as_ints = Array::new().dtype(DType::Int64).build(vec![1.0_f64, 2.0])?;
    println!("1.0, 2.0 as int64  -> {}", floats_as_ints.dtype());

    // A non-equivalent float is rejected, not truncated.
    let err = Array::new().dtype(DType::Int64).build(vec![1.5_f64]);
    println!("1.5 as int64       -> {}", err.unwrap_err());

    let formatted = Array::new().dtype(DType::Utf8).build(vec![1_i64, 2])?;
    println!(
        "1, 2 as utf8       -> {} (first = {:?})",
        formatted.dtype(),
        formatted.scalar_at(0).to_string()
    );

    println!();
    Ok(())
}

/// Example 3: Scalar broadcast
/// A single value fills a column of the requested length
fn example_3_scalar_broadcast() -> Result<(), ConstructError> {
    println!("Example 3: Scalar broadcast");
    println!("{}", "-".repeat(72));

    let fives = Array::new().dense().length(4).build(5_i64)?;
    println!("5 x 4              -> {} of len {}", fives.dtype(), fives.len());

    let missing = Array::new().length(3).build(Scalar::Null)?;
    println!(
        "null x 3           -> {} ({} missing)",
        missing.dtype(),
        missing.null_count()
    );

    println!();
    Ok(())
}

/// Example 4: Lazy ranges
/// Ranges realize to the narrowest integer dtype that fits
fn example_4_ranges() -> Result<(), ConstructError> {
    println!("Example 4: Lazy ranges");
    println!("{}", "-".repeat(72));

    let small = Array::new().dense().build(0_i64..5)?;
    println!("0..5               -> {} of len {}", small.dtype(), small.len());

    let wide = RangeSpec::new(i128::from(i64::MAX), i128::from(i64::MAX) + 3, 1)?;
    let realized = range_to_ndarray(&wide)?;
    println!("beyond i64         -> {}", realized.dtype());

    println!();
    Ok(())
}

/// Example 5: Dense vs masked flavors
/// The same data, two missing-value policies
fn example_5_flavors() -> Result<(), ConstructError> {
    println!("Example 5: Dense vs masked flavors");
    println!("{}", "-".repeat(72));

    let data = vec![Some(1_i64), None, Some(3)];

    let masked = Array::new().build(data.clone())?;
    println!("masked flavor      -> {}", masked.dtype());

    let dense = Array::new().dense().build(data)?;
    println!("dense flavor       -> {}", dense.dtype());

    println!();
    Ok(())
}
