//! colcast Masked-Data Examples
//!
//! This example demonstrates missing-data handling:
//! - Masked buffer inputs in both flavors
//! - Temporal columns and the `NAT` sentinel
//! - Wrapper extraction

use ndarray::Array1;

use colcast::prelude::*;

fn main() -> Result<(), ConstructError> {
    println!("{}", "=".repeat(72));
    println!("colcast Masked-Data Examples");
    println!("{}", "=".repeat(72));
    println!();

    example_1_masked_buffers()?;
    example_2_temporal()?;
    example_3_wrappers()?;

    Ok(())
}

/// Example 1: Masked buffers
/// A value buffer paired with a validity mask (true = missing)
fn example_1_masked_buffers() -> Result<(), ConstructError> {
    println!("Example 1: Masked buffers");
    println!("{}", "-".repeat(72));

    let input = MaskedInput::new(
        RawArray::Int64(Array1::from(vec![10_i64, 20, 30]).into_dyn()),
        Array1::from(vec![false, true, false]).into_dyn(),
    );

    // The masked flavor keeps the element type behind the mask.
    let masked = sanitize_masked_array(
        input.clone(),
        &SanitizeOptions {
            nullable: true,
            ..SanitizeOptions::default()
        },
    )?;
    println!(
        "masked flavor -> {} ({} missing)",
        masked.dtype(),
        masked.null_count()
    );

    // The dense flavor upcasts to a NaN-filled float buffer.
    let dense = sanitize_masked_array(input, &SanitizeOptions::default())?;
    println!("dense flavor  -> {}", dense.dtype());

    println!();
    Ok(())
}

/// Example 2: Temporal columns
/// Raw epoch offsets wrap into nanosecond extension arrays
fn example_2_temporal() -> Result<(), ConstructError> {
    println!("Example 2: Temporal columns");
    println!("{}", "-".repeat(72));

    let raw = RawArray::Datetime(
        Array1::from(vec![1_700_000_000_i64, NAT, 1_700_000_060]).into_dyn(),
        TimeUnit::Seconds,
    );
    let wrapped = Array::new().build(raw)?;
    println!(
        "epoch seconds -> {} ({} missing)",
        wrapped.dtype(),
        wrapped.null_count()
    );

    let spans = Array::new().build(vec![
        Scalar::timedelta(250, TimeUnit::Milliseconds),
        Scalar::Null,
    ])?;
    println!("durations     -> {}", spans.dtype());

    println!();
    Ok(())
}

/// Example 3: Wrapper extraction
/// Columns and indexes unwrap before sanitization
fn example_3_wrappers() -> Result<(), ConstructError> {
    println!("Example 3: Wrapper extraction");
    println!("{}", "-".repeat(72));

    let column = Column::named(
        "price",
        CanonicalArray::Float64(Array1::from(vec![9.99, 19.99])),
    );
    let values = Array::new().dense().build(column)?;
    println!("column        -> {} of len {}", values.dtype(), values.len());

    let index = IndexArray::Range(RangeSpec::new(0, 1_000, 10)?);
    let keys = Array::new().dense().build(index)?;
    println!("range index   -> {} of len {}", keys.dtype(), keys.len());

    println!();
    Ok(())
}
