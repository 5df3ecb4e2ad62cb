use fxp_convert::{Conversion, Converter, FixedPointError, OverflowPolicy, convert, formats};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), FixedPointError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fxp_convert=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Fixed-Point Conversion Examples ===\n");

    example_formats()?;
    example_overflow()?;
    example_requantize()?;

    Ok(())
}

fn example_formats() -> Result<(), FixedPointError> {
    println!("Example 1: One value, several formats");

    let x = 5.65236589;
    for (signed, wl, fl) in [(false, 10, 6), (true, 10, 6), (true, 12, 6), (true, 12, 8)] {
        if let Conversion::Converted(value) = convert(x, signed, wl, fl, OverflowPolicy::Wrap)? {
            println!("{}\n", value);
        }
    }
    Ok(())
}

fn example_overflow() -> Result<(), FixedPointError> {
    println!("Example 2: Overflow policies on s8.4");

    for policy in [OverflowPolicy::Wrap, OverflowPolicy::Saturate] {
        for x in [9.0, -9.0, 7.97] {
            if let Some(value) = convert(x, true, 8, 4, policy)?.into_value() {
                println!(
                    "  {:<8} {:>6} -> {:>8} (bin {}, overflow {})",
                    policy, x, value.fxp, value.bin, value.of_flag_bit()
                );
            }
        }
    }
    println!();
    Ok(())
}

fn example_requantize() -> Result<(), FixedPointError> {
    println!("Example 3: Re-quantizing a result");

    let fine = Converter::new(formats::Q4_12, OverflowPolicy::Saturate).convert_scalar(-3.14159265)?;
    println!("{}\n", fine);

    let coarse = Converter::new(formats::Q10_6, OverflowPolicy::Saturate).convert(&fine)?;
    if let Some(value) = coarse.value() {
        println!("{}\n", value);
    }

    let same = Converter::new(formats::Q4_12, OverflowPolicy::Saturate).convert(&fine)?;
    println!("  Same format again: unchanged = {}", same.is_unchanged());
    Ok(())
}
