//! The original exercise scripts each ended in a demonstration block that
//! printed worked examples and asserted a few expected results. This module
//! reproduces those blocks as one smoke test behind `kata demo`.

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::{factorial, largest, reverse};

pub fn run(config: &AppConfig) -> Result<()> {
    reverse_section(config)?;
    println!();
    factorial_section(config)?;
    println!();
    largest_section()?;
    println!("\nAll checks passed.");
    Ok(())
}

fn check(cond: bool, what: &str) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(anyhow::anyhow!("self-check failed: {what}").into())
    }
}

fn reverse_section(config: &AppConfig) -> Result<()> {
    check(reverse::reverse("abc") == "cba", "reverse(\"abc\") == \"cba\"")?;
    check(reverse::reverse("") == "", "reverse(\"\") == \"\"")?;
    check(reverse::reverse(&123) == "321", "reverse(123) == \"321\"")?;

    println!("Demo: reverse outputs");
    for sample in &config.demo.reverse_samples {
        println!(
            "Original: {:?} -> Reversed: {:?}",
            sample,
            reverse::reverse(sample.as_str())
        );
    }
    Ok(())
}

fn factorial_section(config: &AppConfig) -> Result<()> {
    let limit = config.factorial.recursion_limit;

    println!("Testing factorial implementations...");
    for &n in &config.demo.factorial_samples {
        let rec = factorial::recursive_within(n, limit)?;
        let itr = factorial::iterative(n)?;
        println!("{n}! -> recursive: {rec}, iterative: {itr}");
        check(rec == itr, "recursive and iterative agree")?;
    }

    check(
        matches!(factorial::recursive(-1), Err(AppError::Value(_))),
        "recursive rejects -1 with a value error",
    )?;
    println!("Recursive correctly rejected -1");

    check(
        matches!(factorial::iterative(-2), Err(AppError::Value(_))),
        "iterative rejects -2 with a value error",
    )?;
    println!("Iterative correctly rejected -2");

    check(
        matches!(factorial::parse_input("3.5"), Err(AppError::Type(_))),
        "non-integer input is a type error",
    )?;
    println!("Non-integer input correctly rejected");

    Ok(())
}

fn largest_section() -> Result<()> {
    check(*largest::find_largest(&[1, 3, 2])? == 3, "[1, 3, 2] -> 3")?;
    check(
        *largest::find_largest(&[-5, -2, -3])? == -2,
        "[-5, -2, -3] -> -2",
    )?;
    check(
        *largest::find_largest(&["a", "z", "m"])? == "z",
        "[\"a\", \"z\", \"m\"] -> \"z\"",
    )?;

    // Compare the scan against the builtin reduction
    let samples: [&[i64]; 3] = [&[7], &[2, 9, 5], &[-1, -2, -3]];
    for s in samples {
        check(
            largest::find_largest(s)? == largest::find_largest_builtin(s)?,
            "scan agrees with the builtin reduction",
        )?;
    }

    check(
        matches!(
            largest::find_largest::<i64>(&[]),
            Err(AppError::EmptyInput(_))
        ),
        "empty input is rejected",
    )?;

    println!("All self-checks passed for find_largest.");
    Ok(())
}
