use num_bigint::BigUint;
use num_traits::One;

use crate::cli::{FactorialArgs, Method, OutputFormat};
use crate::config::AppConfig;
use crate::error::{AppError, Result};

/// Depth cap for the recursive algorithm. One stack frame per decrement, so
/// this bounds stack growth; the iterative algorithm has no such cap.
pub const DEFAULT_RECURSION_LIMIT: u64 = 10_000;

/// Compute n! recursively: 0! = 1! = 1, n! = n · (n−1)!.
///
/// Fails with a value error for negative `n` and with a resource error when
/// `n` exceeds [`DEFAULT_RECURSION_LIMIT`].
pub fn recursive(n: i64) -> Result<BigUint> {
    recursive_within(n, DEFAULT_RECURSION_LIMIT)
}

/// Same as [`recursive`], with an explicit recursion depth limit.
pub fn recursive_within(n: i64, limit: u64) -> Result<BigUint> {
    let n = validate(n)?;
    if n > limit {
        return Err(AppError::Resource(format!(
            "recursion depth {n} exceeds limit {limit}; use the iterative algorithm"
        )));
    }
    Ok(product_recursive(n))
}

/// Compute n! iteratively as the product of 2..=n, in constant auxiliary
/// space. The empty range for n <= 1 leaves the multiplicative identity.
pub fn iterative(n: i64) -> Result<BigUint> {
    let n = validate(n)?;
    Ok((2..=n).fold(BigUint::one(), |acc, i| acc * i))
}

/// Parse a command-line token as the factorial argument. A non-integer token
/// such as "3.5" is a type error, not a value error.
pub fn parse_input(text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| AppError::Type(format!("factorial needs an integer, got {text:?}")))
}

fn validate(n: i64) -> Result<u64> {
    if n < 0 {
        return Err(AppError::Value(format!(
            "factorial is undefined for negative input: {n}"
        )));
    }
    Ok(n as u64)
}

fn product_recursive(n: u64) -> BigUint {
    if n <= 1 {
        BigUint::one()
    } else {
        BigUint::from(n) * product_recursive(n - 1)
    }
}

pub fn run(config: &AppConfig, args: FactorialArgs) -> Result<()> {
    let n = parse_input(&args.n)?;
    let limit = config.factorial.recursion_limit;

    let value = match args.method {
        Method::Recursive => recursive_within(n, limit)?,
        Method::Iterative => iterative(n)?,
        Method::Both => {
            let rec = recursive_within(n, limit)?;
            let itr = iterative(n)?;
            if rec != itr {
                return Err(anyhow::anyhow!(
                    "implementations disagree for {n}!: recursive {rec}, iterative {itr}"
                )
                .into());
            }
            tracing::debug!("recursive and iterative agree for {n}!");
            itr
        }
    };

    match args.format {
        OutputFormat::Text => println!("{value}"),
        OutputFormat::Json => {
            let out = serde_json::json!({
                "n": n,
                "method": args.method.as_str(),
                "value": value.to_string(),
            });
            println!("{out}");
        }
    }

    Ok(())
}
