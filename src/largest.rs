use crate::cli::{LargestArgs, OutputFormat};
use crate::error::{AppError, Result};

/// Return the largest element of `items` by a single forward scan.
///
/// The running maximum starts at the first element and is replaced only by a
/// strictly greater one, so the first occurrence wins on ties. The `Ord`
/// bound restricts callers to types with a total order; types without one
/// (e.g. `f64`) are rejected at compile time.
pub fn find_largest<T: Ord>(items: &[T]) -> Result<&T> {
    let (first, rest) = items.split_first().ok_or_else(empty_input)?;

    let mut largest = first;
    for item in rest {
        if item > largest {
            largest = item;
        }
    }

    Ok(largest)
}

/// Same contract as [`find_largest`], via the standard iterator reduction.
/// Kept as an independent implementation to cross-validate the manual scan.
pub fn find_largest_builtin<T: Ord>(items: &[T]) -> Result<&T> {
    items.iter().max().ok_or_else(empty_input)
}

fn empty_input() -> AppError {
    AppError::EmptyInput("cannot take the largest of an empty sequence".into())
}

pub fn run(args: LargestArgs) -> Result<()> {
    // Coerce the tokens to a single orderable type: all-integer input is
    // compared numerically, anything else lexicographically.
    let numbers: Option<Vec<i64>> = args
        .values
        .iter()
        .map(|v| v.trim().parse().ok())
        .collect();

    let largest = match &numbers {
        Some(nums) => cross_checked(nums)?.to_string(),
        None => cross_checked(&args.values)?.clone(),
    };

    match args.format {
        OutputFormat::Text => println!("{largest}"),
        OutputFormat::Json => {
            let out = serde_json::json!({
                "count": args.values.len(),
                "numeric": numbers.is_some(),
                "largest": largest,
            });
            println!("{out}");
        }
    }

    Ok(())
}

fn cross_checked<T: Ord + std::fmt::Debug>(items: &[T]) -> Result<&T> {
    let scanned = find_largest(items)?;
    let reduced = find_largest_builtin(items)?;
    if scanned != reduced {
        return Err(anyhow::anyhow!(
            "implementations disagree: scan found {scanned:?}, reduction found {reduced:?}"
        )
        .into());
    }
    Ok(scanned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_largest_integer() {
        assert_eq!(*find_largest(&[1, 3, 2]).unwrap(), 3);
        assert_eq!(*find_largest(&[7]).unwrap(), 7);
    }

    #[test]
    fn all_negative_input() {
        assert_eq!(*find_largest(&[-5, -2, -3]).unwrap(), -2);
    }

    #[test]
    fn lexicographic_strings() {
        assert_eq!(*find_largest(&["a", "z", "m"]).unwrap(), "z");
    }

    /// Orders (and equates) on `key` only, so equal elements stay
    /// distinguishable by `label` and the tie-break is observable.
    #[derive(Debug)]
    struct Keyed {
        key: i32,
        label: &'static str,
    }

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.key.cmp(&other.key)
        }
    }

    #[test]
    fn ties_keep_the_first_occurrence() {
        let items = [
            Keyed { key: 3, label: "first" },
            Keyed { key: 1, label: "low" },
            Keyed { key: 3, label: "second" },
        ];
        assert_eq!(find_largest(&items).unwrap().label, "first");
    }

    #[test]
    fn empty_input_is_an_empty_input_error() {
        assert!(matches!(
            find_largest::<i32>(&[]),
            Err(AppError::EmptyInput(_))
        ));
        assert!(matches!(
            find_largest_builtin::<i32>(&[]),
            Err(AppError::EmptyInput(_))
        ));
    }

    #[test]
    fn scan_agrees_with_reduction() {
        let samples: [&[i32]; 4] = [&[7], &[2, 9, 5], &[-1, -2, -3], &[5, 5, 1]];
        for s in samples {
            assert_eq!(find_largest(s).unwrap(), find_largest_builtin(s).unwrap());
        }
    }
}
