use std::fmt::Display;

use crate::cli::{OutputFormat, ReverseArgs};
use crate::error::Result;

/// Reverse the textual representation of any displayable value.
///
/// The value is first rendered through its `Display` impl (numbers become
/// their decimal digit sequence), then the sequence of Unicode scalar values
/// is reversed. The empty string is a fixed point, and reversing twice
/// returns the original text.
pub fn reverse<T: Display + ?Sized>(value: &T) -> String {
    value.to_string().chars().rev().collect()
}

pub fn run(args: ReverseArgs) -> Result<()> {
    let reversed = reverse(args.value.as_str());

    match args.format {
        OutputFormat::Text => println!("{reversed}"),
        OutputFormat::Json => {
            let out = serde_json::json!({
                "input": args.value,
                "reversed": reversed,
            });
            println!("{out}");
        }
    }

    Ok(())
}
