use std::fs;
use std::io::{self, Read};

use anyhow::Context;

/// Read input from file path or stdin.
/// - `None` or `Some("-")` reads from stdin
/// - `Some(path)` reads from file
pub fn read_input(file: Option<&str>) -> anyhow::Result<String> {
    match file {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("error reading from stdin")?;
            Ok(buffer)
        }
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("error reading file {path}"))
        }
    }
}

/// Helper to get display path for error messages
pub fn display_path(file: Option<&str>) -> &str {
    file.unwrap_or("<stdin>")
}
