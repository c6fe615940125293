use std::{io::Read, path::Path};

use crate::rejections::{AppError, ResultExt};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Read the whole input from `path`, or from stdin when no path (or `-`) is given.
pub fn read_input(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).reject_input("failed to read input file")
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .reject_input("failed to read stdin")?;
            Ok(buf)
        }
    }
}
