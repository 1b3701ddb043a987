use std::path::Path;

use crate::error::{Bin2cError, Bin2cResult};

pub const REPLACEMENT_CHAR: char = '_';

/// Derives the array name from the file name of `path`, with the last
/// extension stripped and the result passed through [`sanitize`].
pub fn identifier_from_path(path: &Path) -> Bin2cResult<String> {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| {
            Bin2cError::InvalidArgument(format!(
                "{} has no file name to derive an identifier from",
                path.display()
            ))
        })?;

    Ok(sanitize(&stem))
}

/// Replaces every character outside `[A-Za-z0-9_]` with `_`. A leading
/// digit gets a `_` prefix so the result is a valid C symbol.
pub fn sanitize(name: &str) -> String {
    let mut identifier = String::with_capacity(name.len() + 1);
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        identifier.push(REPLACEMENT_CHAR);
    }

    for c in name.chars() {
        if is_allowed(c) {
            identifier.push(c);
        } else {
            identifier.push(REPLACEMENT_CHAR);
        }
    }

    identifier
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
