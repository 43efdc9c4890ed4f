use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Maps `.../{year}/{month}/{_}/{slug}/{file}` to `{year}-{month}-{slug}.md`.
///
/// Only the last five components are looked at; the one between month and
/// slug is ignored.
pub fn output_name(input: impl AsRef<Path>) -> Result<PathBuf> {
    let input = input.as_ref();
    let parts = input
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>();

    let n = parts.len();
    if n < 5 {
        return Err(Error::PathTooShort(input.to_path_buf()));
    }
    let (year, month, slug) = (&parts[n - 5], &parts[n - 4], &parts[n - 2]);
    Ok(PathBuf::from(format!("{year}-{month}-{slug}.md")))
}
