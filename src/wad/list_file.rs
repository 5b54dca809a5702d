use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use crate::runtime::Runtime;

/// Read the package names listed in a blacklist or priority file.
///
/// Names are separated by any whitespace. A missing path, or one that is not
/// a regular file, yields no names. Read failures on an existing file are
/// returned as errors.
#[tracing::instrument(skip(runtime))]
pub fn read_name_list<R: Runtime>(runtime: &R, path: Option<&Path>) -> Result<Vec<String>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };

    if !runtime.is_file(path) {
        debug!("List file {:?} is not a regular file, ignoring", path);
        return Ok(Vec::new());
    }

    let content = runtime
        .read_to_string(path)
        .with_context(|| format!("Failed to read list file {}", path.display()))?;

    Ok(content.split_whitespace().map(str::to_string).collect())
}
