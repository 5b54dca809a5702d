use anyhow::Result;
use log::debug;
use std::io::Write;
use std::path::PathBuf;

use crate::{
    runtime::Runtime,
    wad::{MatchMode, WadCatalog},
};

/// Inputs for a single filter run.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Directories to scan, in order. Later directories win on name clashes.
    pub wads_dirs: Vec<PathBuf>,
    pub blacklist: Option<PathBuf>,
    pub load_first: Option<PathBuf>,
    pub match_mode: MatchMode,
}

/// Scan, filter and print the load list as one line on stdout.
#[tracing::instrument(skip(runtime))]
pub fn filter<R: Runtime>(runtime: R, options: &FilterOptions) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_filtered(&runtime, options, &mut stdout)
}

/// Same as [`filter`], writing the line to `out`.
pub fn write_filtered<R: Runtime, W: Write>(
    runtime: &R,
    options: &FilterOptions,
    out: &mut W,
) -> Result<()> {
    let line = render_filtered(runtime, options)?;
    writeln!(out, "{}", line)?;
    Ok(())
}

/// Build a catalog from `options` and render its space-separated path list.
#[tracing::instrument(skip(runtime))]
pub fn render_filtered<R: Runtime>(runtime: &R, options: &FilterOptions) -> Result<String> {
    let mut catalog = WadCatalog::new(runtime)
        .with_match_mode(options.match_mode)
        .with_blacklist(options.blacklist.clone())
        .with_priority(options.load_first.clone());

    for dir in &options.wads_dirs {
        catalog.scan(dir)?;
    }
    debug!("{} WAD(s) available before filtering", catalog.len());

    let rendered = catalog.render()?;

    for (name, path) in catalog.excluded().iter() {
        match path {
            Some(path) => debug!("Blacklisted {} ({})", name, path.display()),
            None => debug!("Blacklisted {} but no such WAD was found", name),
        }
    }
    for (name, path) in catalog.promoted().iter() {
        match path {
            Some(path) => debug!("Loading {} first ({})", name, path.display()),
            None => debug!("Priority lists {} but no such WAD was found", name),
        }
    }

    Ok(rendered)
}
