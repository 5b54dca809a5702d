use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

use super::entries::WadMap;
use super::list_file::read_name_list;
use super::pattern::MatchMode;

/// Names listed in a blacklist or priority file, mapped to the path they had
/// in the catalog, or `None` when the catalog had no such entry.
pub type ListedWads = WadMap<Option<PathBuf>>;

/// Ordered catalog of available WADs, keyed by file name.
///
/// Built by one or more [`scan`](Self::scan) calls, then filtered with
/// [`exclude`](Self::exclude) and reordered with [`promote`](Self::promote).
/// [`render`](Self::render) runs both passes with the configured list files
/// and joins the surviving paths.
pub struct WadCatalog<'a, R: Runtime> {
    runtime: &'a R,
    match_mode: MatchMode,
    blacklist_file: Option<PathBuf>,
    priority_file: Option<PathBuf>,
    scanned_dirs: Vec<OsString>,
    available: WadMap<PathBuf>,
    excluded: ListedWads,
    promoted: ListedWads,
}

impl<'a, R: Runtime> WadCatalog<'a, R> {
    pub fn new(runtime: &'a R) -> Self {
        Self {
            runtime,
            match_mode: MatchMode::default(),
            blacklist_file: None,
            priority_file: None,
            scanned_dirs: Vec::new(),
            available: WadMap::new(),
            excluded: WadMap::new(),
            promoted: WadMap::new(),
        }
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    /// File consulted by [`render`](Self::render) for names to drop.
    pub fn with_blacklist(mut self, path: Option<PathBuf>) -> Self {
        self.blacklist_file = path;
        self
    }

    /// File consulted by [`render`](Self::render) for names to load first.
    pub fn with_priority(mut self, path: Option<PathBuf>) -> Self {
        self.priority_file = path;
        self
    }

    /// Add every WAD directly inside `dir` to the catalog.
    ///
    /// Returns the entries found by this call. A missing path, a non-directory,
    /// or a path string that was already scanned yields an empty map.
    #[tracing::instrument(skip(self))]
    pub fn scan(&mut self, dir: &Path) -> Result<WadMap<PathBuf>> {
        let mut found = WadMap::new();

        if self.was_scanned(dir) {
            debug!("Directory {:?} already scanned, skipping", dir);
            return Ok(found);
        }
        // Rendered paths must survive the trip through a UTF-8 command line
        if dir.to_str().is_none() {
            warn!("Skipping non UTF-8 directory {:?}", dir);
            return Ok(found);
        }
        if !self.runtime.is_dir(dir) {
            debug!("{:?} is not a directory, skipping", dir);
            return Ok(found);
        }

        let mut children = self
            .runtime
            .read_dir(dir)
            .with_context(|| format!("Failed to scan {}", dir.display()))?;
        // Raw directory order depends on the filesystem
        children.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        for child in children {
            let Some(file_name) = child.file_name() else {
                continue;
            };
            let Some(name) = file_name.to_str() else {
                warn!("Skipping non UTF-8 file name {:?}", child);
                continue;
            };
            if !self.match_mode.matches(name) {
                continue;
            }
            found.insert(name, dir.join(name));
        }

        self.scanned_dirs.push(dir.as_os_str().to_os_string());
        info!("Found {} WAD(s) in {}", found.len(), dir.display());

        for (name, path) in found.iter() {
            if let Some(previous) = self.available.insert(name, path.clone()) {
                debug!("{} overrides {:?} with {:?}", name, previous, path);
            }
        }

        Ok(found)
    }

    /// Remove the WADs named in `list_file` from the catalog.
    ///
    /// Every listed name is returned, with its former path or `None` when it
    /// was not in the catalog, and merged into [`excluded`](Self::excluded).
    #[tracing::instrument(skip(self))]
    pub fn exclude(&mut self, list_file: Option<&Path>) -> Result<ListedWads> {
        let names = read_name_list(self.runtime, list_file)?;
        let removed = self.take_listed(names);

        debug!("Excluded {} name(s)", removed.len());
        merge_record(&mut self.excluded, &removed);
        Ok(removed)
    }

    /// Move the WADs named in `list_file` to the front, in file order.
    ///
    /// Entries not listed keep their relative order behind the promoted ones.
    /// Returns the reordered catalog.
    #[tracing::instrument(skip(self))]
    pub fn promote(&mut self, list_file: Option<&Path>) -> Result<WadMap<PathBuf>> {
        let names = read_name_list(self.runtime, list_file)?;
        let listed = self.take_listed(names);
        merge_record(&mut self.promoted, &listed);

        let mut reordered: WadMap<PathBuf> = listed
            .into_iter()
            .filter_map(|(name, path)| path.map(|p| (name, p)))
            .collect();
        debug!("Promoted {} WAD(s)", reordered.len());

        reordered.extend(std::mem::take(&mut self.available));
        self.available = reordered;
        Ok(self.available.clone())
    }

    /// Apply the blacklist and priority files, then join the surviving paths
    /// with spaces, ready to follow a launcher's `-file` flag.
    #[tracing::instrument(skip(self))]
    pub fn render(&mut self) -> Result<String> {
        let blacklist = self.blacklist_file.clone();
        let priority = self.priority_file.clone();

        self.exclude(blacklist.as_deref())?;
        self.promote(priority.as_deref())?;

        Ok(self
            .available
            .values()
            .map(|path| path.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" "))
    }

    pub fn available(&self) -> &WadMap<PathBuf> {
        &self.available
    }

    /// Everything ever listed in a blacklist file passed to this catalog.
    pub fn excluded(&self) -> &ListedWads {
        &self.excluded
    }

    /// Everything ever listed in a priority file passed to this catalog.
    pub fn promoted(&self) -> &ListedWads {
        &self.promoted
    }

    pub fn scanned_dirs(&self) -> impl Iterator<Item = &Path> {
        self.scanned_dirs.iter().map(Path::new)
    }

    pub fn len(&self) -> usize {
        self.available.len()
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    // Compared as raw strings: "wads" and "wads/" count as different scans.
    fn was_scanned(&self, dir: &Path) -> bool {
        self.scanned_dirs.iter().any(|d| d == dir.as_os_str())
    }

    /// Pull each listed name out of the catalog, keeping file order.
    /// A name repeated in the file keeps its first result.
    fn take_listed(&mut self, names: Vec<String>) -> ListedWads {
        let mut listed = ListedWads::new();
        for name in names {
            if listed.contains(&name) {
                continue;
            }
            let path = self.available.remove(&name);
            if path.is_none() {
                debug!("{} is listed but not available", name);
            }
            listed.insert(name, path);
        }
        listed
    }
}

/// Fold one pass's results into a running record. A known path is never
/// replaced by `None` from a later pass.
fn merge_record(record: &mut ListedWads, pass: &ListedWads) {
    for (name, path) in pass.iter() {
        let known = matches!(record.get(name), Some(Some(_)));
        if path.is_some() || !known {
            record.insert(name, path.clone());
        }
    }
}
