//! WAD discovery and load-order filtering
//!
//! This module scans directories for SRB2Kart add-on packages (`.pk3`,
//! `.wad`, `.kart`), drops the ones named in a blacklist file and moves the
//! ones named in a priority file to the front of the load order.

mod catalog;
mod entries;
mod list_file;
mod pattern;

pub use catalog::{ListedWads, WadCatalog};
pub use entries::WadMap;
pub use list_file::read_name_list;
pub use pattern::{MatchMode, WAD_EXTENSIONS};
