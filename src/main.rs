use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use wadfilter::commands::{FilterOptions, filter};
use wadfilter::wad::MatchMode;

/// wadfilter - SRB2Kart WAD load list builder
///
/// Scan directories for add-on packages (.pk3, .wad, .kart), drop the ones
/// named in a blacklist file, move the ones named in a priority file to the
/// front, and print the remaining paths on one line.
///
/// Examples:
///   srb2kart -file $(wadfilter --wads-dir ~/.srb2kart/addons --blacklist blacklist.txt)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Directory to scan for WADs (repeat to scan several; later ones win on name clashes)
    #[arg(long = "wads-dir", value_name = "DIR", required = true)]
    pub wads_dirs: Vec<PathBuf>,

    /// File listing WAD names that should not be loaded (also via WADFILTER_BLACKLIST)
    #[arg(long, env = "WADFILTER_BLACKLIST", value_name = "FILE")]
    pub blacklist: Option<PathBuf>,

    /// File listing WAD names to load before all others, in order (also via WADFILTER_LOAD_FIRST)
    #[arg(long = "load-first", env = "WADFILTER_LOAD_FIRST", value_name = "FILE")]
    pub load_first: Option<PathBuf>,

    /// Accept names with a WAD extension anywhere after a dot, e.g. "maps.pk3.bak"
    #[arg(long = "loose-match")]
    pub loose_match: bool,
}

impl Cli {
    fn into_options(self) -> FilterOptions {
        FilterOptions {
            wads_dirs: self.wads_dirs,
            blacklist: self.blacklist,
            load_first: self.load_first,
            match_mode: if self.loose_match {
                MatchMode::Anywhere
            } else {
                MatchMode::Suffix
            },
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = wadfilter::runtime::RealRuntime;

    filter(runtime, &cli.into_options())
}
