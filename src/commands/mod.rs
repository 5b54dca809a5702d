mod filter;

pub use filter::{FilterOptions, filter, render_filtered, write_filtered};
