pub mod commands;
pub mod runtime;
pub mod wad;
