//! Catalog sources — built-in data and TOML file override

pub mod builtin;
pub mod file;
