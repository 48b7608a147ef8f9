//! Configuration file loading for folio
//!
//! Priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./folio.toml` or `./.folio.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/folio/config.toml`
//! 4. Fallback: `~/.config/folio/config.toml`
//! 5. Default values

mod file_config;
pub mod loader;

pub use file_config::{FileCellConfig, FileConfig, FileContactConfig, FileLayoutConfig, FileSplashConfig};
pub use loader::ConfigLoader;
