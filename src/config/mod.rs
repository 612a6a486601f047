//! Settings loading for cmdoc.
//!
//! - Schema definitions in [`settings`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use cmdoc::config::{parse_settings, Settings};
//! use std::path::Path;
//!
//! let settings = parse_settings("preview_lines: 80", Path::new("config.yml")).unwrap();
//! assert_eq!(settings.preview_lines, 80);
//! assert_eq!(settings.match_limit, Settings::default().match_limit);
//! ```
//!
//! # Settings File Location
//!
//! 1. `--config <path>` or `CMDOC_CONFIG` (must exist)
//! 2. `<config dir>/cmdoc/config.yml` (optional)
//! 3. Built-in defaults

pub mod loader;
pub mod settings;

pub use loader::{default_settings_path, load_settings, load_settings_file, parse_settings};
pub use settings::{FuzzySettings, Settings};
