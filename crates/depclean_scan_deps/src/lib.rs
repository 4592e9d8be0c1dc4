//! Missing and unused dependency detection for JavaScript/TypeScript projects.
//!
//! This crate scans a project's sources for imported packages and compares
//! them with the dependencies declared in its `package.json`, reporting
//! packages that are imported without being declared (phantom dependencies)
//! and packages that are declared without being imported.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use depclean_scan_deps::{Config, run_scan_deps};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: Some(std::path::PathBuf::from("/path/to/project")),
//!     directory: "src,lib".to_string(),
//!     extension: "ts,js,tsx,jsx".to_string(),
//!     json: false,
//!     all: false,
//! };
//!
//! let check = run_scan_deps(cfg.clone())?;
//!
//! // Use buffered output for better performance
//! let mut stdout = BufWriter::new(std::io::stdout());
//! depclean_scan_deps::print_report(&mut stdout, &check.result, cfg.all)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod checker;
mod classifier;
mod config;
mod reporter;
mod types;

// Re-export public API
pub use checker::run_scan_deps;
pub use classifier::classify;
pub use config::Config;
pub use reporter::{print_json, print_report};
pub use types::{CheckResult, ScanResult};
