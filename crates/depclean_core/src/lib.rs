//! Core utilities for depclean tools.
//!
//! This crate provides shared functionality for checking the dependencies of
//! JavaScript/TypeScript projects, including:
//! - Extracting module specifiers from source text with line rules
//! - Normalizing specifiers to package names and dropping Node built-ins
//! - Collecting source files from a project
//! - Reading `package.json` manifests
//! - Inspecting installed `@types/*` packages (header parsing, unmangling)

mod collector;
mod constants;
mod error;
mod header;
mod manifest;
mod package_name;
mod parser;
mod resolver;
mod types;
mod types_package;

// Re-export public API
pub use collector::{CollectorConfig, collect_source_files, split_list};
pub use constants::{
    BUILTIN_MODULES, DEFAULT_DIRECTORIES, DEFAULT_EXTENSIONS, IMPLICIT_PACKAGES, MANIFEST_FILE,
    TYPES_PREFIX,
};
pub use error::{HeaderError, ScanError};
pub use header::{Contributor, Header, parse_header};
pub use manifest::{Manifest, manifest_path, read_manifest};
pub use package_name::{detect_packages, is_builtin, package_name_from_specifier};
pub use parser::{RULES, extract_specifiers, specifiers_for, specifiers_in_line};
pub use resolver::resolve_package_manifest;
pub use types::{Quote, SpecKind, Specifier};
pub use types_package::{
    TypesPackageRecord, inspect_types_package, target_package, unmangle_scoped_package,
};
