//! Inspection of installed `@types/*` packages.
//!
//! For a declared `@types/X` this finds its `package.json`, the entry
//! declaration file and its header, and the npm package the declarations
//! target. Scoped targets are encoded with `__`: `@types/babel__core`
//! describes `@babel/core`.

use log::{debug, trace};
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    constants::{DEFAULT_TYPES_ENTRY, TYPES_PREFIX},
    error::{Result, ScanError},
    header::{Header, parse_header},
    resolver::{resolve_in_package, resolve_package_manifest},
};

const SCOPE_SEPARATOR: &str = "__";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypesPackageRecord {
    /// Declared name, e.g. `@types/babel__core`
    pub name: String,
    pub manifest_path: PathBuf,
    pub entry_path: PathBuf,
    /// `None` when the manifest already marks the package non-npm
    pub header: Option<Header>,
    pub non_npm: bool,
    /// Package the declarations describe, e.g. `@babel/core`
    pub target: String,
}

/// `scope__name` -> `@scope/name`; `None` for unscoped names.
pub fn unmangle_scoped_package(mangled: &str) -> Option<String> {
    mangled
        .contains(SCOPE_SEPARATOR)
        .then(|| format!("@{}", mangled.replacen(SCOPE_SEPARATOR, "/", 1)))
}

/// Package targeted by a types package name.
pub fn target_package(types_name: &str) -> String {
    let mangled = types_name.strip_prefix(TYPES_PREFIX).unwrap_or(types_name);
    unmangle_scoped_package(mangled).unwrap_or_else(|| mangled.to_string())
}

/// Inspect the installed copy of `name`, looked up from `root`.
///
/// `Ok(None)` means the package is not installed.
pub fn inspect_types_package(root: &Path, name: &str) -> Result<Option<TypesPackageRecord>> {
    let Some(manifest_path) = resolve_package_manifest(root, name) else {
        debug!("{} is not installed", name);
        return Ok(None);
    };
    trace!("Found {} manifest at {}", name, manifest_path.display());

    let content = fs::read_to_string(&manifest_path)
        .map_err(|source| ScanError::Io { path: manifest_path.clone(), source })?;
    let manifest: Value = serde_json::from_str(&content)
        .map_err(|source| ScanError::Json { path: manifest_path.clone(), source })?;

    let package_dir = manifest_path.parent().unwrap_or(root);
    let entry_path = entry_declaration(package_dir, &manifest);
    let target = target_package(name);

    // Current DefinitelyTyped releases carry the flag in package.json.
    if manifest.get("nonNpm").and_then(Value::as_bool) == Some(true) {
        debug!("{} is marked nonNpm in its manifest", name);
        return Ok(Some(TypesPackageRecord {
            name: name.to_string(),
            manifest_path,
            entry_path,
            header: None,
            non_npm: true,
            target,
        }));
    }

    trace!("Reading {} entry declaration {}", name, entry_path.display());
    let text = fs::read_to_string(&entry_path)
        .map_err(|source| ScanError::Io { path: entry_path.clone(), source })?;
    let header = parse_header(&text)
        .map_err(|source| ScanError::Header { path: entry_path.clone(), source })?;
    debug!(
        "{} describes {} {}.{} (projects: {}; by: {}; TypeScript {})",
        name,
        header.library_name,
        header.library_major,
        header.library_minor,
        header.projects.join(", "),
        header.contributors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "),
        header.typescript_version.as_deref().unwrap_or("any"),
    );

    Ok(Some(TypesPackageRecord {
        name: name.to_string(),
        manifest_path,
        entry_path,
        non_npm: header.non_npm,
        header: Some(header),
        target,
    }))
}

/// First existing `types`/`typings` target, else `index.d.ts`.
fn entry_declaration(package_dir: &Path, manifest: &Value) -> PathBuf {
    for field in ["types", "typings"] {
        if let Some(declared) = manifest.get(field).and_then(Value::as_str)
            && !declared.is_empty()
        {
            let with_suffix = if declared.ends_with(".d.ts") {
                declared.to_string()
            } else {
                format!("{declared}.d.ts")
            };
            let candidate = resolve_in_package(package_dir, &with_suffix);
            if candidate.is_file() {
                return candidate;
            }
            trace!("Declared {} '{}' does not exist", field, candidate.display());
        }
    }
    package_dir.join(DEFAULT_TYPES_ENTRY)
}
