use log::{debug, trace, warn};
use serde_json::Value;
use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    constants::{MANIFEST_FILE, TYPES_PREFIX},
    error::{Result, ScanError},
};

/// Declared dependency names of a `package.json`, in declaration order.
/// Versions are not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

impl Manifest {
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        let v: Value = serde_json::from_str(content)?;
        Ok(Self {
            dependencies: dependency_names(&v, "dependencies"),
            dev_dependencies: dependency_names(&v, "devDependencies"),
        })
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.dependencies.iter().chain(&self.dev_dependencies).any(|declared| declared == name)
    }

    /// `@types/*` names from `dependencies` then `devDependencies`, each once.
    pub fn types_packages(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.dependencies
            .iter()
            .chain(&self.dev_dependencies)
            .map(String::as_str)
            .filter(|name| name.starts_with(TYPES_PREFIX))
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

fn dependency_names(v: &Value, field: &str) -> Vec<String> {
    match v.get(field).and_then(|d| d.as_object()) {
        Some(obj) => obj.keys().cloned().collect(),
        None => {
            trace!("No '{}' object in manifest", field);
            Vec::new()
        }
    }
}

pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_FILE)
}

/// Read the project manifest at `root`.
///
/// A missing file is fatal. Unparsable JSON is logged and treated as a
/// manifest that declares nothing.
pub fn read_manifest(root: &Path) -> Result<Manifest> {
    let path = manifest_path(root);
    if !path.is_file() {
        return Err(ScanError::ManifestNotFound(path));
    }
    debug!("Reading manifest: {}", path.display());

    let content =
        fs::read_to_string(&path).map_err(|source| ScanError::Io { path: path.clone(), source })?;

    match Manifest::parse(&content) {
        Ok(manifest) => {
            debug!(
                "Manifest declares {} dependencies and {} devDependencies",
                manifest.dependencies.len(),
                manifest.dev_dependencies.len()
            );
            Ok(manifest)
        }
        Err(e) => {
            warn!("Failed to parse {}: {}", path.display(), e);
            Ok(Manifest::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_both_sections() {
        let m = Manifest::parse(
            r#"{
  "name": "demo",
  "dependencies": { "react": "^18.0.0", "lodash": "4.17.21" },
  "devDependencies": { "jest": "29", "@types/react": "18" }
}"#,
        )
        .unwrap();
        assert_eq!(m.dependencies, vec!["react", "lodash"]);
        assert_eq!(m.dev_dependencies, vec!["jest", "@types/react"]);
        assert!(m.is_declared("@types/react"));
        assert!(!m.is_declared("vue"));
    }

    #[test]
    fn test_parse_without_sections() {
        let m = Manifest::parse(r#"{ "name": "empty" }"#).unwrap();
        assert!(m.dependencies.is_empty());
        assert!(m.dev_dependencies.is_empty());
    }

    #[test]
    fn test_parse_ignores_non_object_sections() {
        let m = Manifest::parse(r#"{ "dependencies": ["a"], "devDependencies": null }"#).unwrap();
        assert_eq!(m, Manifest::default());
    }

    #[test]
    fn test_types_packages_order_and_dedup() {
        let m = Manifest::parse(
            r#"{
  "dependencies": { "@types/b": "1", "react": "1", "@types/a": "1" },
  "devDependencies": { "@types/a": "1", "@types/c": "1" }
}"#,
        )
        .unwrap();
        assert_eq!(m.types_packages(), vec!["@types/b", "@types/a", "@types/c"]);
    }

    #[test]
    fn test_read_manifest_missing_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_manifest(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ScanError::ManifestNotFound(_)));
        assert!(err.to_string().contains("package.json"));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_read_manifest_invalid_json_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("package.json"), "{ not json").unwrap();
        let m = read_manifest(temp_dir.path()).unwrap();
        assert_eq!(m, Manifest::default());
    }

    #[test]
    fn test_read_manifest() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("package.json"),
            r#"{ "dependencies": { "left-pad": "1.0.0" } }"#,
        )
        .unwrap();
        let m = read_manifest(temp_dir.path()).unwrap();
        assert_eq!(m.dependencies, vec!["left-pad"]);
    }
}
