use log::trace;
use path_clean::clean;
use std::path::{Path, PathBuf};

use crate::constants::MANIFEST_FILE;

/// Locate the installed `package.json` of `pkg`, Node style: try
/// `node_modules/<pkg>` in `start_dir`, then in each ancestor up to the
/// filesystem root.
pub fn resolve_package_manifest(start_dir: &Path, pkg: &str) -> Option<PathBuf> {
    trace!("Walking up from {:?} to find node_modules for '{}'", start_dir, pkg);
    let start = clean(start_dir);
    let mut current_dir = start.as_path();

    loop {
        let candidate = current_dir.join("node_modules").join(pkg).join(MANIFEST_FILE);
        trace!("Checking for package manifest at: {:?}", candidate);
        if candidate.is_file() {
            return Some(candidate);
        }

        current_dir = current_dir.parent()?;
    }
}

/// Resolve a path declared inside a package relative to the package directory.
pub fn resolve_in_package(package_dir: &Path, declared: &str) -> PathBuf {
    clean(package_dir.join(declared.trim_start_matches("./")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    #[test]
    fn test_resolves_in_start_dir() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let expected = create_test_file(root, "node_modules/@types/lodash/package.json", "{}");

        let resolved = resolve_package_manifest(root, "@types/lodash").unwrap();
        assert_eq!(resolved, clean(expected));
    }

    #[test]
    fn test_resolves_from_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "node_modules/@types/node/package.json", "{}");
        let nested = root.join("packages").join("app");
        fs::create_dir_all(&nested).unwrap();

        let resolved = resolve_package_manifest(&nested, "@types/node");
        assert!(resolved.is_some());
        assert!(resolved.unwrap().ends_with("node_modules/@types/node/package.json"));
    }

    #[test]
    fn test_nearest_install_wins() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "node_modules/@types/react/package.json", "{}");
        let nearest = create_test_file(root, "app/node_modules/@types/react/package.json", "{}");

        let resolved = resolve_package_manifest(&root.join("app"), "@types/react").unwrap();
        assert_eq!(resolved, clean(nearest));
    }

    #[test]
    fn test_directory_without_manifest_is_unresolved() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("node_modules/@types/ghost-pkg-for-tests")).unwrap();

        assert_eq!(resolve_package_manifest(root, "@types/ghost-pkg-for-tests"), None);
    }

    #[test]
    fn test_resolve_in_package() {
        let dir = Path::new("/nm/@types/foo");
        assert_eq!(
            resolve_in_package(dir, "./dist/index.d.ts"),
            PathBuf::from("/nm/@types/foo/dist/index.d.ts")
        );
        assert_eq!(
            resolve_in_package(dir, "types/../index.d.ts"),
            PathBuf::from("/nm/@types/foo/index.d.ts")
        );
    }
}
