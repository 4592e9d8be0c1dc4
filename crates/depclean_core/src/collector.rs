use ignore::WalkBuilder;
use log::{debug, trace, warn};
use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

pub struct CollectorConfig {
    pub root: PathBuf,
    /// Sub-directories of `root` searched recursively
    pub directories: Vec<String>,
    /// Extensions without the leading dot
    pub extensions: Vec<String>,
}

/// Split a comma-separated option value, dropping blanks.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().trim_start_matches('.').trim_end_matches('/'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Top-level files of `root` plus every file below each configured
/// sub-directory whose extension is configured. Sorted, without duplicates.
pub fn collect_source_files(cfg: &CollectorConfig) -> Vec<PathBuf> {
    debug!("Collecting source files");
    let root = &cfg.root;
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();

    debug!("Collecting top-level files from root: {}", root.display());
    walk_into(root, Some(1), cfg, &mut files);

    for dir in &cfg.directories {
        let base = root.join(dir);
        if !base.is_dir() {
            debug!("Skipping missing directory: {}", base.display());
            continue;
        }
        debug!("Walking directory tree: {}", base.display());
        walk_into(&base, None, cfg, &mut files);
    }

    debug!("Collected {} source files", files.len());
    files.into_iter().collect()
}

fn walk_into(
    base: &Path,
    max_depth: Option<usize>,
    cfg: &CollectorConfig,
    files: &mut BTreeSet<PathBuf>,
) {
    // Ignore files are not consulted: build output such as `dist` is often
    // git-ignored yet may be asked for explicitly.
    let walker =
        WalkBuilder::new(base).standard_filters(false).hidden(true).max_depth(max_depth).build();

    for res in walker {
        let dent = match res {
            Ok(dent) => dent,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", base.display(), e);
                continue;
            }
        };
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        if let Some(ext) = p.extension().and_then(|e| e.to_str())
            && cfg.extensions.iter().any(|wanted| wanted == ext)
        {
            trace!("Found source file: {}", p.display());
            files.insert(p.to_path_buf());
        }
    }
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

    fn config(root: &Path, directories: &str, extensions: &str) -> CollectorConfig {
        CollectorConfig {
            root: root.to_path_buf(),
            directories: split_list(directories),
            extensions: split_list(extensions),
        }
    }

    fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("src,lib"), vec!["src", "lib"]);
        assert_eq!(split_list(" ts , .tsx,,"), vec!["ts", "tsx"]);
        assert_eq!(split_list("dist/"), vec!["dist"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_collects_top_level_and_configured_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "index.js", "");
        create_test_file(root, "src/a.ts", "");
        create_test_file(root, "src/nested/deep/b.tsx", "");
        create_test_file(root, "lib/c.jsx", "");
        create_test_file(root, "other/d.ts", "");
        create_test_file(root, "src/readme.md", "");

        let files = collect_source_files(&config(root, "src,lib", "ts,js,tsx,jsx"));
        assert_eq!(
            relative(root, &files),
            vec!["index.js", "lib/c.jsx", "src/a.ts", "src/nested/deep/b.tsx"]
        );
    }

    #[test]
    fn test_top_level_is_not_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "config.js", "");
        create_test_file(root, "scripts/build.js", "");

        let files = collect_source_files(&config(root, "src", "js"));
        assert_eq!(relative(root, &files), vec!["config.js"]);
    }

    #[test]
    fn test_extension_filter() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "src/a.ts", "");
        create_test_file(root, "src/b.tsx", "");
        create_test_file(root, "src/c.js", "");

        let files = collect_source_files(&config(root, "src", "ts"));
        assert_eq!(relative(root, &files), vec!["src/a.ts"]);
    }

    #[test]
    fn test_missing_directories_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "dist/index.js", "");

        let files = collect_source_files(&config(root, "dist,a,b", "js"));
        assert_eq!(relative(root, &files), vec!["dist/index.js"]);
    }

    #[test]
    fn test_overlapping_directories_are_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "src/util/x.js", "");

        let files = collect_source_files(&config(root, "src,src/util", "js"));
        assert_eq!(relative(root, &files), vec!["src/util/x.js"]);
    }

    #[test]
    fn test_hidden_entries_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "src/.cache/x.js", "");
        create_test_file(root, "src/.eslintrc.js", "");
        create_test_file(root, "src/y.js", "");

        let files = collect_source_files(&config(root, "src", "js"));
        assert_eq!(relative(root, &files), vec!["src/y.js"]);
    }

    #[test]
    fn test_gitignored_output_is_scanned() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join(".git")).unwrap();
        create_test_file(root, ".gitignore", "dist\n");
        create_test_file(root, "dist/bundle.js", "");

        let files = collect_source_files(&config(root, "dist", "js"));
        assert_eq!(relative(root, &files), vec!["dist/bundle.js"]);
    }
}
