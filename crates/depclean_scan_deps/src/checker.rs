use anyhow::Result;
use depclean_core::{
    TypesPackageRecord, collect_source_files, detect_packages, inspect_types_package,
    read_manifest, specifiers_for,
};
use log::{debug, info, trace, warn};
use rayon::prelude::*;
use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    thread,
};

use crate::{
    classifier::classify,
    config::Config,
    types::{CheckResult, ScanResult},
};

pub fn run_scan_deps(mut cfg: Config) -> Result<CheckResult> {
    info!("Starting dependency scan");

    cfg.initialize()?;
    let root = cfg.root()?.clone();

    // A missing manifest aborts before any file is read.
    let manifest = read_manifest(&root)?;

    let collector_cfg = cfg.collector_config()?;
    debug!(
        "Collecting source files: directories={:?}, extensions={:?}",
        collector_cfg.directories, collector_cfg.extensions
    );
    let files = collect_source_files(&collector_cfg);
    if files.is_empty() {
        warn!("No source files found under {}", root.display());
    }
    info!("Found {} source files", files.len());

    let specifiers = scan_files(&files);
    debug!("Collected {} distinct specifiers", specifiers.len());

    let detected = detect_packages(specifiers.iter().map(String::as_str));
    info!("Detected {} packages", detected.len());

    let types_packages = inspect_types_packages(&root, &manifest.types_packages());

    let result: ScanResult = classify(&detected, &manifest, &types_packages);
    info!(
        "Dependency scan complete. {} missing, {} unused",
        result.missing_dependencies.len(),
        result.unused_dependencies.len()
    );

    Ok(CheckResult { result, files_scanned: files.len() })
}

/// Extract specifiers from every file in parallel. Each worker fills its own
/// set; the sets are merged in the reduction.
fn scan_files(files: &[PathBuf]) -> BTreeSet<String> {
    files
        .par_iter()
        .map(|file| {
            trace!("Thread {:?} scanning: {}", thread::current().id(), file.display());
            match specifiers_for(file) {
                Ok(specs) => specs
                    .into_iter()
                    .inspect(|s| trace!("{}: {:?} '{}'", file.display(), s.kind, s.request))
                    .map(|s| s.request)
                    .collect::<BTreeSet<_>>(),
                Err(e) => {
                    warn!("Skipping file({}) due to error: {}", file.display(), e);
                    BTreeSet::new()
                }
            }
        })
        .reduce(BTreeSet::new, |mut acc, specs| {
            acc.extend(specs);
            acc
        })
}

/// Inspect each declared `@types/*` package, leaving out the ones that are
/// not installed or cannot be read.
fn inspect_types_packages(root: &Path, names: &[&str]) -> Vec<TypesPackageRecord> {
    names
        .iter()
        .filter_map(|name| match inspect_types_package(root, name) {
            Ok(Some(record)) => {
                trace!(
                    "{} targets {} (manifest {}, entry {})",
                    record.name,
                    record.target,
                    record.manifest_path.display(),
                    record.entry_path.display()
                );
                Some(record)
            }
            Ok(None) => None,
            Err(e) => {
                debug!("Scan of {} failed: {}", name, e);
                None
            }
        })
        .collect()
}
