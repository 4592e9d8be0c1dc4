use depclean_core::{IMPLICIT_PACKAGES, Manifest, TYPES_PREFIX, TypesPackageRecord};
use log::{debug, trace};
use std::collections::BTreeSet;

use crate::types::ScanResult;

pub(crate) fn is_implicit(name: &str) -> bool {
    IMPLICIT_PACKAGES.contains(&name)
}

/// Compare detected packages against the manifest.
///
/// Missing packages are detected ones declared in neither dependency
/// section. Unused packages are plain `dependencies` (never
/// `devDependencies`) that are neither detected nor implicit, followed by
/// the `@types/*` packages whose target is neither detected nor implicit.
/// Non-npm types packages are never unused.
pub fn classify(
    detected: &BTreeSet<String>,
    manifest: &Manifest,
    types_packages: &[TypesPackageRecord],
) -> ScanResult {
    let missing: Vec<String> =
        detected.iter().filter(|name| !manifest.is_declared(name)).cloned().collect();
    debug!("Found {} missing dependencies", missing.len());

    let mut unused: Vec<String> = manifest
        .dependencies
        .iter()
        .filter(|name| {
            !detected.contains(*name) && !is_implicit(name) && !name.starts_with(TYPES_PREFIX)
        })
        .cloned()
        .collect();

    for record in types_packages {
        if record.non_npm {
            match &record.header {
                Some(header) => debug!(
                    "{} is a non-npm package definition for {}",
                    record.name, header.library_name
                ),
                None => debug!("{} is marked non-npm in its manifest", record.name),
            }
            continue;
        }
        if detected.contains(&record.target) || is_implicit(&record.target) {
            trace!("{} is used through {}", record.name, record.target);
            continue;
        }
        unused.push(record.name.clone());
    }
    debug!("Found {} unused dependencies", unused.len());

    ScanResult {
        detected_dependencies: detected.iter().cloned().collect(),
        missing_dependencies: missing,
        unused_dependencies: unused,
    }
}
