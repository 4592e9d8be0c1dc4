use serde::Serialize;

/// Outcome of a dependency scan, serialized with camelCase keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// Packages imported by the project, sorted
    pub detected_dependencies: Vec<String>,
    /// Imported but not declared in the manifest
    pub missing_dependencies: Vec<String>,
    /// Declared but never imported: plain dependencies first, then `@types/*`
    pub unused_dependencies: Vec<String>,
}

impl ScanResult {
    pub fn has_findings(&self) -> bool {
        !self.missing_dependencies.is_empty() || !self.unused_dependencies.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub result: ScanResult,
    pub files_scanned: usize,
}
