use log::{debug, trace};
use regex::Regex;
use std::{fs, path::Path, sync::OnceLock};

use crate::{
    error::{Result, ScanError},
    types::{Quote, SpecKind, Specifier},
};

/// Line rules in the order they are applied. Each rule contributes at most one
/// specifier per line.
pub const RULES: &[(SpecKind, Quote)] = &[
    (SpecKind::Require, Quote::Single),
    (SpecKind::Require, Quote::Double),
    (SpecKind::RequireEnsure, Quote::Single),
    (SpecKind::RequireEnsure, Quote::Double),
    (SpecKind::RequireResolve, Quote::Single),
    (SpecKind::RequireResolve, Quote::Double),
    (SpecKind::SystemImport, Quote::Single),
    (SpecKind::SystemImport, Quote::Double),
    (SpecKind::ImportFrom, Quote::Single),
    (SpecKind::ImportFrom, Quote::Double),
    (SpecKind::SideEffectImport, Quote::Single),
    (SpecKind::SideEffectImport, Quote::Double),
    (SpecKind::DynamicImport, Quote::Single),
    (SpecKind::DynamicImport, Quote::Double),
    (SpecKind::ReferenceTypes, Quote::Single),
    (SpecKind::ReferenceTypes, Quote::Double),
];

impl SpecKind {
    /// Regex source for this rule; capture group 1 is the specifier.
    pub fn pattern(self, quote: Quote) -> String {
        let q = quote.as_char();
        let lit = format!("{q}([^{q}]+){q}");
        match self {
            SpecKind::Require => format!(r"\brequire\s*\(\s*{lit}\s*\)"),
            SpecKind::RequireEnsure => format!(r"\brequire\.ensure\s*\(\s*{lit}\s*\)"),
            SpecKind::RequireResolve => format!(r"\brequire\.resolve\s*\(\s*{lit}\s*\)"),
            SpecKind::SystemImport => format!(r"\bSystem\.import\s*\(\s*{lit}\s*\)"),
            SpecKind::ImportFrom => format!(r"\bfrom\s*{lit}"),
            SpecKind::SideEffectImport => format!(r"\bimport\s*{lit}\s*;"),
            // No look-behind in `regex`: a leading non-dot char (or line start) keeps
            // `foo.import('x')` out.
            SpecKind::DynamicImport => format!(r"(?:^|[^.])\bimport\({lit}\)"),
            SpecKind::ReferenceTypes => {
                format!(r"///\s*<\s*reference\s+types\s*=\s*{lit}\s*/>")
            }
        }
    }
}

fn compiled_rules() -> &'static [(SpecKind, Regex)] {
    static COMPILED: OnceLock<Vec<(SpecKind, Regex)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        RULES
            .iter()
            .map(|&(kind, quote)| {
                let re = Regex::new(&kind.pattern(quote)).expect("specifier rule must compile");
                (kind, re)
            })
            .collect()
    })
}

/// Apply every rule to a single line, keeping the first match of each.
pub fn specifiers_in_line(line: &str) -> Vec<Specifier> {
    compiled_rules()
        .iter()
        .filter_map(|(kind, re)| {
            let caps = re.captures(line)?;
            let request = caps.get(1)?.as_str();
            trace!("Rule {:?} matched '{}'", kind, request);
            Some(Specifier { request: request.to_string(), kind: *kind })
        })
        .collect()
}

/// Extract all specifiers from source text, line by line.
pub fn extract_specifiers(src: &str) -> Vec<Specifier> {
    src.lines().flat_map(specifiers_in_line).collect()
}

/// Read a file and extract its specifiers.
pub fn specifiers_for(file: &Path) -> Result<Vec<Specifier>> {
    trace!("Scanning file for specifiers: {}", file.display());
    let src = fs::read_to_string(file)
        .map_err(|source| ScanError::Io { path: file.to_path_buf(), source })?;

    let specs = extract_specifiers(&src);
    debug!("Found {} specifiers in {}", specs.len(), file.display());
    Ok(specs)
}
