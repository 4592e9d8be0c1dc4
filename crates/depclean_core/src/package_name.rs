//! Reduce raw specifiers to root package names.
//!
//! - `my-package/lad/dee/dah` -> `my-package`
//! - `@ms/my-package/sub` -> `@ms/my-package`
//! - `lodash.get` -> `lodash.get`
//! - `./local`, `/abs`, `node:fs` -> no package

use regex::Regex;
use std::{collections::BTreeSet, sync::OnceLock};

use crate::constants::BUILTIN_MODULES;

fn package_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:@[a-z0-9!_-]+/)?[a-z0-9!_-][a-z0-9!_.-]*").expect("package regex")
    })
}

/// Root package name of `specifier`, or `None` for relative, absolute and
/// protocol specifiers.
pub fn package_name_from_specifier(specifier: &str) -> Option<&str> {
    let m = package_regex().find(specifier)?;
    if specifier[m.end()..].starts_with(':') {
        return None;
    }
    Some(m.as_str())
}

pub fn is_builtin(name: &str) -> bool {
    BUILTIN_MODULES.contains(&name)
}

/// Normalize every specifier and drop built-in modules. The result is sorted
/// and de-duplicated.
pub fn detect_packages<'a, I>(specifiers: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    specifiers
        .into_iter()
        .filter_map(package_name_from_specifier)
        .filter(|name| !is_builtin(name))
        .map(str::to_string)
        .collect()
}
