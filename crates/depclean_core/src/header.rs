//! Parser for the comment header DefinitelyTyped puts on declaration files:
//!
//! ```text
//! // Type definitions for non-npm package Node.js 18.11
//! // Project: https://nodejs.org/
//! // Definitions by: Jane Doe <https://github.com/jane>
//! //                 John Roe <https://github.com/john>
//! // Definitions: https://github.com/DefinitelyTyped/DefinitelyTyped
//! // TypeScript Version: 4.1
//! ```

use std::fmt;

use crate::error::HeaderError;

const TITLE_PREFIX: &str = "Type definitions for ";
const NON_NPM_PREFIX: &str = "non-npm package ";
const PROJECT: &str = "Project:";
const DEFINITIONS_BY: &str = "Definitions by:";
const DEFINITIONS: &str = "Definitions:";
const TYPESCRIPT_VERSION: &str = "TypeScript Version:";
const MINIMUM_TYPESCRIPT_VERSION: &str = "Minimum TypeScript Version:";

const LABELS: &[&str] =
    &[PROJECT, DEFINITIONS_BY, DEFINITIONS, TYPESCRIPT_VERSION, MINIMUM_TYPESCRIPT_VERSION];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub library_name: String,
    pub library_major: u32,
    pub library_minor: u32,
    /// Declarations for something that is not an installable npm package,
    /// such as a runtime's globals.
    pub non_npm: bool,
    pub projects: Vec<String>,
    pub contributors: Vec<Contributor>,
    pub typescript_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    pub name: String,
    pub url: Option<String>,
}

impl fmt::Display for Contributor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.url {
            Some(url) => write!(f, "{} <{}>", self.name, url),
            None => f.write_str(&self.name),
        }
    }
}

/// Parse the header at the top of a declaration file.
///
/// The title must be followed by `Project:`, `Definitions by:` and
/// `Definitions:` in that order. `Project:` and `Definitions by:` may continue
/// on unlabelled comment lines. A `TypeScript Version:` line is optional.
pub fn parse_header(text: &str) -> Result<Header, HeaderError> {
    let mut lines = text
        .trim_start_matches('\u{feff}')
        .lines()
        .map(str::trim)
        .skip_while(|line| line.is_empty())
        .map_while(comment_body)
        .peekable();

    let title = lines.next().ok_or(HeaderError::Missing)?;
    let rest = title.strip_prefix(TITLE_PREFIX).ok_or(HeaderError::Missing)?;
    let (non_npm, rest) = match rest.strip_prefix(NON_NPM_PREFIX) {
        Some(rest) => (true, rest),
        None => (false, rest),
    };
    let (name, version) =
        rest.trim().rsplit_once(' ').ok_or_else(|| HeaderError::MissingVersion(title.into()))?;
    let (library_major, library_minor) = parse_version(version)?;

    let mut projects = split_projects(required_field(&mut lines, PROJECT)?);
    while let Some(line) = lines.next_if(|line| is_continuation(line)) {
        projects.extend(split_projects(line));
    }

    let mut contributors = parse_contributors(required_field(&mut lines, DEFINITIONS_BY)?);
    while let Some(line) = lines.next_if(|line| is_continuation(line)) {
        contributors.extend(parse_contributors(line));
    }

    required_field(&mut lines, DEFINITIONS)?;

    let typescript_version = lines.find_map(|line| {
        line.strip_prefix(TYPESCRIPT_VERSION)
            .or_else(|| line.strip_prefix(MINIMUM_TYPESCRIPT_VERSION))
            .map(|v| v.trim().to_string())
    });

    Ok(Header {
        library_name: name.trim().to_string(),
        library_major,
        library_minor,
        non_npm,
        projects,
        contributors,
        typescript_version,
    })
}

/// Body of a `//` comment line; `None` ends the header, including on `///`
/// directives.
fn comment_body(line: &str) -> Option<&str> {
    if line.starts_with("///") {
        return None;
    }
    line.strip_prefix("//").map(str::trim)
}

fn required_field<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    label: &'static str,
) -> Result<&'a str, HeaderError> {
    lines
        .next()
        .and_then(|line| line.strip_prefix(label))
        .map(str::trim)
        .ok_or(HeaderError::MissingField(label))
}

fn is_continuation(line: &str) -> bool {
    !line.is_empty() && !LABELS.iter().any(|label| line.starts_with(label))
}

/// `major` or `major.minor`; patch versions are rejected.
fn parse_version(version: &str) -> Result<(u32, u32), HeaderError> {
    let invalid = || HeaderError::InvalidVersion(version.to_string());
    let mut parts = version.split('.');
    let major: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
    let minor: u32 = match parts.next() {
        Some(p) => p.parse().map_err(|_| invalid())?,
        None => 0,
    };
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok((major, minor))
}

fn split_projects(s: &str) -> Vec<String> {
    s.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

fn parse_contributors(s: &str) -> Vec<Contributor> {
    s.split('>')
        .map(|chunk| chunk.trim().trim_start_matches(',').trim())
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| match chunk.split_once('<') {
            Some((name, url)) => {
                Contributor { name: name.trim().to_string(), url: Some(url.trim().to_string()) }
            }
            None => Contributor { name: chunk.to_string(), url: None },
        })
        .collect()
}
