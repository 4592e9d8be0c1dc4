use std::io::{self, Write};

use colored::Colorize;
use log::debug;

use crate::types::ScanResult;

/// Print the result as pretty JSON.
pub fn print_json<W: Write>(writer: &mut W, result: &ScanResult) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, result)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Print the human readable report. With `all`, the detected dependencies are
/// listed first.
pub fn print_report<W: Write>(writer: &mut W, result: &ScanResult, all: bool) -> io::Result<()> {
    debug!(
        "Printing report: {} detected, {} missing, {} unused",
        result.detected_dependencies.len(),
        result.missing_dependencies.len(),
        result.unused_dependencies.len()
    );

    if all {
        if result.detected_dependencies.is_empty() {
            writeln!(writer, "This project does not seem to import any NPM packages.")?;
        } else {
            print_section(
                writer,
                "Detected dependencies",
                "these seem to be imported by this project:",
                &result.detected_dependencies,
            )?;
        }
        writeln!(writer)?;
    }

    let mut wrote_anything = false;

    if !result.missing_dependencies.is_empty() {
        print_section(
            writer,
            "Possible phantom dependencies",
            "these seem to be imported but aren't listed in package.json:",
            &result.missing_dependencies,
        )?;
        wrote_anything = true;
    }

    if !result.unused_dependencies.is_empty() {
        if wrote_anything {
            writeln!(writer)?;
        }
        print_section(
            writer,
            "Possible unused dependencies",
            "these are listed in package.json but don't seem to be imported:",
            &result.unused_dependencies,
        )?;
        wrote_anything = true;
    }

    if !wrote_anything {
        writeln!(writer, "{} {}", "✓".green().bold(), "Everything looks good.".green())?;
        writeln!(writer, "  No missing or unused dependencies were found.")?;
    }

    writer.flush()?;
    Ok(())
}

fn print_section<W: Write>(
    writer: &mut W,
    title: &str,
    explanation: &str,
    packages: &[String],
) -> io::Result<()> {
    writeln!(writer, "{} {}", "⚠".yellow().bold(), title.yellow())?;
    writeln!(writer, "{}", format!(" - {}", explanation).dimmed())?;
    for (idx, package) in packages.iter().enumerate() {
        let prefix = if idx == packages.len() - 1 { "└──" } else { "├──" };
        writeln!(writer, "{}  {}", prefix.dimmed(), package)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(result: &ScanResult, all: bool) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_report(&mut out, result, all).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn result(detected: &[&str], missing: &[&str], unused: &[&str]) -> ScanResult {
        let owned = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        ScanResult {
            detected_dependencies: owned(detected),
            missing_dependencies: owned(missing),
            unused_dependencies: owned(unused),
        }
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let mut out = Vec::new();
        print_json(&mut out, &result(&["lodash"], &["lodash"], &["left-pad"])).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["detectedDependencies"][0], "lodash");
        assert_eq!(v["missingDependencies"][0], "lodash");
        assert_eq!(v["unusedDependencies"][0], "left-pad");
    }

    #[test]
    fn test_everything_looks_good() {
        let text = render(&result(&["react"], &[], &[]), false);
        assert!(text.contains("Everything looks good."));
        assert!(!text.contains("react"));
    }

    #[test]
    fn test_missing_and_unused_sections() {
        let text = render(&result(&["lodash"], &["lodash"], &["left-pad", "@types/x"]), false);
        assert!(text.contains("Possible phantom dependencies"));
        assert!(text.contains("├──  left-pad"));
        assert!(text.contains("└──  @types/x"));
        assert!(text.contains("Possible unused dependencies"));
        assert!(!text.contains("Everything looks good."));
    }

    #[test]
    fn test_all_lists_detected() {
        let text = render(&result(&["a", "b"], &[], &[]), true);
        assert!(text.contains("Detected dependencies"));
        assert!(text.contains("├──  a"));
        assert!(text.contains("└──  b"));

        let text = render(&result(&[], &[], &[]), true);
        assert!(text.contains("does not seem to import any NPM packages"));
    }
}
