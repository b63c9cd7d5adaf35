//! Bundle manifest (SKILL.md) reading

use std::path::Path;

/// Manifest file looked up inside each bundle directory
pub const MANIFEST_FILE: &str = "SKILL.md";

const DESCRIPTION_KEY: &str = "description:";

/// Read a bundle's description from its manifest
///
/// The first line starting with `description:` wins. A missing manifest, a
/// missing key, an unreadable file or an empty value all yield `None`.
pub fn read_description(bundle_dir: &Path) -> Option<String> {
    let bytes = std::fs::read(bundle_dir.join(MANIFEST_FILE)).ok()?;
    parse_description(&String::from_utf8_lossy(&bytes))
}

fn parse_description(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.strip_prefix(DESCRIPTION_KEY))
        .map(str::trim)
        .filter(|desc| !desc.is_empty())
        .map(ToString::to_string)
}
