//! Catalog entry types

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// What kind of installable unit an entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A directory copied as a whole tree ("skill")
    Bundle,
    /// A single file copied by name ("command")
    File,
}

impl EntryKind {
    /// Plural label used in headings and empty-state messages
    pub fn plural(self) -> &'static str {
        match self {
            EntryKind::Bundle => "skills",
            EntryKind::File => "commands",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            EntryKind::Bundle => "skill",
            EntryKind::File => "command",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

/// Whether `name` is exactly one ordinary path component
///
/// Rejects separators, `.`, `..`, roots and drive prefixes, so joining the
/// name onto a directory always yields a direct child of it.
pub fn is_plain_name(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Whether an entry's target currently exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    Installed,
    NotInstalled,
}

impl InstallState {
    pub fn is_installed(self) -> bool {
        self == InstallState::Installed
    }
}

/// One installable unit discovered in a source root
///
/// Entries carry no install state: it is always derived from the file system
/// through [`crate::installer::status::resolve_status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Directory name for bundles, file stem for files
    pub name: String,
    pub kind: EntryKind,
    /// Manifest description; bundles only
    pub description: Option<String>,
    pub source_path: PathBuf,
    /// Original extension of a file entry, without the dot
    pub extension: Option<String>,
}

impl CatalogEntry {
    pub fn bundle(
        name: impl Into<String>,
        source_path: impl Into<PathBuf>,
        description: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Bundle,
            description,
            source_path: source_path.into(),
            extension: None,
        }
    }

    pub fn file(
        name: impl Into<String>,
        source_path: impl Into<PathBuf>,
        extension: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            description: None,
            source_path: source_path.into(),
            extension,
        }
    }

    /// File name the entry occupies on disk (stem plus original extension)
    pub fn file_name(&self) -> String {
        match (&self.kind, &self.extension) {
            (EntryKind::File, Some(ext)) => format!("{}.{}", self.name, ext),
            _ => self.name.clone(),
        }
    }

    /// Where this entry lands under a platform's bundles or commands directory
    pub fn target_path(&self, target_root: &Path) -> PathBuf {
        target_root.join(self.file_name())
    }

    /// Target path, only if it is a direct child of `target_root`
    pub fn contained_target(&self, target_root: &Path) -> Option<PathBuf> {
        if !is_plain_name(&self.name) || !is_plain_name(&self.file_name()) {
            return None;
        }
        let target = self.target_path(target_root);
        (target.parent() == Some(target_root)).then_some(target)
    }

    /// Case-insensitive substring match on the name
    ///
    /// `needle_lower` must already be lowercased.
    pub fn matches_filter(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.name.to_lowercase().contains(needle_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_target_path_is_name() {
        let entry = CatalogEntry::bundle("latex-paper-en", "/src/skills/latex-paper-en", None);
        assert_eq!(
            entry.target_path(Path::new("/home/u/.claude/skills")),
            PathBuf::from("/home/u/.claude/skills/latex-paper-en")
        );
    }

    #[test]
    fn test_file_target_path_restores_extension() {
        let entry = CatalogEntry::file("review", "/src/commands/claude/review.md", Some("md".into()));
        assert_eq!(entry.file_name(), "review.md");
        assert_eq!(
            entry.target_path(Path::new("/t")),
            PathBuf::from("/t/review.md")
        );
    }

    #[test]
    fn test_file_without_extension() {
        let entry = CatalogEntry::file("Makefile", "/src/commands/claude/Makefile", None);
        assert_eq!(entry.file_name(), "Makefile");
    }

    #[test]
    fn test_matches_filter_case_insensitive() {
        let entry = CatalogEntry::bundle("LaTeX-Thesis", "/s", None);
        assert!(entry.matches_filter("latex"));
        assert!(entry.matches_filter("thesis"));
        assert!(entry.matches_filter(""));
        assert!(!entry.matches_filter("paper"));
    }

    #[test]
    fn test_plain_names() {
        for name in ["alpha", "latex-paper-en", "a.b", "..a"] {
            assert!(is_plain_name(name), "{name}");
        }
        for name in ["", ".", "..", "a/b", "a\\b", "/abs", "a/", "./a"] {
            assert!(!is_plain_name(name), "{name}");
        }
    }

    #[test]
    fn test_contained_target_rejects_escapes() {
        let root = Path::new("/home/u/.claude/skills");
        let ok = CatalogEntry::bundle("alpha", "/src/skills/alpha", None);
        assert_eq!(ok.contained_target(root), Some(root.join("alpha")));

        for name in ["/tmp/victim", "..", "a/b"] {
            let entry = CatalogEntry::bundle(name, Path::new("/src/skills").join(name), None);
            assert_eq!(entry.contained_target(root), None, "{name}");
        }

        let bad_ext = CatalogEntry::file("review", "/src/review", Some("md/../../x".into()));
        assert_eq!(bad_ext.contained_target(root), None);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(EntryKind::Bundle.plural(), "skills");
        assert_eq!(EntryKind::File.to_string(), "command");
    }
}
