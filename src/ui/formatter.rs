//! Text formatting for list rows, headers and status lines
//!
//! Pure functions returning strings; styling is applied by the callers via
//! the [`styles`] helpers so the plain text stays testable.

use std::path::Path;

use crate::domain::{CatalogEntry, EntryKind, InstallState};

pub const CHECKBOX_CHECKED: &str = "☑";
pub const CHECKBOX_UNCHECKED: &str = "☐";
pub const STATUS_INSTALLED: &str = "✓";
pub const STATUS_NOT_INSTALLED: &str = "○";
pub const ICON_SUCCESS: &str = "✓";
pub const ICON_WARNING: &str = "⚠";
pub const ICON_ERROR: &str = "✗";
pub const ICON_INFO: &str = "ℹ";
pub const ICON_EMPTY: &str = "📭";
pub const ICON_LOADING: &str = "⏳";
pub const ICON_PROGRESS: &str = "⚙";

/// Severity of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageLevel {
    pub fn icon(self) -> &'static str {
        match self {
            MessageLevel::Info => ICON_INFO,
            MessageLevel::Success => ICON_SUCCESS,
            MessageLevel::Warning => ICON_WARNING,
            MessageLevel::Error => ICON_ERROR,
        }
    }
}

pub fn format_checkbox(selected: bool) -> &'static str {
    if selected {
        CHECKBOX_CHECKED
    } else {
        CHECKBOX_UNCHECKED
    }
}

pub fn format_status_icon(state: InstallState) -> &'static str {
    if state.is_installed() {
        STATUS_INSTALLED
    } else {
        STATUS_NOT_INSTALLED
    }
}

/// `Selected: N`, or empty when nothing is selected
pub fn format_selection_count(count: usize) -> String {
    if count > 0 {
        format!("Selected: {count}")
    } else {
        String::new()
    }
}

/// `⚙ Installing... (2/5)`
pub fn format_progress_message(action: &str, current: usize, total: usize) -> String {
    format!("{ICON_PROGRESS} {action}... ({current}/{total})")
}

/// `📭 No skills found`
pub fn format_empty_state_message(kind: EntryKind) -> String {
    format!("{ICON_EMPTY} No {} found", kind.plural())
}

/// `⏳ Loading skills...`, or `⏳ Loading...` without a kind
pub fn format_loading_message(kind: Option<EntryKind>) -> String {
    match kind {
        Some(kind) => format!("{ICON_LOADING} Loading {}...", kind.plural()),
        None => format!("{ICON_LOADING} Loading..."),
    }
}

/// Platform name padded to ten columns, then its target path
pub fn format_platform_option(name: &str, path: &Path) -> String {
    format!("{name:<10}{}", path.display())
}

pub fn format_platform_badge(name: &str) -> String {
    name.to_uppercase()
}

pub fn format_message(level: MessageLevel, text: &str) -> String {
    format!("{} {text}", level.icon())
}

/// One catalog row: checkbox, status icon, name and optional description
pub fn format_entry_row(entry: &CatalogEntry, selected: bool, state: InstallState) -> String {
    let mut row = format!(
        "{} {} {}",
        format_checkbox(selected),
        format_status_icon(state),
        entry.name
    );
    if let Some(description) = &entry.description {
        row.push_str(" - ");
        row.push_str(description);
    }
    row
}

/// Console styles shared by every command's output
pub mod styles {
    use console::{Style, StyledObject};

    use super::MessageLevel;

    pub fn header<D>(text: D) -> StyledObject<D> {
        Style::new().bold().apply_to(text)
    }

    pub fn name<D>(text: D) -> StyledObject<D> {
        Style::new().bold().cyan().apply_to(text)
    }

    pub fn dim<D>(text: D) -> StyledObject<D> {
        Style::new().dim().apply_to(text)
    }

    pub fn level<D>(level: MessageLevel, text: D) -> StyledObject<D> {
        let style = match level {
            MessageLevel::Info => Style::new().cyan(),
            MessageLevel::Success => Style::new().green(),
            MessageLevel::Warning => Style::new().yellow(),
            MessageLevel::Error => Style::new().red(),
        };
        style.apply_to(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_and_status_icons() {
        assert_eq!(format_checkbox(true), "☑");
        assert_eq!(format_checkbox(false), "☐");
        assert_eq!(format_status_icon(InstallState::Installed), "✓");
        assert_eq!(format_status_icon(InstallState::NotInstalled), "○");
    }

    #[test]
    fn test_selection_count() {
        assert_eq!(format_selection_count(0), "");
        assert_eq!(format_selection_count(3), "Selected: 3");
    }

    #[test]
    fn test_progress_message() {
        assert_eq!(
            format_progress_message("Installing", 2, 5),
            "⚙ Installing... (2/5)"
        );
    }

    #[test]
    fn test_empty_and_loading_messages() {
        assert_eq!(format_empty_state_message(EntryKind::Bundle), "📭 No skills found");
        assert_eq!(format_empty_state_message(EntryKind::File), "📭 No commands found");
        assert_eq!(format_loading_message(Some(EntryKind::Bundle)), "⏳ Loading skills...");
        assert_eq!(format_loading_message(None), "⏳ Loading...");
    }

    #[test]
    fn test_platform_option_and_badge() {
        assert_eq!(
            format_platform_option("Claude", Path::new("~/.claude/")),
            "Claude    ~/.claude/"
        );
        assert_eq!(
            format_platform_option("VeryLongName", Path::new("/x")),
            "VeryLongName/x"
        );
        assert_eq!(format_platform_badge("claude"), "CLAUDE");
    }

    #[test]
    fn test_entry_row() {
        let entry = CatalogEntry::bundle("alpha", "/src/alpha", Some("Does things".into()));
        assert_eq!(
            format_entry_row(&entry, true, InstallState::NotInstalled),
            "☑ ○ alpha - Does things"
        );
        let bare = CatalogEntry::bundle("beta", "/src/beta", None);
        assert_eq!(
            format_entry_row(&bare, false, InstallState::Installed),
            "☐ ✓ beta"
        );
    }

    #[test]
    fn test_message_icons() {
        assert_eq!(format_message(MessageLevel::Warning, "careful"), "⚠ careful");
        assert_eq!(MessageLevel::Error.icon(), "✗");
    }
}
