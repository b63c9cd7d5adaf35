//! Interactive command implementation
//!
//! A menu loop over the selection model: the catalog is shown with checkbox
//! and status per row, and each round the user picks one action (toggle,
//! filter, select all visible, install, switch platform, ...).

use std::fmt;

use inquire::{Confirm, MultiSelect, Select, Text};

use crate::catalog::CatalogAccess;
use crate::cli::InteractiveArgs;
use crate::commands::context::{CommandContext, GlobalOptions};
use crate::domain::{BatchResult, CatalogEntry, EntryKind, InstallState};
use crate::error::Result;
use crate::installer::Installer;
use crate::operations::{install_all, install_selected};
use crate::platform::PlatformRegistry;
use crate::selection::SelectionModel;
use crate::ui::formatter::{
    MessageLevel, format_empty_state_message, format_entry_row, format_loading_message,
    format_message, format_platform_badge, format_platform_option, format_selection_count,
    format_status_icon, styles,
};
use crate::ui::{InteractiveProgressReporter, ProgressReporter, observe};

/// Run interactive command
pub fn run(options: &GlobalOptions, args: InteractiveArgs) -> Result<()> {
    let ctx = CommandContext::open(options)?;
    ctx.require_source()?;

    let kind = if args.commands {
        EntryKind::File
    } else {
        EntryKind::Bundle
    };
    let mut session = Session::new(ctx.registry, ctx.installer, kind);
    session.run()
}

/// One menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Toggle,
    Filter,
    ClearFilter,
    SelectAllVisible,
    DeselectAll,
    InstallSelected(usize),
    InstallAll,
    SwitchKind(EntryKind),
    SwitchPlatform,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Toggle => f.write_str("Toggle items"),
            Action::Filter => f.write_str("Filter by name"),
            Action::ClearFilter => f.write_str("Clear filter"),
            Action::SelectAllVisible => f.write_str("Select all visible"),
            Action::DeselectAll => f.write_str("Deselect all"),
            Action::InstallSelected(n) => write!(f, "Install selected ({n})"),
            Action::InstallAll => f.write_str("Install all"),
            Action::SwitchKind(kind) => write!(f, "Show {}", kind.plural()),
            Action::SwitchPlatform => f.write_str("Switch platform"),
            Action::Quit => f.write_str("Quit"),
        }
    }
}

/// Actions available for the current model state
fn menu_actions(model: &SelectionModel, kind: EntryKind) -> Vec<Action> {
    let mut actions = Vec::new();
    if !model.visible_indices().is_empty() {
        actions.push(Action::Toggle);
        actions.push(Action::SelectAllVisible);
    }
    actions.push(Action::Filter);
    if !model.filter_text().is_empty() {
        actions.push(Action::ClearFilter);
    }
    let selected = model.selected_count();
    if selected > 0 {
        actions.push(Action::InstallSelected(selected));
        actions.push(Action::DeselectAll);
    }
    if !model.is_empty() {
        actions.push(Action::InstallAll);
    }
    actions.push(Action::SwitchKind(other_kind(kind)));
    actions.push(Action::SwitchPlatform);
    actions.push(Action::Quit);
    actions
}

fn other_kind(kind: EntryKind) -> EntryKind {
    match kind {
        EntryKind::Bundle => EntryKind::File,
        EntryKind::File => EntryKind::Bundle,
    }
}

/// Apply a toggle round: `visible` are model indices shown in the prompt,
/// `chosen` are positions within `visible` that ended up checked
fn apply_toggle(model: &mut SelectionModel, visible: &[usize], chosen: &[usize]) {
    for (position, &index) in visible.iter().enumerate() {
        model.set_selected(index, chosen.contains(&position));
    }
}

/// A row offered in the toggle prompt
struct Row {
    position: usize,
    name: String,
    label: String,
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Match typed text against the name only, never the description
fn score_by_name(input: &str, row: &Row, _value: &str, _idx: usize) -> Option<i64> {
    if input.is_empty() || row.name.to_lowercase().contains(&input.to_lowercase()) {
        Some(0)
    } else {
        None
    }
}

struct Session {
    registry: PlatformRegistry,
    installer: Installer,
    kind: EntryKind,
    model: SelectionModel,
    status: Option<(MessageLevel, String)>,
}

impl Session {
    fn new(registry: PlatformRegistry, installer: Installer, kind: EntryKind) -> Self {
        let mut session = Self {
            registry,
            installer,
            kind,
            model: SelectionModel::default(),
            status: None,
        };
        session.reload();
        session
    }

    /// Re-read the catalog; selection starts over
    fn reload(&mut self) {
        println!("{}", styles::dim(format_loading_message(Some(self.kind))));
        self.model.load(self.installer.list(self.kind));
    }

    fn run(&mut self) -> Result<()> {
        loop {
            self.render();

            let actions = menu_actions(&self.model, self.kind);
            let Some(action) = Select::new("Action", actions)
                .with_page_size(12)
                .without_filtering()
                .with_help_message("↑↓ to move, ENTER to select, ESC to quit")
                .prompt_skippable()?
            else {
                return Ok(());
            };

            match action {
                Action::Toggle => self.toggle()?,
                Action::Filter => self.filter()?,
                Action::ClearFilter => self.model.clear_filter(),
                Action::SelectAllVisible => {
                    let count = self.model.select_all_visible();
                    self.set_status(MessageLevel::Info, format_selection_count(count));
                }
                Action::DeselectAll => {
                    self.model.deselect_all();
                    self.set_status(MessageLevel::Info, "Selection cleared".to_string());
                }
                Action::InstallSelected(_) => self.install_selected(),
                Action::InstallAll => self.install_all()?,
                Action::SwitchKind(kind) => {
                    self.kind = kind;
                    self.reload();
                }
                Action::SwitchPlatform => self.switch_platform()?,
                Action::Quit => return Ok(()),
            }
        }
    }

    fn set_status(&mut self, level: MessageLevel, text: String) {
        self.status = Some((level, text));
    }

    fn render(&mut self) {
        let platform = self.installer.platform();
        println!();
        println!(
            "{} {} {}",
            styles::level(MessageLevel::Info, format!("[{}]", format_platform_badge(&platform.name))),
            styles::header(self.kind.plural()),
            styles::dim(self.installer.target_root(self.kind).display()),
        );

        let mut meta = Vec::new();
        if !self.model.filter_text().is_empty() {
            meta.push(format!(
                "Filter: {} ({} of {} shown)",
                self.model.filter_text(),
                self.model.visible_entries().len(),
                self.model.len()
            ));
        }
        let count = format_selection_count(self.model.selected_count());
        if !count.is_empty() {
            meta.push(count);
        }
        if !meta.is_empty() {
            println!("{}", styles::dim(meta.join("  ")));
        }

        let visible = self.model.visible_indices();
        if visible.is_empty() {
            println!("  {}", format_empty_state_message(self.kind));
        }
        for index in visible {
            let entry = &self.model.entries()[index];
            let state = self.installer.resolve_status(entry);
            let row = format_entry_row(entry, self.model.is_selected(index), state);
            match state {
                InstallState::Installed => {
                    println!("  {}", styles::level(MessageLevel::Success, row));
                }
                InstallState::NotInstalled => println!("  {row}"),
            }
        }

        if let Some((level, text)) = self.status.take() {
            println!("{}", styles::level(level, format_message(level, &text)));
        }
    }

    fn toggle(&mut self) -> Result<()> {
        let visible = self.model.visible_indices();
        let rows: Vec<Row> = visible
            .iter()
            .enumerate()
            .map(|(position, &index)| {
                let entry = &self.model.entries()[index];
                Row {
                    position,
                    name: entry.name.clone(),
                    label: row_label(entry, self.installer.resolve_status(entry)),
                }
            })
            .collect();
        let defaults: Vec<usize> = visible
            .iter()
            .enumerate()
            .filter(|&(_, &index)| self.model.is_selected(index))
            .map(|(position, _)| position)
            .collect();

        let Some(chosen) = MultiSelect::new("Select items", rows)
            .with_default(&defaults)
            .with_page_size(10)
            .with_help_message(
                "  ↑↓ navigate  space select  enter confirm  type to filter  esc cancel",
            )
            .with_scorer(&score_by_name)
            .prompt_skippable()?
        else {
            return Ok(());
        };

        let chosen: Vec<usize> = chosen.iter().map(|row| row.position).collect();
        apply_toggle(&mut self.model, &visible, &chosen);
        Ok(())
    }

    fn filter(&mut self) -> Result<()> {
        let current = self.model.filter_text().to_string();
        if let Some(text) = Text::new("Filter by name:")
            .with_initial_value(&current)
            .with_help_message("Empty shows everything")
            .prompt_skippable()?
        {
            self.model.apply_filter(text.trim());
        }
        Ok(())
    }

    fn install_selected(&mut self) {
        let total = self.model.selected_count();
        let mut reporter = InteractiveProgressReporter::new(total);
        let result = install_selected(&mut self.model, &self.installer, observe(&mut reporter));
        reporter.finish();
        self.report(&result);
    }

    fn install_all(&mut self) -> Result<()> {
        let total = self.model.len();
        let confirmed = Confirm::new(&format!(
            "Install all {total} {} to {}?",
            self.kind.plural(),
            self.installer.platform().name
        ))
        .with_default(false)
        .prompt_skippable()?
        .unwrap_or(false);
        if !confirmed {
            return Ok(());
        }

        let mut reporter = InteractiveProgressReporter::new(total);
        let result = install_all(
            &mut self.model,
            &self.installer,
            self.kind,
            observe(&mut reporter),
        );
        reporter.finish();
        self.report(&result);
        Ok(())
    }

    fn report(&mut self, result: &BatchResult) {
        let text = format!(
            "Installed {}, failed {}",
            result.success_count, result.failure_count
        );
        if result.all_succeeded() {
            self.set_status(MessageLevel::Success, text);
        } else {
            let names = result.failed_names.join(", ");
            self.set_status(MessageLevel::Error, format!("{text}: {names}"));
        }
    }

    fn switch_platform(&mut self) -> Result<()> {
        let home = self.installer.home();
        let options: Vec<String> = self
            .registry
            .all()
            .iter()
            .map(|p| format_platform_option(&p.name, &p.base_path(home)))
            .collect();
        let current = self
            .registry
            .all()
            .iter()
            .position(|p| p.id == self.installer.platform().id)
            .unwrap_or(0);

        let Some(choice) = Select::new("Target platform", options.clone())
            .with_starting_cursor(current)
            .with_page_size(10)
            .without_filtering()
            .with_help_message("↑↓ to move, ENTER to select, ESC to cancel")
            .prompt_skippable()?
        else {
            return Ok(());
        };

        let Some(platform) = options
            .iter()
            .position(|option| *option == choice)
            .and_then(|index| self.registry.all().get(index))
        else {
            return Ok(());
        };

        self.installer = self.installer.for_platform(platform.clone());
        self.reload();
        self.set_status(
            MessageLevel::Info,
            format!("Switched to {}", self.installer.platform().name),
        );
        Ok(())
    }
}

fn row_label(entry: &CatalogEntry, state: InstallState) -> String {
    match &entry.description {
        Some(description) => format!(
            "{} {} - {}",
            format_status_icon(state),
            entry.name,
            description
        ),
        None => format!("{} {}", format_status_icon(state), entry.name),
    }
}
