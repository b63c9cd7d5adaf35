//! Install results, single and aggregated

use crate::error::InstallError;

/// Result of one install attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub success: bool,
    pub item_name: String,
    pub message: String,
    pub error: Option<InstallError>,
}

impl InstallOutcome {
    pub fn succeeded(item_name: impl Into<String>) -> Self {
        let item_name = item_name.into();
        Self {
            success: true,
            message: format!("Successfully installed {item_name}"),
            item_name,
            error: None,
        }
    }

    /// Failure with a human message chosen from the error category
    pub fn failed(item_name: impl Into<String>, error: InstallError) -> Self {
        let item_name = item_name.into();
        let message = match &error {
            InstallError::SourceRootMissing { .. } => "Source directory not found".to_string(),
            InstallError::SourceEntryMissing { .. } => format!("Not found: {item_name}"),
            InstallError::PermissionDenied { .. } => format!("Permission denied: {item_name}"),
            InstallError::CopyFailed { .. } => format!("Failed to install {item_name}"),
        };
        Self {
            success: false,
            item_name,
            message,
            error: Some(error),
        }
    }

    /// Message plus the underlying error, for failure lines
    pub fn detail(&self) -> String {
        match &self.error {
            Some(error) => format!("{}: {error}", self.message),
            None => self.message.clone(),
        }
    }
}

/// Aggregate over one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub success_count: usize,
    pub failure_count: usize,
    /// Names of failed items in processing order
    pub failed_names: Vec<String>,
}

impl BatchResult {
    pub fn record(&mut self, outcome: &InstallOutcome) {
        if outcome.success {
            self.success_count += 1;
        } else {
            self.failure_count += 1;
            self.failed_names.push(outcome.item_name.clone());
        }
    }

    pub fn total(&self) -> usize {
        self.success_count + self.failure_count
    }

    pub fn all_succeeded(&self) -> bool {
        self.failure_count == 0
    }
}
