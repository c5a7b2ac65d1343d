//! Builds the local changes list from pending changes
//!

use chrono::{DateTime, Local};

use crate::{
    commands::utils::format_relative_time,
    core::{
        change_type::format_change_types,
        error::{AppError, AppResult},
        pending_change::PendingChange,
        server_status::{LocalPath, ServerStatus, StatusVisitor},
        status_provider::StatusProvider,
    },
    ui::models::ChangeRow,
};

pub const UNKNOWN_STATUS: &str = "Unknown";

/// Collects one [`ChangeRow`] per visited change.
pub struct LocalChangesCollector {
    rows: Vec<ChangeRow>,
    /// Relative dates of one list are all computed against this instant
    now: DateTime<Local>,
}

impl LocalChangesCollector {
    pub fn new(now: DateTime<Local>) -> Self {
        LocalChangesCollector { rows: Vec::new(), now }
    }

    pub fn into_rows(self) -> Vec<ChangeRow> {
        self.rows
    }

    /// Adds a row for a change that could not be classified.
    pub fn push_unknown(&mut self, change: &PendingChange) {
        self.rows.push(build_row(change.local_item.clone(), false, UNKNOWN_STATUS, false, Some(change), self.now));
    }

    fn push(&mut self, path: &LocalPath, status: &ServerStatus, change: Option<&PendingChange>) -> AppResult<()> {
        let display_path = path.as_path().display().to_string();
        self.rows.push(build_row(display_path, path.is_directory, status.label(), true, change, self.now));
        Ok(())
    }
}

fn build_row(path: String, is_directory: bool, status: &'static str, resolved: bool, change: Option<&PendingChange>, now: DateTime<Local>) -> ChangeRow {
    ChangeRow {
        path,
        is_directory,
        status,
        resolved,
        change_types: change.map(|c| format_change_types(&c.change_types)).unwrap_or_default(),
        server_item: change.and_then(|c| c.server_item.clone()).unwrap_or_default(),
        owner: change.and_then(|c| c.owner.clone()).unwrap_or_default(),
        date: change
            .and_then(|c| c.date.as_ref())
            .map(|d| format_relative_time(d, now))
            .unwrap_or_default(),
    }
}

impl StatusVisitor for LocalChangesCollector {
    fn visit_unversioned(&mut self, path: &LocalPath, _local_item_exists: bool) -> AppResult<()> {
        self.push(path, &ServerStatus::Unversioned, None)
    }

    fn visit_scheduled_for_addition(&mut self, path: &LocalPath, _local_item_exists: bool, change: &PendingChange) -> AppResult<()> {
        self.push(path, &ServerStatus::ScheduledForAddition(change), Some(change))
    }

    fn visit_renamed_checked_out(&mut self, path: &LocalPath, _local_item_exists: bool, change: &PendingChange) -> AppResult<()> {
        self.push(path, &ServerStatus::RenamedCheckedOut(change), Some(change))
    }

    fn visit_checked_out_for_edit(&mut self, path: &LocalPath, _local_item_exists: bool, change: &PendingChange) -> AppResult<()> {
        self.push(path, &ServerStatus::CheckedOutForEdit(change), Some(change))
    }

    fn visit_renamed(&mut self, path: &LocalPath, _local_item_exists: bool, change: &PendingChange) -> AppResult<()> {
        self.push(path, &ServerStatus::Renamed(change), Some(change))
    }

    fn visit_scheduled_for_deletion(&mut self, path: &LocalPath, _local_item_exists: bool, change: &PendingChange) -> AppResult<()> {
        self.push(path, &ServerStatus::ScheduledForDeletion(change), Some(change))
    }

    fn visit_undeleted(&mut self, path: &LocalPath, _local_item_exists: bool, change: &PendingChange) -> AppResult<()> {
        self.push(path, &ServerStatus::Undeleted(change), Some(change))
    }

    fn visit_locked(&mut self, path: &LocalPath, _local_item_exists: bool, change: &PendingChange) -> AppResult<()> {
        self.push(path, &ServerStatus::Locked(change), Some(change))
    }
}

/// Result of running every pending change through the classifier
pub struct LocalChanges {
    pub rows: Vec<ChangeRow>,
    /// Changes shown as "Unknown", with the reason
    pub problems: Vec<AppError>,
}

/// Classifies every change. Unclassifiable changes become "Unknown" rows
/// instead of failing the whole list; visitor errors still abort.
pub fn collect_local_changes(provider: &StatusProvider, changes: &[PendingChange]) -> AppResult<LocalChanges> {
    let mut collector = LocalChangesCollector::new(Local::now());
    let mut problems = Vec::new();

    for change in changes {
        match provider.visit_by_status(&mut collector, change) {
            Ok(()) => {}
            Err(e @ (AppError::UnresolvedStatus { .. } | AppError::InvalidInput(_))) => {
                collector.push_unknown(change);
                problems.push(e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(LocalChanges { rows: collector.into_rows(), problems })
}
