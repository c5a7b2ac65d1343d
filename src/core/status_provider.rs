//! ### Status classification
//! Decides which local status a pending change has, and hands it to the local-changes view.
//!
//! A renamed item is reported by the server once, with the same local item and
//! pending change for both the source and the target name.

use std::path::Path;

use crate::core::{
    change_type::ChangeType,
    diagnostics::{Diagnostic, DiagnosticSink},
    error::{AppError, AppResult},
    pending_change::PendingChange,
    probe::PathProbe,
    server_status::{LocalPath, ServerStatus, StatusVisitor},
};

pub struct StatusProvider<'a> {
    probe: &'a dyn PathProbe,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> StatusProvider<'a> {
    pub fn new(probe: &'a dyn PathProbe, sink: &'a dyn DiagnosticSink) -> Self {
        StatusProvider { probe, sink }
    }

    /// Classifies the change and passes the result to `visitor`.
    pub fn visit_by_status(&self, visitor: &mut dyn StatusVisitor, change: &PendingChange) -> AppResult<()> {
        let status = self.determine_server_status(change)?;
        let local_path = Path::new(&change.local_item);
        let path = LocalPath::new(local_path, self.probe.is_dir(local_path));

        // every pending change is treated as a local item
        status.visit_by(&path, true, visitor)
    }

    /// Picks exactly one status for the change.
    ///
    /// The rules are checked in a fixed order and the first match wins: an
    /// edit combined with a rename is `RenamedCheckedOut`, never either alone.
    /// A merge is only resolved by looking at the disk: if the local item is
    /// still there it is an edit, otherwise a deletion.
    pub fn determine_server_status<'c>(&self, change: &'c PendingChange) -> AppResult<ServerStatus<'c>> {
        if change.local_item.trim().is_empty() {
            return Err(AppError::InvalidInput(format!(
                "pending change for {} has no local item",
                change.server_item.as_deref().unwrap_or("<unknown server item>")
            )));
        }

        if change.is_candidate {
            return Ok(ServerStatus::Unversioned);
        }

        let status = if change.has(ChangeType::Add) {
            ServerStatus::ScheduledForAddition(change)
        } else if change.has(ChangeType::Edit) && change.has(ChangeType::Rename) {
            ServerStatus::RenamedCheckedOut(change)
        } else if change.has(ChangeType::Edit) {
            ServerStatus::CheckedOutForEdit(change)
        } else if change.has(ChangeType::Rename) {
            ServerStatus::Renamed(change)
        } else if change.has(ChangeType::Delete) {
            ServerStatus::ScheduledForDeletion(change)
        } else if change.has(ChangeType::Undelete) {
            ServerStatus::Undeleted(change)
        } else if change.has(ChangeType::Branch) {
            // a branch is an addition
            ServerStatus::ScheduledForAddition(change)
        } else if change.has(ChangeType::Merge) {
            if self.probe.exists(Path::new(&change.local_item)) {
                ServerStatus::CheckedOutForEdit(change)
            } else {
                ServerStatus::ScheduledForDeletion(change)
            }
        } else if change.has(ChangeType::Lock) {
            ServerStatus::Locked(change)
        } else {
            self.sink.record(Diagnostic::UnresolvedStatus {
                local_item: change.local_item.clone(),
                change_types: change.change_types.clone(),
            });
            return Err(AppError::UnresolvedStatus {
                local_item: change.local_item.clone(),
                change_types: change.change_types.clone(),
            });
        };

        Ok(status)
    }
}
