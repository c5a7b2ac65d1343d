//! ### Local file statuses
//! The result of classifying a pending change, and the visitor that consumes it.

use std::{fmt::Display, path::{Path, PathBuf}};

use crate::core::{error::AppResult, pending_change::PendingChange};

/// A local item as the local-changes view sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalPath {
    pub path: PathBuf,
    pub is_directory: bool,
}

impl LocalPath {
    pub fn new(path: impl Into<PathBuf>, is_directory: bool) -> Self {
        LocalPath { path: path.into(), is_directory }
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ServerStatus<'a> {
    Unversioned,
    ScheduledForAddition(&'a PendingChange),
    RenamedCheckedOut(&'a PendingChange),
    CheckedOutForEdit(&'a PendingChange),
    Renamed(&'a PendingChange),
    ScheduledForDeletion(&'a PendingChange),
    Undeleted(&'a PendingChange),
    Locked(&'a PendingChange),
}

impl<'a> ServerStatus<'a> {
    /// The change this status was derived from. `None` for unversioned items.
    pub fn pending_change(&self) -> Option<&'a PendingChange> {
        match *self {
            ServerStatus::Unversioned => None,
            ServerStatus::ScheduledForAddition(change)
            | ServerStatus::RenamedCheckedOut(change)
            | ServerStatus::CheckedOutForEdit(change)
            | ServerStatus::Renamed(change)
            | ServerStatus::ScheduledForDeletion(change)
            | ServerStatus::Undeleted(change)
            | ServerStatus::Locked(change) => Some(change),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServerStatus::Unversioned => "Unversioned",
            ServerStatus::ScheduledForAddition(_) => "Added",
            ServerStatus::RenamedCheckedOut(_) => "Renamed, Edited",
            ServerStatus::CheckedOutForEdit(_) => "Edited",
            ServerStatus::Renamed(_) => "Renamed",
            ServerStatus::ScheduledForDeletion(_) => "Deleted",
            ServerStatus::Undeleted(_) => "Undeleted",
            ServerStatus::Locked(_) => "Locked",
        }
    }

    /// Calls the visitor method matching this variant.
    pub fn visit_by(&self, path: &LocalPath, local_item_exists: bool, visitor: &mut dyn StatusVisitor) -> AppResult<()> {
        match *self {
            ServerStatus::Unversioned => visitor.visit_unversioned(path, local_item_exists),
            ServerStatus::ScheduledForAddition(change) => visitor.visit_scheduled_for_addition(path, local_item_exists, change),
            ServerStatus::RenamedCheckedOut(change) => visitor.visit_renamed_checked_out(path, local_item_exists, change),
            ServerStatus::CheckedOutForEdit(change) => visitor.visit_checked_out_for_edit(path, local_item_exists, change),
            ServerStatus::Renamed(change) => visitor.visit_renamed(path, local_item_exists, change),
            ServerStatus::ScheduledForDeletion(change) => visitor.visit_scheduled_for_deletion(path, local_item_exists, change),
            ServerStatus::Undeleted(change) => visitor.visit_undeleted(path, local_item_exists, change),
            ServerStatus::Locked(change) => visitor.visit_locked(path, local_item_exists, change),
        }
    }
}

impl Display for ServerStatus<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One callback per [`ServerStatus`] variant.
pub trait StatusVisitor {
    fn visit_unversioned(&mut self, path: &LocalPath, local_item_exists: bool) -> AppResult<()>;

    fn visit_scheduled_for_addition(&mut self, path: &LocalPath, local_item_exists: bool, change: &PendingChange) -> AppResult<()>;

    fn visit_renamed_checked_out(&mut self, path: &LocalPath, local_item_exists: bool, change: &PendingChange) -> AppResult<()>;

    fn visit_checked_out_for_edit(&mut self, path: &LocalPath, local_item_exists: bool, change: &PendingChange) -> AppResult<()>;

    fn visit_renamed(&mut self, path: &LocalPath, local_item_exists: bool, change: &PendingChange) -> AppResult<()>;

    fn visit_scheduled_for_deletion(&mut self, path: &LocalPath, local_item_exists: bool, change: &PendingChange) -> AppResult<()>;

    fn visit_undeleted(&mut self, path: &LocalPath, local_item_exists: bool, change: &PendingChange) -> AppResult<()>;

    fn visit_locked(&mut self, path: &LocalPath, local_item_exists: bool, change: &PendingChange) -> AppResult<()>;
}
