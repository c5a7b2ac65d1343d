//! ### Status commands
//!
//! - status: local changes list for the workspace
//! - classify: status of a single change described on the command line
//! - tokens: how a raw change-type string is read
//!

use crossterm::style::Stylize;

use crate::{
    commands::{models::StatusSource, utils_changes::{LocalChanges, collect_local_changes}},
    core::{
        app::App,
        change_type::{ChangeType, format_change_types, parse_change_type_segments, parse_change_types},
        diagnostics::TracingSink,
        error::AppResult,
        pending_change::{PendingChange, parse_status_xml},
        probe::FsProbe,
        status_provider::StatusProvider,
        tf::tf_status,
        utils::auto_decode,
    },
    ui::{display::AppUI, models::TokenEntry},
};

/// Shows the local changes list
pub fn handle_status(app: &App, source: StatusSource) -> AppResult<()> {
    let local = load_local_changes(app, source)?;

    for problem in &local.problems {
        app.ui.warn(&problem.to_string());
    }

    let count = local.rows.len();
    app.ui.show_local_changes(local.rows);
    if count > 0 {
        app.ui.success(&format!("{} pending change(s)", count.to_string().yellow().bold()));
    }
    Ok(())
}

/// Reads the status document and classifies every change in it
fn load_local_changes(app: &App, source: StatusSource) -> AppResult<LocalChanges> {
    let xml = match source {
        StatusSource::XmlFile(path) => {
            app.ui.update_step(&format!("Reading {}", path.display()));
            auto_decode(&std::fs::read(path)?)?
        }
        StatusSource::Tf(paths) => {
            app.ui.update_step("Fetching pending changes from tf");
            let path_refs: Vec<&str> = paths.iter().map(String::as_str).collect();
            tf_status(&app.tf_ctx, &path_refs)?
        }
    };

    let sink = TracingSink;
    app.ui.update_step("Classifying pending changes");
    let changes = parse_status_xml(&xml, &sink)?;
    let provider = StatusProvider::new(&FsProbe, &sink);
    collect_local_changes(&provider, &changes)
}

/// Prints the status of one change
pub fn handle_classify(ui: &AppUI, local_item: &str, change_type: &str, candidate: bool) -> AppResult<()> {
    let sink = TracingSink;
    let change_types = parse_change_types(change_type, &sink);
    let change = if candidate {
        PendingChange::candidate(local_item, change_types)
    } else {
        PendingChange::new(local_item, change_types)
    };

    let provider = StatusProvider::new(&FsProbe, &sink);
    let status = provider.determine_server_status(&change)?;

    ui.success(&format!(
        "{} {} ({})",
        local_item.yellow().bold(),
        status.label().green().bold(),
        format_change_types(&change.change_types)
    ));
    Ok(())
}

/// Prints the change types read from a raw string
pub fn handle_tokens(ui: &AppUI, raw: &str) -> AppResult<()> {
    ui.show_tokens(token_entries(raw));
    Ok(())
}

fn token_entries(raw: &str) -> Vec<TokenEntry> {
    parse_change_type_segments(raw, &TracingSink)
        .into_iter()
        .map(|(segment, change_type)| TokenEntry {
            segment: segment.to_string(),
            change_type: change_type.to_string(),
            recognized: change_type != ChangeType::Unknown,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::core::error::AppError;

    #[test]
    fn token_entries_pair_segments_with_types() {
        let entries = token_entries("Edit, source rename, , encoding");
        let pairs: Vec<_> = entries.iter().map(|e| (e.segment.as_str(), e.change_type.as_str(), e.recognized)).collect();

        assert_eq!(
            pairs,
            vec![
                ("Edit", "edit", true),
                ("source rename", "rename", true),
                ("", "unknown", false),
                ("encoding", "unknown", false),
            ]
        );
    }

    #[test]
    fn token_entries_empty_input() {
        assert!(token_entries("").is_empty());
    }

    fn write_status_document(dir: &std::path::Path, kept: &PathBuf, gone: &PathBuf) -> PathBuf {
        let xml = format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<status>
<pending-changes>
<pending-change server-item="$/proj/kept.txt" owner="DOMAIN\dev" change-type="merge" local-item="{kept}"/>
<pending-change server-item="$/proj/gone.txt" owner="DOMAIN\dev" change-type="encoding" local-item="{gone}"/>
</pending-changes>
<candidate-pending-changes>
<pending-change server-item="$/proj/new.txt" change-type="add" local-item="{gone}"/>
</candidate-pending-changes>
</status>"#,
            kept = kept.display(),
            gone = gone.display(),
        );
        let file = dir.join("status.xml");
        std::fs::write(&file, xml).unwrap();
        file
    }

    #[test]
    fn status_from_xml_file() {
        let dir = tempfile::tempdir().unwrap();
        let kept = dir.path().join("kept.txt");
        let gone = dir.path().join("gone.txt");
        std::fs::write(&kept, "x").unwrap();
        let file = write_status_document(dir.path(), &kept, &gone);

        let app = App::new(None, Some(dir.path().to_path_buf())).unwrap();
        let local = load_local_changes(&app, StatusSource::XmlFile(&file)).unwrap();
        let statuses: Vec<_> = local.rows.iter().map(|r| r.status).collect();

        assert_eq!(statuses, vec!["Edited", "Unknown", "Unversioned"]);
        assert_eq!(local.problems.len(), 1);
        assert!(matches!(local.problems[0], AppError::UnresolvedStatus { .. }));

        assert!(handle_status(&app, StatusSource::XmlFile(&file)).is_ok());
    }

    #[test]
    fn status_from_missing_xml_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(None, Some(dir.path().to_path_buf())).unwrap();
        let missing = dir.path().join("missing.xml");

        assert!(matches!(handle_status(&app, StatusSource::XmlFile(&missing)), Err(AppError::Io(_))));
    }

    #[test]
    fn classify_reports_status_or_unresolved() {
        let ui = AppUI::new();

        assert!(handle_classify(&ui, "ws/a.txt", "edit, source rename", false).is_ok());
        assert!(handle_classify(&ui, "ws/a.txt", "edit", true).is_ok());
        assert!(matches!(
            handle_classify(&ui, "ws/a.txt", "encoding", false),
            Err(AppError::UnresolvedStatus { .. })
        ));
        assert!(matches!(handle_classify(&ui, "", "edit", false), Err(AppError::InvalidInput(_))));
    }
}
