use std::path::Path;

use tfvc_status::{
    commands::utils_changes::{UNKNOWN_STATUS, collect_local_changes},
    core::{
        change_type::ChangeType,
        diagnostics::{CollectingSink, Diagnostic},
        pending_change::parse_status_xml,
        probe::FsProbe,
        status_provider::StatusProvider,
    },
};

fn pending_change_xml(local_item: &Path, change_type: &str) -> String {
    format!(
        r#"<pending-change server-item="$/proj/{name}" version="3" owner="DOMAIN\dev" date="2016-07-13T12:36:51.060-0400" lock="none" change-type="{change_type}" workspace="ws" computer="BOX" local-item="{local}"/>"#,
        name = local_item.file_name().unwrap().to_string_lossy(),
        local = local_item.display(),
    )
}

#[test]
fn status_document_to_local_changes() {
    let dir = tempfile::tempdir().unwrap();
    let kept = dir.path().join("kept.txt");
    let gone = dir.path().join("gone.txt");
    let folder = dir.path().join("branched");
    let scratch = dir.path().join("scratch.txt");
    std::fs::write(&kept, "merged").unwrap();
    std::fs::create_dir(&folder).unwrap();

    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<status>\n<pending-changes>\n{}\n{}\n{}\n{}\n</pending-changes>\n<candidate-pending-changes>\n{}\n</candidate-pending-changes>\n</status>",
        pending_change_xml(&kept, "merge"),
        pending_change_xml(&gone, "Merge, Edit"),
        pending_change_xml(&folder, "branch"),
        pending_change_xml(&gone, "property"),
        pending_change_xml(&scratch, "add"),
    );

    let sink = CollectingSink::new();
    let changes = parse_status_xml(&xml, &sink).unwrap();
    assert_eq!(changes.len(), 5);
    assert_eq!(changes[1].change_types, vec![ChangeType::Merge, ChangeType::Edit]);

    let provider = StatusProvider::new(&FsProbe, &sink);
    let local = collect_local_changes(&provider, &changes).unwrap();
    let statuses: Vec<_> = local.rows.iter().map(|r| r.status).collect();

    // merge + edit is an edit before the merge rule is reached
    assert_eq!(statuses, vec!["Edited", "Edited", "Added", UNKNOWN_STATUS, "Unversioned"]);
    assert!(local.rows[2].is_directory);
    assert!(!local.rows[0].is_directory);
    assert_eq!(local.problems.len(), 1);

    assert_eq!(
        sink.take(),
        vec![
            Diagnostic::UnrecognizedToken { segment: "property".into() },
            Diagnostic::UnresolvedStatus {
                local_item: gone.display().to_string(),
                change_types: vec![ChangeType::Unknown],
            },
        ]
    );
}

#[test]
fn merge_of_a_missing_file_is_a_deletion() {
    let dir = tempfile::tempdir().unwrap();
    let gone = dir.path().join("gone.txt");
    let xml = format!(
        "<status><pending-changes>{}</pending-changes></status>",
        pending_change_xml(&gone, "merge")
    );

    let sink = CollectingSink::new();
    let changes = parse_status_xml(&xml, &sink).unwrap();
    let provider = StatusProvider::new(&FsProbe, &sink);
    let local = collect_local_changes(&provider, &changes).unwrap();

    assert_eq!(local.rows[0].status, "Deleted");

    std::fs::write(&gone, "back").unwrap();
    let local = collect_local_changes(&provider, &changes).unwrap();
    assert_eq!(local.rows[0].status, "Edited");
}
