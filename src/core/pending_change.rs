//! ### Pending changes
//! Reads the XML written by `tf status /format:xml`:
//!
//! ```xml
//! <status>
//!   <pending-changes>
//!     <pending-change server-item="$/proj/a.txt" local-item="C:\ws\a.txt" change-type="edit" .../>
//!   </pending-changes>
//!   <candidate-pending-changes>
//!     <pending-change server-item="$/proj/b.txt" local-item="C:\ws\b.txt" change-type="add" .../>
//!   </candidate-pending-changes>
//! </status>
//! ```

use chrono::{DateTime, FixedOffset};

use crate::core::{
    change_type::{ChangeType, parse_change_types},
    diagnostics::DiagnosticSink,
    error::AppResult,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PendingChange {
    /// Path of the item on disk
    pub local_item: String,
    /// Candidate changes are local items the server does not track yet
    pub is_candidate: bool,
    pub change_types: Vec<ChangeType>,
    pub server_item: Option<String>,
    /// Server path before a rename
    pub source_item: Option<String>,
    pub version: Option<String>,
    pub owner: Option<String>,
    pub date: Option<DateTime<FixedOffset>>,
    pub lock: Option<String>,
    pub workspace: Option<String>,
    pub computer: Option<String>,
    pub file_type: Option<String>,
}

impl PendingChange {
    pub fn new(local_item: impl Into<String>, change_types: Vec<ChangeType>) -> Self {
        PendingChange {
            local_item: local_item.into(),
            change_types,
            ..Default::default()
        }
    }

    pub fn candidate(local_item: impl Into<String>, change_types: Vec<ChangeType>) -> Self {
        PendingChange {
            is_candidate: true,
            ..PendingChange::new(local_item, change_types)
        }
    }

    pub fn has(&self, change_type: ChangeType) -> bool {
        self.change_types.contains(&change_type)
    }
}

/// Parses a `tf status /format:xml` document.
///
/// Changes are returned in document order, regular pending changes first.
pub fn parse_status_xml(xml: &str, sink: &dyn DiagnosticSink) -> AppResult<Vec<PendingChange>> {
    let doc = roxmltree::Document::parse(xml.trim())?;
    let mut changes = Vec::new();

    for section in doc.root_element().children().filter(|n| n.is_element()) {
        let is_candidate = match section.tag_name().name() {
            "pending-changes" => false,
            "candidate-pending-changes" => true,
            other => {
                tracing::debug!("Skipping status section <{}>", other);
                continue;
            }
        };

        for node in section.children().filter(|n| n.has_tag_name("pending-change")) {
            changes.push(read_pending_change(&node, is_candidate, sink));
        }
    }

    Ok(changes)
}

fn read_pending_change(node: &roxmltree::Node, is_candidate: bool, sink: &dyn DiagnosticSink) -> PendingChange {
    let attr = |name: &str| node.attribute(name).filter(|v| !v.is_empty()).map(str::to_string);

    PendingChange {
        local_item: node.attribute("local-item").unwrap_or("").to_string(),
        is_candidate,
        change_types: parse_change_types(node.attribute("change-type").unwrap_or(""), sink),
        server_item: attr("server-item"),
        source_item: attr("source-item"),
        version: attr("version"),
        owner: attr("owner"),
        date: node.attribute("date").and_then(parse_status_date),
        lock: attr("lock"),
        workspace: attr("workspace"),
        computer: attr("computer"),
        file_type: attr("file-type"),
    }
}

/// tf writes dates like `2016-07-13T12:36:51.060-0400`.
fn parse_status_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z")
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map_err(|e| tracing::debug!("Ignoring unparseable date {:?}: {}", raw, e))
        .ok()
}
