//! ### Change types reported by the server
//! `tf status` reports a comma-separated list such as `"edit, source rename"`.

use std::fmt::Display;

use crate::core::diagnostics::{Diagnostic, DiagnosticSink};

const SOURCE_RENAME: &str = "source rename";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    Add,
    Rename,
    Edit,
    Delete,
    Undelete,
    Lock,
    Branch,
    Merge,
    Unknown,
}

impl ChangeType {
    /// Matches one trimmed segment. Returns `None` for text outside the vocabulary.
    pub fn from_segment(segment: &str) -> Option<ChangeType> {
        let s = segment.trim();

        if s.eq_ignore_ascii_case("add") {
            Some(ChangeType::Add)
        } else if s.eq_ignore_ascii_case("delete") {
            Some(ChangeType::Delete)
        } else if s.eq_ignore_ascii_case("edit") {
            Some(ChangeType::Edit)
        } else if s.eq_ignore_ascii_case("rename") || s.eq_ignore_ascii_case(SOURCE_RENAME) {
            Some(ChangeType::Rename)
        } else if s.eq_ignore_ascii_case("undelete") {
            Some(ChangeType::Undelete)
        } else {
            // lock, branch and merge can carry qualifiers ("checkin lock", "branched")
            let lower = s.to_lowercase();
            if lower.contains("lock") {
                Some(ChangeType::Lock)
            } else if lower.contains("branch") {
                Some(ChangeType::Branch)
            } else if lower.contains("merge") {
                Some(ChangeType::Merge)
            } else {
                None
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Add => "add",
            ChangeType::Rename => "rename",
            ChangeType::Edit => "edit",
            ChangeType::Delete => "delete",
            ChangeType::Undelete => "undelete",
            ChangeType::Lock => "lock",
            ChangeType::Branch => "branch",
            ChangeType::Merge => "merge",
            ChangeType::Unknown => "unknown",
        }
    }
}

impl Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Splits a raw status string into change types, keeping each trimmed segment.
///
/// Zero-length pieces (`"add,,edit"`) are skipped, so `""` yields no tokens.
/// Every other piece yields exactly one token, blank ones included; segments
/// outside the vocabulary become [`ChangeType::Unknown`] and are reported to `sink`.
pub fn parse_change_type_segments<'r>(raw: &'r str, sink: &dyn DiagnosticSink) -> Vec<(&'r str, ChangeType)> {
    raw.split(',')
        .filter(|piece| !piece.is_empty())
        .map(str::trim)
        .map(|segment| match ChangeType::from_segment(segment) {
            Some(change_type) => (segment, change_type),
            None => {
                sink.record(Diagnostic::UnrecognizedToken { segment: segment.to_string() });
                (segment, ChangeType::Unknown)
            }
        })
        .collect()
}

/// Splits a raw status string into change types.
pub fn parse_change_types(raw: &str, sink: &dyn DiagnosticSink) -> Vec<ChangeType> {
    parse_change_type_segments(raw, sink)
        .into_iter()
        .map(|(_, change_type)| change_type)
        .collect()
}

/// Joins change types back into the server's comma-separated form.
pub fn format_change_types(change_types: &[ChangeType]) -> String {
    change_types.iter().map(ChangeType::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::diagnostics::CollectingSink;

    fn parse(raw: &str) -> Vec<ChangeType> {
        parse_change_types(raw, &CollectingSink::new())
    }

    #[test]
    fn single_token() {
        assert_eq!(parse("add"), vec![ChangeType::Add]);
    }

    #[test]
    fn case_and_whitespace_are_ignored() {
        assert_eq!(parse("ADD, edit"), vec![ChangeType::Add, ChangeType::Edit]);
        assert_eq!(parse("  Undelete  ,DELETE"), vec![ChangeType::Undelete, ChangeType::Delete]);
    }

    #[test]
    fn source_rename_is_a_rename() {
        assert_eq!(parse("source rename"), vec![ChangeType::Rename]);
        assert_eq!(parse("edit, Source Rename"), vec![ChangeType::Edit, ChangeType::Rename]);
    }

    #[test]
    fn exact_tokens_do_not_match_by_containment() {
        let sink = CollectingSink::new();
        assert_eq!(parse_change_types("added", &sink), vec![ChangeType::Unknown]);
        assert_eq!(parse_change_types("rename target", &sink), vec![ChangeType::Unknown]);
    }

    #[test]
    fn lock_branch_merge_match_by_containment() {
        assert_eq!(parse("Lock"), vec![ChangeType::Lock]);
        assert_eq!(parse("checkin lock"), vec![ChangeType::Lock]);
        assert_eq!(parse("branched"), vec![ChangeType::Branch]);
        assert_eq!(parse("merge, edit"), vec![ChangeType::Merge, ChangeType::Edit]);
        assert_eq!(parse("MERGE"), vec![ChangeType::Merge]);
    }

    #[test]
    fn lock_wins_over_branch_and_merge_in_one_segment() {
        assert_eq!(parse("lock branch merge"), vec![ChangeType::Lock]);
        assert_eq!(parse("branch merge"), vec![ChangeType::Branch]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        let sink = CollectingSink::new();
        assert!(parse_change_types("", &sink).is_empty());
        assert!(parse_change_types(",,", &sink).is_empty());
        assert!(sink.take().is_empty());
    }

    #[test]
    fn zero_length_pieces_are_skipped() {
        assert_eq!(parse("add,,edit,"), vec![ChangeType::Add, ChangeType::Edit]);
    }

    #[test]
    fn blank_segments_are_unknown_and_reported() {
        let sink = CollectingSink::new();

        assert_eq!(
            parse_change_types("add, ,edit", &sink),
            vec![ChangeType::Add, ChangeType::Unknown, ChangeType::Edit]
        );
        assert_eq!(parse_change_types(" ", &sink), vec![ChangeType::Unknown]);
        assert_eq!(
            sink.take(),
            vec![
                Diagnostic::UnrecognizedToken { segment: "".into() },
                Diagnostic::UnrecognizedToken { segment: "".into() },
            ]
        );
    }

    #[test]
    fn segments_stay_paired_with_their_tokens() {
        let sink = CollectingSink::new();
        let pairs = parse_change_type_segments("Edit, source rename,, encoding", &sink);

        assert_eq!(
            pairs,
            vec![
                ("Edit", ChangeType::Edit),
                ("source rename", ChangeType::Rename),
                ("encoding", ChangeType::Unknown),
            ]
        );
    }

    #[test]
    fn unknown_segments_are_reported_once_each() {
        let sink = CollectingSink::new();
        let tokens = parse_change_types("add, encoding, property", &sink);

        assert_eq!(tokens, vec![ChangeType::Add, ChangeType::Unknown, ChangeType::Unknown]);
        assert_eq!(
            sink.take(),
            vec![
                Diagnostic::UnrecognizedToken { segment: "encoding".into() },
                Diagnostic::UnrecognizedToken { segment: "property".into() },
            ]
        );
    }

    #[test]
    fn format_joins_with_commas() {
        assert_eq!(format_change_types(&[ChangeType::Edit, ChangeType::Rename]), "edit, rename");
        assert_eq!(format_change_types(&[]), "");
    }
}
