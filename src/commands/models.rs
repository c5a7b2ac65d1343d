//! Command-level data models

use std::path::Path;

/// Where the status document comes from
pub enum StatusSource<'a> {
    /// A saved `tf status /format:xml` document
    XmlFile(&'a Path),
    /// Run tf in the workspace, limited to these paths (whole workspace when empty)
    Tf(&'a [String]),
}
