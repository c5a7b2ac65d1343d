//! ### File system observations used during classification

use std::path::Path;

/// Answers questions about local items. Injected so classification stays deterministic in tests.
pub trait PathProbe: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
}

/// Looks at the real file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsProbe;

impl PathProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_probe_sees_files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(FsProbe.exists(&file));
        assert!(!FsProbe.is_dir(&file));
        assert!(FsProbe.is_dir(dir.path()));
        assert!(!FsProbe.exists(&dir.path().join("missing.txt")));
    }
}
