//! ### tf context
//! Where the tf client lives and which workspace it works in

use std::path::{Path, PathBuf};

use super::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct TfContext {
    /// The tf executable, `tf` by default (resolved through PATH)
    tf_executable: PathBuf,
    /// Directory inside a mapped TFVC workspace, tf runs from here
    workspace_dir: PathBuf,
}

impl TfContext {
    pub fn new(tf_executable: Option<PathBuf>, workspace_dir: Option<PathBuf>) -> AppResult<Self> {
        let workspace_dir = match workspace_dir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };

        if !workspace_dir.is_dir() {
            return Err(AppError::Validation(format!(
                "Workspace directory does not exist: {}",
                workspace_dir.display()
            )));
        }

        Ok(TfContext {
            tf_executable: tf_executable.unwrap_or_else(|| PathBuf::from("tf")),
            workspace_dir,
        })
    }

    pub fn get_tf_executable(&self) -> &Path {
        &self.tf_executable
    }

    pub fn get_workspace_dir(&self) -> &Path {
        &self.workspace_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_tf_on_path() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = TfContext::new(None, Some(dir.path().to_path_buf())).unwrap();

        assert_eq!(ctx.get_tf_executable(), Path::new("tf"));
        assert_eq!(ctx.get_workspace_dir(), dir.path());
    }

    #[test]
    fn missing_workspace_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = TfContext::new(None, Some(dir.path().join("nope")));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
