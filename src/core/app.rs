use std::path::PathBuf;

use crate::{core::{context::TfContext, error::AppResult}, ui::display::AppUI};

pub struct App {
    pub ui: AppUI,
    pub tf_ctx: TfContext,
}

impl App {
    pub fn new(tf_executable: Option<PathBuf>, workspace_dir: Option<PathBuf>) -> AppResult<Self> {
        let tf_ctx = TfContext::new(tf_executable, workspace_dir)?;
        tracing::debug!("tf context: {:?}", tf_ctx);

        Ok(App {
            ui: AppUI::new(),
            tf_ctx,
        })
    }
}
