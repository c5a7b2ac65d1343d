//! UI data models



use std::time;

use indicatif::{ProgressBar, ProgressStyle};

/// One line of the local changes list
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRow {
    pub path: String,
    pub is_directory: bool,
    /// Status label, "Unknown" when the change could not be classified
    pub status: &'static str,
    pub resolved: bool,
    pub change_types: String,
    pub server_item: String,
    pub owner: String,
    pub date: String,
}

/// One parsed segment of a raw change-type string
pub struct TokenEntry {
    pub segment: String,
    pub change_type: String,
    pub recognized: bool,
}


pub struct SpinnerInfo {
    pub pb: ProgressBar,
    start_time: time::Instant,
}

impl SpinnerInfo {
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner();
        let frames = ["[=   ]","[==  ]","[=== ]","[ ===]","[  ==]","[   =]","[    ]","[   =]","[  ==]","[ ===]","[====]","[=== ]","[==  ]","[=   ]", "[    ]","    "];

        let style = ProgressStyle::default_spinner()
            .tick_strings(&frames)
            .template("{spinner:.blue.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(style);

        pb.enable_steady_tick(std::time::Duration::from_millis(50));
        SpinnerInfo {
            pb,
            start_time: time::Instant::now(),
        }
    }

    pub fn elapsed(&self) -> time::Duration {
        self.start_time.elapsed()
    }
}
