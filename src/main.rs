use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tfvc_status::{
    commands::{models::StatusSource, status::{handle_classify, handle_status, handle_tokens}},
    core::{app::App, error::AppResult},
    ui::display::AppUI,
};


#[derive(Parser, Debug)]
#[command(name = "tfvc-status", about = "Local file statuses for TFVC pending changes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the local changes list of the workspace.
    /// Usage: status [--xml <file>] [paths...]
    Status {
        /// Read a saved `tf status /format:xml` document instead of running tf
        #[arg(long)]
        xml: Option<PathBuf>,

        /// tf executable
        #[arg(long, env = "TF_EXECUTABLE")]
        tf: Option<PathBuf>,

        /// Directory inside the workspace (defaults to the current directory)
        #[arg(short, long, env = "TFVC_WORKSPACE")]
        workspace: Option<PathBuf>,

        /// Limit the status to these paths
        paths: Vec<String>,
    },
    /// Classify a single pending change.
    /// Usage: classify --local-item <path> --change-type "edit, rename"
    Classify {
        /// Local path of the item
        #[arg(short, long)]
        local_item: String,

        /// Raw change-type string as reported by the server
        #[arg(short, long, default_value = "")]
        change_type: String,

        /// The item is a candidate (not yet under version control)
        #[arg(long, default_value_t = false)]
        candidate: bool,
    },
    /// Show how a raw change-type string is read.
    /// Usage: tokens "edit, source rename"
    Tokens {
        raw: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(c) => c,
        Err(e) => {
            // --help and --version also land here
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    let result: AppResult<()> = match cli.command {
        Commands::Status { xml, tf, workspace, paths } => {
            let app = match App::new(tf, workspace) {
                Ok(app) => app,
                Err(e) => {
                    AppUI::new().error(&format!("{}", e));
                    return ExitCode::FAILURE;
                }
            };
            let source = match &xml {
                Some(file) => StatusSource::XmlFile(file),
                None => StatusSource::Tf(&paths),
            };
            report(&app.ui, handle_status(&app, source))
        }
        Commands::Classify { local_item, change_type, candidate } => {
            let ui = AppUI::new();
            report(&ui, handle_classify(&ui, &local_item, &change_type, candidate))
        }
        Commands::Tokens { raw } => {
            let ui = AppUI::new();
            report(&ui, handle_tokens(&ui, &raw))
        }
    };

    if result.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn report(ui: &AppUI, result: AppResult<()>) -> AppResult<()> {
    if let Err(e) = &result {
        ui.error(&format!("{}", e));
    }
    result
}
