//! vmnotes - Markdown notes for virtual machines and containers
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;
use tracing::{error, info};
use vmnotes::{headless, Screen};

/// vmnotes - Markdown notes for virtual machines and containers
#[derive(Parser, Debug)]
#[command(name = "vmnotes", version)]
#[command(about = "Turn VM and container details into Markdown notes", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Working directory holding select.json and .vmnotes/
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Screen shown on startup
    #[arg(long, value_enum, default_value_t = StartScreen::Notes)]
    screen: StartScreen,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the generated document for a saved notes state
    Render {
        /// Saved notes state (JSON)
        #[arg(value_name = "NOTES")]
        file: PathBuf,

        /// Print the preview HTML instead of Markdown
        #[arg(long)]
        html: bool,
    },

    /// Check a select configuration; exits with 1 on blocking errors
    Validate {
        /// Select configuration, defaults to the configured select.json
        #[arg(value_name = "SELECT")]
        file: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum StartScreen {
    Notes,
    Vm,
    Select,
}

impl From<StartScreen> for Screen {
    fn from(screen: StartScreen) -> Self {
        match screen {
            StartScreen::Notes => Screen::Notes,
            StartScreen::Vm => Screen::Vm,
            StartScreen::Select => Screen::Select,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();

    // Logs go to a file, since the TUI owns stdout
    vmnotes_core::logging::init()?;

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    match args.command {
        Some(Command::Render { file, html }) => {
            let output = headless::render_notes(&file, &cwd, html)?;
            print!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Validate { file, json }) => {
            let path = file.unwrap_or_else(|| {
                vmnotes_app::config::load_settings(&cwd).select_path(&cwd)
            });
            let report = headless::validate_select(&path)?;
            if json {
                println!("{:#}", headless::report_json(&report));
            } else {
                print!("{}", headless::format_report(&report));
            }
            if report.has_blocking() {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        None => {
            let project_path = args.path.unwrap_or(cwd);
            info!("Project path: {}", project_path.display());

            let result = vmnotes::run_with_project(&project_path, args.screen.into()).await;
            if let Err(ref e) = result {
                error!("Application error: {:?}", e);
            }
            info!("vmnotes exiting");
            result?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
