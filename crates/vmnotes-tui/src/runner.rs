//! Main TUI runner - entry point and event loop

use std::path::Path;

use tokio::sync::mpsc;
use vmnotes_app::config;
use vmnotes_app::message::Message;
use vmnotes_app::process;
use vmnotes_app::state::AppState;
use vmnotes_app::Screen;
use vmnotes_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI for a project directory, starting on `screen`
pub async fn run_with_project(project_path: &Path, screen: Screen) -> Result<()> {
    let settings = config::load_settings(project_path);
    info!(
        "Loaded settings: select={:?} stylesheet={:?}",
        settings.files.select, settings.files.stylesheet
    );

    let mut state = AppState::with_settings(project_path.to_path_buf(), settings);
    state.screen = screen;

    // Unified message channel: background actions report back through it
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    process::start(&state, &msg_tx);

    let mut term = terminal::enter()?;
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx);
    terminal::leave();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Results of background loads and saves
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        for message in event::poll()? {
            process::process_message(state, message, &msg_tx);
        }
    }

    info!("Quit requested, leaving terminal");
    Ok(())
}
