//! Message processing
//!
//! Runs a message through the TEA update function, follows up chained
//! messages and hands any resulting action to the background executor.

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message, msg_tx: &mpsc::Sender<Message>) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            tracing::trace!("Dispatching {}", action_name(&action));
            handle_action(action, msg_tx.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

/// Dispatch the startup loads
pub fn start(state: &AppState, msg_tx: &mpsc::Sender<Message>) {
    for action in handler::startup_actions(state) {
        handle_action(action, msg_tx.clone());
    }
}

fn action_name(action: &handler::UpdateAction) -> &'static str {
    use handler::UpdateAction::*;
    match action {
        LoadSelectConfig { .. } => "LoadSelectConfig",
        LoadGlyphs { .. } => "LoadGlyphs",
        LoadSuggestions { .. } => "LoadSuggestions",
        SaveSuggestions { .. } => "SaveSuggestions",
        SaveSelectConfig { .. } => "SaveSelectConfig",
        ImportSelectConfig { .. } => "ImportSelectConfig",
        SaveNotes { .. } => "SaveNotes",
        LoadNotes { .. } => "LoadNotes",
        ImportSuggestions { .. } => "ImportSuggestions",
        ExportSuggestions { .. } => "ExportSuggestions",
        CopyToClipboard { .. } => "CopyToClipboard",
    }
}
