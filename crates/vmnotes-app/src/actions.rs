//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action runs on its own tokio task and reports back by sending a
//! message into the event loop. Later results overwrite earlier ones.

use std::path::Path;

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::config::{
    export_suggestions, import_suggestions, load_notes, load_select_config, load_suggestions,
    read_select_config, save_notes, save_select_config, save_suggestions,
};
use crate::message::Message;
use crate::UpdateAction;
use vmnotes_core::{Error, GlyphMap};

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::LoadSelectConfig { primary, example } => {
            tokio::spawn(async move {
                let loaded = load_select_config(&primary, &example);
                let _ = msg_tx
                    .send(Message::SelectConfigLoaded {
                        loaded: Box::new(loaded),
                    })
                    .await;
            });
        }

        UpdateAction::LoadGlyphs { path } => {
            tokio::spawn(async move {
                let msg = match GlyphMap::load(&path) {
                    Ok(glyphs) => {
                        info!("Loaded {} glyphs from {:?}", glyphs.len(), path);
                        Message::GlyphsLoaded { glyphs }
                    }
                    Err(e) => {
                        error!("Failed to load glyphs from {:?}: {}", path, e);
                        Message::GlyphsFailed {
                            error: e.to_string(),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::LoadSuggestions { path } => {
            tokio::spawn(async move {
                let store = load_suggestions(&path);
                let _ = msg_tx.send(Message::SuggestionsLoaded { store }).await;
            });
        }

        UpdateAction::SaveSuggestions { path, store } => {
            tokio::spawn(async move {
                // Silent on success; the form already reported the change
                if let Err(e) = save_suggestions(&path, &store) {
                    error!("Suggestion save failed: {}", e);
                    let _ = msg_tx
                        .send(Message::ActionFailed {
                            message: format!("Could not save suggestions: {e}"),
                        })
                        .await;
                }
            });
        }

        UpdateAction::SaveSelectConfig { path, content } => {
            tokio::spawn(async move {
                let msg = match save_select_config(&path, &content) {
                    Ok(()) => {
                        info!("Saved select configuration to {:?}", path);
                        Message::ActionSucceeded {
                            message: format!("Saved {}.", path.display()),
                        }
                    }
                    Err(e) => {
                        error!("Select configuration save failed: {}", e);
                        Message::ActionFailed {
                            message: e.to_string(),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::ImportSelectConfig { path } => {
            tokio::spawn(async move {
                let msg = match read_select_config(&path) {
                    Ok(config) => Message::SelectImported {
                        config: Box::new(config),
                    },
                    Err(e) => failed(&path, &e),
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::SaveNotes { dir, record } => {
            tokio::spawn(async move {
                let msg = match save_notes(&dir, &record) {
                    Ok(path) => Message::ActionSucceeded {
                        message: format!("Saved {}.", path.display()),
                    },
                    Err(e) => {
                        error!("Notes save failed: {}", e);
                        Message::ActionFailed {
                            message: e.to_string(),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::LoadNotes { path } => {
            tokio::spawn(async move {
                let msg = match load_notes(&path) {
                    Ok(record) => Message::NotesLoaded {
                        record: Box::new(record),
                        path,
                    },
                    Err(e) => failed(&path, &e),
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::ImportSuggestions { path } => {
            tokio::spawn(async move {
                let msg = match import_suggestions(&path) {
                    Ok(store) => Message::SuggestionsImported { store },
                    Err(e) => failed(&path, &e),
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::ExportSuggestions { path, store } => {
            tokio::spawn(async move {
                let msg = match export_suggestions(&path, &store) {
                    Ok(()) => Message::ActionSucceeded {
                        message: format!("Suggestions exported to {}.", path.display()),
                    },
                    Err(e) => failed(&path, &e),
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::CopyToClipboard { text, what } => {
            // arboard talks to the display server synchronously
            tokio::task::spawn_blocking(move || {
                let msg = match crate::clipboard::copy(&text) {
                    Ok(()) => Message::ActionSucceeded {
                        message: format!("{what} copied to clipboard."),
                    },
                    Err(e) => {
                        warn!("Clipboard copy failed: {}", e);
                        Message::ActionFailed {
                            message: e.to_string(),
                        }
                    }
                };
                let _ = msg_tx.blocking_send(msg);
            });
        }
    }
}

/// Failure message for a read, in the wording the status line shows
fn failed(path: &Path, e: &Error) -> Message {
    debug!("Read of {:?} failed: {}", path, e);
    Message::ActionFailed {
        message: user_message(e),
    }
}

/// One-line description of a read or import failure
pub fn user_message(e: &Error) -> String {
    match e {
        Error::Json(_) => "Invalid JSON file.".to_string(),
        Error::MissingRoot { root, .. } => format!("Could not find \"{root}\" root object."),
        Error::ConfigNotFound { path } => format!("File not found: {}", path.display()),
        Error::Import { message } | Error::Export { message } => message.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::UpdateAction;
    use std::time::Duration;
    use tempfile::tempdir;
    use vmnotes_core::{NotesRecord, SelectConfig};

    async fn next(rx: &mut mpsc::Receiver<Message>) -> Message {
        tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("message within timeout")
            .expect("channel open")
    }

    #[test]
    fn test_user_message_wording() {
        let e = Error::missing_root(vmnotes_core::ROOT_KEY, "x.json");
        assert_eq!(user_message(&e), "Could not find \"proxmox-notes\" root object.");

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(user_message(&Error::Json(json_err)), "Invalid JSON file.");

        assert_eq!(
            user_message(&Error::import("Invalid JSON file.")),
            "Invalid JSON file."
        );
    }

    #[tokio::test]
    async fn test_load_select_falls_back_to_builtin() {
        let dir = tempdir().unwrap();
        let (tx, mut rx) = mpsc::channel(4);
        handle_action(
            UpdateAction::LoadSelectConfig {
                primary: dir.path().join("select.json"),
                example: dir.path().join("select-example.json"),
            },
            tx,
        );

        match next(&mut rx).await {
            Message::SelectConfigLoaded { loaded } => {
                assert_eq!(loaded.config, SelectConfig::builtin());
            }
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_import_without_root_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("other.json");
        std::fs::write(&path, r#"{"something": {}}"#).unwrap();

        let (tx, mut rx) = mpsc::channel(4);
        handle_action(UpdateAction::ImportSelectConfig { path }, tx);

        match next(&mut rx).await {
            Message::ActionFailed { message } => {
                assert_eq!(message, "Could not find \"proxmox-notes\" root object.");
            }
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_notes_save_then_load() {
        let dir = tempdir().unwrap();
        let mut record = NotesRecord::default();
        record.header.title = "web01".into();

        let (tx, mut rx) = mpsc::channel(4);
        handle_action(
            UpdateAction::SaveNotes {
                dir: dir.path().to_path_buf(),
                record: Box::new(record),
            },
            tx.clone(),
        );
        assert!(matches!(
            next(&mut rx).await,
            Message::ActionSucceeded { .. }
        ));

        handle_action(
            UpdateAction::LoadNotes {
                path: dir.path().join("web01.json"),
            },
            tx,
        );
        match next(&mut rx).await {
            Message::NotesLoaded { record, .. } => assert_eq!(record.header.title, "web01"),
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_style_sheet_reports_failure() {
        let dir = tempdir().unwrap();
        let (tx, mut rx) = mpsc::channel(4);
        handle_action(
            UpdateAction::LoadGlyphs {
                path: dir.path().join("missing.css"),
            },
            tx,
        );
        assert!(matches!(next(&mut rx).await, Message::GlyphsFailed { .. }));
    }
}
