//! Session-scoped persistence of navigation state.
//!
//! On the web the state is mirrored into `sessionStorage`, so a reload keeps
//! the current view and language for the lifetime of the tab and nothing
//! more. Native hosts keep state in memory only, and these calls are no-ops.

use crate::core::navigation::NavigationState;

const SESSION_KEY: &str = "portfolio.navigation";

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("session storage unavailable")]
    Unavailable,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Restore the state saved earlier in this session, or start fresh.
pub fn restore_navigation() -> NavigationState {
    match read_session(SESSION_KEY) {
        Ok(Some(raw)) => decode(&raw).unwrap_or_else(|err| {
            tracing::warn!(%err, "discarding saved navigation state");
            NavigationState::default()
        }),
        Ok(None) => NavigationState::default(),
        Err(err) => {
            tracing::debug!(%err, "no session storage; starting fresh");
            NavigationState::default()
        }
    }
}

pub fn persist_navigation(state: &NavigationState) {
    let result = serde_json::to_string(state)
        .map_err(StorageError::from)
        .and_then(|raw| write_session(SESSION_KEY, &raw));
    if let Err(err) = result {
        tracing::debug!(%err, "navigation state not persisted");
    }
}

fn decode(raw: &str) -> Result<NavigationState, StorageError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(target_arch = "wasm32")]
fn session_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
fn read_session(key: &str) -> Result<Option<String>, StorageError> {
    session_storage()?
        .get_item(key)
        .map_err(|_| StorageError::Unavailable)
}

#[cfg(target_arch = "wasm32")]
fn write_session(key: &str, value: &str) -> Result<(), StorageError> {
    session_storage()?
        .set_item(key, value)
        .map_err(|_| StorageError::Unavailable)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_session(_key: &str) -> Result<Option<String>, StorageError> {
    Ok(None)
}

#[cfg(not(target_arch = "wasm32"))]
fn write_session(_key: &str, _value: &str) -> Result<(), StorageError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::language::Language;
    use crate::core::navigation::View;

    #[test]
    fn decodes_saved_state() {
        let state = decode(r#"{"view":"contact","language":"zh-CN"}"#).unwrap();
        assert_eq!(state.view, View::Contact);
        assert_eq!(state.language, Language::Chinese);
    }

    #[test]
    fn unknown_language_is_rejected() {
        assert!(decode(r#"{"view":"home","language":"fr-FR"}"#).is_err());
    }

    #[test]
    fn native_restore_starts_fresh() {
        persist_navigation(&NavigationState {
            view: View::Projects,
            language: Language::Chinese,
        });
        assert_eq!(restore_navigation(), NavigationState::default());
    }
}
