// Tauri Command Layer
// Bridges the webview to the session, gateway, config and export services.
// Commands return Result<_, String>; the webview renders the message as-is.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use tauri::State;
use tracing::info;

use crate::models::{HealthResponse, Preset, SessionMode, SessionSnapshot};
use crate::services::config_store::{AppConfig, ConfigStore};
use crate::services::gateway::ServiceClient;
use crate::services::session::{self, Session};
use crate::services::{exporter, presets};

/// Session state shared across commands; one session per window.
pub struct SessionState(pub Mutex<Session>);

/// Shared HTTP client. The base URL is resolved at startup; a changed
/// config value takes effect on the next launch.
pub struct GatewayState(pub ServiceClient);

fn lock_session(state: &SessionState) -> Result<MutexGuard<'_, Session>, String> {
    state.0.lock().map_err(|_| "Oturum durumu okunamadı".to_string())
}

fn store() -> Result<ConfigStore, String> {
    ConfigStore::default_config_dir()
        .map(ConfigStore::new)
        .ok_or_else(|| "Config directory unavailable".to_string())
}

#[tauri::command]
pub fn get_session(state: State<SessionState>) -> Result<SessionSnapshot, String> {
    Ok(lock_session(state.inner())?.snapshot())
}

#[tauri::command]
pub fn switch_mode(
    mode: SessionMode,
    state: State<SessionState>,
) -> Result<SessionSnapshot, String> {
    let mut session = lock_session(state.inner())?;
    session.switch_mode(mode);
    Ok(session.snapshot())
}

#[tauri::command]
pub fn set_input_text(raw: String, state: State<SessionState>) -> Result<SessionSnapshot, String> {
    let mut session = lock_session(state.inner())?;
    session.set_input(raw);
    Ok(session.snapshot())
}

#[tauri::command]
pub fn add_label(label: String, state: State<SessionState>) -> Result<SessionSnapshot, String> {
    let mut session = lock_session(state.inner())?;
    session.add_label(&label);
    Ok(session.snapshot())
}

#[tauri::command]
pub fn remove_label(index: usize, state: State<SessionState>) -> Result<SessionSnapshot, String> {
    let mut session = lock_session(state.inner())?;
    session.remove_label(index).map_err(|e| e.to_string())?;
    Ok(session.snapshot())
}

#[tauri::command]
pub fn list_presets() -> Vec<Preset> {
    presets::classification_presets()
}

#[tauri::command]
pub fn load_preset(name: String, state: State<SessionState>) -> Result<SessionSnapshot, String> {
    let preset =
        presets::find_preset(&name).ok_or_else(|| format!("Ön ayar bulunamadı: {}", name))?;
    let mut session = lock_session(state.inner())?;
    session.load_preset(&preset);
    Ok(session.snapshot())
}

#[tauri::command]
pub fn load_examples(state: State<SessionState>) -> Result<SessionSnapshot, String> {
    let mut session = lock_session(state.inner())?;
    session.load_examples();
    Ok(session.snapshot())
}

#[tauri::command]
pub fn reset_session(state: State<SessionState>) -> Result<SessionSnapshot, String> {
    let mut session = lock_session(state.inner())?;
    session.reset();
    Ok(session.snapshot())
}

/// The one suspending command; the session's in-flight flag keeps a second
/// submission out while this runs.
#[tauri::command]
pub async fn run_analysis(
    state: State<'_, SessionState>,
    gateway: State<'_, GatewayState>,
) -> Result<SessionSnapshot, String> {
    session::run_analysis(&state.inner().0, &gateway.inner().0).await
}

#[tauri::command]
pub fn export_results(
    dest_dir: Option<String>,
    state: State<SessionState>,
) -> Result<String, String> {
    let session = lock_session(state.inner())?;
    let set = session
        .results()
        .ok_or_else(|| "Dışa aktarılacak sonuç yok".to_string())?;

    let dir = dest_dir
        .map(PathBuf::from)
        .or_else(|| {
            store()
                .ok()
                .and_then(|s| s.get_export_dir().ok().flatten())
                .map(PathBuf::from)
        })
        .unwrap_or_else(exporter::default_export_dir);

    let path = exporter::export_results(set, &dir).map_err(|e| e.to_string())?;
    info!(path = %path.display(), "export.completed");
    Ok(path.display().to_string())
}

#[tauri::command]
pub async fn test_api_connection(
    gateway: State<'_, GatewayState>,
) -> Result<HealthResponse, String> {
    gateway.inner().0.health().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_config() -> Result<AppConfig, String> {
    store()?.load()
}

#[tauri::command]
pub fn save_config(config: AppConfig) -> Result<(), String> {
    store()?.save(&config)
}

/// The base URL the running gateway actually resolved (env, config or default).
#[tauri::command]
pub fn get_api_url(gateway: State<GatewayState>) -> Result<String, String> {
    Ok(gateway.inner().0.base_url().to_string())
}

#[tauri::command]
pub fn set_api_url(url: String) -> Result<(), String> {
    store()?.set_api_url(&url)
}
