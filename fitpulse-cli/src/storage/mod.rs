// Session files: one JSON document per user holding profile, workouts and metrics

use anyhow::{Context, Result};
use fitpulse::models::SessionContext;
use std::fs;
use std::path::Path;

/// Load and validate a session file.
pub fn load_session(path: &Path) -> Result<SessionContext> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session file {}", path.display()))?;

    let session: SessionContext = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse session file {}", path.display()))?;

    session
        .validate()
        .with_context(|| format!("Invalid session data in {}", path.display()))?;

    tracing::debug!(
        "Loaded session for {} ({} workouts, {} metric samples)",
        session.user_id(),
        session.workouts.len(),
        session.metrics.len()
    );

    Ok(session)
}

/// Write a session file as pretty-printed JSON, creating parent directories.
pub fn save_session(path: &Path, session: &SessionContext) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).context("Failed to create session directory")?;
    }

    let contents = serde_json::to_string_pretty(session).context("Failed to serialize session")?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write session file {}", path.display()))?;

    Ok(())
}
