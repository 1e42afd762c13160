//! Launching the user's text editor.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

/// Editors tried when `$EDITOR` is unset, in order.
const FALLBACK_EDITORS: &[&str] = &["vim", "vi"];

/// Open `path` in `$EDITOR`, or the first fallback that runs successfully.
pub fn launch_editor(path: &Path) -> Result<()> {
    let candidates = editor_candidates(std::env::var("EDITOR").ok());
    let mut last_error = None;

    for candidate in &candidates {
        match run_editor(candidate, path) {
            Ok(()) => return Ok(()),
            Err(err) => {
                tracing::debug!("editor '{candidate}' failed: {err:#}");
                last_error = Some(err);
            }
        }
    }

    match last_error {
        Some(err) => Err(err),
        None => bail!("no editor available"),
    }
}

/// `$EDITOR` alone when set (it is the user's explicit choice), otherwise the fallbacks.
fn editor_candidates(env_editor: Option<String>) -> Vec<String> {
    match env_editor.filter(|e| !e.trim().is_empty()) {
        Some(editor) => vec![editor],
        None => FALLBACK_EDITORS.iter().map(|e| e.to_string()).collect(),
    }
}

/// Run `command` (which may carry arguments, e.g. `code --wait`) on `path`.
fn run_editor(command: &str, path: &Path) -> Result<()> {
    let mut parts = command.split_whitespace();
    let program = parts.next().context("empty editor command")?;
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .with_context(|| format!("cannot start '{program}'"))?;
    if !status.success() {
        bail!("'{program}' exited with {status}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_editor_wins() {
        assert_eq!(editor_candidates(Some("nano".into())), vec!["nano".to_string()]);
    }

    #[test]
    fn blank_env_editor_falls_back() {
        assert_eq!(editor_candidates(Some("  ".into())), vec!["vim", "vi"]);
        assert_eq!(editor_candidates(None), vec!["vim", "vi"]);
    }

    #[cfg(unix)]
    #[test]
    fn editor_command_with_arguments_runs() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let file = dir.path().join("config.toml");
        std::fs::write(&file, "").expect("write");
        run_editor("true --ignored", &file).expect("true succeeds");
    }

    #[cfg(unix)]
    #[test]
    fn failing_editor_reports_status() {
        let err = run_editor("false", Path::new("/dev/null")).unwrap_err();
        assert!(err.to_string().contains("'false' exited"), "got: {err}");
    }
}
