//! Filesystem locations for settings and logs.

use std::env;
use std::path::{Path, PathBuf};

/// Directory name under the user's config base.
const APP_DIR: &str = "sentiscope";

/// Settings file name.
pub const SETTINGS_FILE: &str = "settings.conf";

/// What: List settings file candidates in priority order for the given bases.
///
/// Inputs:
/// - `home`: Value of `$HOME`, if set.
/// - `xdg_config`: Value of `$XDG_CONFIG_HOME`, if set.
///
/// Output:
/// - `$HOME/.config/sentiscope/settings.conf`, then `$XDG_CONFIG_HOME/sentiscope/settings.conf`.
#[must_use]
pub fn settings_candidates(home: Option<&str>, xdg_config: Option<&str>) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(h) = home.filter(|h| !h.trim().is_empty()) {
        candidates.push(Path::new(h).join(".config").join(APP_DIR).join(SETTINGS_FILE));
    }
    if let Some(x) = xdg_config.filter(|x| !x.trim().is_empty()) {
        candidates.push(Path::new(x).join(APP_DIR).join(SETTINGS_FILE));
    }
    candidates
}

/// What: Find the first existing settings file.
///
/// Inputs: none (reads `HOME` and `XDG_CONFIG_HOME`).
///
/// Output:
/// - `Some(path)` of an existing file; `None` when no candidate exists.
#[must_use]
pub fn resolve_settings_path() -> Option<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg = env::var("XDG_CONFIG_HOME").ok();
    settings_candidates(home.as_deref(), xdg.as_deref())
        .into_iter()
        .find(|p| p.is_file())
}

/// What: Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Config directory for sentiscope: `$HOME/.config/sentiscope`, else under
/// `$XDG_CONFIG_HOME`. Creation is attempted but not required.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join(APP_DIR);
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `<config_dir>/logs` (creation attempted).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_follow_priority_and_skip_blank_bases() {
        let c = settings_candidates(Some("/home/u"), Some("/xdg"));
        assert_eq!(
            c,
            vec![
                PathBuf::from("/home/u/.config/sentiscope/settings.conf"),
                PathBuf::from("/xdg/sentiscope/settings.conf"),
            ]
        );
        assert_eq!(
            settings_candidates(Some(" "), Some("/xdg")),
            vec![PathBuf::from("/xdg/sentiscope/settings.conf")]
        );
        assert!(settings_candidates(None, None).is_empty());
    }
}
