use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HomeDirError {
    #[error("cannot determine the user home directory ({0} is not set)")]
    NoHome(&'static str),

    #[error("failed to create home directory '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to resolve current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

#[cfg(target_os = "windows")]
const HOME_VAR: &str = "APPDATA";
#[cfg(not(target_os = "windows"))]
const HOME_VAR: &str = "HOME";

fn platform_home() -> Result<PathBuf, HomeDirError> {
    std::env::var_os(HOME_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .ok_or(HomeDirError::NoHome(HOME_VAR))
}

/// Resolve the server home directory into an absolute path.
///
/// - `None` resolves to `<platform home>/<default_subdir>`.
/// - A leading `~` is expanded against the platform home.
/// - Relative paths are joined onto the current working directory.
///
/// When `create` is set the directory (and its parents) is created.
pub fn resolve_home_dir(
    raw: Option<String>,
    default_subdir: &str,
    create: bool,
) -> Result<PathBuf, HomeDirError> {
    let resolved = match raw.as_deref().map(str::trim) {
        None | Some("") => platform_home()?.join(default_subdir),
        Some("~") => platform_home()?,
        Some(p) if p.starts_with("~/") || p.starts_with("~\\") => platform_home()?.join(&p[2..]),
        Some(p) => absolutize(Path::new(p))?,
    };

    if create {
        std::fs::create_dir_all(&resolved).map_err(|source| HomeDirError::Create {
            path: resolved.clone(),
            source,
        })?;
    }

    Ok(resolved)
}

fn absolutize(p: &Path) -> Result<PathBuf, HomeDirError> {
    if p.is_absolute() {
        return Ok(p.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(HomeDirError::CurrentDir)?;
    Ok(cwd.join(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn absolute_path_is_kept_and_created() {
        let tmp = tempdir().unwrap();
        let target = tmp.path().join("nested").join("home");

        let resolved =
            resolve_home_dir(Some(target.to_string_lossy().to_string()), ".unused", true).unwrap();

        assert_eq!(resolved, target);
        assert!(target.is_dir());
    }

    #[test]
    fn tilde_is_expanded() {
        let resolved = resolve_home_dir(Some("~/.users_api_tilde".into()), ".unused", false).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with(".users_api_tilde"));
        assert!(!resolved.to_string_lossy().contains('~'));
    }

    #[test]
    fn empty_uses_default_subdir() {
        let resolved = resolve_home_dir(Some("   ".into()), ".users-api", false).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with(".users-api"));
    }

    #[test]
    fn relative_is_joined_onto_cwd() {
        let resolved = resolve_home_dir(Some("relative/home".into()), ".unused", false).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("relative/home"));
    }
}
