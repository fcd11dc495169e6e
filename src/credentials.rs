use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::error::Error;

/// Environment variable carrying the API key. The config file uses the same
/// name on its assignment line.
pub const KEY_VAR: &str = "YT_API_KEY";

/// Where a credential may come from, tried in the order given to [`resolve`].
/// Batch callers compose a list without `Interactive` to fail fast instead of
/// prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Env,
    File,
    Interactive,
}

pub fn default_sources() -> Vec<CredentialSource> {
    vec![
        CredentialSource::Env,
        CredentialSource::File,
        CredentialSource::Interactive,
    ]
}

/// Fixed per-user config location.
pub fn config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".config").join("ytq").join("config"))
}

/// Resolve exactly one API key, trying each source in order and
/// short-circuiting on the first hit.
pub fn resolve(sources: &[CredentialSource]) -> Result<String> {
    for source in sources {
        match source {
            CredentialSource::Env => {
                if let Some(key) = from_env() {
                    debug!("API key resolved from environment");
                    return Ok(key);
                }
            }
            CredentialSource::File => {
                if let Some(path) = config_path() {
                    if let Some(key) = from_file(&path)? {
                        debug!(path = %path.display(), "API key resolved from config file");
                        return Ok(key);
                    }
                }
            }
            CredentialSource::Interactive => return interactive(),
        }
    }
    Err(Error::Config(format!(
        "set {KEY_VAR} in the environment or in the config file"
    ))
    .into())
}

fn from_env() -> Option<String> {
    std::env::var(KEY_VAR).ok().filter(|v| !v.is_empty())
}

fn from_file(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_config(&contents))
}

/// Pick the key out of config file contents. The file holds shell-style
/// assignment lines; only the `YT_API_KEY` one is considered, blank lines and
/// `#` comments are skipped.
pub fn parse_config(contents: &str) -> Option<String> {
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some(rest) = line.strip_prefix(KEY_VAR) else {
            continue;
        };
        let Some(value) = rest.trim_start().strip_prefix('=') else {
            continue;
        };
        let value = value.trim().trim_matches('"');
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }
    None
}

/// Write the config file with the key as its single assignment line. The file
/// is readable and writable by the owner only.
pub fn write_config(path: &Path, key: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, format!("{KEY_VAR}=\"{key}\"\n"))
        .with_context(|| format!("writing {}", path.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .with_context(|| format!("restricting permissions on {}", path.display()))?;
    }
    Ok(())
}

fn interactive() -> Result<String> {
    if !io::stdin().is_terminal() {
        return Err(Error::Config(format!(
            "{KEY_VAR} is not set and stdin is not a terminal"
        ))
        .into());
    }
    let path = config_path();
    let store = match &path {
        Some(p) => ask_yes_no(&format!("Store the API key in {}? [y/N] ", p.display()))?,
        None => false,
    };
    let key = prompt_line("Enter API key: ")?;
    if key.is_empty() {
        return Err(Error::Config("entered key is empty".into()).into());
    }
    if store {
        if let Some(p) = &path {
            write_config(p, &key)?;
            info!(path = %p.display(), "API key saved");
        }
    }
    Ok(key)
}

fn ask_yes_no(prompt: &str) -> Result<bool> {
    let answer = prompt_line(prompt)?;
    Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
