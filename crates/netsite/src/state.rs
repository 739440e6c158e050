//! Local files: the JSON state file and the declared attributes file.
//!
//! The state file holds one `TrackedSite` between invocations. A missing
//! file is an untracked site, not an error.

use std::path::{Path, PathBuf};

use netsite_core::{SiteAttributes, TrackedSite};

use crate::error::CliError;

/// Load tracked state, or an empty record if the file does not exist.
pub fn load(path: &Path) -> Result<TrackedSite, CliError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no state file, starting untracked");
        return Ok(TrackedSite::default());
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write tracked state, replacing the file in one rename.
pub fn save(path: &Path, tracked: &TrackedSite) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(tracked).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = temp_path(path);
    std::fs::write(&tmp, format!("{json}\n"))?;
    std::fs::rename(&tmp, path)?;

    tracing::debug!(path = %path.display(), "state saved");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Read declared attributes: JSON for a `.json` extension, TOML otherwise.
pub fn load_declared(path: &Path) -> Result<SiteAttributes, CliError> {
    let contents = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&contents).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })
    } else {
        toml::from_str(&contents).map_err(|source| CliError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}
