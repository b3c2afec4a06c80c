use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use crate::prelude::*;

/// Nothing to reconcile: the expected download is not there.
#[derive(Debug, thiserror::Error)]
#[error("no file matching `{pattern}` in `{}`", directory.display())]
pub struct NotFoundError {
    pub directory: PathBuf,
    pub pattern: String,
}

/// Picks the most recently modified plain file in `directory` whose name
/// matches the `*`-wildcard pattern.
///
/// The acquisition job drops one download per run, so the newest match is the
/// freshest data.
#[instrument(skip_all)]
pub fn newest_matching(directory: &Path, pattern: &str) -> Result<PathBuf> {
    let entries = fs::read_dir(directory)
        .with_context(|| format!("failed to read `{}`", directory.display()))?;

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !matches_pattern(name, pattern) {
            continue;
        }
        let modified = metadata.modified()?;
        if newest.as_ref().is_none_or(|(newest_at, _)| modified > *newest_at) {
            newest = Some((modified, entry.path()));
        }
    }

    let (_, path) = newest.ok_or_else(|| NotFoundError {
        directory: directory.to_path_buf(),
        pattern: pattern.to_string(),
    })?;
    info!(path = %path.display(), "picked the newest matching file");
    Ok(path)
}

/// `*`-wildcard matching: the literal segments must occur in order, the first
/// anchored at the start of the name and the last at its end.
fn matches_pattern(name: &str, pattern: &str) -> bool {
    let Some((head, suffix)) = pattern.rsplit_once('*') else {
        return name == pattern;
    };
    let Some(remainder) = name.strip_suffix(suffix) else {
        return false;
    };
    let Some((prefix, middles)) = head.split_once('*') else {
        return remainder.strip_prefix(head).is_some();
    };
    let Some(mut remainder) = remainder.strip_prefix(prefix) else {
        return false;
    };
    for segment in middles.split('*') {
        match remainder.find(segment) {
            Some(index) => remainder = &remainder[index + segment.len()..],
            None => return false,
        }
    }
    true
}
