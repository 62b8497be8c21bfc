//! Whole-file replacement through a sibling temporary file.
//!
//! The new contents are written and synced under a hidden name, then renamed
//! over the target. A reader therefore sees either the previous record or
//! the new one, never a torn write.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::domain::ports::ComplaintRepositoryError;

static STAGING_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replace `file_name` inside `dir` with `contents`.
///
/// `file_name` must be a single normal path component.
pub(crate) fn replace_file(
    dir: &Dir,
    file_name: &Utf8Path,
    contents: &str,
) -> Result<(), ComplaintRepositoryError> {
    let mut components = file_name.components();
    let (Some(Utf8Component::Normal(target)), None) = (components.next(), components.next())
    else {
        return Err(ComplaintRepositoryError::write(format!(
            "{file_name} is not a plain file name"
        )));
    };

    let staging = staging_name(target);
    stage(dir, &staging, contents).map_err(|err| {
        discard(dir, &staging);
        ComplaintRepositoryError::write(format!("staging {target}: {err}"))
    })?;
    promote(dir, &staging, target).map_err(|err| {
        discard(dir, &staging);
        ComplaintRepositoryError::write(format!("replacing {target}: {err}"))
    })?;
    sync_dir(dir);
    Ok(())
}

fn staging_name(target: &str) -> String {
    let sequence = STAGING_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!(".{target}.{}.{sequence}.staging", std::process::id())
}

fn stage(dir: &Dir, staging: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(staging, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(windows)]
fn promote(dir: &Dir, staging: &str, target: &str) -> io::Result<()> {
    match dir.remove_file(target) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(staging, dir, target)
}

#[cfg(not(windows))]
fn promote(dir: &Dir, staging: &str, target: &str) -> io::Result<()> {
    dir.rename(staging, dir, target)
}

fn discard(dir: &Dir, staging: &str) {
    // Best effort; the staging file may never have been created.
    drop(dir.remove_file(staging));
}

fn sync_dir(dir: &Dir) {
    // Best effort; not every platform can sync a directory handle.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
}
