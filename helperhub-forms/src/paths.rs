//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "communityhelperhub";
const APPLICATION: &str = "helperhub-forms";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 25;

const LATEST_LOG: &str = "latest.log";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, which holds the logs.
///
/// - Linux: `$XDG_CACHE_HOME/helperhub-forms` or `~/.cache/helperhub-forms`
/// - macOS: `~/Library/Caches/org.communityhelperhub.helperhub-forms`
/// - Windows: `C:\Users\<User>\AppData\Local\communityhelperhub\helperhub-forms\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/helperhub-forms` or `~/.config/helperhub-forms`
/// - macOS: `~/Library/Application Support/org.communityhelperhub.helperhub-forms`
/// - Windows: `C:\Users\<User>\AppData\Roaming\communityhelperhub\helperhub-forms\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the validator options file.
pub fn options_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("validation.json"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Rotate logs: rename latest.log to a timestamped name, then clean up
/// old logs.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs() -> io::Result<()> {
    match cache_dir() {
        Some(cache) if cache.is_dir() => rotate_logs_in(&cache),
        _ => Ok(()),
    }
}

fn rotate_logs_in(cache: &Path) -> io::Result<()> {
    let latest = cache.join(LATEST_LOG);
    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        fs::rename(&latest, cache.join(format!("{timestamp}.log")))?;
    }

    cleanup_old_logs(cache, MAX_OLD_LOGS)?;
    Ok(())
}

/// Remove old log files, keeping only the `keep` most recent.
///
/// Returns the number of files removed.
fn cleanup_old_logs(cache: &Path, keep: usize) -> io::Result<usize> {
    let mut logs: Vec<_> = fs::read_dir(cache)?
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Oldest first. Archived names are timestamps, so they break mtime ties.
    let modified = |e: &fs::DirEntry| e.metadata().and_then(|m| m.modified()).ok();
    logs.sort_by_key(|e| (modified(e), e.file_name()));

    let excess = logs.len().saturating_sub(keep);
    for entry in &logs[..excess] {
        fs::remove_file(entry.path())?;
    }
    Ok(excess)
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::time::{Duration, SystemTime};

    use super::*;

    fn touch(dir: &Path, name: &str, age_secs: u64) {
        let file = File::create(dir.join(name)).unwrap();
        let modified = SystemTime::now() - Duration::from_secs(age_secs);
        file.set_modified(modified).unwrap();
    }

    fn remaining(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_cleanup_keeps_most_recent_logs() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "20240101_000000.log", 300);
        touch(dir.path(), "20240102_000000.log", 200);
        touch(dir.path(), "20240103_000000.log", 100);
        touch(dir.path(), LATEST_LOG, 400);
        touch(dir.path(), "notes.txt", 500);

        assert_eq!(cleanup_old_logs(dir.path(), 2).unwrap(), 1);
        assert_eq!(
            remaining(dir.path()),
            vec![
                "20240102_000000.log",
                "20240103_000000.log",
                LATEST_LOG,
                "notes.txt",
            ]
        );

        assert_eq!(cleanup_old_logs(dir.path(), 2).unwrap(), 0);
    }

    #[test]
    fn test_rotate_archives_latest_log() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), LATEST_LOG, 0);

        rotate_logs_in(dir.path()).unwrap();
        let names = remaining(dir.path());
        assert_eq!(names.len(), 1);
        assert!(names[0].ends_with(".log") && names[0] != LATEST_LOG);
    }
}
