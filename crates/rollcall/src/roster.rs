//! Host roster loading.

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Read the roster of hosts to probe: one identifier per line, trimmed,
/// blank lines dropped, order preserved. No deduplication.
///
/// A missing file is not an error: it yields an empty roster, and callers
/// treat that as nothing to do.
pub fn load_roster(path: &Path) -> Result<Vec<String>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no host list file, empty roster");
            return Ok(Vec::new());
        }
        Err(source) => return Err(Error::RosterRead { path: path.to_path_buf(), source }),
    };

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn trims_and_drops_blank_lines_preserving_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("computers.txt");
        fs::write(&path, "pc-alpha\n\n  pc-beta  \n\t\npc-alpha\n").unwrap();

        let roster = load_roster(&path).unwrap();
        assert_eq!(roster, vec!["pc-alpha", "pc-beta", "pc-alpha"]);
    }

    #[test]
    fn missing_file_is_an_empty_roster() {
        let dir = tempdir().unwrap();
        let roster = load_roster(&dir.path().join("absent.txt")).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn empty_file_is_an_empty_roster() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("computers.txt");
        fs::write(&path, "").unwrap();
        assert!(load_roster(&path).unwrap().is_empty());
    }
}
