//! Timestamp synchronization for the channel list directory.
//!
//! The tuner only accepts an imported channel list when every file carries
//! the same modification time and the sidecar is strictly newer than the
//! rest. Everything under the directory (the directory itself and any
//! sub-directories included) is stamped with one instant, then the sidecar
//! is stamped one second later.

use std::fs::{File, FileTimes};
use std::path::Path;
use std::time::{Duration, SystemTime};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{ChanmapError, Result};

/// How much newer the sidecar is than its siblings.
pub const SIDECAR_OFFSET: Duration = Duration::from_secs(1);

/// Stamp every entry under `dir` with `now` and `sidecar` with `now + 1s`.
///
/// Returns the number of entries stamped in the walk.
pub fn synchronize(dir: &Path, sidecar: &Path, now: SystemTime) -> Result<usize> {
    let mut touched = 0;
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        set_times(entry.path(), now)?;
        touched += 1;
    }

    set_times(sidecar, now + SIDECAR_OFFSET)?;
    debug!(dir = %dir.display(), touched, "synchronized timestamps");
    Ok(touched)
}

/// Set access and modification time of `path`.
pub fn set_times(path: &Path, at: SystemTime) -> Result<()> {
    let times = FileTimes::new().set_accessed(at).set_modified(at);
    File::open(path)
        .and_then(|file| file.set_times(times))
        .map_err(|source| ChanmapError::Timestamp {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::UNIX_EPOCH;

    fn mtime(path: &Path) -> SystemTime {
        fs::metadata(path).unwrap().modified().unwrap()
    }

    #[test]
    fn test_synchronize_stamps_tree_and_offsets_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("tv.db"), b"db").unwrap();
        fs::write(root.join("chanLst.bin"), b"bin").unwrap();
        fs::create_dir(root.join("s2channellib")).unwrap();
        fs::write(root.join("s2channellib/DVBS.xml"), b"xml").unwrap();

        let now = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let touched = synchronize(root, &root.join("chanLst.bin"), now).unwrap();

        // root, tv.db, chanLst.bin, s2channellib, DVBS.xml
        assert_eq!(touched, 5);
        assert_eq!(mtime(&root.join("tv.db")), now);
        assert_eq!(mtime(&root.join("s2channellib/DVBS.xml")), now);
        assert_eq!(mtime(&root.join("s2channellib")), now);
        assert_eq!(mtime(&root.join("chanLst.bin")), now + SIDECAR_OFFSET);
    }

    #[test]
    fn test_missing_sidecar_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let now = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let err = synchronize(dir.path(), &dir.path().join("chanLst.bin"), now).unwrap_err();
        assert!(matches!(err, ChanmapError::Timestamp { .. }));
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("gone");
        let now = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let err = synchronize(&gone, &gone.join("chanLst.bin"), now).unwrap_err();
        assert!(matches!(err, ChanmapError::Walk(_)));
    }
}
