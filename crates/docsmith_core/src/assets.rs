//! Asset copying for output directories.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

/// Copy images and other assets into an output directory.
///
/// With `recursive`, the source directory name is appended to the
/// destination so the tree is mirrored rather than merged. Failures are
/// logged as warnings and otherwise ignored.
pub fn copy_assets(src: &Path, dest: &Path, recursive: bool) {
    let dest = if recursive {
        dest.join(src)
    } else {
        dest.to_path_buf()
    };
    debug!("Copying assets {:?} -> {:?}", src, dest);

    if let Err(e) = fs::create_dir_all(&dest) {
        warn!("Problem while copying assets: {}", e);
        return;
    }
    let mut options = fs_extra::dir::CopyOptions::new();
    options.overwrite = true;
    if let Err(e) = fs_extra::copy_items(&[src], &dest, &options) {
        warn!("Problem while copying assets: {}", e);
        return;
    }
    debug!("Copied: {:?} -> {:?}", src, dest);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_copy_assets_into_destination() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("images");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("logo.svg"), "<svg/>").unwrap();
        let dest = temp.path().join("out");

        copy_assets(&src, &dest, false);

        assert!(dest.join("images/logo.svg").exists());
    }

    #[test]
    fn test_missing_source_is_only_a_warning() {
        let temp = tempdir().unwrap();
        let dest = temp.path().join("out");

        copy_assets(&temp.path().join("absent"), &dest, false);
        // no panic, destination directory still created
        assert!(dest.exists());
    }
}
