//! Rendered-output writing.

use std::fs;
use std::path::Path;

use tracing::{error, info};

/// Destination value (matched case-insensitively) that sends rendered
/// text to the console instead of a file.
pub const STDOUT_SENTINEL: &str = "stdout";

/// Writer for rendered build output.
pub struct OutputWriter;

impl OutputWriter {
    /// Write rendered text to a file, creating the output directory if
    /// absent and overwriting any existing file.
    ///
    /// Failures are logged, never propagated. The post-write existence
    /// check is the only confirmation that the file landed; returns
    /// whether it did.
    pub fn write(rendered: &str, destination: &Path) -> bool {
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    error!("Failed to create output directory {:?}: {}", parent, e);
                }
            }
        }
        if let Err(e) = fs::write(destination, rendered) {
            error!("Failed to save output to {:?}: {}", destination, e);
        }

        if destination.exists() {
            let name = destination
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| destination.display().to_string());
            info!("File built: {}", name);
            true
        } else {
            error!("File not built: {:?}", destination);
            false
        }
    }

    /// Emit rendered text to the console with a banner naming the source
    /// template. The filesystem is never touched.
    pub fn write_stdout(rendered: &str, template: &Path) {
        println!(
            "========\nOUTPUT: Rendered with template {}:\n\n{}",
            template.display(),
            rendered
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_missing_directories() {
        let temp = tempdir().unwrap();
        let dest = temp.path().join("out/nested/doc.adoc");

        assert!(OutputWriter::write("hello", &dest));
        assert_eq!(fs::read_to_string(&dest).unwrap(), "hello");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp = tempdir().unwrap();
        let dest = temp.path().join("doc.adoc");
        fs::write(&dest, "old").unwrap();

        assert!(OutputWriter::write("new", &dest));
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn test_write_failure_reported_not_propagated() {
        let temp = tempdir().unwrap();
        // the parent "directory" is a plain file, so neither the mkdir
        // nor the write can succeed; write() logs and returns false
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let dest = blocker.join("doc.adoc");

        assert!(!OutputWriter::write("text", &dest));
    }
}
