//! File system operations (existence checks, reading).

use std::fs;
use std::io;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn exists_impl(&self, path: &Path) -> bool {
        path.exists()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn read_impl(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_file_ops() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("pkg.conf");

        assert!(!runtime.exists(&file_path));

        std::fs::write(&file_path, b"installpath = /mirror/\n").unwrap();
        assert!(runtime.exists(&file_path));
        assert_eq!(runtime.read(&file_path).unwrap(), b"installpath = /mirror/\n");
    }

    #[test]
    fn test_real_runtime_read_error_is_os_error() {
        let runtime = RealRuntime;

        let err = runtime
            .read(std::path::Path::new("/nonexistent/path/pkg.conf"))
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
