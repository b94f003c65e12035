//! Temporary directories for test output

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::env::EnvSource;
use crate::error::TestPathsResult;
use crate::paths::test_paths;

/// Default name prefix of a test temporary directory
pub const DEFAULT_PREFIX: &str = "test";
/// Default subdirectory of the temporary root
pub const DEFAULT_SUB_DIR: &str = "ignition";

/// Uniquely named directory for one test's output
#[derive(Debug)]
pub struct TestTempDirectory {
    path: PathBuf,
    /// Removes the directory on drop; absent when cleanup is disabled
    guard: Option<TempDir>,
}

impl TestTempDirectory {
    /// Location of the directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the directory is removed on drop
    pub const fn cleans_up(&self) -> bool {
        self.guard.is_some()
    }
}

/// Create `<tmp>/<sub_dir>/<prefix>XXXXXX` under the build system's temporary root.
///
/// Fails when the build system is not recognized or its temporary root is
/// unavailable. With `cleanup` unset the directory outlives the returned value.
pub fn make_test_temp_directory(
    project_source_path: &str,
    prefix: &str,
    sub_dir: &str,
    cleanup: bool,
    env: &impl EnvSource,
) -> TestPathsResult<TestTempDirectory> {
    let paths = test_paths(project_source_path, env)?;
    let parent = paths.test_tmp_path(env)?.join(sub_dir);
    std::fs::create_dir_all(&parent)?;

    let dir = tempfile::Builder::new().prefix(prefix).tempdir_in(&parent)?;
    log::debug!("Created test temporary directory {:?}", dir.path());

    if cleanup {
        Ok(TestTempDirectory {
            path: dir.path().to_path_buf(),
            guard: Some(dir),
        })
    } else {
        Ok(TestTempDirectory {
            path: dir.keep(),
            guard: None,
        })
    }
}
