//! Build system detection and directory lookup

use std::path::{Path, PathBuf};

use crate::env::EnvSource;
use crate::error::{TestPathsError, TestPathsResult};

/// Set when tests run under Bazel
pub const BAZEL_INDICATOR: &str = "IGN_BAZEL";
/// Bazel runfiles root
pub const BAZEL_TEST_SRCDIR: &str = "TEST_SRCDIR";
/// Package path of the project inside the Bazel workspace
pub const BAZEL_PROJECT_PATH: &str = "IGN_BAZEL_PATH";
/// Directory Bazel collects undeclared test outputs in
pub const BAZEL_OUTPUTS_DIR: &str = "TEST_UNDECLARED_OUTPUTS_DIR";
/// Workspace name under the runfiles root
pub const BAZEL_WORKSPACE: &str = "ignition";

/// Build system a test is running under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
    /// Bazel, detected through [`BAZEL_INDICATOR`]
    Bazel,
    /// CMake, detected through a non-empty project source path
    CMake,
    /// Neither
    Unknown,
}

/// Detect the build system.
///
/// The Bazel indicator takes priority over a project source path.
pub fn test_build_type(project_source_path: &str, env: &impl EnvSource) -> BuildType {
    if env.non_empty(BAZEL_INDICATOR).is_some() {
        BuildType::Bazel
    } else if !project_source_path.is_empty() {
        BuildType::CMake
    } else {
        BuildType::Unknown
    }
}

/// Path resolution strategy for a detected build system
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestPaths {
    /// Paths come from Bazel's test environment
    Bazel,
    /// Paths come from the configured source tree
    CMake {
        /// Root of the project sources
        project_source_path: PathBuf,
    },
}

impl TestPaths {
    /// Build system this strategy serves
    pub const fn build_type(&self) -> BuildType {
        match self {
            Self::Bazel => BuildType::Bazel,
            Self::CMake { .. } => BuildType::CMake,
        }
    }

    /// Root directory of the project sources
    pub fn project_source_path(&self, env: &impl EnvSource) -> TestPathsResult<PathBuf> {
        match self {
            Self::Bazel => {
                let src_dir = env
                    .non_empty(BAZEL_TEST_SRCDIR)
                    .ok_or(TestPathsError::MissingVariable(BAZEL_TEST_SRCDIR))?;
                let project_path = env
                    .non_empty(BAZEL_PROJECT_PATH)
                    .ok_or(TestPathsError::MissingVariable(BAZEL_PROJECT_PATH))?;
                Ok(Path::new(&src_dir).join(BAZEL_WORKSPACE).join(project_path))
            }
            Self::CMake { project_source_path } => {
                if project_source_path.as_os_str().is_empty() {
                    Err(TestPathsError::EmptySourcePath)
                } else {
                    Ok(project_source_path.clone())
                }
            }
        }
    }

    /// Writable directory for temporary test output
    pub fn test_tmp_path(&self, env: &impl EnvSource) -> TestPathsResult<PathBuf> {
        match self {
            Self::Bazel => env
                .non_empty(BAZEL_OUTPUTS_DIR)
                .map(PathBuf::from)
                .ok_or(TestPathsError::MissingVariable(BAZEL_OUTPUTS_DIR)),
            Self::CMake { .. } => Ok(std::env::temp_dir()),
        }
    }
}

/// Pick the path strategy matching the detected build system
pub fn test_paths(project_source_path: &str, env: &impl EnvSource) -> TestPathsResult<TestPaths> {
    let build_type = test_build_type(project_source_path, env);
    log::debug!("Detected test build type {:?}", build_type);

    match build_type {
        BuildType::Bazel => Ok(TestPaths::Bazel),
        BuildType::CMake => Ok(TestPaths::CMake {
            project_source_path: PathBuf::from(project_source_path),
        }),
        BuildType::Unknown => Err(TestPathsError::UnknownBuildEnvironment),
    }
}
