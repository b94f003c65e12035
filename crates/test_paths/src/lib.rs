//! # Test Paths
//!
//! Locates the project source tree and a writable temporary directory for
//! tests, depending on whether they run under Bazel or CMake.
//!
//! Detection probes [`BAZEL_INDICATOR`] first, then falls back to the project
//! source path handed in by the caller. An unrecognized environment is an
//! error; no path is ever guessed.
//!
//! ```rust
//! use test_paths::{make_test_temp_directory, ProcessEnv};
//!
//! let dir = make_test_temp_directory(env!("CARGO_MANIFEST_DIR"), "doc", "test_paths", true, &ProcessEnv);
//! if let Ok(dir) = dir {
//!     assert!(dir.path().is_dir());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod env;
mod error;
mod paths;
mod temp_dir;

pub use env::{EnvSource, ProcessEnv};
pub use error::{TestPathsError, TestPathsResult};
pub use paths::{
    test_build_type, test_paths, BuildType, TestPaths, BAZEL_INDICATOR, BAZEL_OUTPUTS_DIR,
    BAZEL_PROJECT_PATH, BAZEL_TEST_SRCDIR, BAZEL_WORKSPACE,
};
pub use temp_dir::{make_test_temp_directory, TestTempDirectory, DEFAULT_PREFIX, DEFAULT_SUB_DIR};
