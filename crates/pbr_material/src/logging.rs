//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Initialize logging with a default filter, still overridable through `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_with_level(default_filter: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init_with_level("debug");
        init_with_level("info");
        info!("logging initialized");
    }
}
