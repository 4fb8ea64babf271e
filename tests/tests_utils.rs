use std::{path::PathBuf, sync::OnceLock};
use tempfile::TempDir;
use tracing_subscriber::{EnvFilter, fmt};

static TRACING_INIT: OnceLock<()> = OnceLock::new();

pub fn init_tracing_for_tests() {
    TRACING_INIT.get_or_init(|| {
        let env_filter = std::env::var("RUST_LOG")
            .ok()
            .map(|s| EnvFilter::try_new(s).unwrap())
            .unwrap_or_else(|| EnvFilter::new("debug"));

        let subscriber = fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_test_writer()
            .compact();

        let _ = tracing::subscriber::set_global_default(subscriber.finish());
    });
}

/// Returns a fresh directory for one test run; it is deleted when the guard drops
pub fn create_temp_working_dir(test_name: &str, db_name: &str) -> (PathBuf, TempDir) {
    let temp_dir = tempfile::Builder::new()
        .prefix(&format!("coachdesk-{test_name}-{db_name}-"))
        .tempdir()
        .expect("Temporary directory creation should succeed");

    return (temp_dir.path().join("data"), temp_dir);
}

#[macro_export]
macro_rules! span_and_info {
    ($name:literal) => {
        let span = tracing::info_span!($name);
        let _guard = span.enter();
        tracing::info!($name);
    };
    ($name:literal, $($arg:tt)+) => {
        let span = tracing::info_span!($name);
        let _guard = span.enter();
        tracing::info!($($arg)+);
    };
}
