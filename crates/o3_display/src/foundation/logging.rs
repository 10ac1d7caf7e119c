//! Logging utilities and structured logging support

use std::sync::Once;

pub use log::{debug, info, warn, error, trace};

static INIT: Once = Once::new();

/// Initialize the logging system
///
/// Honours `RUST_LOG` and falls back to `info`. Subsequent calls are ignored.
pub fn init() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    });
}

/// Initialize the logging system with an explicit `env_logger` filter string
/// (e.g. `"o3_display=debug"`). Subsequent calls are ignored.
pub fn init_with_filter(filter: &str) {
    INIT.call_once(|| {
        env_logger::Builder::new().parse_filters(filter).init();
    });
}
