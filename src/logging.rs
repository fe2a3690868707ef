//! Diagnostic logging
//!
//! Game output goes to stdout; diagnostics go to stderr through `log`, filtered
//! by `RUST_LOG` (default `warn`).
//!
//! ```bash
//! RUST_LOG=guess_my_word=debug guess_my_word play
//! ```

use env_logger::{Builder, Env};

/// Install the global logger. Call once, first thing in `main`.
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
