//! Debug logging
//!
//! Off by default. Set `REQUIRED_LOG` (any value) to get scoped debug lines
//! on stderr. User-facing output does not go through here.

/// Environment variable that enables debug output.
pub const LOG_ENV_VAR: &str = "REQUIRED_LOG";

/// Write `[DEBUG <scope>] <msg>` to stderr when logging is enabled
pub fn log_debug(scope: &str, msg: &str) {
    if std::env::var_os(LOG_ENV_VAR).is_some() {
        eprintln!("{}", format_line(scope, msg));
    }
}

fn format_line(scope: &str, msg: &str) -> String {
    format!("[DEBUG {}] {}", scope, msg)
}
