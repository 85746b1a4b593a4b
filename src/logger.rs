//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output only shown with `--verbose`
//! - `error` for failure reports on stderr
//!
//! # Example
//!
//! ```ignore
//! log!("rss"; "rss.xml ({} articles)", count);
//! debug!("sitemap"; "entry {}", loc);
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream, Style};
use std::{
    io::{IsTerminal, Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower, Stream::Stdout);

    let mut stdout = stdout().lock();
    if stdout.is_terminal() {
        execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    }
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Report a fatal error on stderr.
pub fn error(message: &str) {
    let prefix = colorize_prefix("error", "error", Stream::Stderr);
    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type.
///
/// Honors `--color` through the global owo-colors override.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str, stream: Stream) -> String {
    let prefix = format!("[{module}]");
    let style = match module_lower {
        "rss" | "sitemap" => Style::new().bright_blue().bold(),
        "check" => Style::new().bright_green().bold(),
        "error" => Style::new().bright_red().bold(),
        _ => Style::new().bright_yellow().bold(),
    };
    prefix
        .if_supports_color(stream, |p| p.style(style))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_keeps_module_name() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("rss", "rss", Stream::Stdout), "[rss]");
        assert_eq!(
            colorize_prefix("Warning", "warning", Stream::Stderr),
            "[Warning]"
        );
        owo_colors::unset_override();
    }

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
