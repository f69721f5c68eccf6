//! Terminal status output.
//!
//! Status lines go to stderr so they never mix with anything a user pipes
//! from stdout. Colour is decided once at startup by [`init_colors`].
//!
//! # Examples
//!
//! ```no_run
//! use glint_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Server is listening at http://127.0.0.1:3000");
//! ui::warning("Index document not found");
//! ```

mod messages;

pub use messages::{info, success, warning};

use std::sync::atomic::{AtomicBool, Ordering};

static COLORS_ENABLED: AtomicBool = AtomicBool::new(true);

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    // NO_COLOR environment variable disables colors
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // FORCE_COLOR enables colors even in non-TTY
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Decide colour support for the rest of the process.
///
/// `--no-color` always wins; otherwise the environment decides.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    COLORS_ENABLED.store(enabled, Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS_ENABLED.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_color_env() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::remove_var("FORCE_COLOR");
        }
    }

    #[test]
    #[serial]
    fn test_should_use_color_no_color() {
        clear_color_env();
        unsafe { std::env::set_var("NO_COLOR", "1") };
        assert!(!should_use_color());
        clear_color_env();
    }

    #[test]
    #[serial]
    fn test_should_use_color_force_color() {
        clear_color_env();
        unsafe { std::env::set_var("FORCE_COLOR", "1") };
        assert!(should_use_color());
        clear_color_env();
    }

    #[test]
    #[serial]
    fn test_should_use_color_no_color_overrides_force() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(!should_use_color());
        clear_color_env();
    }

    #[test]
    #[serial]
    fn test_no_color_flag_disables_colors() {
        clear_color_env();
        unsafe { std::env::set_var("FORCE_COLOR", "1") };

        init_colors(true);
        assert!(!colors_enabled());

        init_colors(false);
        assert!(colors_enabled());
        clear_color_env();
    }
}
