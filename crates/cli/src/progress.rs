//! Progress indicators

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner for a network call of unknown length
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Spinner, or a hidden bar when output is machine-readable
pub fn spinner_unless(quiet: bool, message: &str) -> ProgressBar {
    if quiet {
        ProgressBar::hidden()
    } else {
        spinner(message)
    }
}

/// Stop a spinner, leaving a success line
pub fn finish_success(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(format!("✓ {message}"));
}

/// Stop a spinner, leaving a failure line
pub fn finish_error(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(format!("✗ {message}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_creation() {
        let pb = spinner("Searching recipes...");
        finish_success(&pb, "Found 3 recipes");
        assert!(pb.is_finished());
    }

    #[test]
    fn test_quiet_spinner_is_hidden() {
        let pb = spinner_unless(true, "Searching recipes...");
        assert!(pb.is_hidden());
        finish_error(&pb, "Recipe source unreachable");
    }
}
