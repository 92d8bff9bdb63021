//! Formatting utilities for ladders and terminal output

use crate::ladder::Ladder;

/// Separator line written between a ladder and its step count
pub const RULE: &str = "--------------------------------------------------";

/// Format the step count line
#[must_use]
pub fn steps_line(steps: usize) -> String {
    format!("Number of Steps: {steps}")
}

/// Render a ladder as it is stored in the results file
///
/// One word per line, a rule, then the step count.
#[must_use]
pub fn ladder_report(ladder: &Ladder) -> String {
    let mut report = String::new();
    for word in ladder.words() {
        report.push_str(word.text());
        report.push('\n');
    }
    report.push_str(RULE);
    report.push('\n');
    report.push_str(&steps_line(ladder.steps()));
    report.push('\n');
    report
}

/// Mark the letter that changed between two rungs, e.g. `CO[R]D`
#[must_use]
pub fn highlight_change(previous: &str, current: &str) -> String {
    let mut result = String::with_capacity(current.len() + 2);
    for (i, ch) in current.chars().enumerate() {
        if previous.chars().nth(i) == Some(ch) {
            result.push(ch);
        } else {
            result.push('[');
            result.push(ch);
            result.push(']');
        }
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
