//! Formatting utilities for terminal output

use crate::core::{Assessment, Mark};
use colored::{ColoredString, Colorize};

/// Apply `style` to `text` only when `color` is set
pub fn paint(text: &str, color: bool, style: impl Fn(&str) -> ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Format an assessment code with each symbol in its tile colour
#[must_use]
pub fn colored_code(assessment: &Assessment, color: bool) -> String {
    if !color {
        return assessment.to_string();
    }

    assessment
        .marks()
        .iter()
        .map(|mark| {
            let symbol = mark.symbol().to_string();
            let symbol = symbol.as_str();
            match mark {
                Mark::Exact => symbol.green().bold().to_string(),
                Mark::Present => symbol.yellow().bold().to_string(),
                Mark::Absent => symbol.bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_code_without_color() {
        let assessment = Assessment::parse("GYB");
        assert_eq!(colored_code(&assessment, false), "GYB");
    }

    #[test]
    fn colored_code_keeps_symbols() {
        let assessment = Assessment::parse("GYBBG");
        let code = colored_code(&assessment, true);
        for symbol in ["G", "Y", "B"] {
            assert!(code.contains(symbol));
        }
    }

    #[test]
    fn paint_is_identity_without_color() {
        assert_eq!(paint("Trials", false, |s| s.red()), "Trials");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
