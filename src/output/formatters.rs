//! Formatting utilities for terminal output

use crate::core::Step;
use crate::validator::Verdict;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Number each step of a solution, one per line
#[must_use]
pub fn format_steps(steps: &[Step]) -> Vec<String> {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {step}", i + 1))
        .collect()
}

/// Describe how far a value landed from the target
#[must_use]
pub fn distance_label(distance: u32) -> String {
    match distance {
        0 => "exact".to_string(),
        n => format!("{n} away"),
    }
}

/// One-line verdict summary
#[must_use]
pub fn verdict_label(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Valid => "valid".to_string(),
        Verdict::Invalid(reason) => format!("invalid: {reason}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Op;
    use crate::validator::InvalidReason;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn steps_are_numbered() {
        let steps = [
            Step {
                left: 3,
                op: Op::Mul,
                right: 5,
                result: 15,
            },
            Step {
                left: 15,
                op: Op::Add,
                right: 2,
                result: 17,
            },
        ];
        assert_eq!(format_steps(&steps), vec!["1. 3 * 5 = 15", "2. 15 + 2 = 17"]);
    }

    #[test]
    fn labels() {
        assert_eq!(distance_label(0), "exact");
        assert_eq!(distance_label(4), "4 away");
        assert_eq!(verdict_label(&Verdict::Valid), "valid");
        assert_eq!(
            verdict_label(&Verdict::Invalid(InvalidReason::NotInDictionary)),
            "invalid: Word is not in the dictionary"
        );
    }
}
