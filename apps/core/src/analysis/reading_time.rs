//! Reading time estimation.
//!
//! Produces a fast/slow range using speeds that depend on whether the text is
//! technical. Ranges narrower than [`COLLAPSE_THRESHOLD_MINUTES`] collapse to
//! a single approximate value.

use serde::{Deserialize, Serialize};

use super::stats::count_words;
use super::technical::TechnicalClassifier;

/// Reading speeds in words per minute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingSpeeds {
    pub fast: usize,
    pub slow: usize,
}

/// Speeds for technical documents
pub const TECHNICAL_SPEEDS: ReadingSpeeds = ReadingSpeeds {
    fast: 250,
    slow: 150,
};

/// Speeds for general documents
pub const GENERAL_SPEEDS: ReadingSpeeds = ReadingSpeeds {
    fast: 350,
    slow: 200,
};

/// Below this spread the range is shown as a single estimate
pub const COLLAPSE_THRESHOLD_MINUTES: usize = 30;

/// Estimated reading time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingTime {
    /// Minutes at the fast speed
    pub fast_minutes: usize,
    /// Minutes at the slow speed
    pub slow_minutes: usize,
    /// Display form, either "~{t}" or "{fast} - {slow}"
    pub display: String,
}

/// Format whole minutes as "{h}h {m}m", omitting hours when zero.
pub fn format_minutes(minutes: usize) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Estimate from a known word count and classification
pub fn estimate_for(word_count: usize, is_technical: bool) -> ReadingTime {
    let speeds = if is_technical {
        TECHNICAL_SPEEDS
    } else {
        GENERAL_SPEEDS
    };

    let fast_minutes = word_count / speeds.fast;
    let slow_minutes = word_count / speeds.slow;

    let display = if slow_minutes - fast_minutes < COLLAPSE_THRESHOLD_MINUTES {
        format!("~{}", format_minutes((fast_minutes + slow_minutes) / 2))
    } else {
        format!(
            "{} - {}",
            format_minutes(fast_minutes),
            format_minutes(slow_minutes)
        )
    };

    ReadingTime {
        fast_minutes,
        slow_minutes,
        display,
    }
}

/// Estimate reading time for `text`
pub fn estimate(text: &str) -> String {
    let is_technical = TechnicalClassifier::new().is_technical(text);
    estimate_for(count_words(text), is_technical).display
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0m");
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(60), "1h 0m");
        assert_eq!(format_minutes(50_000 / 200), "4h 10m");
    }

    #[test]
    fn test_zero_words() {
        assert_eq!(estimate(""), "~0m");
        assert_eq!(estimate_for(0, true).display, "~0m");
    }

    #[test]
    fn test_short_text_collapses() {
        // 3000 words general: 8m fast, 15m slow
        let time = estimate_for(3_000, false);
        assert_eq!(time.fast_minutes, 8);
        assert_eq!(time.slow_minutes, 15);
        assert_eq!(time.display, "~11m");
    }

    #[test]
    fn test_long_text_range() {
        let time = estimate_for(50_000, true);
        assert_eq!(time.fast_minutes, 200);
        assert_eq!(time.slow_minutes, 333);
        assert_eq!(time.display, "3h 20m - 5h 33m");

        let time = estimate_for(50_000, false);
        assert_eq!(time.display, "2h 22m - 4h 10m");
    }

    #[test]
    fn test_technical_is_slower() {
        let technical = estimate_for(20_000, true);
        let general = estimate_for(20_000, false);
        assert!(technical.slow_minutes > general.slow_minutes);
        assert!(technical.fast_minutes > general.fast_minutes);
    }
}
