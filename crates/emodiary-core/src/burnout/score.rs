//! Burnout score computation.
//!
//! ```text
//! raw   = negative * 0.5 + confusion * 0.3 + stress * 0.2 + streak_bonus
//! score = round(min(100, raw))
//! ```
//!
//! Each weighted component is a percentage in 0..=100. The streak bonus is
//! added unweighted, so it can push `raw` past 100 before the clamp.

use serde::{Deserialize, Serialize};

use super::Window;
use crate::entry::DiaryEntry;
use crate::keywords;

/// Weight of the negative-mood component
pub const NEGATIVE_WEIGHT: f64 = 0.5;
/// Weight of the confusion component
pub const CONFUSION_WEIGHT: f64 = 0.3;
/// Weight of the stress-keyword component
pub const STRESS_WEIGHT: f64 = 0.2;

/// Points per average keyword mention per entry; five mentions saturate.
const STRESS_POINTS_PER_MENTION: f64 = 20.0;

/// Bonus for a negative streak of 3 or 4 entries
const SHORT_STREAK_BONUS: f64 = 10.0;
/// Bonus for a negative streak of 5 or more entries
const LONG_STREAK_BONUS: f64 = 15.0;

/// Breakdown of a burnout score for explainability
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreComponents {
    /// Percentage of sad/anxious entries (0 to 100)
    pub negative: f64,
    /// Percentage of confused entries (0 to 100)
    pub confusion: f64,
    /// Keyword density score (0 to 100)
    pub stress: f64,
    /// Total boundary-anchored keyword matches in the window
    pub stress_matches: usize,
    /// Longest run of consecutive negative entries, in input order
    pub longest_negative_run: usize,
    /// Unweighted streak bonus (0, 10 or 15)
    pub consecutive_bonus: f64,
    /// Weighted sum plus bonus, before clamping
    pub raw: f64,
}

impl ScoreComponents {
    fn from_window(window: Window<'_>) -> Self {
        let negative = window.mood_percentage(|m| m.is_negative());
        let confusion = window.mood_percentage(|m| m.is_confused());

        let stress_matches: usize = window
            .entries()
            .iter()
            .map(|e| keywords::count_matches(&e.content))
            .sum();
        let stress = (stress_matches as f64 / window.len() as f64 * STRESS_POINTS_PER_MENTION)
            .min(100.0);

        let longest_negative_run = longest_negative_run(window);
        let consecutive_bonus = streak_bonus(longest_negative_run);

        let raw = negative * NEGATIVE_WEIGHT
            + confusion * CONFUSION_WEIGHT
            + stress * STRESS_WEIGHT
            + consecutive_bonus;

        Self {
            negative,
            confusion,
            stress,
            stress_matches,
            longest_negative_run,
            consecutive_bonus,
            raw,
        }
    }

    /// Final integer score (0 to 100)
    pub fn score(&self) -> u8 {
        self.raw.clamp(0.0, 100.0).round() as u8
    }
}

/// Longest run of adjacent negative entries, scanning in input order.
fn longest_negative_run(window: Window<'_>) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for mood in window.moods() {
        if mood.is_negative() {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

fn streak_bonus(run: usize) -> f64 {
    match run {
        5.. => LONG_STREAK_BONUS,
        3..=4 => SHORT_STREAK_BONUS,
        _ => 0.0,
    }
}

/// Compute every score component over the trailing window.
///
/// Empty input yields all-zero components.
pub fn score_components(entries: &[DiaryEntry]) -> ScoreComponents {
    match Window::new(entries) {
        Some(window) => {
            let components = ScoreComponents::from_window(window);
            tracing::debug!(
                window = window.len(),
                negative = components.negative,
                confusion = components.confusion,
                stress = components.stress,
                bonus = components.consecutive_bonus,
                "scored burnout components"
            );
            components
        }
        None => ScoreComponents::default(),
    }
}

/// Burnout risk score (0 to 100) for the most recent entries.
pub fn calculate_burnout_score(entries: &[DiaryEntry]) -> u8 {
    score_components(entries).score()
}
