//! Burnout analysis engine
//!
//! Turns a sequence of mood-tagged diary entries into a bounded risk score
//! plus supporting analytics. Every function here is pure: it only reads the
//! entries it is given and never fails.
//!
//! ## Pipeline
//!
//! | Step | Function |
//! |------|----------|
//! | Trailing 14-entry window | [`Window`] |
//! | Weighted sub-scores and streak bonus | [`score_components`] |
//! | Clamped integer score | [`calculate_burnout_score`] |
//! | Risk band | [`get_risk_level`] |
//! | Mood distribution | [`analyze_mood_patterns`] |
//! | Chronological mood series | [`get_mood_trend`] |
//! | Detected stress phrases | [`get_stress_indicators`] |
//! | Everything at once | [`get_burnout_analysis`] |

mod patterns;
mod risk;
mod score;

use serde::{Deserialize, Serialize};

use crate::entry::DiaryEntry;
use crate::mood::Mood;

pub use patterns::{
    analyze_mood_patterns, get_mood_trend, get_stress_indicators, MoodPatterns, MoodTrendPoint,
};
pub use risk::{get_risk_level, RiskBand, RiskLevel};
pub use score::{calculate_burnout_score, score_components, ScoreComponents};

/// Number of most recent entries considered by every analysis.
pub const ANALYSIS_WINDOW: usize = 14;

/// The trailing entries an analysis runs over.
///
/// Construction fails for empty input, so code holding a `Window` never
/// divides by zero.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    entries: &'a [DiaryEntry],
}

impl<'a> Window<'a> {
    /// Take the last [`ANALYSIS_WINDOW`] entries in the order given.
    /// Returns `None` when there are no entries.
    pub fn new(entries: &'a [DiaryEntry]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        let start = entries.len().saturating_sub(ANALYSIS_WINDOW);
        Some(Self {
            entries: &entries[start..],
        })
    }

    pub fn entries(&self) -> &'a [DiaryEntry] {
        self.entries
    }

    /// Number of entries in the window (1..=14).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the window holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn moods(&self) -> impl Iterator<Item = &'a Mood> + 'a {
        self.entries.iter().map(|e| &e.mood)
    }

    /// Share of entries whose mood satisfies `pred`, as a percentage.
    pub fn mood_percentage(&self, pred: impl Fn(&Mood) -> bool) -> f64 {
        let count = self.moods().filter(|m| pred(*m)).count();
        count as f64 / self.len() as f64 * 100.0
    }
}

/// Complete dashboard analysis of a diary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurnoutAnalysis {
    /// Burnout score (0 to 100)
    pub score: u8,
    /// Band and display metadata for `score`
    pub risk_level: RiskLevel,
    /// Mood distribution over the window
    pub patterns: MoodPatterns,
    /// Window entries in calendar order
    pub trend: Vec<MoodTrendPoint>,
    /// Stress phrases mentioned in the window
    pub stress_indicators: Vec<String>,
    /// Entries the analysis looked at (at most 14)
    pub entries_analyzed: usize,
}

/// Run every analysis over `entries` and bundle the results.
///
/// This is the entry point UI code should use.
pub fn get_burnout_analysis(entries: &[DiaryEntry]) -> BurnoutAnalysis {
    let score = calculate_burnout_score(entries);
    let analysis = BurnoutAnalysis {
        score,
        risk_level: get_risk_level(score),
        patterns: analyze_mood_patterns(entries),
        trend: get_mood_trend(entries),
        stress_indicators: get_stress_indicators(entries),
        entries_analyzed: entries.len().min(ANALYSIS_WINDOW),
    };
    tracing::debug!(
        score = analysis.score,
        level = %analysis.risk_level.level,
        entries_analyzed = analysis.entries_analyzed,
        "burnout analysis complete"
    );
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(moods: &[Mood]) -> Vec<DiaryEntry> {
        moods
            .iter()
            .enumerate()
            .map(|(i, mood)| {
                DiaryEntry::new(i as i64, format!("2024-03-{:02}", i + 1), mood.clone(), "")
            })
            .collect()
    }

    #[test]
    fn test_window_empty_is_none() {
        assert!(Window::new(&[]).is_none());
    }

    #[test]
    fn test_window_keeps_trailing_entries() {
        let mut moods = vec![Mood::Happy; 6];
        moods.extend(vec![Mood::Sad; 14]);
        let all = entries(&moods);

        let window = Window::new(&all).unwrap();
        assert_eq!(window.len(), 14);
        assert!(!window.is_empty());
        assert!(window.moods().all(|m| *m == Mood::Sad));
        assert_eq!(window.entries()[0].id, all[6].id);
    }

    #[test]
    fn test_window_short_input_kept_whole() {
        let all = entries(&[Mood::Calm, Mood::Sad]);
        let window = Window::new(&all).unwrap();
        assert_eq!(window.len(), 2);
        assert_eq!(window.mood_percentage(|m| m.is_negative()), 50.0);
    }

    #[test]
    fn test_empty_analysis_defaults() {
        let analysis = get_burnout_analysis(&[]);
        assert_eq!(analysis.score, 0);
        assert_eq!(analysis.risk_level.level, RiskBand::Low);
        assert_eq!(analysis.patterns.dominant_mood, None);
        assert!(analysis.patterns.mood_distribution.is_empty());
        assert!(analysis.trend.is_empty());
        assert!(analysis.stress_indicators.is_empty());
        assert_eq!(analysis.entries_analyzed, 0);
    }

    #[test]
    fn test_entries_analyzed_capped() {
        assert_eq!(get_burnout_analysis(&entries(&vec![Mood::Calm; 5])).entries_analyzed, 5);
        assert_eq!(get_burnout_analysis(&entries(&vec![Mood::Calm; 30])).entries_analyzed, 14);
    }

    #[test]
    fn test_serialization_camel_case() {
        let analysis = get_burnout_analysis(&entries(&[Mood::Sad, Mood::Happy]));
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("riskLevel").is_some());
        assert!(json.get("entriesAnalyzed").is_some());
        assert!(json["patterns"].get("moodDistribution").is_some());

        let back: BurnoutAnalysis = serde_json::from_value(json).unwrap();
        assert_eq!(back, analysis);
    }
}
