//! Mood distribution, trend and stress-indicator analytics.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::Window;
use crate::entry::DiaryEntry;
use crate::keywords;
use crate::mood::Mood;

/// Mood distribution over the analysis window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodPatterns {
    /// Most frequent mood. Ties go to a recognised mood over an
    /// unrecognised tag, then to the alphabetically first tag.
    pub dominant_mood: Option<Mood>,
    /// Rounded percentage per tag, in order of first appearance.
    /// Independent rounding means the values may not sum to exactly 100.
    pub mood_distribution: IndexMap<Mood, u32>,
    /// Rounded percentage of sad/anxious entries
    pub negative_percentage: u32,
    /// Rounded percentage of confused entries
    pub confusion_percentage: u32,
}

/// One point of the mood trend chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodTrendPoint {
    pub date: String,
    pub mood: Mood,
}

fn rounded_percentage(count: usize, total: usize) -> u32 {
    (count as f64 / total as f64 * 100.0).round() as u32
}

/// Count moods and derive distribution statistics.
///
/// Empty input yields no dominant mood, an empty distribution and zero
/// percentages.
pub fn analyze_mood_patterns(entries: &[DiaryEntry]) -> MoodPatterns {
    let Some(window) = Window::new(entries) else {
        return MoodPatterns::default();
    };

    let mut counts: IndexMap<&Mood, usize> = IndexMap::new();
    for mood in window.moods() {
        *counts.entry(mood).or_insert(0) += 1;
    }

    let dominant_mood = counts
        .iter()
        .max_by(|(a, count_a), (b, count_b)| {
            count_a
                .cmp(count_b)
                .then_with(|| a.is_recognised().cmp(&b.is_recognised()))
                .then_with(|| b.as_str().cmp(a.as_str()))
        })
        .map(|(mood, _)| (*mood).clone());

    let mood_distribution = counts
        .iter()
        .map(|(mood, count)| ((*mood).clone(), rounded_percentage(*count, window.len())))
        .collect();

    let negative = window.moods().filter(|m| m.is_negative()).count();
    let confused = window.moods().filter(|m| m.is_confused()).count();

    MoodPatterns {
        dominant_mood,
        mood_distribution,
        negative_percentage: rounded_percentage(negative, window.len()),
        confusion_percentage: rounded_percentage(confused, window.len()),
    }
}

/// Parse the date formats the diary store and common exports produce.
fn parse_entry_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Window entries as `(date, mood)` points sorted by calendar date.
///
/// Entries whose date cannot be parsed are placed after all dated entries,
/// keeping their relative input order.
pub fn get_mood_trend(entries: &[DiaryEntry]) -> Vec<MoodTrendPoint> {
    let Some(window) = Window::new(entries) else {
        return Vec::new();
    };

    let mut keyed: Vec<(Option<NaiveDateTime>, MoodTrendPoint)> = window
        .entries()
        .iter()
        .map(|entry| {
            let parsed = parse_entry_date(&entry.date);
            if parsed.is_none() {
                tracing::warn!(id = %entry.id, date = %entry.date, "unparsable entry date, placing at end of trend");
            }
            (
                parsed,
                MoodTrendPoint {
                    date: entry.date.clone(),
                    mood: entry.mood.clone(),
                },
            )
        })
        .collect();

    keyed.sort_by_key(|(parsed, _)| (parsed.is_none(), *parsed));
    keyed.into_iter().map(|(_, point)| point).collect()
}

/// Distinct stress phrases appearing anywhere in the window.
///
/// This is a looser, substring match than the one used for scoring, so
/// "tired" is reported for "retired". Keywords are listed in the order they
/// were first found.
pub fn get_stress_indicators(entries: &[DiaryEntry]) -> Vec<String> {
    let Some(window) = Window::new(entries) else {
        return Vec::new();
    };

    let detected: IndexSet<&'static str> = window
        .entries()
        .iter()
        .flat_map(|entry| keywords::contains_keyword(&entry.content))
        .collect();

    detected.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, date: &str, mood: Mood, content: &str) -> DiaryEntry {
        DiaryEntry::new(id, date, mood, content)
    }

    #[test]
    fn test_distribution_of_four_entries() {
        let entries = vec![
            entry(1, "2024-01-01", Mood::Happy, ""),
            entry(2, "2024-01-02", Mood::Sad, ""),
            entry(3, "2024-01-03", Mood::Happy, ""),
            entry(4, "2024-01-04", Mood::Calm, ""),
        ];
        let patterns = analyze_mood_patterns(&entries);

        assert_eq!(patterns.dominant_mood, Some(Mood::Happy));
        assert_eq!(patterns.mood_distribution.len(), 3);
        assert_eq!(patterns.mood_distribution[&Mood::Happy], 50);
        assert_eq!(patterns.mood_distribution[&Mood::Sad], 25);
        assert_eq!(patterns.mood_distribution[&Mood::Calm], 25);
        assert_eq!(patterns.negative_percentage, 25);
        assert_eq!(patterns.confusion_percentage, 0);
    }

    #[test]
    fn test_distribution_keeps_first_seen_order() {
        let entries = vec![
            entry(1, "2024-01-01", Mood::Calm, ""),
            entry(2, "2024-01-02", Mood::Anxious, ""),
            entry(3, "2024-01-03", Mood::Calm, ""),
        ];
        let patterns = analyze_mood_patterns(&entries);
        let order: Vec<_> = patterns.mood_distribution.keys().cloned().collect();
        assert_eq!(order, vec![Mood::Calm, Mood::Anxious]);
        assert_eq!(patterns.mood_distribution[&Mood::Calm], 67);
        assert_eq!(patterns.mood_distribution[&Mood::Anxious], 33);
    }

    #[test]
    fn test_dominant_tie_is_alphabetical() {
        let entries = vec![
            entry(1, "2024-01-01", Mood::Sad, ""),
            entry(2, "2024-01-02", Mood::Happy, ""),
            entry(3, "2024-01-03", Mood::Sad, ""),
            entry(4, "2024-01-04", Mood::Happy, ""),
        ];
        assert_eq!(analyze_mood_patterns(&entries).dominant_mood, Some(Mood::Happy));

        let reversed: Vec<_> = entries.into_iter().rev().collect();
        assert_eq!(analyze_mood_patterns(&reversed).dominant_mood, Some(Mood::Happy));
    }

    #[test]
    fn test_unrecognised_tags_counted_separately() {
        let entries = crate::entry::parse_entries(
            r#"[
                {"id": 1, "date": "2024-01-01", "mood": "grumpy"},
                {"id": 2, "date": "2024-01-02", "mood": "angry"},
                {"id": 3, "date": "2024-01-03", "mood": "happy"}
            ]"#,
        )
        .unwrap();
        let patterns = analyze_mood_patterns(&entries);

        let grumpy = Mood::Other("grumpy".to_string());
        let angry = Mood::Other("angry".to_string());
        assert_eq!(patterns.mood_distribution.len(), 3);
        assert_eq!(patterns.mood_distribution[&grumpy], 33);
        assert_eq!(patterns.mood_distribution[&angry], 33);
        assert_eq!(patterns.mood_distribution[&Mood::Happy], 33);
        assert_eq!(patterns.dominant_mood, Some(Mood::Happy));

        let json = serde_json::to_value(&patterns).unwrap();
        assert_eq!(json["moodDistribution"]["grumpy"], 33);
        assert_eq!(json["dominantMood"], "happy");
    }

    #[test]
    fn test_frequent_unrecognised_tag_still_dominant() {
        let entries = vec![
            entry(1, "2024-01-01", Mood::Other("meh".to_string()), ""),
            entry(2, "2024-01-02", Mood::Other("meh".to_string()), ""),
            entry(3, "2024-01-03", Mood::Calm, ""),
        ];
        let patterns = analyze_mood_patterns(&entries);
        assert_eq!(patterns.dominant_mood, Some(Mood::Other("meh".to_string())));
        assert_eq!(patterns.negative_percentage, 0);
    }

    #[test]
    fn test_confusion_percentage() {
        let entries = vec![
            entry(1, "2024-01-01", Mood::Confused, ""),
            entry(2, "2024-01-02", Mood::Neutral, ""),
            entry(3, "2024-01-03", Mood::Neutral, ""),
        ];
        let patterns = analyze_mood_patterns(&entries);
        assert_eq!(patterns.confusion_percentage, 33);
        assert_eq!(patterns.dominant_mood, Some(Mood::Neutral));
    }

    #[test]
    fn test_patterns_empty() {
        let patterns = analyze_mood_patterns(&[]);
        assert_eq!(patterns, MoodPatterns::default());
        assert_eq!(patterns.dominant_mood, None);
    }

    #[test]
    fn test_trend_sorted_by_date() {
        let entries = vec![
            entry(1, "2024-02-10", Mood::Sad, ""),
            entry(2, "2024-02-01", Mood::Happy, ""),
            entry(3, "2024-02-05", Mood::Calm, ""),
        ];
        let trend = get_mood_trend(&entries);
        let dates: Vec<_> = trend.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-02-01", "2024-02-05", "2024-02-10"]);
        assert_eq!(trend[0].mood, Mood::Happy);
    }

    #[test]
    fn test_trend_unparsable_dates_last_in_input_order() {
        let entries = vec![
            entry(1, "someday", Mood::Sad, ""),
            entry(2, "2024-02-03", Mood::Happy, ""),
            entry(3, "", Mood::Calm, ""),
            entry(4, "2024-02-01T08:30:00Z", Mood::Excited, ""),
        ];
        let trend = get_mood_trend(&entries);
        let dates: Vec<_> = trend.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-02-01T08:30:00Z", "2024-02-03", "someday", ""]);
    }

    #[test]
    fn test_trend_uses_window() {
        let entries: Vec<_> = (1..=20)
            .map(|day| entry(day, &format!("2024-03-{day:02}"), Mood::Neutral, ""))
            .collect();
        let trend = get_mood_trend(&entries);
        assert_eq!(trend.len(), 14);
        assert_eq!(trend[0].date, "2024-03-07");
    }

    #[test]
    fn test_stress_indicators_deduplicated() {
        let entries = vec![
            entry(1, "2024-01-01", Mood::Sad, "So much pressure, I feel overwhelmed"),
            entry(2, "2024-01-02", Mood::Sad, "Still overwhelmed. Too much to do."),
            entry(3, "2024-01-03", Mood::Happy, "Lovely day"),
        ];
        let indicators = get_stress_indicators(&entries);
        assert_eq!(indicators, vec!["overwhelmed", "pressure", "too much"]);
    }

    #[test]
    fn test_stress_indicators_substring_match() {
        let entries = vec![entry(1, "2024-01-01", Mood::Calm, "My retired neighbour")];
        assert_eq!(get_stress_indicators(&entries), vec!["tired"]);
    }

    #[test]
    fn test_stress_indicators_missing_content() {
        let entries = vec![entry(1, "2024-01-01", Mood::Calm, "")];
        assert!(get_stress_indicators(&entries).is_empty());
        assert!(get_stress_indicators(&[]).is_empty());
    }
}
