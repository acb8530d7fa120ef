//! Burnout score history summary.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Aggregate view over recorded burnout scores
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Mean score, rounded to the nearest integer
    pub average: u8,
    pub highest: u8,
    pub lowest: u8,
    pub count: usize,
    /// Scores in the order they were recorded
    pub scores: Vec<u8>,
}

/// Ordered record of burnout scores
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreHistory {
    scores: Vec<u8>,
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a score; values above 100 are rejected.
    pub fn record(&mut self, score: u32) -> Result<(), ValidationError> {
        let score = u8::try_from(score)
            .ok()
            .filter(|s| *s <= 100)
            .ok_or(ValidationError::ScoreOutOfRange(score))?;
        self.scores.push(score);
        Ok(())
    }

    pub fn scores(&self) -> &[u8] {
        &self.scores
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Summary statistics, or `None` if nothing has been recorded.
    pub fn summary(&self) -> Option<ScoreSummary> {
        let highest = *self.scores.iter().max()?;
        let lowest = *self.scores.iter().min()?;
        let total: u32 = self.scores.iter().map(|s| u32::from(*s)).sum();
        let average = (f64::from(total) / self.scores.len() as f64).round() as u8;

        Some(ScoreSummary {
            average,
            highest,
            lowest,
            count: self.scores.len(),
            scores: self.scores.clone(),
        })
    }
}

impl TryFrom<Vec<u32>> for ScoreHistory {
    type Error = ValidationError;

    fn try_from(scores: Vec<u32>) -> Result<Self, Self::Error> {
        let mut history = Self::new();
        for score in scores {
            history.record(score)?;
        }
        Ok(history)
    }
}
